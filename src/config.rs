use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::cli::Cli;
use crate::errors::ResolveError;
use crate::utils::absolutize;

/// Fallback executable when neither `--gcov-executable` nor `$GCOV` is set
pub const DEFAULT_GCOV: &str = "gcov";
/// Environment variable consulted for the gcov executable
pub const GCOV_ENV_VAR: &str = "GCOV";

/// Settings for one coverage run, fully resolved.
///
/// Built once per invocation by [`Config::resolve`] and immutable afterwards.
/// The report pipeline consumes it as-is; no cross-field validation happens
/// here, so contradictory selections survive resolution untouched.
#[derive(Debug, Clone)]
pub struct Config {
    /// Print the version number, then exit
    pub version: bool,
    /// Print progress messages
    pub verbose: bool,
    /// Directory containing the gcov data files
    pub objdir: Option<PathBuf>,
    /// Report output file, absolute once resolved
    pub output: Option<PathBuf>,
    /// Keep the temporary *.gcov files generated by gcov
    pub keep: bool,
    /// Delete the coverage files after they are processed
    pub delete: bool,
    /// Keep only data files matching these patterns, in flag order
    pub filter: Vec<String>,
    /// Exclude data files matching these patterns, in flag order
    pub exclude: Vec<String>,
    /// Keep only gcov data files matching this pattern, last flag wins
    pub gcov_filter: Option<String>,
    /// Exclude gcov data files matching these patterns, in flag order
    pub gcov_exclude: Vec<String>,
    /// Root directory for source files
    pub root: Option<PathBuf>,
    /// Generate XML output
    pub xml: bool,
    /// Generate pretty instead of dense XML
    pub prettyxml: bool,
    /// Generate HTML output
    pub html: bool,
    /// Generate per-source-file HTML pages
    pub html_details: bool,
    /// Use relative paths for HTML anchors; cleared by --html-absolute-paths
    pub relative_anchors: bool,
    /// Tabulate branch coverage; unset means the default line metric
    pub show_branch: Option<bool>,
    /// Sort entries by increasing number of uncovered lines
    pub sort_uncovered: Option<bool>,
    /// Sort entries by decreasing percentage of covered lines
    pub sort_percent: Option<bool>,
    /// The gcov executable to invoke
    pub gcov_cmd: String,
    /// Exclude branches marked unreachable or from dead code
    pub exclude_unreachable_branches: bool,
    /// Consume pre-generated gcov files instead of running gcov
    pub gcov_files: bool,
    /// Print a small line/branch percentage summary to stdout
    pub print_summary: bool,
}

impl Config {
    /// Resolve command-line `tokens` into a [`Config`] plus the leftover
    /// positional arguments, in original order.
    ///
    /// `environment` and `cwd` are injected rather than read ad hoc so the
    /// whole pass stays a pure function of its inputs: the environment feeds
    /// the `$GCOV` fallback, `cwd` anchors `--output` absolutization.
    ///
    /// # Errors
    /// * [`ResolveError::UnknownOption`] for an unrecognized option token
    /// * [`ResolveError::MissingValue`] for a value-taking option without its value
    /// * [`ResolveError::HelpRequested`] when the help screen was asked for
    pub fn resolve<I, T>(
        tokens: I,
        environment: &HashMap<String, String>,
        cwd: &Path,
    ) -> Result<(Self, Vec<String>), ResolveError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = std::iter::once(OsString::from("gcovr"))
            .chain(tokens.into_iter().map(Into::into));
        let cli = Cli::try_parse_from(argv).map_err(|err| ResolveError::from_clap(&err))?;
        Ok(Self::from_cli(cli, environment, cwd))
    }

    fn from_cli(cli: Cli, environment: &HashMap<String, String>, cwd: &Path) -> (Self, Vec<String>) {
        let config = Self {
            version: cli.version,
            verbose: cli.verbose,
            objdir: cli.objdir,
            output: cli.output.map(|path| absolutize(&path, cwd)),
            keep: cli.keep,
            delete: cli.delete,
            filter: cli.filter,
            exclude: cli.exclude,
            gcov_filter: cli.gcov_filter,
            gcov_exclude: cli.gcov_exclude,
            root: cli.root,
            xml: cli.xml,
            prettyxml: cli.prettyxml,
            html: cli.html,
            html_details: cli.html_details,
            relative_anchors: cli.relative_anchors,
            show_branch: cli.show_branch.then_some(true),
            sort_uncovered: cli.sort_uncovered.then_some(true),
            sort_percent: cli.sort_percent.then_some(true),
            gcov_cmd: resolve_gcov_cmd(cli.gcov_cmd, environment),
            exclude_unreachable_branches: cli.exclude_unreachable_branches,
            gcov_files: cli.gcov_files,
            print_summary: cli.print_summary,
        };
        (config, cli.search_paths)
    }
}

/// Three-tier lookup for the gcov executable: the explicit flag wins, then a
/// non-empty `$GCOV`, then the literal default. Evaluated once per
/// resolution, never lazily.
fn resolve_gcov_cmd(explicit: Option<String>, environment: &HashMap<String, String>) -> String {
    explicit
        .or_else(|| {
            environment
                .get(GCOV_ENV_VAR)
                .filter(|value| !value.is_empty())
                .cloned()
        })
        .unwrap_or_else(|| DEFAULT_GCOV.to_string())
}
