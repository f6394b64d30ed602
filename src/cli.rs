use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Command-line surface of the coverage reporter.
///
/// All options are independent of each other here; contradictory selections
/// (e.g. `--xml` together with `--html`) are left for the report dispatch to
/// arbitrate.
#[derive(Parser, Debug, Clone)]
#[command(name = "gcovr")]
#[command(about = "A utility to run gcov and generate a simple report that summarizes the coverage")]
#[command(override_usage = "gcovr [options]")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print the version number, then exit
    #[arg(long, help = "Print the version number, then exit")]
    pub version: bool,

    /// Print progress messages
    #[arg(short, long, help = "Print progress messages")]
    pub verbose: bool,

    /// Directory containing the gcov data files
    #[arg(
        long = "object-directory",
        value_name = "DIR",
        allow_hyphen_values = true,
        help = "Specify the directory that contains the gcov data files, overriding the normal path detection"
    )]
    pub objdir: Option<PathBuf>,

    /// Report output file
    #[arg(
        short,
        long,
        value_name = "FILE",
        allow_hyphen_values = true,
        help = "Print output to this filename"
    )]
    pub output: Option<PathBuf>,

    /// Keep the temporary *.gcov files generated by gcov
    #[arg(short, long, help = "Keep the temporary *.gcov files generated by gcov")]
    pub keep: bool,

    /// Delete the coverage files after they are processed
    #[arg(short, long, help = "Delete the coverage files after they are processed")]
    pub delete: bool,

    /// Keep only data files matching these regular expressions
    #[arg(
        short,
        long,
        value_name = "REGEX",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        help = "Keep only the data files that match this regular expression"
    )]
    pub filter: Vec<String>,

    /// Exclude data files matching these regular expressions
    #[arg(
        short,
        long,
        value_name = "REGEX",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        help = "Exclude data files that match this regular expression"
    )]
    pub exclude: Vec<String>,

    /// Keep only gcov data files matching this regular expression
    #[arg(
        long = "gcov-filter",
        value_name = "REGEX",
        allow_hyphen_values = true,
        overrides_with = "gcov_filter",
        help = "Keep only gcov data files that match this regular expression"
    )]
    pub gcov_filter: Option<String>,

    /// Exclude gcov data files matching these regular expressions
    #[arg(
        long = "gcov-exclude",
        value_name = "REGEX",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        help = "Exclude gcov data files that match this regular expression"
    )]
    pub gcov_exclude: Vec<String>,

    /// Root directory for source files
    #[arg(
        short,
        long,
        value_name = "DIR",
        allow_hyphen_values = true,
        help = "Defines the root directory for source files, used for filtering and display"
    )]
    pub root: Option<PathBuf>,

    /// Generate XML instead of the normal tabular output
    #[arg(short = 'x', long, help = "Generate XML instead of the normal tabular output")]
    pub xml: bool,

    /// Generate pretty XML instead of the normal dense format
    #[arg(long = "xml-pretty", help = "Generate pretty XML instead of the normal dense format")]
    pub prettyxml: bool,

    /// Generate HTML instead of the normal tabular output
    #[arg(long, help = "Generate HTML instead of the normal tabular output")]
    pub html: bool,

    /// Generate HTML output for each source file
    #[arg(long = "html-details", help = "Generate HTML output for source file coverage")]
    pub html_details: bool,

    /// Use absolute instead of relative paths in the HTML report
    #[arg(
        long = "html-absolute-paths",
        action = ArgAction::SetFalse,
        help = "Set the paths in the HTML report to be absolute instead of relative"
    )]
    pub relative_anchors: bool,

    /// Tabulate branch coverage instead of line coverage
    #[arg(
        short = 'b',
        long = "branches",
        help = "Tabulate the branch coverage instead of the line coverage"
    )]
    pub show_branch: bool,

    /// Sort entries by increasing number of uncovered lines
    #[arg(
        short = 'u',
        long = "sort-uncovered",
        help = "Sort entries by increasing number of uncovered lines"
    )]
    pub sort_uncovered: bool,

    /// Sort entries by decreasing percentage of covered lines
    #[arg(
        short = 'p',
        long = "sort-percentage",
        help = "Sort entries by decreasing percentage of covered lines"
    )]
    pub sort_percent: bool,

    /// Name/path of the gcov executable
    #[arg(
        long = "gcov-executable",
        value_name = "GCOV",
        allow_hyphen_values = true,
        help = "Defines the name/path to the gcov executable [defaults to the GCOV environment variable, if present; else 'gcov']"
    )]
    pub gcov_cmd: Option<String>,

    /// Exclude branches marked unreachable or from compiler-generated dead code
    #[arg(
        long = "exclude-unreachable-branches",
        help = "Exclude branches marked with LCOV/GCOV exclusion markers or from compiler-generated dead code"
    )]
    pub exclude_unreachable_branches: bool,

    /// Use preprocessed gcov files for analysis
    #[arg(short = 'g', long = "use-gcov-files", help = "Use preprocessed gcov files for analysis")]
    pub gcov_files: bool,

    /// Print a small summary report with line & branch percentage coverage
    #[arg(
        short = 's',
        long = "print-summary",
        help = "Prints a small report to stdout with line & branch percentage coverage"
    )]
    pub print_summary: bool,

    /// Directories searched for coverage data, passed through unexamined
    #[arg(value_name = "SEARCH_PATH")]
    pub search_paths: Vec<String>,
}
