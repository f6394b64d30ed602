use std::collections::HashMap;
use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};

use gcovr::config::Config;
use gcovr::errors::ResolveError;

/// Exit status for command-line usage errors
const USAGE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("gcovr: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cwd = env::current_dir().context("Failed to get current working directory")?;
    let environment: HashMap<String, String> = env::vars().collect();

    match Config::resolve(env::args_os().skip(1), &environment, &cwd) {
        Ok((config, search_paths)) => {
            if config.version {
                println!("gcovr {}", env!("CARGO_PKG_VERSION"));
                return Ok(ExitCode::SUCCESS);
            }
            if config.verbose {
                print_resolved_settings(&config, &search_paths);
            }
            // Hand-off boundary: the coverage pipeline (gcov invocation, data
            // aggregation, report rendering) consumes the configuration here.
            Ok(ExitCode::SUCCESS)
        }
        Err(ResolveError::HelpRequested { text }) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Usage: gcovr [options]");
            eprintln!("gcovr: error: {err}");
            Ok(ExitCode::from(USAGE_EXIT_CODE))
        }
    }
}

/// Echo the settings a run will use. Only shown with `--verbose`.
fn print_resolved_settings(config: &Config, search_paths: &[String]) {
    println!("[*] gcov executable: {}", config.gcov_cmd);
    if let Some(objdir) = &config.objdir {
        println!("[*] object directory: {}", objdir.display());
    }
    if let Some(root) = &config.root {
        println!("[*] source root: {}", root.display());
    }
    if let Some(output) = &config.output {
        println!("[*] writing report to: {}", output.display());
    }
    if !config.filter.is_empty() {
        println!("[*] source filters: {}", config.filter.join(", "));
    }
    if !config.exclude.is_empty() {
        println!("[*] source excludes: {}", config.exclude.join(", "));
    }
    if !search_paths.is_empty() {
        println!("[*] search paths: {}", search_paths.join(", "));
    }
}
