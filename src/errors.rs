use clap::error::{ContextKind, ContextValue, ErrorKind};
use thiserror::Error;

/// Failure modes of the command-line resolution pass.
///
/// All variants abort resolution immediately; no partial configuration is
/// ever handed out. `HelpRequested` is not a failure in the usual sense, it
/// asks the caller to show the help screen and stop.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A token looked like an option but is not part of the recognized set
    #[error("unknown option '{option}'")]
    UnknownOption { option: String },

    /// A value-taking option appeared without its following value token
    #[error("option '{option}' requires a value")]
    MissingValue { option: String },

    /// `-h`/`--help` was given; carries the rendered help screen
    #[error("{text}")]
    HelpRequested { text: String },

    /// Anything else the parser rejected (e.g. non-UTF-8 argument bytes)
    #[error("{message}")]
    Malformed { message: String },
}

impl ResolveError {
    pub(crate) fn from_clap(err: &clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Self::HelpRequested {
                    text: err.to_string(),
                }
            }
            ErrorKind::UnknownArgument => Self::UnknownOption {
                option: offending_option(err),
            },
            ErrorKind::InvalidValue
            | ErrorKind::NoEquals
            | ErrorKind::TooFewValues
            | ErrorKind::WrongNumberOfValues => Self::MissingValue {
                option: offending_option(err),
            },
            _ => Self::Malformed {
                message: err.to_string(),
            },
        }
    }
}

/// Pull the offending option token out of the parser error context. The
/// context may carry the value placeholder too ("--filter <REGEX>"), only the
/// option name itself is kept.
fn offending_option(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg
            .split_whitespace()
            .next()
            .unwrap_or(arg.as_str())
            .to_string(),
        _ => err.to_string(),
    }
}
