//! Shared CLI output helpers.
//!
//! stdout is reserved for export lines so the output can be sourced;
//! every diagnostic goes to stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints

use console::style;

use crate::error::{ConfigError, Error};
use crate::core::store::FetchErrorKind;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print the export block to stdout.
pub fn exports(block: &str) {
    println!("{}", block);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ unknown environment: staging`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ check AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// A follow-up suggestion for errors the operator can act on.
pub fn suggestion(err: &Error) -> Option<&'static str> {
    match err {
        Error::UnknownEnvironment(_) => Some("known environments are listed in the config table"),
        Error::Config(ConfigError::MissingDefault(_)) => {
            Some("add an entry for the default environment to [environments]")
        }
        Error::Fetch(fetch) => match fetch.kind {
            FetchErrorKind::InvalidCredentials => {
                Some("check AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY")
            }
            FetchErrorKind::ResourceNotFound => Some("check the secret name and region"),
            _ => None,
        },
        _ => None,
    }
}
