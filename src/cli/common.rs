//! Common helper functions shared across CLI commands

use crate::cli::args::ColorChoice;
use crate::config::{CONFIG_FILE, LintConfig};
use crate::error::ConfigError;
use std::io::IsTerminal;
use std::path::Path;

/// Exit codes shared by all commands
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Loads configuration
///
/// An explicitly given path must exist; the default path is optional and
/// falls back to an empty configuration.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed.
pub(crate) fn load_config(path: Option<&str>) -> Result<LintConfig, ConfigError> {
    match path {
        Some(explicit) => LintConfig::load(Path::new(explicit)),
        None => LintConfig::load_or_default(Path::new(CONFIG_FILE)),
    }
}

/// Maps the CLI color flag onto termcolor's choice for stdout
pub(crate) fn color_choice(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if std::io::stdout().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}
