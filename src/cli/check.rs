//! Check command implementation
//!
//! This module implements the `relint check` command, which:
//! - Loads configuration from relint.toml (optional)
//! - Reads and ingests each tree document
//! - Runs the registered checkers, minus disabled ones
//! - Runs the group-mapping checkers when an expected count is supplied
//! - Formats output (human or JSONL)
//! - Returns an appropriate exit code

use crate::checkers::{CHECKERS, Checker, run_checkers, run_group_checkers};
use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{
    EXIT_ERROR, EXIT_FINDINGS, EXIT_PARSE_ERROR, EXIT_SUCCESS, color_choice, load_config,
};
use crate::error::{ConfigError, TreeError};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::tree::json::parse_tree;

/// Error type specific to the check command
#[derive(Debug, thiserror::Error)]
pub(crate) enum CheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{file}: {source}")]
    Document { file: String, source: TreeError },

    #[error("Failed to read {file}: {source}")]
    Read {
        file: String,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    fn exit_code(&self) -> i32 {
        match self {
            // Malformed documents and malformed config are parse failures.
            CheckError::Document { .. } => EXIT_PARSE_ERROR,
            CheckError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
            _ => EXIT_ERROR,
        }
    }
}

/// Runs the check command
///
/// This is the main entry point for the check command. It coordinates the
/// components and returns an appropriate exit code:
/// - 0: no findings
/// - 1: findings reported
/// - 2: runtime error (I/O, bad config value)
/// - 3: parse error (malformed tree document or config)
pub fn run_check(
    files: &[String],
    format: OutputFormat,
    expect_groups: Option<usize>,
    config_path: Option<&str>,
    color: ColorChoice,
) -> i32 {
    match run_check_inner(files, format, expect_groups, config_path, color) {
        Ok(findings) => {
            if findings == 0 {
                EXIT_SUCCESS
            } else {
                EXIT_FINDINGS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Internal implementation of the check command
fn run_check_inner(
    files: &[String],
    format: OutputFormat,
    expect_groups: Option<usize>,
    config_path: Option<&str>,
    color: ColorChoice,
) -> Result<usize, CheckError> {
    let config = load_config(config_path)?;

    // The CLI flag wins over the config file.
    let expected_groups = expect_groups.or(config.expected_groups);

    let enabled: Vec<&Checker> = CHECKERS
        .iter()
        .filter(|checker| config.is_enabled(checker.code))
        .collect();

    if enabled.is_empty() && expected_groups.is_none() {
        eprintln!("Warning: all rules are disabled. Nothing to check.");
        return Ok(0);
    }

    let human = HumanFormatter::new(color_choice(color));
    let jsonl = JsonlFormatter::new();
    let mut total_findings = 0;

    for file in files {
        let content = std::fs::read_to_string(file).map_err(|source| CheckError::Read {
            file: file.clone(),
            source,
        })?;
        let tree = parse_tree(&content).map_err(|source| CheckError::Document {
            file: file.clone(),
            source,
        })?;

        let mut diagnostics = run_checkers(&tree, enabled.iter().copied());
        if let Some(expected) = expected_groups {
            diagnostics.extend(run_group_checkers(&tree, expected));
        }
        total_findings += diagnostics.len();

        match format {
            OutputFormat::Human => human.print_file(file, &diagnostics)?,
            OutputFormat::Jsonl => print!("{}", jsonl.format_file(file, &diagnostics)),
        }
    }

    match format {
        OutputFormat::Human => human.print_summary(files.len(), total_findings)?,
        OutputFormat::Jsonl => print!("{}", jsonl.format_status(files.len(), total_findings)),
    }

    Ok(total_findings)
}
