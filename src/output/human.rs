#![forbid(unsafe_code)]

//! Human-readable report formatting
//!
//! Prints one line per diagnostic with the severity and rule code colored,
//! then a summary line once all documents have been checked.

use crate::types::{Diagnostic, Severity};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human report writer for stdout
pub struct HumanFormatter {
    color: ColorChoice,
}

impl HumanFormatter {
    /// Creates a formatter with the given color behavior
    pub fn new(color: ColorChoice) -> Self {
        HumanFormatter { color }
    }

    /// Prints the diagnostics for one checked document
    ///
    /// # Errors
    ///
    /// Returns any error from writing to stdout.
    pub fn print_file(&self, file: &str, diagnostics: &[Diagnostic]) -> std::io::Result<()> {
        let mut stream = StandardStream::stdout(self.color);
        for diagnostic in diagnostics {
            write!(stream, "{}:{}: ", file, diagnostic.position)?;
            stream.set_color(
                ColorSpec::new()
                    .set_fg(Some(severity_color(diagnostic.severity)))
                    .set_bold(true),
            )?;
            write!(stream, "{}[{}]", diagnostic.severity, diagnostic.code)?;
            stream.reset()?;
            writeln!(stream, ": {}", diagnostic.message)?;
        }
        Ok(())
    }

    /// Prints the final summary line
    ///
    /// # Errors
    ///
    /// Returns any error from writing to stdout.
    pub fn print_summary(&self, files_checked: usize, findings: usize) -> std::io::Result<()> {
        let mut stream = StandardStream::stdout(self.color);
        if findings == 0 {
            writeln!(stream, "Checked {} pattern(s): no findings", files_checked)
        } else {
            writeln!(
                stream,
                "Checked {} pattern(s): {} finding(s)",
                files_checked, findings
            )
        }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new(ColorChoice::Never)
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    }
}
