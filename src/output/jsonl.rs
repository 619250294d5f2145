#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order: one
//! diagnostic record per finding in report order, then a single trailing
//! status record after all documents.

use crate::types::{Diagnostic, Severity};
use serde::Serialize;

/// JSONL report formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Formats one document's diagnostics, one JSON object per line
    pub fn format_file(&self, file: &str, diagnostics: &[Diagnostic]) -> String {
        let mut output = String::new();
        for diagnostic in diagnostics {
            let record = DiagnosticRecord {
                record_type: "diagnostic",
                file,
                code: diagnostic.code,
                severity: diagnostic.severity,
                position: diagnostic.position,
                message: &diagnostic.message,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }
        output
    }

    /// Formats the trailing status record
    pub fn format_status(&self, files_checked: usize, total_findings: usize) -> String {
        let record = StatusRecord {
            record_type: "status",
            passed: total_findings == 0,
            files_checked: files_checked as u64,
            total_findings: total_findings as u64,
        };
        match serde_json::to_string(&record) {
            Ok(json) => format!("{}\n", json),
            Err(_) => String::new(),
        }
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic record for JSONL output
#[derive(Debug, Serialize)]
struct DiagnosticRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: &'a str,
    code: u16,
    severity: Severity,
    position: usize,
    message: &'a str,
}

/// Status record emitted once per run
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    files_checked: u64,
    total_findings: u64,
}
