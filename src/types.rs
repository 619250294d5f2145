#![forbid(unsafe_code)]

//! Core domain types for relint
//!
//! This module defines the fundamental types used throughout the relint system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        write!(f, "{}", label)
    }
}

/// A single finding reported by a checker
///
/// Codes are stable across versions (101-108 for the rule set, 999 reserved
/// for runner-captured failures); external tooling keys off them, so a code
/// must never be reused for a different rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Stable numeric rule code
    pub code: u16,

    /// Severity of the finding
    pub severity: Severity,

    /// Character offset into the pattern, or 0 when no single position applies
    pub position: usize,

    /// Human-readable description of the finding
    pub message: String,
}

impl Diagnostic {
    /// Creates an error-severity diagnostic
    pub fn error(code: u16, position: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            position,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] at {}: {}",
            self.severity, self.code, self.position, self.message
        )
    }
}
