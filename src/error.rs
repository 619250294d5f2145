//! Error types for relint
//!
//! This module defines the error types used throughout relint, following
//! a hierarchical structure with specific error variants for different
//! error categories. Checker-internal errors never escape the runner; they
//! are converted into code-999 diagnostics.

use crate::tree::NodeKind;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid TOML syntax in the configuration file
    #[error("Invalid configuration syntax: {0}")]
    Parse(String),

    /// Invalid configuration value
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// I/O error reading the configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tree-document ingestion errors
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Malformed JSON in the tree document
    #[error("Invalid tree document: {0}")]
    Parse(String),

    /// A node span does not fit inside the pattern text
    #[error("Node span {start}..{end} is outside the pattern (length {limit})")]
    SpanOutOfBounds {
        start: usize,
        end: usize,
        limit: usize,
    },

    /// A structural constraint of the node contract was violated
    #[error("Malformed tree document: {0}")]
    Contract(String),
}

/// Internal checker failures
///
/// A checker returns one of these when the tree has a shape it cannot
/// handle; the runner reports it as a code-999 diagnostic and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    /// A node had a kind the checker cannot handle at this position
    #[error("Unexpected {found:?} node at position {position}, expected {expected:?}")]
    UnexpectedKind {
        expected: NodeKind,
        found: NodeKind,
        position: usize,
    },

    /// A range endpoint payload was not a single character
    #[error("Range endpoint at position {position} is not a single character: {data:?}")]
    NotSingleChar { position: usize, data: String },
}

/// Alternation-expander errors
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    /// A branch contained a structural sub-node
    #[error("Cannot expand alternations containing sub-nodes")]
    UnsupportedNode,

    /// A branch contained a character-class range
    #[error("Cannot expand alternations containing character-class ranges")]
    UnsupportedRange,
}

/// Top-level error type for relint
#[derive(Debug, thiserror::Error)]
pub enum RelintError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tree ingestion error
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
