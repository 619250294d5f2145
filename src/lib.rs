#![forbid(unsafe_code)]

//! relint: portability linting for parsed regular expression patterns
//!
//! relint inspects the syntax tree of a regular expression, produced by an
//! external parser and handed over as a tree document, and reports
//! portability and style defects before the pattern is deployed into a
//! cross-runtime text-processing pipeline. It never executes the pattern;
//! every rule works on syntactic structure alone.

pub mod checkers;
pub mod cli;
pub mod config;
pub mod error;
pub mod expand;
pub mod output;
pub mod tree;
pub mod types;
pub mod walk;

// Re-export error types for convenient access
pub use error::{CheckerError, ConfigError, ExpandError, RelintError, TreeError};

// Re-export core domain types for convenient access
pub use types::{Diagnostic, Severity};
