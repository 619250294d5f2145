//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for relint commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if the terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// relint CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "relint")]
#[command(about = "Portability linter for parsed regular expression patterns")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available relint subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check pattern tree documents for portability defects
    Check {
        /// Tree document files emitted by the pattern parser
        #[arg(required = true)]
        files: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Expected capture-group count; enables the group-mapping rules
        #[arg(long)]
        expect_groups: Option<usize>,

        /// Configuration file (defaults to relint.toml when present)
        #[arg(long)]
        config: Option<String>,
    },

    /// List the registered rules
    Rules {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
