//! relint CLI entry point

use clap::Parser;
use relint::cli::{Command, args::Cli};
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Check {
            files,
            format,
            expect_groups,
            config,
        } => relint::cli::check::run_check(&files, format, expect_groups, config.as_deref(), cli.color),
        Command::Rules { format } => relint::cli::rules::run_rules(format),
    };

    process::exit(exit_code);
}
