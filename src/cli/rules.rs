//! Rules listing command
//!
//! Prints every registered rule plus the two opt-in group-mapping rules,
//! so external tooling can discover the stable codes.

use crate::checkers::CHECKERS;
use crate::cli::args::OutputFormat;
use crate::cli::common::EXIT_SUCCESS;
use serde::Serialize;

/// The group-mapping rules, listed alongside the registry even though they
/// only run when an expected count is supplied
const GROUP_RULES: &[(u16, &str, &str)] = &[
    (
        107,
        "group-count",
        "Capture-group count must match the supplied mapping size (needs --expect-groups)",
    ),
    (
        108,
        "group-layout",
        "Capture groups must tile the pattern exactly (needs --expect-groups)",
    ),
];

/// Rule record for JSONL output
#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    code: u16,
    name: &'a str,
    description: &'a str,
    requires_expected_groups: bool,
}

/// Runs the rules command
pub fn run_rules(format: OutputFormat) -> i32 {
    match format {
        OutputFormat::Human => {
            for checker in CHECKERS {
                println!(
                    "{} {:<22} {}",
                    checker.code, checker.name, checker.description
                );
            }
            for (code, name, description) in GROUP_RULES {
                println!("{} {:<22} {}", code, name, description);
            }
        }
        OutputFormat::Jsonl => {
            let mut records: Vec<RuleRecord> = CHECKERS
                .iter()
                .map(|checker| RuleRecord {
                    code: checker.code,
                    name: checker.name,
                    description: checker.description,
                    requires_expected_groups: false,
                })
                .collect();
            records.extend(GROUP_RULES.iter().map(|&(code, name, description)| {
                RuleRecord {
                    code,
                    name,
                    description,
                    requires_expected_groups: true,
                }
            }));

            for record in records {
                if let Ok(json) = serde_json::to_string(&record) {
                    println!("{}", json);
                }
            }
        }
    }

    EXIT_SUCCESS
}
