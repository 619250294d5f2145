#![forbid(unsafe_code)]

//! Checker registration and isolated execution
//!
//! The registry is a static list, so the execution order is fixed and
//! enumerable without reflection. A checker that fails internally, whether
//! by error return or by panic, is reported as a code-999 diagnostic and never
//! stops the batch; diagnostics it appended before failing are kept.

use crate::checkers::rules;
use crate::error::CheckerError;
use crate::tree::Tree;
use crate::types::Diagnostic;
use std::panic::{self, AssertUnwindSafe};

/// Reserved diagnostic code for runner-captured checker failures
pub const CHECKER_FAILURE: u16 = 999;

/// Signature shared by all registered checkers
pub type CheckerFn = fn(&Tree, &mut Vec<Diagnostic>) -> Result<(), CheckerError>;

/// One entry in the checker registry
#[derive(Debug, Clone, Copy)]
pub struct Checker {
    /// Stable rule code this checker reports under
    pub code: u16,

    /// Short name, shown in failure diagnostics and `relint rules`
    pub name: &'static str,

    /// One-line description of the rule
    pub description: &'static str,

    /// The checker function itself
    pub run: CheckerFn,
}

/// All registered checkers, in execution order
///
/// The group-mapping checkers (107, 108) are not here: they need the
/// caller-supplied expected count and run through [`run_group_checkers`].
pub const CHECKERS: &[Checker] = &[
    Checker {
        code: 101,
        name: "no-nulls",
        description: "Null characters are not allowed in patterns",
        run: rules::check_no_nulls,
    },
    Checker {
        code: 102,
        name: "no-newlines",
        description: "Raw newlines are not allowed outside verbose mode",
        run: rules::check_no_newlines,
    },
    Checker {
        code: 103,
        name: "no-empty-alternations",
        description: "Alternation branches must not be empty",
        run: rules::check_no_empty_alternations,
    },
    Checker {
        code: 104,
        name: "homogeneous-ranges",
        description: "Character-class ranges must be homogeneous and ascending",
        run: rules::check_charclass_homogeneous_ranges,
    },
    Checker {
        code: 105,
        name: "prefix-ordering",
        description: "Alternation branches must not hide later branches behind a shared prefix",
        run: rules::check_prefix_ordering,
    },
    Checker {
        code: 106,
        name: "no-named-groups",
        description: "Named capture groups are not portable",
        run: rules::check_no_named_groups,
    },
];

/// Runs every registered checker over the tree
///
/// Never panics or errors; checker failures surface as code-999 entries in
/// the returned list. Output order is each checker's findings in discovery
/// order, checkers in registry order.
pub fn run_all_checkers(tree: &Tree) -> Vec<Diagnostic> {
    run_checkers(tree, CHECKERS)
}

/// Runs a subset of checkers (e.g. after config filtering) in the given order
pub fn run_checkers<'a>(
    tree: &Tree,
    checkers: impl IntoIterator<Item = &'a Checker>,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for checker in checkers {
        run_isolated(checker.name, &mut diagnostics, |out| {
            (checker.run)(tree, out)
        });
    }
    diagnostics
}

/// Runs the two group-mapping checkers (107, 108) under the same isolation
///
/// `expected` is the capture-group count the caller's positional mapping
/// requires; the core never sources this value itself.
pub fn run_group_checkers(tree: &Tree, expected: usize) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    run_isolated("group-count", &mut diagnostics, |out| {
        rules::check_group_count(tree, out, expected)
    });
    run_isolated("group-layout", &mut diagnostics, |out| {
        rules::check_group_layout(tree, out, expected)
    });
    diagnostics
}

/// Invokes one checker, converting an error return or a panic into a
/// code-999 diagnostic
fn run_isolated(
    name: &str,
    diagnostics: &mut Vec<Diagnostic>,
    run: impl FnOnce(&mut Vec<Diagnostic>) -> Result<(), CheckerError>,
) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run(&mut *diagnostics)));
    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(error)) => diagnostics.push(failure_diagnostic(name, &error.to_string())),
        Err(payload) => diagnostics.push(failure_diagnostic(name, &panic_text(payload.as_ref()))),
    }
}

fn failure_diagnostic(name: &str, detail: &str) -> Diagnostic {
    Diagnostic::error(
        CHECKER_FAILURE,
        0,
        format!("Checker {} encountered an internal error: {}", name, detail),
    )
}

fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    fn empty_tree() -> Tree {
        Tree::new("", NodeKind::Progression, 0, 0)
    }

    fn panicking(_tree: &Tree, _diagnostics: &mut Vec<Diagnostic>) -> Result<(), CheckerError> {
        panic!("boom");
    }

    fn erroring(_tree: &Tree, _diagnostics: &mut Vec<Diagnostic>) -> Result<(), CheckerError> {
        Err(CheckerError::NotSingleChar {
            position: 3,
            data: "zz".to_string(),
        })
    }

    fn partial_then_erroring(
        _tree: &Tree,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<(), CheckerError> {
        diagnostics.push(Diagnostic::error(101, 0, "found before failing"));
        Err(CheckerError::NotSingleChar {
            position: 0,
            data: String::new(),
        })
    }

    #[test]
    fn test_clean_tree_yields_no_diagnostics() {
        let diagnostics = run_all_checkers(&empty_tree());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_registry_codes_are_stable() {
        let codes: Vec<u16> = CHECKERS.iter().map(|checker| checker.code).collect();
        assert_eq!(codes, vec![101, 102, 103, 104, 105, 106]);
    }

    #[test]
    fn test_panicking_checker_becomes_999() {
        let crasher = Checker {
            code: 101,
            name: "always-panics",
            description: "test checker",
            run: panicking,
        };

        let diagnostics = run_checkers(&empty_tree(), [&crasher, &CHECKERS[0]]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CHECKER_FAILURE);
        assert_eq!(diagnostics[0].position, 0);
        assert!(diagnostics[0].message.contains("always-panics"));
        assert!(diagnostics[0].message.contains("boom"));
    }

    #[test]
    fn test_erroring_checker_becomes_999_and_batch_continues() {
        let broken = Checker {
            code: 102,
            name: "always-errors",
            description: "test checker",
            run: erroring,
        };

        let mut tree = Tree::new("a\0", NodeKind::Progression, 0, 2);
        tree.add_child(tree.root(), NodeKind::Literal, 0, 1, "a");

        // The broken checker runs first; the null checker still fires.
        let diagnostics = run_checkers(&tree, [&broken, &CHECKERS[0]]);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].code, CHECKER_FAILURE);
        assert!(diagnostics[0].message.contains("always-errors"));
        assert_eq!(diagnostics[1].code, 101);
    }

    #[test]
    fn test_partial_findings_survive_a_failure() {
        let partial = Checker {
            code: 101,
            name: "partial",
            description: "test checker",
            run: partial_then_erroring,
        };

        let diagnostics = run_checkers(&empty_tree(), [&partial]);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "found before failing");
        assert_eq!(diagnostics[1].code, CHECKER_FAILURE);
    }

    #[test]
    fn test_output_is_stable_across_runs() {
        let mut tree = Tree::new("a\n\0", NodeKind::Progression, 0, 3);
        tree.add_child(tree.root(), NodeKind::Literal, 0, 1, "a");

        let first = run_all_checkers(&tree);
        let second = run_all_checkers(&tree);

        assert_eq!(first, second);
        // Null finding (101) precedes newline finding (102) regardless of
        // their pattern positions, because registry order wins.
        assert_eq!(first[0].code, 101);
        assert_eq!(first[1].code, 102);
    }

    #[test]
    fn test_group_checkers_run_isolated() {
        let mut tree = Tree::new("(a)", NodeKind::Progression, 0, 3);
        tree.add_child(tree.root(), NodeKind::CaptureGroup, 0, 3, "");

        let diagnostics = run_group_checkers(&tree, 1);
        assert!(diagnostics.is_empty());

        let diagnostics = run_group_checkers(&tree, 2);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, 107);
    }
}
