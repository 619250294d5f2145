#![forbid(unsafe_code)]

//! Checker functions, registry, and isolated runner

mod rules;
mod runner;

// Re-export the rule set
pub use rules::{
    CharCategory, char_category, check_charclass_homogeneous_ranges, check_group_count,
    check_group_layout, check_no_empty_alternations, check_no_named_groups, check_no_newlines,
    check_no_nulls, check_prefix_ordering,
};

// Re-export the runner surface
pub use runner::{
    CHECKER_FAILURE, CHECKERS, Checker, CheckerFn, run_all_checkers, run_checkers,
    run_group_checkers,
};
