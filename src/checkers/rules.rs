#![forbid(unsafe_code)]

//! The portability rule set
//!
//! Each checker inspects one property of the tree and appends findings to
//! the shared collector. Checkers never mutate the tree. An `Err` return
//! means the tree had a shape the checker cannot handle; the runner reports
//! it as a code-999 diagnostic and moves on.

use crate::error::CheckerError;
use crate::tree::{CAPTURE_OPENERS, ClassItem, KindSet, LITERAL_LIKE, NodeId, NodeKind, Tree};
use crate::types::Diagnostic;
use crate::walk::find_all_by_type;

const DIRECTIVES: KindSet = KindSet::of(&[NodeKind::Directive]);
const PROGRESSIONS: KindSet = KindSet::of(&[NodeKind::Progression]);
const ALTERNATIONS: KindSet = KindSet::of(&[NodeKind::Alternation]);
const CHAR_CLASSES: KindSet = KindSet::of(&[NodeKind::CharClass]);
const NAMED_GROUPS: KindSet = KindSet::of(&[NodeKind::NamedCaptureGroup]);

/// Coarse character bucket used by the range-homogeneity rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCategory {
    Letter,
    Digit,
    Punctuation,
}

/// Buckets a character for range-compatibility purposes
///
/// Letters compare equal regardless of case, so a range crossing case only
/// fails the direction test. Underscore counts as punctuation to match the
/// portable dialect's notion of compatible ranges.
pub fn char_category(c: char) -> CharCategory {
    if c.is_alphabetic() {
        CharCategory::Letter
    } else if c.is_ascii_digit() {
        CharCategory::Digit
    } else {
        CharCategory::Punctuation
    }
}

/// Rule 101: null characters are rejected by several target runtimes
pub fn check_no_nulls(tree: &Tree, diagnostics: &mut Vec<Diagnostic>) -> Result<(), CheckerError> {
    if let Some(position) = tree.pattern().find('\0') {
        diagnostics.push(Diagnostic::error(
            101,
            position,
            "Null characters are not allowed in patterns",
        ));
    }
    Ok(())
}

/// Rule 102: raw newlines are not portable outside verbose mode
pub fn check_no_newlines(
    tree: &Tree,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), CheckerError> {
    for directive in find_all_by_type(tree, tree.root(), DIRECTIVES) {
        if tree.data(directive).contains('x') {
            // Verbose-mode whitespace handling has no portable equivalent;
            // stay quiet rather than flag newlines the host will strip.
            return Ok(());
        }
    }
    if let Some(position) = tree.pattern().find('\n') {
        diagnostics.push(Diagnostic::error(
            102,
            position,
            "Raw newline characters are not allowed, escape them instead",
        ));
    }
    Ok(())
}

/// Rule 103: an empty alternation branch silently matches the empty string
pub fn check_no_empty_alternations(
    tree: &Tree,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), CheckerError> {
    for node in find_all_by_type(tree, tree.root(), PROGRESSIONS) {
        let under_alternation = tree
            .parent(node)
            .is_some_and(|parent| tree.kind(parent) == NodeKind::Alternation);
        if under_alternation && tree.children(node).is_empty() {
            let position = tree.start(node);
            diagnostics.push(Diagnostic::error(
                103,
                position,
                format!(
                    "Empty alternation branch starting at position {}, use a quantifier instead",
                    position
                ),
            ));
        }
    }
    Ok(())
}

/// Rule 104: character-class ranges must be homogeneous and ascending
pub fn check_charclass_homogeneous_ranges(
    tree: &Tree,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), CheckerError> {
    for class in find_all_by_type(tree, tree.root(), CHAR_CLASSES) {
        for item in tree.class_items(class) {
            let ClassItem::Range(range) = *item else {
                continue;
            };
            let literal_a = tree.kind(range.a) == NodeKind::Literal;
            let literal_b = tree.kind(range.b) == NodeKind::Literal;

            if literal_a && literal_b {
                let a = single_char(tree, range.a)?;
                let b = single_char(tree, range.b)?;
                let position = tree.start(range.a);
                if char_category(a) != char_category(b) {
                    diagnostics.push(Diagnostic::error(
                        104,
                        position,
                        format!(
                            "Range in character class is not homogeneous near position {}",
                            position
                        ),
                    ));
                }
                // Only ascending ranges are allowed.
                if a as u32 >= b as u32 {
                    diagnostics.push(Diagnostic::error(
                        104,
                        position,
                        format!(
                            "Range in character class goes backwards near position {}",
                            position
                        ),
                    ));
                }
            } else {
                // With a non-literal endpoint the range's ordering is
                // ambiguous, whether one endpoint is literal or neither is.
                diagnostics.push(Diagnostic::error(
                    104,
                    0,
                    format!(
                        "Range in character class is not homogeneous near position {}",
                        tree.start(class)
                    ),
                ));
            }
        }
    }
    Ok(())
}

/// Rule 105: in a first-match engine, a branch extending an earlier branch
/// can never match; `ab|a` works where `a|ab` does not
///
/// The rule only reasons about purely literal branches. Any non-literal
/// token anywhere makes branch texts incomparable, and the checker abstains
/// for the whole tree rather than guess.
pub fn check_prefix_ordering(
    tree: &Tree,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), CheckerError> {
    let mut findings = Vec::new();
    for alternation in find_all_by_type(tree, tree.root(), ALTERNATIONS) {
        let mut previous: Option<String> = None;
        for &branch in tree.children(alternation) {
            if tree.kind(branch) != NodeKind::Progression {
                return Err(CheckerError::UnexpectedKind {
                    expected: NodeKind::Progression,
                    found: tree.kind(branch),
                    position: tree.start(branch),
                });
            }
            let all_literal = tree
                .children(branch)
                .iter()
                .all(|&token| LITERAL_LIKE.contains(tree.kind(token)));
            if !all_literal {
                // Abstain: discard anything found so far.
                return Ok(());
            }
            let text: String = tree
                .children(branch)
                .iter()
                .map(|&token| tree.data(token))
                .collect();
            if let Some(prefix) = &previous
                && text.starts_with(prefix.as_str())
            {
                findings.push(Diagnostic::error(
                    105,
                    tree.start(alternation),
                    format!(
                        "Potential out of order alternation between {:?} and {:?}",
                        prefix, text
                    ),
                ));
                // One finding per alternation node is enough.
                break;
            }
            previous = Some(text);
        }
    }
    diagnostics.append(&mut findings);
    Ok(())
}

/// Rule 106: named capture groups are not portable across target dialects
pub fn check_no_named_groups(
    tree: &Tree,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<(), CheckerError> {
    if let Some(node) = find_all_by_type(tree, tree.root(), NAMED_GROUPS).next() {
        diagnostics.push(Diagnostic::error(
            106,
            tree.start(node),
            "Named capture groups are not portable",
        ));
    }
    Ok(())
}

/// Rule 107: the capture-group count must match the caller's mapping size
pub fn check_group_count(
    tree: &Tree,
    diagnostics: &mut Vec<Diagnostic>,
    expected: usize,
) -> Result<(), CheckerError> {
    let found = find_all_by_type(tree, tree.root(), CAPTURE_OPENERS).count();
    if found != expected {
        diagnostics.push(Diagnostic::error(
            107,
            0,
            format!(
                "Wrong number of capture groups: found {}, expected {}",
                found, expected
            ),
        ));
    }
    Ok(())
}

/// Rule 108: capture groups must tile the pattern for positional mapping
///
/// `expected` is accepted for parity with [`check_group_count`] callers; the
/// layout test itself does not need it. Groups are visited in document
/// order, which can differ from engine numbering when groups nest; nested
/// layouts fail the gap test below regardless.
pub fn check_group_layout(
    tree: &Tree,
    diagnostics: &mut Vec<Diagnostic>,
    _expected: usize,
) -> Result<(), CheckerError> {
    let mut prev_end = 0;
    for group in find_all_by_type(tree, tree.root(), CAPTURE_OPENERS) {
        if tree.start(group) != prev_end {
            diagnostics.push(Diagnostic::error(
                108,
                tree.start(group),
                "Nested or gapped capture groups cannot be mapped positionally",
            ));
        }
        prev_end = tree.end(group);
        if let Some(parent) = tree.parent(group)
            && tree.kind(parent) == NodeKind::Repetition
        {
            // The quantifier text sits between this group and the next.
            prev_end += tree.data(parent).len();
        }
    }
    if prev_end != tree.end_offset() {
        diagnostics.push(Diagnostic::error(
            108,
            prev_end,
            "Nested or gapped capture groups cannot be mapped positionally",
        ));
    }
    Ok(())
}

fn single_char(tree: &Tree, id: NodeId) -> Result<char, CheckerError> {
    let data = tree.data(id);
    let mut chars = data.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(CheckerError::NotSingleChar {
            position: tree.start(id),
            data: data.to_string(),
        }),
    }
}
