#![forbid(unsafe_code)]

//! Expansion of literal alternation branches into the strings they match
//!
//! A helper for checks that need full-string reasoning rather than the
//! prefix reasoning of the ordering rule. Only purely literal branches are
//! expandable; anything structural would need enumeration this module does
//! not attempt.

use crate::error::ExpandError;
use crate::tree::{CharRange, NodeId, NodeKind};

/// One element of an alternation branch handed to the expander
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchElement {
    /// A literal token: its kind tag and the text it matches
    Literal { kind: NodeKind, text: String },

    /// A structural sub-node (not expandable)
    Node(NodeId),

    /// A character-class range (not expandable)
    Range(CharRange),
}

impl BranchElement {
    /// Convenience constructor for literal elements
    pub fn literal(kind: NodeKind, text: impl Into<String>) -> Self {
        BranchElement::Literal {
            kind,
            text: text.into(),
        }
    }
}

/// Expands branches of literal tokens into the full strings they can match
///
/// Each branch contributes one string: the in-order concatenation of its
/// literal texts. An empty branch contributes the empty string. The scan
/// for structural elements happens before any string is produced, so a
/// failing input never yields partial results. The returned iterator is
/// lazy and has no external state; call the function again to restart.
///
/// # Errors
///
/// Returns [`ExpandError::UnsupportedNode`] or
/// [`ExpandError::UnsupportedRange`] if any element of any branch is
/// structural.
pub fn expand_possibilities(
    branches: &[Vec<BranchElement>],
) -> Result<impl Iterator<Item = String> + '_, ExpandError> {
    for element in branches.iter().flatten() {
        match element {
            BranchElement::Literal { .. } => {}
            BranchElement::Node(_) => return Err(ExpandError::UnsupportedNode),
            BranchElement::Range(_) => return Err(ExpandError::UnsupportedRange),
        }
    }

    Ok(branches.iter().map(|branch| {
        branch
            .iter()
            .map(|element| match element {
                BranchElement::Literal { text, .. } => text.as_str(),
                // Ruled out by the scan above.
                BranchElement::Node(_) | BranchElement::Range(_) => "",
            })
            .collect()
    }))
}
