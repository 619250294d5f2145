#![forbid(unsafe_code)]

//! Document-order traversal primitives
//!
//! These are the only tree-walking operations the checkers use: a bounded
//! pre-order walk, a kind-filtered walk, and an exclusive between-walk.
//! All three are lazy iterators borrowing the tree; re-create one to
//! restart a traversal.

use crate::tree::{KindSet, NodeId, Tree};

/// Walks document order from `first` (inclusive), stopping before `stop`
///
/// Yields nothing when `first` is `None`; runs to the end of the tree when
/// `stop` is `None`.
pub fn find_all(
    tree: &Tree,
    first: Option<NodeId>,
    stop: Option<NodeId>,
) -> impl Iterator<Item = NodeId> + '_ {
    std::iter::successors(first, move |&id| tree.next(id))
        .take_while(move |&id| stop != Some(id))
}

/// Walks document order from `root`, yielding nodes whose kind is in `kinds`
pub fn find_all_by_type(
    tree: &Tree,
    root: NodeId,
    kinds: KindSet,
) -> impl Iterator<Item = NodeId> + '_ {
    find_all(tree, Some(root), None).filter(move |&id| kinds.contains(tree.kind(id)))
}

/// Yields nodes strictly between `first` and `second`, excluding both
///
/// A `None` first anchors the walk at the true beginning of the tree: the
/// root itself has no meaningful position, so the walk starts at its first
/// child (found by climbing up from `second`). Otherwise the walk starts at
/// `first`'s successor outside its own subtree, so `first`'s descendants are
/// excluded along with `first` itself.
pub fn between(
    tree: &Tree,
    first: Option<NodeId>,
    second: NodeId,
) -> impl Iterator<Item = NodeId> + '_ {
    let start = match first {
        Some(node) => tree.next_no_children(node),
        None => {
            let mut top = second;
            while let Some(parent) = tree.parent(top) {
                top = parent;
            }
            tree.children(top).first().copied()
        }
    };
    find_all(tree, start, Some(second))
}
