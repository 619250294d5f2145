#![forbid(unsafe_code)]

//! Ingestion of parser-emitted tree documents
//!
//! The parser collaborator runs in the authoring runtime and hands the parse
//! tree over as a JSON document. This module deserializes that document and
//! builds the arena, validating the node contract along the way: spans must
//! fit the pattern, class items may only appear on char-class nodes, and
//! class members must be leaves.

use crate::error::TreeError;
use crate::tree::{NodeId, NodeKind, Tree};
use serde::Deserialize;

/// Top-level tree document as emitted by the parser collaborator
#[derive(Debug, Deserialize)]
pub struct TreeDocument {
    /// The original pattern text
    pub pattern: String,

    /// Root node of the parse tree
    pub root: NodeDocument,
}

/// One node of the tree document
///
/// `data`, `children`, and `chars` all default to empty so leaf literals
/// stay terse on the wire.
#[derive(Debug, Deserialize)]
pub struct NodeDocument {
    kind: NodeKind,
    start: usize,
    end: usize,
    #[serde(default)]
    data: String,
    #[serde(default)]
    children: Vec<NodeDocument>,
    #[serde(default)]
    chars: Vec<ClassItemDocument>,
}

/// A char-class item: either a lone member node or an `a`-`b` range pair
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassItemDocument {
    Single(NodeDocument),
    Range { a: NodeDocument, b: NodeDocument },
}

/// Parses a JSON tree document into a [`Tree`]
///
/// # Errors
///
/// Returns `TreeError::Parse` if the JSON is malformed, and
/// `TreeError::SpanOutOfBounds` or `TreeError::Contract` if the document
/// violates the node contract.
pub fn parse_tree(input: &str) -> Result<Tree, TreeError> {
    let document: TreeDocument =
        serde_json::from_str(input).map_err(|e| TreeError::Parse(e.to_string()))?;
    build_tree(document)
}

/// Builds a [`Tree`] from an already-deserialized document
///
/// # Errors
///
/// Same contract violations as [`parse_tree`], minus the JSON syntax tier.
pub fn build_tree(document: TreeDocument) -> Result<Tree, TreeError> {
    let TreeDocument { pattern, root } = document;
    let limit = pattern.len();

    check_span(&root, limit)?;
    let mut tree = Tree::new(pattern, root.kind, root.start, root.end);
    let root_id = tree.root();
    attach_contents(&mut tree, root_id, root, limit)?;
    Ok(tree)
}

/// Adds `document` as a child of `parent` and recurses into its contents
fn attach(
    tree: &mut Tree,
    parent: NodeId,
    document: NodeDocument,
    limit: usize,
) -> Result<(), TreeError> {
    check_span(&document, limit)?;
    let id = tree.add_child(parent, document.kind, document.start, document.end, &document.data);
    attach_contents(tree, id, document, limit)
}

/// Attaches the children and class items of an already-created node
fn attach_contents(
    tree: &mut Tree,
    id: NodeId,
    document: NodeDocument,
    limit: usize,
) -> Result<(), TreeError> {
    let NodeDocument {
        kind,
        start,
        children,
        chars,
        ..
    } = document;

    if !chars.is_empty() && kind != NodeKind::CharClass {
        return Err(TreeError::Contract(format!(
            "chars on a {:?} node at position {}",
            kind, start
        )));
    }

    for item in chars {
        match item {
            ClassItemDocument::Single(member) => {
                let member_id = attach_member(tree, id, member, limit)?;
                tree.push_class_single(id, member_id);
            }
            ClassItemDocument::Range { a, b } => {
                let a_id = attach_member(tree, id, a, limit)?;
                let b_id = attach_member(tree, id, b, limit)?;
                tree.push_class_range(id, a_id, b_id);
            }
        }
    }

    for child in children {
        attach(tree, id, child, limit)?;
    }

    Ok(())
}

/// Adds a class member node, which must be a leaf
fn attach_member(
    tree: &mut Tree,
    class: NodeId,
    member: NodeDocument,
    limit: usize,
) -> Result<NodeId, TreeError> {
    check_span(&member, limit)?;
    if !member.children.is_empty() || !member.chars.is_empty() {
        return Err(TreeError::Contract(format!(
            "class member at position {} is not a leaf",
            member.start
        )));
    }
    Ok(tree.add_class_member(class, member.kind, member.start, member.end, &member.data))
}

fn check_span(document: &NodeDocument, limit: usize) -> Result<(), TreeError> {
    if document.start > document.end || document.end > limit {
        return Err(TreeError::SpanOutOfBounds {
            start: document.start,
            end: document.end,
            limit,
        });
    }
    Ok(())
}
