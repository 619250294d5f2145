#![forbid(unsafe_code)]

//! Arena tree model for parsed regular expression patterns
//!
//! The tree is produced by an external parser and ingested through [`json`],
//! or built directly by tests. The arena owns every node; parent links and
//! char-class range endpoints are non-owning indices, so the structure is
//! acyclic by construction. Once built, a tree is never mutated by checkers.

pub mod json;

use serde::{Deserialize, Serialize};

/// Classification tag for a tree node
///
/// The set is fixed but deliberately wider than what the rule set inspects;
/// the parser may emit kinds a given checker ignores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A single literal character
    Literal,
    /// A run of consecutive literal characters
    LiteralRun,
    /// An escaped newline token
    Newline,
    /// A token that is literal in the authoring dialect but suspect elsewhere
    Suspicious,
    /// An inline mode modifier such as `(?x)`
    Directive,
    /// One sequential run of tokens (an alternation branch or a whole pattern)
    Progression,
    /// A choice between Progression branches
    Alternation,
    /// A bracketed character class
    CharClass,
    /// A positional capture group, spanning the parentheses
    CaptureGroup,
    /// A named capture group
    NamedCaptureGroup,
    /// A non-capturing group
    NonCaptureGroup,
    /// A quantifier applied to its child element
    Repetition,
    /// A zero-width anchor such as `^` or `$`
    Anchor,
}

impl NodeKind {
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// An immutable set of node kinds, used to filter traversals
///
/// Kind sets are how the "belongs to a category" test is expressed: a
/// category is a const set, and membership is a bit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSet(u16);

impl KindSet {
    /// Builds a set from a list of kinds
    pub const fn of(kinds: &[NodeKind]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        KindSet(bits)
    }

    /// Membership test
    pub const fn contains(self, kind: NodeKind) -> bool {
        self.0 & kind.bit() != 0
    }
}

/// Kinds whose tokens stand for fixed literal text
pub const LITERAL_LIKE: KindSet = KindSet::of(&[
    NodeKind::Literal,
    NodeKind::LiteralRun,
    NodeKind::Newline,
    NodeKind::Suspicious,
]);

/// Kinds that open a capture group, positional or named
pub const CAPTURE_OPENERS: KindSet =
    KindSet::of(&[NodeKind::CaptureGroup, NodeKind::NamedCaptureGroup]);

/// Index of a node within its owning [`Tree`]
///
/// Ids are plain indices and only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// A char-class range `a-b`, as a pair of endpoint nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    pub a: NodeId,
    pub b: NodeId,
}

/// One element of a character class: a lone member or a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    Single(NodeId),
    Range(CharRange),
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    start: usize,
    end: usize,
    data: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    class_items: Vec<ClassItem>,
}

impl NodeData {
    fn new(kind: NodeKind, start: usize, end: usize, data: &str, parent: Option<NodeId>) -> Self {
        NodeData {
            kind,
            start,
            end,
            data: data.to_string(),
            parent,
            children: Vec::new(),
            class_items: Vec::new(),
        }
    }
}

/// An arena-owned parse tree for a single pattern
///
/// The root is created with the tree and is always structural: it carries no
/// literal payload. Class-range endpoint nodes live in the arena with a
/// parent link to their class node but outside any `children` list, so
/// document-order traversal does not descend into them.
#[derive(Debug)]
pub struct Tree {
    pattern: String,
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Tree {
    /// Creates a tree containing only a root node spanning `start..end`
    pub fn new(pattern: impl Into<String>, kind: NodeKind, start: usize, end: usize) -> Self {
        Tree {
            pattern: pattern.into(),
            nodes: vec![NodeData::new(kind, start, end, "", None)],
            root: NodeId(0),
        }
    }

    /// Appends a child to `parent` and returns its id
    pub fn add_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        start: usize,
        end: usize,
        data: &str,
    ) -> NodeId {
        let id = self.push(NodeData::new(kind, start, end, data, Some(parent)));
        self.node_mut(parent).children.push(id);
        id
    }

    /// Allocates a char-class member node owned by `class`
    ///
    /// The member is not a traversal child; record it with
    /// [`push_class_single`](Tree::push_class_single) or
    /// [`push_class_range`](Tree::push_class_range).
    pub fn add_class_member(
        &mut self,
        class: NodeId,
        kind: NodeKind,
        start: usize,
        end: usize,
        data: &str,
    ) -> NodeId {
        self.push(NodeData::new(kind, start, end, data, Some(class)))
    }

    /// Records a lone member in the class's item list
    pub fn push_class_single(&mut self, class: NodeId, member: NodeId) {
        self.node_mut(class).class_items.push(ClassItem::Single(member));
    }

    /// Records an `a`-`b` range in the class's item list
    pub fn push_class_range(&mut self, class: NodeId, a: NodeId, b: NodeId) -> CharRange {
        let range = CharRange { a, b };
        self.node_mut(class).class_items.push(ClassItem::Range(range));
        range
    }

    /// The full original pattern text shared by every node
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The root node id
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// End offset of the whole pattern (the root node's end)
    pub fn end_offset(&self) -> usize {
        self.node(self.root).end
    }

    /// Number of nodes in the arena, class members included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.node(id).kind
    }

    pub fn start(&self, id: NodeId) -> usize {
        self.node(id).start
    }

    pub fn end(&self, id: NodeId) -> usize {
        self.node(id).end
    }

    /// The node's own literal text payload (empty for structural nodes)
    pub fn data(&self, id: NodeId) -> &str {
        &self.node(id).data
    }

    /// Immediate children, left to right
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// The owning node, or `None` at the root
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Items of a character class, in written order (empty for other kinds)
    pub fn class_items(&self, id: NodeId) -> &[ClassItem] {
        &self.node(id).class_items
    }

    /// The next node in full pre-order document traversal
    ///
    /// Descends into children before moving to siblings; `None` at the end.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        if let Some(&first) = self.node(id).children.first() {
            return Some(first);
        }
        self.next_no_children(id)
    }

    /// The next node in document order that is not a descendant of `id`
    pub fn next_no_children(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            let siblings = &self.node(parent).children;
            let index = siblings.iter().position(|&sibling| sibling == current)?;
            if let Some(&next) = siblings.get(index + 1) {
                return Some(next);
            }
            current = parent;
        }
        None
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0 as usize]
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(data);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds the tree for `a(b)c`: root progression with a literal, a
    // capture group wrapping a literal, and a trailing literal.
    fn sample_tree() -> (Tree, Vec<NodeId>) {
        let mut tree = Tree::new("a(b)c", NodeKind::Progression, 0, 5);
        let root = tree.root();
        let a = tree.add_child(root, NodeKind::Literal, 0, 1, "a");
        let group = tree.add_child(root, NodeKind::CaptureGroup, 1, 4, "");
        let b = tree.add_child(group, NodeKind::Literal, 2, 3, "b");
        let c = tree.add_child(root, NodeKind::Literal, 4, 5, "c");
        (tree, vec![root, a, group, b, c])
    }

    #[test]
    fn test_next_visits_every_node_in_preorder() {
        let (tree, expected) = sample_tree();

        let mut visited = vec![tree.root()];
        let mut current = tree.root();
        while let Some(next) = tree.next(current) {
            visited.push(next);
            current = next;
        }

        assert_eq!(visited, expected);
    }

    #[test]
    fn test_next_no_children_skips_subtree() {
        let (tree, nodes) = sample_tree();
        let group = nodes[2];
        let c = nodes[4];

        assert_eq!(tree.next_no_children(group), Some(c));
    }

    #[test]
    fn test_next_terminates_at_last_node() {
        let (tree, nodes) = sample_tree();
        let c = nodes[4];

        assert_eq!(tree.next(c), None);
        assert_eq!(tree.next_no_children(tree.root()), None);
    }

    #[test]
    fn test_parent_links() {
        let (tree, nodes) = sample_tree();

        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.parent(nodes[3]), Some(nodes[2]));
        assert_eq!(tree.parent(nodes[1]), Some(tree.root()));
    }

    #[test]
    fn test_class_members_stay_out_of_document_order() {
        let mut tree = Tree::new("[a-z]", NodeKind::Progression, 0, 5);
        let class = tree.add_child(tree.root(), NodeKind::CharClass, 0, 5, "");
        let a = tree.add_class_member(class, NodeKind::Literal, 1, 2, "a");
        let z = tree.add_class_member(class, NodeKind::Literal, 3, 4, "z");
        tree.push_class_range(class, a, z);

        // The arena owns all four nodes, but traversal sees only the root
        // and the class node.
        assert_eq!(tree.node_count(), 4);
        let mut count = 1;
        let mut current = tree.root();
        while let Some(next) = tree.next(current) {
            count += 1;
            current = next;
        }
        assert_eq!(count, 2);

        // The range is still reachable through the class items.
        assert_eq!(tree.class_items(class).len(), 1);
        match tree.class_items(class)[0] {
            ClassItem::Range(range) => {
                assert_eq!(tree.data(range.a), "a");
                assert_eq!(tree.data(range.b), "z");
            }
            ClassItem::Single(_) => panic!("expected a range item"),
        }
    }

    #[test]
    fn test_kind_set_membership() {
        assert!(LITERAL_LIKE.contains(NodeKind::Literal));
        assert!(LITERAL_LIKE.contains(NodeKind::Suspicious));
        assert!(!LITERAL_LIKE.contains(NodeKind::CaptureGroup));

        assert!(CAPTURE_OPENERS.contains(NodeKind::CaptureGroup));
        assert!(CAPTURE_OPENERS.contains(NodeKind::NamedCaptureGroup));
        assert!(!CAPTURE_OPENERS.contains(NodeKind::NonCaptureGroup));
    }

    #[test]
    fn test_node_kind_snake_case_names() {
        let json = serde_json::to_string(&NodeKind::NamedCaptureGroup).unwrap();
        assert_eq!(json, "\"named_capture_group\"");

        let kind: NodeKind = serde_json::from_str("\"char_class\"").unwrap();
        assert_eq!(kind, NodeKind::CharClass);
    }
}
