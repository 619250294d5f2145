//! Integration tests for tree-document ingestion
//!
//! These tests feed the checkers through the same JSON path the CLI uses,
//! verifying that a parser-emitted document and a hand-built arena behave
//! identically.

use relint::checkers::run_all_checkers;
use relint::error::TreeError;
use relint::tree::json::parse_tree;
use relint::tree::NodeKind;
use relint::walk::find_all;

const OUT_OF_ORDER_DOC: &str = r#"{
  "pattern": "a|ab",
  "root": {
    "kind": "alternation", "start": 0, "end": 4,
    "children": [
      { "kind": "progression", "start": 0, "end": 1,
        "children": [ { "kind": "literal", "start": 0, "end": 1, "data": "a" } ] },
      { "kind": "progression", "start": 2, "end": 4,
        "children": [ { "kind": "literal", "start": 2, "end": 3, "data": "a" },
                      { "kind": "literal", "start": 3, "end": 4, "data": "b" } ] }
    ]
  }
}"#;

#[test]
fn test_ingested_document_traverses_in_document_order() {
    let tree = parse_tree(OUT_OF_ORDER_DOC).unwrap();

    let kinds: Vec<NodeKind> = find_all(&tree, Some(tree.root()), None)
        .map(|id| tree.kind(id))
        .collect();

    assert_eq!(
        kinds,
        vec![
            NodeKind::Alternation,
            NodeKind::Progression,
            NodeKind::Literal,
            NodeKind::Progression,
            NodeKind::Literal,
            NodeKind::Literal,
        ]
    );
}

#[test]
fn test_ingested_document_is_checkable() {
    let tree = parse_tree(OUT_OF_ORDER_DOC).unwrap();
    let diagnostics = run_all_checkers(&tree);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, 105);
}

#[test]
fn test_char_class_document_reaches_the_range_rule() {
    let tree = parse_tree(
        r#"{
          "pattern": "[a-9]",
          "root": {
            "kind": "progression", "start": 0, "end": 5,
            "children": [
              { "kind": "char_class", "start": 0, "end": 5, "chars": [
                { "a": { "kind": "literal", "start": 1, "end": 2, "data": "a" },
                  "b": { "kind": "literal", "start": 3, "end": 4, "data": "9" } }
              ]}
            ]
          }
        }"#,
    )
    .unwrap();

    let diagnostics = run_all_checkers(&tree);

    // Letter-to-digit and descending code points both fire.
    let range_findings: Vec<_> = diagnostics.iter().filter(|d| d.code == 104).collect();
    assert_eq!(range_findings.len(), 2);
}

#[test]
fn test_span_validation_rejects_overflow() {
    let result = parse_tree(
        r#"{"pattern": "ab", "root": {"kind": "progression", "start": 0, "end": 3}}"#,
    );

    assert!(matches!(result, Err(TreeError::SpanOutOfBounds { .. })));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    assert!(matches!(parse_tree("[1, 2"), Err(TreeError::Parse(_))));
}

#[test]
fn test_unknown_kind_is_a_parse_error() {
    let result = parse_tree(
        r#"{"pattern": "a", "root": {"kind": "mystery", "start": 0, "end": 1}}"#,
    );

    assert!(matches!(result, Err(TreeError::Parse(_))));
}
