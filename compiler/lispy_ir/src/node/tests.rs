use super::*;
use pretty_assertions::assert_eq;

fn sample() -> SyntaxNode {
    // + 1 (* 2 3)
    SyntaxNode::root(
        "+",
        vec![
            SyntaxNode::number("1"),
            SyntaxNode::expr("*", vec![SyntaxNode::number("2"), SyntaxNode::number("3")]),
        ],
    )
}

#[test]
fn test_root_layout() {
    let root = sample();
    assert_eq!(root.tag, tags::ROOT);
    assert!(root.contents.is_empty());

    let child_tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(
        child_tags,
        vec![
            tags::ANCHOR,
            tags::OPERATOR_CHAR,
            tags::NUMBER,
            tags::NESTED_EXPR,
            tags::ANCHOR,
        ]
    );
    assert_eq!(root.child(1).map(|c| c.contents.as_str()), Some("+"));
}

#[test]
fn test_nested_layout() {
    let nested = SyntaxNode::expr("max", vec![SyntaxNode::number("4")]);
    let contents: Vec<&str> = nested.children.iter().map(|c| c.contents.as_str()).collect();
    assert_eq!(contents, vec!["(", "max", "4", ")"]);
    assert_eq!(nested.children[1].tag, tags::OPERATOR_WORD);
}

#[test]
fn test_categories() {
    let number = SyntaxNode::number("5");
    assert!(number.is_number());
    assert!(number.is_expr());
    assert!(number.is_leaf());

    let nested = SyntaxNode::expr("-", vec![number]);
    assert!(nested.is_expr());
    assert!(!nested.is_number());

    let close = SyntaxNode::leaf(tags::DELIMITER, ")", Span::DUMMY);
    assert!(!close.is_expr());

    let root = SyntaxNode::root("-", vec![SyntaxNode::number("1")]);
    assert!(!root.is_expr());
    assert!(!root.children[1].is_expr());
}

#[test]
fn test_counts() {
    let root = sample();
    // root, anchor, '+', 1, nested, '(', '*', 2, 3, ')', anchor
    assert_eq!(root.node_count(), 11);
    assert_eq!(root.leaf_count(), 9);
    assert_eq!(root.depth(), 3);
    assert_eq!(SyntaxNode::number("7").depth(), 1);
}

#[test]
fn test_branch_span_covers_children() {
    let open = SyntaxNode::leaf(tags::DELIMITER, "(", Span::new(4, 5));
    let close = SyntaxNode::leaf(tags::DELIMITER, ")", Span::new(11, 12));
    let node = SyntaxNode::branch(tags::NESTED_EXPR, vec![open, close]);
    assert_eq!(node.span, Span::new(4, 12));
    assert_eq!(SyntaxNode::branch(tags::ROOT, Vec::new()).span, Span::DUMMY);
}

#[test]
fn test_display_dump() {
    let root = SyntaxNode::root("-", vec![SyntaxNode::expr("+", vec![SyntaxNode::number("1")])]);
    let expected = "\
>
  regex
  operator|char '-'
  expr|>
    char '('
    operator|char '+'
    expr|number|regex '1'
    char ')'
  regex
";
    assert_eq!(root.to_string(), expected);
}

#[test]
fn test_deep_tree_walk() {
    let mut node = SyntaxNode::number("1");
    for _ in 0..50_000 {
        node = SyntaxNode::expr("+", vec![node]);
    }
    assert_eq!(node.depth(), 50_001);
    assert_eq!(node.leaf_count(), 1 + 50_000 * 3);
}

#[test]
fn test_deep_tree_drop() {
    let mut node = SyntaxNode::number("1");
    for _ in 0..200_000 {
        node = SyntaxNode::expr("-", vec![SyntaxNode::number("2"), node]);
    }
    drop(node);
}
