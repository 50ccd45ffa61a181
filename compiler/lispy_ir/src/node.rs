//! Syntax tree nodes.

use std::fmt;

use crate::{tags, Span};

/// One node of the parse tree.
///
/// Leaves (numbers, operators, delimiters, anchors) carry their matched text
/// in `contents` and have no children. Expression nodes have empty
/// `contents` and lay their children out as
/// `[open, operator, operand, operand.., close]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct SyntaxNode {
    pub tag: String,
    pub contents: String,
    pub children: Vec<SyntaxNode>,
    pub span: Span,
}

impl SyntaxNode {
    /// Create a leaf node.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>, span: Span) -> Self {
        SyntaxNode {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
            span,
        }
    }

    /// Create a structural node. Its span covers all of its children.
    pub fn branch(tag: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        let span = children
            .iter()
            .map(|child| child.span)
            .reduce(Span::merge)
            .unwrap_or_default();
        SyntaxNode {
            tag: tag.into(),
            contents: String::new(),
            children,
            span,
        }
    }

    /// Number leaf with no source location.
    pub fn number(text: impl Into<String>) -> Self {
        Self::leaf(tags::NUMBER, text, Span::DUMMY)
    }

    /// Operator leaf with no source location.
    ///
    /// Words (`min`, `max`, `mod`, ...) get the regex tag, everything else
    /// the single-character tag, matching what the parser produces.
    pub fn operator(symbol: &str) -> Self {
        let tag = if symbol.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
            tags::OPERATOR_WORD
        } else {
            tags::OPERATOR_CHAR
        };
        Self::leaf(tag, symbol, Span::DUMMY)
    }

    /// Parenthesized expression `(op operand..)`.
    pub fn expr(op: &str, operands: Vec<SyntaxNode>) -> Self {
        Self::wrap(
            tags::NESTED_EXPR,
            Self::leaf(tags::DELIMITER, "(", Span::DUMMY),
            op,
            operands,
            Self::leaf(tags::DELIMITER, ")", Span::DUMMY),
        )
    }

    /// Top-level expression `op operand..` wrapped in input anchors.
    pub fn root(op: &str, operands: Vec<SyntaxNode>) -> Self {
        Self::wrap(
            tags::ROOT,
            Self::leaf(tags::ANCHOR, "", Span::DUMMY),
            op,
            operands,
            Self::leaf(tags::ANCHOR, "", Span::DUMMY),
        )
    }

    fn wrap(
        tag: &str,
        open: SyntaxNode,
        op: &str,
        operands: Vec<SyntaxNode>,
        close: SyntaxNode,
    ) -> Self {
        let mut children = Vec::with_capacity(operands.len() + 3);
        children.push(open);
        children.push(Self::operator(op));
        children.extend(operands);
        children.push(close);
        Self::branch(tag, children)
    }

    /// Whether this node was produced by the number rule.
    #[inline]
    pub fn is_number(&self) -> bool {
        self.tag.contains(tags::NUMBER_CATEGORY)
    }

    /// Whether this node is an operand (a number or a nested expression).
    #[inline]
    pub fn is_expr(&self) -> bool {
        self.tag.contains(tags::EXPR_CATEGORY)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.children.get(index)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|(node, _)| node.is_leaf()).count()
    }

    /// Number of levels in this subtree. A lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        self.iter().map(|(_, level)| level + 1).max().unwrap_or(1)
    }

    /// Pre-order walk yielding each node with its distance from `self`.
    ///
    /// Uses an explicit stack, so arbitrarily deep trees are safe to walk.
    pub fn iter(&self) -> impl Iterator<Item = (&SyntaxNode, usize)> {
        let mut stack = vec![(self, 0)];
        std::iter::from_fn(move || {
            let (node, level) = stack.pop()?;
            stack.extend(node.children.iter().rev().map(|child| (child, level + 1)));
            Some((node, level))
        })
    }
}

/// Tears the tree down with an explicit stack instead of one native frame per
/// level, so dropping a deeply nested tree cannot overflow.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        if self.children.iter().all(SyntaxNode::is_leaf) {
            return;
        }
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Indented dump, one node per line: `tag 'contents'`.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, level) in self.iter() {
            write!(f, "{:indent$}{}", "", node.tag, indent = level * 2)?;
            if !node.contents.is_empty() {
                write!(f, " '{}'", node.contents)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
