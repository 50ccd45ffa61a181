//! Tag vocabulary for syntax tree nodes.
//!
//! A tag lists the grammar rules a node was matched through, outermost
//! first, joined with `|`. A number operand is matched by `expr`, then
//! `number`, then the regex that reads the digits, so its tag is
//! `expr|number|regex`. Consumers classify nodes with substring tests on
//! the category names below rather than by comparing whole tags.

/// Top-level rule (`lispy : /^/ <operator> <expr>+ /$/`).
pub const ROOT: &str = ">";

/// A parenthesized expression in operand position.
pub const NESTED_EXPR: &str = "expr|>";

/// A numeric literal in operand position.
pub const NUMBER: &str = "expr|number|regex";

/// A single-character operator such as `+` or `^`.
pub const OPERATOR_CHAR: &str = "operator|char";

/// A word operator such as `min` or `max`.
pub const OPERATOR_WORD: &str = "operator|regex";

/// A literal `(` or `)`.
pub const DELIMITER: &str = "char";

/// The start/end-of-input anchors wrapping the root expression.
pub const ANCHOR: &str = "regex";

/// Category marking number leaves.
pub const NUMBER_CATEGORY: &str = "number";

/// Category marking operands (numbers and nested expressions).
pub const EXPR_CATEGORY: &str = "expr";
