//! Lispy Eval - evaluator for prefix arithmetic expressions.
//!
//! Walks a [`SyntaxNode`](lispy_ir::SyntaxNode) tree produced by the parser
//! and folds it down to a single [`Value`].
//!
//! # Architecture
//!
//! - [`Value`]: a number, or the [`ErrorKind`] explaining why there is none
//! - [`Operator`]: closed operator table with direct enum dispatch
//! - [`apply_operator`]: combines two values under an operator symbol
//! - [`evaluate`]: recursive tree walk, left fold over operands
//!
//! Errors are values. Nothing in this crate panics or returns `Result` for
//! an evaluation failure; the first error produced travels unchanged to the
//! top of the tree.

mod evaluator;
mod format;
mod operators;
mod value;

pub use evaluator::evaluate;
pub use format::{render, DEFAULT_PRECISION};
pub use operators::{apply_operator, Operator};
pub use value::{ErrorKind, Value};

#[cfg(test)]
mod tests;
