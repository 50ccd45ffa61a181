//! Lispy IR - syntax tree types.
//!
//! This crate holds the data the parser hands to the evaluator:
//! - [`Span`]: byte ranges into the source text
//! - [`SyntaxNode`]: one node of the parse tree (tag, contents, children)
//! - [`tags`]: the tag vocabulary the parser emits
//!
//! The tree is plain owned data. Parents own their children, there are no
//! back-references, and nothing here depends on how the tree is consumed.

mod node;
mod span;
pub mod tags;

pub use node::SyntaxNode;
pub use span::Span;
