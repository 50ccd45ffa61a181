//! Parse error types.

use lispy_ir::Span;
use lispy_lexer::{LexError, Token};

/// Why a line failed to parse. Every variant points at a span of the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer could not match this text.
    #[error("unrecognized input `{text}`")]
    InvalidToken { text: String, span: Span },

    /// A token that cannot appear here.
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    /// Input ended while the grammar still required something.
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str, span: Span },
}

impl ParseError {
    pub(crate) fn unexpected(expected: &'static str, token: &Token<'_>) -> Self {
        ParseError::UnexpectedToken {
            expected,
            found: token.text.to_string(),
            span: token.span,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::InvalidToken { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEof { span, .. } => *span,
        }
    }

    /// Short text to attach to the span in a rendered diagnostic.
    pub fn label(&self) -> String {
        match self {
            ParseError::InvalidToken { .. } => "not part of the grammar".to_string(),
            ParseError::UnexpectedToken { expected, .. }
            | ParseError::UnexpectedEof { expected, .. } => format!("expected {expected} here"),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::InvalidToken {
            text: err.text,
            span: err.span,
        }
    }
}
