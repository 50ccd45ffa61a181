//! Lexer for Lispy using logos.
//!
//! Produces a flat token list with spans. Whitespace is skipped; anything
//! the token set cannot match is reported as a [`LexError`] pointing at the
//! offending text.

use std::fmt;

use lispy_ir::Span;
use logos::Logos;

/// Token kinds.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // === Literals ===
    /// Optionally negative decimal, with an optional fractional part.
    /// `-5` is a number; `- 5` is an operator followed by a number.
    #[regex(r"-?[0-9]+(\.[0-9]*)?")]
    Number,

    // === Operators ===
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,

    /// Named operator (`min`, `max`, `mod`, or anything else word-shaped).
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
}

impl TokenKind {
    /// Whether this token may stand in operator position.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Caret
                | TokenKind::Word
        )
    }

    /// Whether this token can begin an operand.
    pub fn starts_operand(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::LParen)
    }

    /// Human-readable description for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Number => "number",
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Caret => "operator symbol",
            TokenKind::Word => "operator name",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

/// Input the lexer could not match against any token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized input `{text}`")]
pub struct LexError {
    pub text: String,
    pub span: Span,
}

/// Lex all tokens from `source`, stopping at the first unrecognized input.
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let text = lexer.slice();
        match result {
            Ok(kind) => tokens.push(Token { kind, text, span }),
            Err(()) => {
                return Err(LexError {
                    text: text.to_string(),
                    span,
                })
            }
        }
    }

    Ok(tokens)
}
