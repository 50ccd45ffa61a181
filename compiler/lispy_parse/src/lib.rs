//! Lispy parser.
//!
//! Recursive descent over the token list from `lispy_lexer`, following the
//! grammar
//!
//! ```text
//! number   : /-?[0-9]+(\.[0-9]*)?/ ;
//! operator : '+' | '-' | '*' | '/' | '%' | '^' | /[A-Za-z_][A-Za-z0-9_]*/ ;
//! expr     : <number> | '(' <operator> <expr>+ ')' ;
//! lispy    : /^/ <operator> <expr>+ /$/ ;
//! ```
//!
//! The output is a [`SyntaxNode`] tree whose tags name the rules each node
//! was matched through (see [`lispy_ir::tags`]). Every expression node,
//! including the root, lays its children out as
//! `[open, operator, operand.., close]`; the root uses empty start/end
//! anchors where nested expressions use `(` and `)`.
//!
//! The grammar accepts any word as an operator. Whether the word means
//! anything is for the evaluator to decide.
//!
//! The lexer reads `-5` as one number token. Where an operator is expected
//! the operator rule wins, so the token is split into `-` and `5`: `-5 3`
//! parses like `- 5 3`, and `(-2)` is a negation.

mod error;

use lispy_ir::{tags, Span, SyntaxNode};
use lispy_lexer::{lex, Token, TokenKind};
use lispy_stack::ensure_sufficient_stack;

pub use error::ParseError;

/// Parse one line of input into a syntax tree.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    let result = lex(source)
        .map_err(ParseError::from)
        .and_then(|tokens| Parser::new(&tokens, source.len()).parse_root());

    if let Err(err) = &result {
        tracing::debug!(span = %err.span(), "parse failed: {err}");
    }
    result
}

struct Parser<'t, 'src> {
    tokens: &'t [Token<'src>],
    pos: usize,
    /// Rest of a token that was split, read before `tokens[pos]`.
    pending: Option<Token<'src>>,
    end: Span,
}

impl<'t, 'src> Parser<'t, 'src> {
    fn new(tokens: &'t [Token<'src>], source_len: usize) -> Self {
        let end = Span::from_range(source_len..source_len);
        Parser {
            tokens,
            pos: 0,
            pending: None,
            end,
        }
    }

    fn peek(&self) -> Option<Token<'src>> {
        self.pending.or_else(|| self.tokens.get(self.pos).copied())
    }

    fn bump(&mut self) {
        if self.pending.take().is_none() {
            self.pos += 1;
        }
    }

    fn eof(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedEof {
            expected,
            span: self.end,
        }
    }

    /// `lispy : /^/ <operator> <expr>+ /$/`
    fn parse_root(&mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = vec![SyntaxNode::leaf(tags::ANCHOR, "", Span::point(0))];
        children.push(self.parse_operator()?);
        self.parse_operands(&mut children)?;

        if let Some(token) = self.peek() {
            return Err(ParseError::unexpected("operand or end of input", &token));
        }
        children.push(SyntaxNode::leaf(tags::ANCHOR, "", self.end));

        Ok(SyntaxNode::branch(tags::ROOT, children))
    }

    fn parse_operator(&mut self) -> Result<SyntaxNode, ParseError> {
        match self.peek() {
            Some(token) if token.kind.is_operator() => {
                self.bump();
                let tag = if token.kind == TokenKind::Word {
                    tags::OPERATOR_WORD
                } else {
                    tags::OPERATOR_CHAR
                };
                Ok(SyntaxNode::leaf(tag, token.text, token.span))
            }
            // `-5 3` is `-` applied to 5 and 3: the operator rule gets first
            // claim on the sign, and the digits go back as an operand.
            Some(token) if token.kind == TokenKind::Number && token.text.starts_with('-') => {
                self.bump();
                let (sign, digits) = token.text.split_at(1);
                let split = token.span.start.saturating_add(1);
                self.pending = Some(Token {
                    kind: TokenKind::Number,
                    text: digits,
                    span: Span::new(split, token.span.end),
                });
                Ok(SyntaxNode::leaf(
                    tags::OPERATOR_CHAR,
                    sign,
                    Span::new(token.span.start, split),
                ))
            }
            Some(token) => Err(ParseError::unexpected("operator", &token)),
            None => Err(self.eof("operator")),
        }
    }

    /// `<expr>+`, appended to `children`.
    fn parse_operands(&mut self, children: &mut Vec<SyntaxNode>) -> Result<(), ParseError> {
        children.push(self.parse_operand()?);
        while self.peek().is_some_and(|token| token.kind.starts_operand()) {
            children.push(self.parse_operand()?);
        }
        Ok(())
    }

    /// `expr : <number> | '(' <operator> <expr>+ ')'`
    fn parse_operand(&mut self) -> Result<SyntaxNode, ParseError> {
        let Some(token) = self.peek() else {
            return Err(self.eof("operand"));
        };
        match token.kind {
            TokenKind::Number => {
                self.bump();
                Ok(SyntaxNode::leaf(tags::NUMBER, token.text, token.span))
            }
            TokenKind::LParen => ensure_sufficient_stack(|| self.parse_nested(token)),
            _ => Err(ParseError::unexpected("operand", &token)),
        }
    }

    fn parse_nested(&mut self, open: Token<'src>) -> Result<SyntaxNode, ParseError> {
        self.bump();
        let mut children = vec![SyntaxNode::leaf(tags::DELIMITER, open.text, open.span)];
        children.push(self.parse_operator()?);
        self.parse_operands(&mut children)?;

        match self.peek() {
            Some(close) if close.kind == TokenKind::RParen => {
                self.bump();
                children.push(SyntaxNode::leaf(tags::DELIMITER, close.text, close.span));
                Ok(SyntaxNode::branch(tags::NESTED_EXPR, children))
            }
            Some(token) => Err(ParseError::unexpected("operand or `)`", &token)),
            None => Err(self.eof("`)`")),
        }
    }
}
