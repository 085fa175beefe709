//! Token cursor with a monotonically advancing position
//!
//! Dereferencing past the end yields a typed error, never a panic. The
//! index only moves backwards through [`TokenCursor::rewind_to`], the
//! controlled rewind the parser uses to re-evaluate an iteration body
//! once per sample.

use crate::lang::error::{ParseError, ParseResult};
use crate::lang::token::{Token, TokenKind};

pub struct TokenCursor {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Current token without advancing.
    pub fn current(&self) -> ParseResult<&Token> {
        self.tokens
            .get(self.index)
            .ok_or(ParseError::UnexpectedEnd {
                position: self.index,
            })
    }

    /// Advance past the current token.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Consume the current token if its kind matches; on mismatch the
    /// cursor stays put so the error position is exact.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let token = self.current()?;
        if token.kind == kind {
            let token = token.clone();
            self.advance();
            return Ok(token);
        }
        Err(self.mismatch(kind.name()))
    }

    /// Consume an exact token sequence.
    pub fn expect_all(&mut self, kinds: &[TokenKind]) -> ParseResult<()> {
        for kind in kinds {
            self.expect(*kind)?;
        }
        Ok(())
    }

    /// Build the error for a kind mismatch at the current position,
    /// refining lexer sentinel kinds into their own variants.
    pub fn mismatch(&self, expected: &'static str) -> ParseError {
        match self.current() {
            Ok(token) => match token.kind {
                TokenKind::Error => ParseError::Lexical {
                    text: token.text.clone(),
                    position: self.index,
                },
                TokenKind::Unrecognized => ParseError::Unrecognized {
                    text: token.text.clone(),
                    position: self.index,
                },
                found => ParseError::UnexpectedToken {
                    expected,
                    found: found.name().to_string(),
                    position: self.index,
                },
            },
            Err(err) => err,
        }
    }

    /// Current index.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Controlled rewind used by the per-sample re-evaluation of an
    /// iteration body; the only way the index ever decreases.
    pub fn rewind_to(&mut self, position: usize) {
        self.index = position;
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
