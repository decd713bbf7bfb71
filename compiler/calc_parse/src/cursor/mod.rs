//! Token cursor for navigating the token stream.
//!
//! Provides bounds-checked token access and consumption. The position only
//! moves forward; there is no backtracking anywhere in this grammar.

use calc_ir::{Token, TokenList};
use tracing::trace;

/// Cursor over a `TokenList`.
///
/// There is no EOF sentinel token in this grammar, so end of input is
/// simply `position >= len` and `current` returns an `Option`.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Check if all tokens have been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// The current token, or `None` past the end.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Consume the current token and return it, or `None` past the end.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(
            pos = self.pos,
            kind = %token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        self.pos += 1;
        Some(token)
    }
}
