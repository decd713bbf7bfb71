//! Token types for the calc lexer.
//!
//! The token grammar is deliberately tiny: single decimal digits, `+`, and
//! `*`. Precedence is an explicit lookup on `TokenKind` rather than an enum
//! ordinal, so new operators can be inserted without renumbering.

use super::Span;
use std::fmt;

/// A token with its source text and span.
///
/// Created once by the lexer, read-only thereafter, owned by the
/// `TokenList` handed to the parser.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    /// The exact source substring (always one character in this grammar).
    pub lexeme: String,
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
            span,
        }
    }

    /// Create a dummy token for tests.
    pub fn dummy(lexeme: impl Into<String>, kind: TokenKind) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}) @ {}", self.kind, self.lexeme, self.span)
    }
}

/// Token kinds for calc.
///
/// A closed set: a single-digit number, `+`, or `*`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `*`
    Star,
    /// A single decimal digit.
    Number,
}

impl TokenKind {
    /// Binding precedence of this kind.
    ///
    /// `Number` carries the terminal (maximal) precedence: it acts as the
    /// ceiling that `Precedence::next` saturates at, never as a binary
    /// operator rank.
    #[inline]
    pub fn precedence(self) -> Precedence {
        match self {
            TokenKind::Plus => Precedence::new(0),
            TokenKind::Star => Precedence::new(1),
            TokenKind::Number => Precedence::TERMINAL,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Number => write!(f, "number"),
        }
    }
}

/// Binding precedence level.
///
/// Totally ordered; higher binds tighter. The saturating `next` is what
/// makes same-precedence operator chains parse left-associatively: the
/// recursive call for a right operand uses the operator's successor level,
/// so it stops at any operator of equal or lower rank.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Precedence(u8);

impl Precedence {
    /// The lowest level: accepts any operator. Top-level parse entry.
    pub const LOWEST: Precedence = Precedence(0);

    /// The terminal ceiling, held by `Number`. `next` never exceeds this.
    pub const TERMINAL: Precedence = Precedence(2);

    #[inline]
    pub const fn new(level: u8) -> Self {
        Precedence(level)
    }

    /// The next-higher level, saturating at `TERMINAL`.
    #[inline]
    #[must_use]
    pub fn next(self) -> Precedence {
        Precedence((self.0 + 1).min(Self::TERMINAL.0))
    }
}

/// Sequence of tokens produced by the lexer.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Create from a Vec of tokens.
    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    /// Push a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
