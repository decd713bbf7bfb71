//! Parse error types.
//!
//! Every variant carries the offending token so diagnostics can point at
//! the exact source character. All parse errors are terminal: the first one
//! aborts the pipeline with nothing further emitted.

use std::fmt;

use calc_diagnostic::{Diagnostic, ErrorCode};
use calc_ir::{Span, Token};

/// Error produced by the parser.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseError {
    /// A token appeared in expression-starting position but its kind has no
    /// prefix parselet (a bare operator at the start of input, or right
    /// after another operator).
    NoPrefixParselet { token: Token },

    /// A token appeared in infix position but its kind has no infix
    /// parselet (e.g. two numbers in a row).
    NoInfixParselet { token: Token },

    /// A `Number` token's lexeme did not parse as an integer. Defensive:
    /// the lexer only produces single-digit lexemes.
    InvalidNumberLiteral { token: Token },

    /// An operator kind with no matching instruction reached `binary()`.
    /// Internal invariant violation, never a user-facing condition.
    UnmappedOperator { token: Token },
}

impl ParseError {
    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::NoPrefixParselet { .. } => ErrorCode::E1001,
            ParseError::NoInfixParselet { .. } => ErrorCode::E1002,
            ParseError::InvalidNumberLiteral { .. } => ErrorCode::E1003,
            ParseError::UnmappedOperator { .. } => ErrorCode::E9003,
        }
    }

    /// The source span of the offending token.
    pub fn span(&self) -> Span {
        match self {
            ParseError::NoPrefixParselet { token }
            | ParseError::NoInfixParselet { token }
            | ParseError::InvalidNumberLiteral { token }
            | ParseError::UnmappedOperator { token } => token.span,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = match self {
            ParseError::NoPrefixParselet { token } => format!(
                "'{}' cannot start an expression (no prefix parselet for {})",
                token.lexeme, token.kind
            ),
            ParseError::NoInfixParselet { token } => format!(
                "'{}' cannot continue an expression (no infix parselet for {})",
                token.lexeme, token.kind
            ),
            ParseError::InvalidNumberLiteral { token } => {
                format!("'{}' is not a valid number literal", token.lexeme)
            }
            ParseError::UnmappedOperator { token } => format!(
                "internal: operator '{}' has no matching instruction",
                token.lexeme
            ),
        };
        Diagnostic::error(self.code())
            .with_message(message)
            .with_span(self.span())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagnostic())
    }
}

impl std::error::Error for ParseError {}
