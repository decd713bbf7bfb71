//! The precedence-climbing engine.
//!
//! `parse_precedence(min)` parses one expression whose operators all bind
//! at least as tightly as `min`:
//!
//! 1. Prefix dispatch on the current token (only `Number` has a prefix
//!    parselet; it consumes one token and emits one `Constant`).
//! 2. Infix loop: while the next token binds at `min` or tighter, dispatch
//!    its infix parselet (`binary`), which consumes the operator, recurses
//!    for the right operand, and emits the operator's instruction.
//!
//! `binary` recurses with the operator's *saturating successor* precedence,
//! not its own: the recursive call then refuses any operator of equal or
//! lower rank, so `1 + 2 + 3` closes out `1 + 2` before the second `+` is
//! touched (left-associativity), while `*` after `+` still binds inside the
//! recursive call.

use calc_ir::{Instruction, Precedence, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one expression at or above `min` precedence.
    ///
    /// Empty input at this recursion level is not an error: there is simply
    /// nothing more to parse here.
    pub(crate) fn parse_precedence(&mut self, min: Precedence) -> Result<(), ParseError> {
        let Some(token) = self.cursor.current() else {
            return Ok(());
        };

        // Prefix dispatch. Number is the only kind with a prefix parselet;
        // an operator in this position is a user error.
        match token.kind {
            TokenKind::Number => self.number()?,
            TokenKind::Plus | TokenKind::Star => {
                return Err(ParseError::NoPrefixParselet {
                    token: token.clone(),
                });
            }
        }

        // Infix loop, bounded below by `min`.
        while let Some(token) = self.cursor.current() {
            if min > token.kind.precedence() {
                break;
            }
            match token.kind {
                TokenKind::Plus | TokenKind::Star => self.binary()?,
                TokenKind::Number => {
                    return Err(ParseError::NoInfixParselet {
                        token: token.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Prefix parselet for `Number`: consume one token, emit its constant.
    ///
    /// An out-of-bounds cursor is a silent no-op; `parse_precedence` already
    /// treats end of input as "nothing more to parse here".
    fn number(&mut self) -> Result<(), ParseError> {
        let Some(token) = self.cursor.advance() else {
            return Ok(());
        };
        let value: i64 = token
            .lexeme
            .parse()
            .map_err(|_| ParseError::InvalidNumberLiteral {
                token: token.clone(),
            })?;
        self.emit(Instruction::Constant(value));
        Ok(())
    }

    /// Infix parselet for binary operators: consume the operator, parse the
    /// right operand at the operator's successor precedence, then emit the
    /// operator's instruction.
    fn binary(&mut self) -> Result<(), ParseError> {
        let Some(operator) = self.cursor.advance() else {
            return Ok(());
        };

        self.parse_precedence(operator.kind.precedence().next())?;

        let instruction = match operator.kind {
            TokenKind::Plus => Instruction::Add,
            TokenKind::Star => Instruction::Multiply,
            // The infix dispatch only routes operators here; a Number kind
            // reaching this match is a defect in the dispatch itself.
            TokenKind::Number => {
                return Err(ParseError::UnmappedOperator {
                    token: operator.clone(),
                });
            }
        };
        self.emit(instruction);
        Ok(())
    }
}
