//! Precedence-climbing (Pratt) parser for calc.
//!
//! Consumes a `TokenList` and emits a postfix bytecode `Program`. Each token
//! kind owns up to two roles: a prefix parselet for expression-starting
//! position (`Number`) and an infix parselet for continuing an expression
//! (`Plus`, `Star`). Dispatch is an exhaustive `match` over `TokenKind` at
//! the two call sites, so "no parselet for this kind" is an explicitly
//! handled error rather than a missing table entry.
//!
//! The parser knows nothing about evaluation; the interpreter knows nothing
//! about tokens. The `Program` is the only thing passed between them.

mod cursor;
mod error;
mod grammar;

#[cfg(test)]
mod tests;

pub use cursor::Cursor;
pub use error::ParseError;

use calc_ir::{Instruction, Precedence, Program, TokenList, TraceSink};

static SILENT: TraceSink = TraceSink::Silent;

/// Parser state: the token cursor and the program built so far.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    program: Program,
    trace: &'a TraceSink,
}

impl<'a> Parser<'a> {
    /// Create a parser with no emit trace.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser::with_trace(tokens, &SILENT)
    }

    /// Create a parser that writes each emitted instruction's rendering to
    /// `trace`, one line per instruction, at emit time.
    pub fn with_trace(tokens: &'a TokenList, trace: &'a TraceSink) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            program: Program::new(),
            trace,
        }
    }

    /// Parse the whole token stream into a program.
    ///
    /// A single `parse_precedence` call at the lowest level consumes every
    /// token of a well-formed input; the loop inside only stops early on
    /// end of input (lowest accepts any operator).
    pub fn parse(mut self) -> Result<Program, ParseError> {
        self.parse_precedence(Precedence::LOWEST)?;
        Ok(self.program)
    }

    /// Append an instruction to the program and trace it.
    fn emit(&mut self, instruction: Instruction) {
        self.trace.line(&instruction.to_string());
        self.program.push(instruction);
    }
}

/// Parse a token list into a bytecode program.
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}
