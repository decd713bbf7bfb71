//! Calc IR - shared types for the calc pipeline
//!
//! This crate contains the data structures handed between pipeline phases:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - Bytecode instructions and `Program` for parser output
//! - The `TraceSink` used for observable instruction/stack traces

mod bytecode;
mod span;
mod token;
mod trace;

pub use bytecode::{Instruction, Program};
pub use span::Span;
pub use token::{Precedence, Token, TokenKind, TokenList};
pub use trace::TraceSink;
