//! The calc driver library.
//!
//! Wires the pipeline together: source text → lexer → parser → bytecode →
//! interpreter → result. The phases share nothing but the immutable values
//! handed from one to the next.

pub mod commands;

use std::fmt;

use calc_diagnostic::Diagnostic;
use calc_eval::EvalError;
use calc_lexer::LexError;
use calc_parse::ParseError;

/// An error from any phase of the pipeline.
///
/// All are terminal: the first error aborts the run, there is no
/// partial-result mode.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PipelineError {
    Lex(LexError),
    Parse(ParseError),
    Eval(EvalError),
}

impl PipelineError {
    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            PipelineError::Lex(e) => e.to_diagnostic(),
            PipelineError::Parse(e) => e.to_diagnostic(),
            PipelineError::Eval(e) => e.to_diagnostic(),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagnostic())
    }
}

impl std::error::Error for PipelineError {}

impl From<LexError> for PipelineError {
    fn from(e: LexError) -> Self {
        PipelineError::Lex(e)
    }
}

impl From<ParseError> for PipelineError {
    fn from(e: ParseError) -> Self {
        PipelineError::Parse(e)
    }
}

impl From<EvalError> for PipelineError {
    fn from(e: EvalError) -> Self {
        PipelineError::Eval(e)
    }
}

/// Run the whole pipeline silently and return the result value.
pub fn evaluate(source: &str) -> Result<i64, PipelineError> {
    let tokens = calc_lexer::lex(source)?;
    let program = calc_parse::parse(&tokens)?;
    let result = calc_eval::execute(&program)?;
    Ok(result)
}
