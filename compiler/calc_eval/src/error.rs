//! Evaluation error types.
//!
//! Both variants signal a parser/bytecode-generation defect: no valid
//! input through this grammar can produce them. They are still real,
//! checked errors rather than panics, so a defective program aborts the
//! pipeline with a diagnostic instead of crashing it.

use std::fmt;

use calc_diagnostic::{Diagnostic, ErrorCode};
use calc_ir::Instruction;

/// Error produced by the interpreter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum EvalError {
    /// An arithmetic instruction executed with fewer than two operands.
    /// `depth` is the number of operands that were available.
    StackUnderflow {
        instruction: Instruction,
        /// Position of the instruction in the program.
        index: usize,
        depth: usize,
    },

    /// Execution finished with a stack depth other than one.
    MalformedProgramResult { depth: usize },
}

impl EvalError {
    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::StackUnderflow { .. } => ErrorCode::E9001,
            EvalError::MalformedProgramResult { .. } => ErrorCode::E9002,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = match self {
            EvalError::StackUnderflow {
                instruction,
                index,
                depth,
            } => format!(
                "internal: {instruction} at instruction {index} needs two operands, stack has {depth}"
            ),
            EvalError::MalformedProgramResult { depth } => format!(
                "internal: execution finished with stack depth {depth}, expected exactly 1"
            ),
        };
        Diagnostic::error(self.code()).with_message(message)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagnostic())
    }
}

impl std::error::Error for EvalError {}
