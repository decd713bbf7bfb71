//! Bytecode instructions and programs.
//!
//! A `Program` is a straight-line postfix instruction sequence: no jumps, no
//! control flow, evaluation order is purely positional via the operand
//! stack. The parser builds it incrementally; the interpreter only reads it.

use std::fmt;

/// A single bytecode instruction.
///
/// The set is closed; both execution and rendering match exhaustively over
/// it, so an unhandled variant is a compile error rather than a runtime
/// check.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Instruction {
    /// Push a literal value.
    Constant(i64),
    /// Pop two values, push their sum.
    Add,
    /// Pop two values, push their product.
    Multiply,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Constant(value) => write!(f, "CONST {value}"),
            Instruction::Add => write!(f, "ADD"),
            Instruction::Multiply => write!(f, "MUL"),
        }
    }
}

/// A complete bytecode program in postfix form.
///
/// Append-only while the parser builds it; immutable once handed to the
/// interpreter.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create an empty program.
    #[inline]
    pub fn new() -> Self {
        Program {
            instructions: Vec::new(),
        }
    }

    /// Create from a Vec of instructions (tests, hand-built programs).
    #[inline]
    pub fn from_vec(instructions: Vec<Instruction>) -> Self {
        Program { instructions }
    }

    /// Append an instruction.
    #[inline]
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Number of instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the program is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over the instructions in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// The instructions as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }
}

impl fmt::Display for Program {
    /// One instruction rendering per line, in execution order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{instruction}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_instruction_rendering() {
        assert_eq!(Instruction::Constant(7).to_string(), "CONST 7");
        assert_eq!(Instruction::Add.to_string(), "ADD");
        assert_eq!(Instruction::Multiply.to_string(), "MUL");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let instruction = Instruction::Constant(3);
        assert_eq!(instruction.to_string(), instruction.to_string());
    }

    #[test]
    fn test_program_display_one_per_line() {
        let program = Program::from_vec(vec![
            Instruction::Constant(1),
            Instruction::Constant(2),
            Instruction::Add,
        ]);
        assert_eq!(program.to_string(), "CONST 1\nCONST 2\nADD\n");
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(program.to_string(), "");
    }
}
