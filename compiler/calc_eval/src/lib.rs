//! Stack interpreter for calc bytecode.
//!
//! Executes a `Program` strictly in order, once, against an operand stack.
//! The instruction set is straight-line: no branches, no jumps, so there is
//! no program counter beyond the iteration itself. After each instruction
//! the full stack contents are written to the trace sink, each element
//! bracketed (`[ 3 ]`), which is the observable execution trace.
//!
//! The interpreter never sees tokens or the parser; a well-formed program
//! leaves exactly one value, the result. Any other final depth is a
//! bytecode-generation defect, not a valid-input condition.

mod error;

pub use error::EvalError;

use calc_ir::{Instruction, Program, TraceSink};

static SILENT: TraceSink = TraceSink::Silent;

/// The virtual machine: an operand stack plus a trace sink.
pub struct Vm<'a> {
    stack: Vec<i64>,
    trace: &'a TraceSink,
}

impl Default for Vm<'static> {
    fn default() -> Self {
        Vm::new()
    }
}

impl<'a> Vm<'a> {
    /// Create a VM with no execution trace.
    pub fn new() -> Vm<'static> {
        Vm {
            stack: Vec::new(),
            trace: &SILENT,
        }
    }

    /// Create a VM that writes one trace line per executed instruction:
    /// the instruction's rendering, a tab, then the stack snapshot.
    pub fn with_trace(trace: &'a TraceSink) -> Vm<'a> {
        Vm {
            stack: Vec::new(),
            trace,
        }
    }

    /// Execute a program to its final value.
    pub fn execute(mut self, program: &Program) -> Result<i64, EvalError> {
        for (index, instruction) in program.iter().enumerate() {
            match *instruction {
                Instruction::Constant(value) => self.stack.push(value),
                Instruction::Add => {
                    let (a, b) = self.pop_operands(*instruction, index)?;
                    self.stack.push(a + b);
                }
                Instruction::Multiply => {
                    let (a, b) = self.pop_operands(*instruction, index)?;
                    self.stack.push(a * b);
                }
            }
            self.trace
                .line(&format!("{instruction}\t{}", render_stack(&self.stack)));
        }

        // Exactly one value left is the program result.
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(result), true) => Ok(result),
            (popped, _) => Err(EvalError::MalformedProgramResult {
                depth: self.stack.len() + usize::from(popped.is_some()),
            }),
        }
    }

    /// Pop the two operands of an arithmetic instruction: top is `b`, next
    /// is `a` (so non-commutative extensions would compute `a op b`).
    fn pop_operands(
        &mut self,
        instruction: Instruction,
        index: usize,
    ) -> Result<(i64, i64), EvalError> {
        let underflow = |depth: usize| EvalError::StackUnderflow {
            instruction,
            index,
            depth,
        };
        let b = self.stack.pop().ok_or_else(|| underflow(0))?;
        let a = self.stack.pop().ok_or_else(|| underflow(1))?;
        Ok((a, b))
    }
}

/// Render the stack bottom-to-top, each element bracketed: `[ 1 ][ 6 ]`.
fn render_stack(stack: &[i64]) -> String {
    let mut out = String::new();
    for value in stack {
        out.push_str(&format!("[ {value} ]"));
    }
    out
}

/// Execute a program with no trace, returning its final value.
pub fn execute(program: &Program) -> Result<i64, EvalError> {
    Vm::new().execute(program)
}
