//! The `run` command: lex, parse, and execute an expression.

use calc_eval::Vm;
use calc_ir::TraceSink;
use calc_parse::Parser;

/// Run an expression through the whole pipeline, printing the bytecode as
/// it is emitted, the per-instruction stack trace as it executes, and the
/// final result.
pub fn run_source(source: &str) -> i32 {
    let tokens = match calc_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", err.to_diagnostic());
            return 1;
        }
    };

    let trace = TraceSink::Stdout;

    println!("=== BYTECODE ===");
    let program = match Parser::with_trace(&tokens, &trace).parse() {
        Ok(program) => program,
        Err(err) => {
            eprintln!("{}", err.to_diagnostic());
            return 1;
        }
    };

    println!("=== INTERPRET ===");
    match Vm::with_trace(&trace).execute(&program) {
        Ok(result) => {
            println!("{result}");
            0
        }
        Err(err) => {
            eprintln!("{}", err.to_diagnostic());
            1
        }
    }
}
