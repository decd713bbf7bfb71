//! Debug commands: `lex` and `parse` for inspecting pipeline internals.

use calc_ir::TraceSink;
use calc_parse::Parser;

/// Lex an expression and display the token stream.
pub fn lex_source(source: &str) -> i32 {
    match calc_lexer::lex(source) {
        Ok(tokens) => {
            println!("{} tokens:", tokens.len());
            for token in &tokens {
                println!("  {:?} @ {}", token.kind, token.span);
            }
            0
        }
        Err(err) => {
            eprintln!("{}", err.to_diagnostic());
            1
        }
    }
}

/// Parse an expression and display the emitted bytecode.
pub fn parse_source(source: &str) -> i32 {
    let tokens = match calc_lexer::lex(source) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprintln!("{}", err.to_diagnostic());
            return 1;
        }
    };

    // Emit directly to stdout as the parser goes, so a parse error still
    // shows everything emitted before it.
    let trace = TraceSink::Stdout;
    match Parser::with_trace(&tokens, &trace).parse() {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("{}", err.to_diagnostic());
            1
        }
    }
}
