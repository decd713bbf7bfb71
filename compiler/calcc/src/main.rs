//! Calc CLI
//!
//! A single-shot batch pipeline: the first error in any phase terminates
//! the run with a diagnostic on stderr.

use calcc::commands::{lex_source, parse_source, run_source};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        print_usage();
        std::process::exit(2);
    }

    let exit_code = match args[1].as_str() {
        "lex" => lex_source(&args[2]),
        "parse" => parse_source(&args[2]),
        "run" => run_source(&args[2]),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            2
        }
    };

    std::process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: calc <command> \"<expression>\"");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex    <expr>   Display the token stream");
    eprintln!("  parse  <expr>   Display the emitted bytecode");
    eprintln!("  run    <expr>   Execute and print the trace and result");
    eprintln!();
    eprintln!("Expressions are single digits joined by + and *, e.g. \"1 + 2 * 3\"");
}

/// Internal debug traces, controlled by RUST_LOG (e.g. RUST_LOG=trace).
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
