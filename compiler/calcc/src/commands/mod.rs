//! CLI command implementations.
//!
//! Each command takes the expression text and returns a process exit code:
//! 0 on success, 1 on any pipeline error.

mod debug;
mod run;

pub use debug::{lex_source, parse_source};
pub use run::run_source;
