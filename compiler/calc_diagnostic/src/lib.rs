//! Diagnostic system for error reporting.
//!
//! Every error in the pipeline carries:
//! - An error code for searchability
//! - A clear message (what went wrong)
//! - A span where available (where it went wrong)
//!
//! All errors here are terminal: the pipeline is a single-shot batch run
//! with no recovery path, so the first diagnostic aborts the run.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
