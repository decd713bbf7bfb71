//! Trace sink for observable pipeline output.
//!
//! Both the parser (each emitted instruction) and the interpreter (each
//! executed instruction plus the stack snapshot) write their trace through
//! this sink. Destinations:
//! - Stdout: the default for the CLI
//! - Buffer: capture for tests
//! - Silent: discard (library callers that only want the result)
//!
//! Uses enum dispatch instead of trait objects for static dispatch on this
//! per-instruction path.

use parking_lot::Mutex;

/// Trace destination with enum dispatch.
pub enum TraceSink {
    /// Writes each line to stdout (default).
    Stdout,
    /// Captures lines to a buffer (testing).
    Buffer(Mutex<String>),
    /// Discards all trace output.
    Silent,
}

impl TraceSink {
    /// Create a capturing sink with an empty buffer.
    pub fn buffer() -> Self {
        TraceSink::Buffer(Mutex::new(String::new()))
    }

    /// Write one trace line (newline-terminated).
    pub fn line(&self, msg: &str) {
        match self {
            TraceSink::Stdout => println!("{msg}"),
            TraceSink::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            TraceSink::Silent => {}
        }
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for non-capturing sinks.
    pub fn captured(&self) -> String {
        match self {
            TraceSink::Buffer(buffer) => buffer.lock().clone(),
            TraceSink::Stdout | TraceSink::Silent => String::new(),
        }
    }
}

impl Default for TraceSink {
    fn default() -> Self {
        TraceSink::Stdout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_buffer_captures_lines() {
        let sink = TraceSink::buffer();
        sink.line("CONST 1");
        sink.line("ADD");
        assert_eq!(sink.captured(), "CONST 1\nADD\n");
    }

    #[test]
    fn test_silent_captures_nothing() {
        let sink = TraceSink::Silent;
        sink.line("CONST 1");
        assert_eq!(sink.captured(), "");
    }
}
