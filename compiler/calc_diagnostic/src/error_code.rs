use std::fmt;

/// Error codes for all pipeline diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E9xxx: Internal errors (parser/bytecode defects, never valid input)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character in source
    E0002,

    // Parser Errors (E1xxx)
    /// Token in prefix position has no prefix parselet
    E1001,
    /// Token in infix position has no infix parselet
    E1002,
    /// Number token's lexeme does not parse as an integer
    E1003,

    // Internal Errors (E9xxx)
    /// Arithmetic instruction executed with fewer than two operands
    E9001,
    /// Execution finished with a stack depth other than one
    E9002,
    /// Operator token kind has no matching instruction
    E9003,
}

impl ErrorCode {
    /// Short description of what this code means.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0002 => "unrecognized character",
            ErrorCode::E1001 => "no prefix parselet",
            ErrorCode::E1002 => "no infix parselet",
            ErrorCode::E1003 => "invalid number literal",
            ErrorCode::E9001 => "stack underflow",
            ErrorCode::E9002 => "malformed program result",
            ErrorCode::E9003 => "unmapped operator",
        }
    }

    /// Whether this code signals a defect in the pipeline itself rather
    /// than a problem with user input.
    pub fn is_internal(self) -> bool {
        matches!(self, ErrorCode::E9001 | ErrorCode::E9002 | ErrorCode::E9003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_code_display() {
        assert_eq!(ErrorCode::E0002.to_string(), "E0002");
        assert_eq!(ErrorCode::E9001.to_string(), "E9001");
    }

    #[test]
    fn test_internal_codes() {
        assert!(ErrorCode::E9002.is_internal());
        assert!(!ErrorCode::E1001.is_internal());
    }
}
