//! Lexer for calc using logos.
//!
//! Classifies each non-whitespace character as a single-digit number, `+`,
//! or `*`. There is no multi-digit coalescing: every digit is its own
//! standalone token. Anything else aborts the run with
//! [`LexError::UnrecognizedCharacter`] — the pipeline is single-shot batch,
//! so the lexer fails fast instead of accumulating error tokens.

use std::fmt;

use calc_diagnostic::{Diagnostic, ErrorCode};
use calc_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Whitespace is a skippable separator
enum RawToken {
    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    // One token per digit; no coalescing.
    #[regex(r"[0-9]")]
    Digit,
}

/// Error produced by the lexer.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexError {
    /// A character that is not whitespace, a digit, `+`, or `*`.
    UnrecognizedCharacter { ch: char, span: Span },
}

impl LexError {
    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnrecognizedCharacter { .. } => ErrorCode::E0002,
        }
    }

    /// The source span of the offending character.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnrecognizedCharacter { span, .. } => *span,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::UnrecognizedCharacter { ch, span } => Diagnostic::error(self.code())
                .with_message(format!("unrecognized character '{ch}'"))
                .with_span(*span),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagnostic())
    }
}

impl std::error::Error for LexError {}

/// Lex source text into a `TokenList`.
///
/// Whitespace separates tokens but is not required between them.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) => {
                let kind = match raw {
                    RawToken::Plus => TokenKind::Plus,
                    RawToken::Star => TokenKind::Star,
                    RawToken::Digit => TokenKind::Number,
                };
                tokens.push(Token::new(slice, kind, span));
            }
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::UnrecognizedCharacter { ch, span });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_expression() {
        let tokens = lex("1 + 2 * 3 + 4").unwrap();
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(tokens[1].kind, TokenKind::Plus);
        assert_eq!(tokens[3].kind, TokenKind::Star);
        assert_eq!(tokens[6].lexeme, "4");
    }

    #[test]
    fn test_whitespace_is_optional() {
        assert_eq!(kinds("1+2"), kinds("1 + 2"));
        assert_eq!(kinds(" \t1\n+ 2 "), kinds("1+2"));
    }

    #[test]
    fn test_digits_are_not_coalesced() {
        let tokens = lex("12").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(tokens[1].lexeme, "2");
    }

    #[test]
    fn test_spans_point_at_source() {
        let tokens = lex("1 + 2").unwrap();
        assert_eq!(tokens[1].span, Span::new(2, 3));
        assert_eq!(tokens[2].span, Span::new(4, 5));
    }

    #[test]
    fn test_unrecognized_character() {
        let err = lex("1 #").unwrap_err();
        assert_eq!(
            err,
            LexError::UnrecognizedCharacter {
                ch: '#',
                span: Span::new(2, 3),
            }
        );
        assert_eq!(err.code(), ErrorCode::E0002);
        assert_eq!(
            err.to_string(),
            "error[E0002]: unrecognized character '#' (at 2..3)"
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("").unwrap().is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Any soup of digits, operators, and whitespace lexes cleanly,
            // with one token per non-whitespace character.
            #[test]
            fn well_formed_soup_always_lexes(source in "[0-9+* ]{0,64}") {
                let tokens = lex(&source);
                prop_assert!(tokens.is_ok());
                let expected = source.chars().filter(|c| !c.is_whitespace()).count();
                prop_assert_eq!(tokens.unwrap().len(), expected);
            }
        }
    }
}
