use core::fmt::Display;

use thiserror::Error;

use crate::scanner::{Lexeme, Token};

/// The first grammar rule violated while parsing a module.
///
/// `production` names the grammar rule that failed, `found` the
/// offending token as it appeared in the source.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?} in {production}: found {found}, expected {expected}")]
pub struct ParserError {
    pub production: &'static str,
    pub expected: String,
    pub found: String,
    pub token: Token,
    pub kind: ParserErrorType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorType {
    SyntaxError,
    NotImplemented,
}

impl ParserError {
    pub fn new(
        production: &'static str,
        expected: impl Display,
        found: Lexeme,
        kind: ParserErrorType,
    ) -> Self {
        let (token, literal) = found;
        ParserError {
            production,
            expected: expected.to_string(),
            found: if literal.is_empty() {
                token.to_string()
            } else {
                format!("{literal:?}")
            },
            token,
            kind,
        }
    }

    pub fn syntax(production: &'static str, expected: impl Display, found: Lexeme) -> Self {
        Self::new(production, expected, found, ParserErrorType::SyntaxError)
    }

    pub fn not_implemented(
        production: &'static str,
        expected: impl Display,
        found: Lexeme,
    ) -> Self {
        Self::new(production, expected, found, ParserErrorType::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_found_literal_or_token() {
        let err = ParserError::syntax("module", Token::End, (Token::Eof, ""));
        assert_eq!(err.to_string(), "SyntaxError in module: found EOF, expected END");
        let err = ParserError::syntax("type", "type", (Token::Ident, "foo"));
        assert_eq!(err.found, "\"foo\"");
        assert_eq!(err.token, Token::Ident);
    }
}
