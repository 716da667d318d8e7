//! Subtype constraints are validated for their form only.
//! Bounds are kept as written and never stored in the model.
use tracing::trace;

use super::{error::ParserError, Parser, Token};

impl<'a> Parser<'a> {
    /// Parses a range `lower .. upper` and returns both bounds as written
    pub(crate) fn scan_range(&mut self) -> Result<(&'a str, &'a str), ParserError> {
        let lower = self.expect(Token::Ident, "range")?;
        self.expect(Token::DoubleDot, "range")?;
        let upper = self.expect(Token::Ident, "range")?;
        Ok((lower, upper))
    }

    /// Parses the parenthesized part of a `SIZE (lower .. upper)`
    /// constraint. `SIZE` must already be consumed.
    pub(crate) fn scan_size_constraint(
        &mut self,
        production: &'static str,
    ) -> Result<(), ParserError> {
        self.expect(Token::LeftParenthesis, production)?;
        let (lower, upper) = self.scan_range()?;
        self.expect(Token::RightParenthesis, production)?;
        trace!(lower, upper, "discarded size constraint");
        Ok(())
    }

    /// Parses the parenthesized part of an extensible
    /// `SIZE (lower .. upper, ...)` constraint
    pub(crate) fn scan_extensible_size_constraint(
        &mut self,
        production: &'static str,
    ) -> Result<(), ParserError> {
        self.expect(Token::LeftParenthesis, production)?;
        let (lower, upper) = self.scan_range()?;
        self.expect(Token::Comma, production)?;
        self.expect(Token::TripleDot, production)?;
        self.expect(Token::RightParenthesis, production)?;
        trace!(lower, upper, "discarded extensible size constraint");
        Ok(())
    }

    /// Parses an optional list of value ranges and extension markers,
    /// e.g. `(0..1, ...)`
    pub(crate) fn scan_value_constraints(&mut self) -> Result<(), ParserError> {
        if self.accept(Token::LeftParenthesis).is_none() {
            return Ok(());
        }
        loop {
            match self.read_significant() {
                (Token::TripleDot, _) => (),
                (Token::Ident, _) => {
                    self.pushback();
                    let (lower, upper) = self.scan_range()?;
                    trace!(lower, upper, "discarded value constraint");
                }
                found => return Err(ParserError::syntax("value constraint", "value", found)),
            }
            if self.accept(Token::Comma).is_none() {
                break;
            }
        }
        self.expect(Token::RightParenthesis, "value constraint")?;
        Ok(())
    }

    /// Parses an optional `(CONSTRAINED BY {})` following a group item
    pub(crate) fn scan_constrained_by(&mut self) -> Result<(), ParserError> {
        if self.accept(Token::LeftParenthesis).is_none() {
            return Ok(());
        }
        for token in [
            Token::Constrained,
            Token::By,
            Token::LeftBrace,
            Token::RightBrace,
            Token::RightParenthesis,
        ] {
            self.expect(token, "user-defined constraint")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Parser, Token};

    #[test]
    fn parses_range() {
        assert_eq!(Parser::new("0 .. 8").scan_range().unwrap(), ("0", "8"));
        assert_eq!(
            Parser::new("1..maxSize").scan_range().unwrap(),
            ("1", "maxSize")
        );
    }

    #[test]
    fn rejects_single_value_range() {
        let err = Parser::new("5)").scan_range().unwrap_err();
        assert_eq!(err.production, "range");
        assert_eq!(err.expected, "..");
    }

    #[test]
    fn parses_size_constraints() {
        assert!(Parser::new("(1..8)").scan_size_constraint("size").is_ok());
        let err = Parser::new("(1..8, ...)")
            .scan_size_constraint("size")
            .unwrap_err();
        assert_eq!(err.expected, ")");
        assert_eq!(err.token, Token::Comma);
    }

    #[test]
    fn requires_extension_marker_in_extensible_size() {
        assert!(Parser::new("(1..8, ...)")
            .scan_extensible_size_constraint("size")
            .is_ok());
        let err = Parser::new("(1..8)")
            .scan_extensible_size_constraint("size")
            .unwrap_err();
        assert_eq!(err.expected, ",");
        assert_eq!(err.token, Token::RightParenthesis);
        let err = Parser::new("(1..8, 9)")
            .scan_extensible_size_constraint("size")
            .unwrap_err();
        assert_eq!(err.expected, "...");
    }

    #[test]
    fn parses_value_constraints() {
        let mut parser = Parser::new("(0..1, ...) next");
        parser.scan_value_constraints().unwrap();
        assert_eq!(parser.read_significant(), (Token::Ident, "next"));
        assert!(Parser::new("(...)").scan_value_constraints().is_ok());
        assert!(Parser::new("(0..7, 10..15)").scan_value_constraints().is_ok());
    }

    #[test]
    fn rejects_malformed_value_constraints() {
        let err = Parser::new("(SIZE(1..2))")
            .scan_value_constraints()
            .unwrap_err();
        assert_eq!(err.production, "value constraint");
        assert_eq!(err.token, Token::Size);
        assert!(Parser::new("(0..1").scan_value_constraints().is_err());
    }

    #[test]
    fn parses_constrained_by() {
        assert!(Parser::new("(CONSTRAINED BY { })").scan_constrained_by().is_ok());
        assert!(Parser::new(", next").scan_constrained_by().is_ok());
        let err = Parser::new("(SIZE (1..2))")
            .scan_constrained_by()
            .unwrap_err();
        assert_eq!(err.expected, "CONSTRAINED");
    }
}
