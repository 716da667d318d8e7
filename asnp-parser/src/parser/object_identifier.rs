use tracing::trace;

use super::{error::ParserError, Parser, Token};

impl<'a> Parser<'a> {
    /// Parses the components of an object identifier value up to and
    /// including the closing brace. The opening brace must already be
    /// consumed. Each component is an identifier or number, optionally
    /// followed by a parenthesized number, e.g. `iso(1) standard 8824`.
    pub(crate) fn scan_object_identifier_components(
        &mut self,
        production: &'static str,
    ) -> Result<(), ParserError> {
        loop {
            let component = self.expect(Token::Ident, production)?;
            if self.accept(Token::LeftParenthesis).is_some() {
                let number = self.accept(Token::Ident);
                trace!(component, number = ?number, "object identifier component");
                self.expect(Token::RightParenthesis, production)?;
            }
            if self.accept(Token::RightBrace).is_some() {
                return Ok(());
            }
        }
    }

    /// Parses `::= { components }` of an OBJECT IDENTIFIER value assignment.
    /// The value itself is not kept.
    pub(crate) fn scan_object_identifier_assignment(
        &mut self,
        name: &str,
    ) -> Result<(), ParserError> {
        self.expect(Token::AssignmentOperator, "object identifier assignment")?;
        self.expect(Token::LeftBrace, "object identifier assignment")?;
        self.scan_object_identifier_components("object identifier assignment")?;
        trace!(name, "skipped object identifier assignment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Parser, Token};

    #[test]
    fn parses_object_identifier_assignment() {
        let mut parser =
            Parser::new("::= { iso standard 9506 part(2) mms-annex-version(1) } Next");
        parser.scan_object_identifier_assignment("mms").unwrap();
        assert_eq!(parser.read_significant(), (Token::Ident, "Next"));
    }

    #[test]
    fn accepts_empty_parentheses() {
        let mut parser = Parser::new("::= { joint-iso-ccitt() ms(9) }");
        assert!(parser.scan_object_identifier_assignment("x").is_ok());
    }

    #[test]
    fn rejects_unclosed_component_number() {
        let err = Parser::new("::= { iso(1 }")
            .scan_object_identifier_assignment("x")
            .unwrap_err();
        assert_eq!(err.expected, ")");
        assert_eq!(err.found, "\"}\"");
    }

    #[test]
    fn rejects_non_identifier_component() {
        let err = Parser::new("::= { iso ; }")
            .scan_object_identifier_assignment("x")
            .unwrap_err();
        assert_eq!(err.production, "object identifier assignment");
        assert_eq!(err.expected, "IDENT");
    }

    #[test]
    fn rejects_empty_value() {
        assert!(Parser::new("::= { }")
            .scan_object_identifier_assignment("x")
            .is_err());
    }
}
