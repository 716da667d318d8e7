use asnp_grammar::{
    types::DistinguishedValues, BIT_STRING, CHOICE, INTEGER, OBJECT_IDENTIFIER, OCTET_STRING,
    SEQUENCE,
};

use super::{error::ParserError, Parser, Token};

impl<'a> Parser<'a> {
    /// Parses the optional `[SIZE (lower..upper, ...)] OF element` part
    /// of a SEQUENCE and returns the element type's notation.
    pub(crate) fn scan_of(&mut self) -> Result<Option<String>, ParserError> {
        if self.accept(Token::Size).is_some() {
            self.scan_extensible_size_constraint("sequence")?;
        }
        if self.accept(Token::Of).is_none() {
            return Ok(None);
        }
        self.scan_of_element().map(Some)
    }

    /// Named numbers of an INTEGER or BIT STRING element are checked
    /// but not kept.
    fn scan_of_element(&mut self) -> Result<String, ParserError> {
        let (token, literal) = self.read_significant();
        if let Some(kind) = token.primitive_kind() {
            return Ok(kind.notation().into());
        }
        let notation = match token {
            Token::Ident => literal,
            Token::Bit => {
                self.expect(Token::String, "sequence")?;
                self.scan_enum(&mut DistinguishedValues::default())?;
                BIT_STRING
            }
            Token::Integer => {
                self.scan_enum(&mut DistinguishedValues::default())?;
                INTEGER
            }
            Token::Octet => {
                self.expect(Token::String, "sequence")?;
                OCTET_STRING
            }
            Token::Object => {
                self.expect(Token::Identifier, "sequence")?;
                OBJECT_IDENTIFIER
            }
            Token::Sequence => SEQUENCE,
            Token::Choice => CHOICE,
            _ => return Err(ParserError::syntax("sequence", "type", (token, literal))),
        };
        Ok(notation.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Parser, Token};

    fn scan_of(input: &str) -> Option<String> {
        Parser::new(input).scan_of().unwrap()
    }

    #[test]
    fn parses_element_notations() {
        assert_eq!(scan_of("OF Certificate"), Some("Certificate".into()));
        assert_eq!(scan_of("OF OBJECT IDENTIFIER"), Some("OBJECT IDENTIFIER".into()));
        assert_eq!(scan_of("OF OCTET STRING"), Some("OCTET STRING".into()));
        assert_eq!(scan_of("OF VisibleString"), Some("VisibleString".into()));
        assert_eq!(scan_of("OF GeneralizedTime"), Some("GeneralizedTime".into()));
        assert_eq!(scan_of("OF INTEGER { a(1) }"), Some("INTEGER".into()));
        assert_eq!(scan_of("OF BIT STRING { a(1), b(2) }"), Some("BIT STRING".into()));
        assert_eq!(scan_of("OF CHOICE"), Some("CHOICE".into()));
    }

    #[test]
    fn parses_size_before_of() {
        assert_eq!(
            scan_of("SIZE (1..MAX-Entries, ...) OF Entry"),
            Some("Entry".into())
        );
        assert_eq!(
            scan_of("SIZE (0..8, ...) OF SEQUENCE"),
            Some("SEQUENCE".into())
        );
    }

    #[test]
    fn rejects_size_without_extension_marker() {
        let err = Parser::new("SIZE (1..4) OF Foo").scan_of().unwrap_err();
        assert_eq!(err.production, "sequence");
        assert_eq!(err.expected, ",");
        assert_eq!(err.token, Token::RightParenthesis);
    }

    #[test]
    fn parses_absent_of() {
        let mut parser = Parser::new("{ a INTEGER }");
        assert_eq!(parser.scan_of().unwrap(), None);
        assert_eq!(parser.read_significant(), (Token::LeftBrace, "{"));
    }

    #[test]
    fn rejects_unknown_element() {
        let err = Parser::new("OF [0]").scan_of().unwrap_err();
        assert_eq!(err.production, "sequence");
        assert_eq!(err.expected, "type");
        assert_eq!(err.token, Token::LeftBracket);
    }
}
