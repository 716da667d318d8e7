use asnp_grammar::{types::AsnSet, ASN1Type};

use super::{error::ParserError, Parser};

impl<'a> Parser<'a> {
    /// Parses a SET after its `SET` keyword
    pub(crate) fn scan_set(&mut self) -> Result<ASN1Type, ParserError> {
        let mut set = AsnSet::default();
        self.scan_group(&mut set)?;
        Ok(ASN1Type::Set(set))
    }
}

#[cfg(test)]
mod tests {
    use asnp_grammar::{types::*, ASN1Type};
    use pretty_assertions::assert_eq;

    use crate::parser::{Parser, Token};

    #[test]
    fn parses_set() {
        let result = Parser::new("{ a [0] IMPLICIT INTEGER, b [1] IMPLICIT Name }")
            .scan_set()
            .unwrap();
        if let ASN1Type::Set(set) = result {
            let names: Vec<&str> = set
                .items
                .iter()
                .filter_map(Item::as_component)
                .map(|c| c.name.as_str())
                .collect();
            assert_eq!(names, vec!["a", "b"]);
        } else {
            panic!("expected a SET")
        }
    }

    #[test]
    fn leaves_size_and_of_unconsumed() {
        let mut parser = Parser::new("SIZE (1..MAX, ...) OF AttributeTypeAndValue");
        assert_eq!(parser.scan_set().unwrap(), ASN1Type::Set(AsnSet::default()));
        assert_eq!(parser.read_significant().0, Token::Size);

        let mut parser = Parser::new("OF Foo");
        assert_eq!(parser.scan_set().unwrap(), ASN1Type::Set(AsnSet::default()));
        assert_eq!(parser.read_significant().0, Token::Of);
    }
}
