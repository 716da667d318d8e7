use tracing::trace;

use asnp_grammar::{
    types::{AsnEnumerated, DistinguishedValues},
    ASN1Type,
};

use super::{error::ParserError, Parser, Token};

impl<'a> Parser<'a> {
    /// Parses the body of an ENUMERATED type
    pub(crate) fn scan_enumerated(&mut self) -> Result<ASN1Type, ParserError> {
        let mut distinguished_values = DistinguishedValues::default();
        self.scan_enum(&mut distinguished_values)?;
        Ok(ASN1Type::Enumerated(AsnEnumerated {
            distinguished_values,
        }))
    }

    /// Parses an optional brace-delimited list of named numbers,
    /// e.g. `{ red(0), green, ... }`.
    ///
    /// Only names with a parenthesized value are recorded. An extension
    /// marker marks the values as extensible. Shared by INTEGER,
    /// ENUMERATED and BIT STRING.
    pub(crate) fn scan_enum(
        &mut self,
        values: &mut DistinguishedValues,
    ) -> Result<(), ParserError> {
        if self.accept(Token::LeftBrace).is_none() {
            return Ok(());
        }
        loop {
            match self.read_significant() {
                (Token::TripleDot, _) => values.extensible = true,
                (Token::Ident, name) => {
                    if self.accept(Token::LeftParenthesis).is_some() {
                        let value = self.expect(Token::Ident, "named number")?;
                        self.expect(Token::RightParenthesis, "named number")?;
                        values.insert(name, value);
                    } else {
                        trace!(name, "named number without value");
                    }
                }
                found => return Err(ParserError::syntax("named number", Token::Ident, found)),
            }
            if self.accept(Token::Comma).is_none() {
                break;
            }
        }
        self.expect(Token::RightBrace, "named number")?;
        Ok(())
    }
}
