use asnp_grammar::{types::AsnBitString, ASN1Type};

use super::{error::ParserError, Parser, Token};

impl<'a> Parser<'a> {
    /// Parses a BIT STRING after its `BIT` keyword
    ///
    /// Accepts an optional `(SIZE (lower..upper))` constraint before and
    /// after the named bits. Default values are not supported and fail
    /// with a `NotImplemented` error.
    pub(crate) fn scan_bit_string(&mut self) -> Result<ASN1Type, ParserError> {
        self.expect(Token::String, "bit string")?;
        self.scan_bit_string_size()?;
        if self.accept(Token::Default).is_some() {
            let found = self.read_significant();
            return Err(ParserError::not_implemented(
                "bit string",
                "named bits",
                found,
            ));
        }
        let mut bit_string = AsnBitString::default();
        self.scan_enum(&mut bit_string.distinguished_values)?;
        self.scan_bit_string_size()?;
        Ok(ASN1Type::BitString(bit_string))
    }

    fn scan_bit_string_size(&mut self) -> Result<(), ParserError> {
        if self.accept(Token::LeftParenthesis).is_none() {
            return Ok(());
        }
        if self.accept(Token::Size).is_some() {
            self.scan_size_constraint("bit string")?;
        }
        self.expect(Token::RightParenthesis, "bit string")?;
        Ok(())
    }
}
