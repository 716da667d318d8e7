use asnp_grammar::{types::AsnChoice, ASN1Type};

use super::{error::ParserError, Parser};

impl<'a> Parser<'a> {
    pub(crate) fn scan_choice(&mut self) -> Result<ASN1Type, ParserError> {
        let mut choice = AsnChoice::default();
        self.scan_group(&mut choice)?;
        Ok(ASN1Type::Choice(choice))
    }
}
