use asnp_grammar::{types::AsnInteger, ASN1Type};

use super::{error::ParserError, Parser};

impl<'a> Parser<'a> {
    /// Parses the named numbers and value constraints of an INTEGER,
    /// e.g. `INTEGER { service-user(0), service-provider(1) } (0..1, ...)`
    pub(crate) fn scan_integer(&mut self) -> Result<ASN1Type, ParserError> {
        let mut integer = AsnInteger::default();
        self.scan_enum(&mut integer.distinguished_values)?;
        self.scan_value_constraints()?;
        Ok(ASN1Type::Integer(integer))
    }
}
