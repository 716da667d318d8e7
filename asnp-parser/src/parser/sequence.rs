use asnp_grammar::{types::AsnSequence, ASN1Type};

use super::{error::ParserError, Parser};

impl<'a> Parser<'a> {
    /// Parses a SEQUENCE or SEQUENCE OF after its `SEQUENCE` keyword.
    ///
    /// The members of an anonymous element, as in
    /// `SEQUENCE OF SEQUENCE { ... }`, are collected into the
    /// returned sequence.
    pub(crate) fn scan_sequence(&mut self) -> Result<ASN1Type, ParserError> {
        let mut sequence = AsnSequence {
            of: self.scan_of()?,
            ..Default::default()
        };
        self.scan_group(&mut sequence)?;
        Ok(ASN1Type::Sequence(sequence))
    }
}
