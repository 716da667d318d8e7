use asnp_grammar::{Tag, TagClass};

use super::{error::ParserError, Parser, Token};

impl<'a> Parser<'a> {
    /// Parses an optional `[UNIVERSAL n]` or `[APPLICATION n]` prefix
    /// of a top-level type declaration.
    pub(crate) fn scan_tag(&mut self) -> Result<Option<Tag>, ParserError> {
        if self.accept(Token::LeftBracket).is_none() {
            return Ok(None);
        }
        let class = match self.read_significant() {
            (Token::Universal, _) => TagClass::Universal,
            (Token::Application, _) => TagClass::Application,
            found => return Err(ParserError::syntax("tag", "UNIVERSAL or APPLICATION", found)),
        };
        let number = self.expect(Token::Ident, "tag")?;
        self.expect(Token::RightBracket, "tag")?;
        Ok(Some((class, number).into()))
    }

    /// Parses an optional `[n]` or `[APPLICATION n]` prefix of a group item.
    /// Returns the tag number as written and whether the APPLICATION class
    /// was given.
    pub(crate) fn scan_position(&mut self) -> Result<(Option<String>, bool), ParserError> {
        let mut position = None;
        let mut application = false;
        if self.accept(Token::LeftBracket).is_none() {
            return Ok((position, application));
        }
        loop {
            match self.read_significant() {
                (Token::RightBracket, _) => break,
                (Token::Application, _) => application = true,
                (Token::Ident, number) => position = Some(number.into()),
                found => return Err(ParserError::syntax("item tag", Token::RightBracket, found)),
            }
        }
        Ok((position, application))
    }
}
