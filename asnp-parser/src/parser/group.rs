use tracing::trace;

use asnp_grammar::types::{Component, Item, ItemContainer};

use super::{error::ParserError, Parser, Token};

impl<'a> Parser<'a> {
    /// Parses an optional brace-delimited, comma-separated list of items
    /// into `container`. Every `...` in the list is kept as an
    /// [`Item::ExtensionMarker`] at its position.
    pub(crate) fn scan_group<C: ItemContainer>(
        &mut self,
        container: &mut C,
    ) -> Result<(), ParserError> {
        if self.accept(Token::LeftBrace).is_none() {
            return Ok(());
        }
        if self.accept(Token::RightBrace).is_some() {
            return Ok(());
        }
        loop {
            let item = match self.read_significant() {
                (Token::TripleDot, _) => Item::ExtensionMarker,
                (Token::Ident, name) => self.scan_group_item(name)?,
                found => return Err(ParserError::syntax("group", Token::Ident, found)),
            };
            container.push_item(item);
            if self.accept(Token::Comma).is_none() {
                break;
            }
        }
        self.expect(Token::RightBrace, "group")?;
        trace!(items = container.items().len(), "parsed group");
        Ok(())
    }

    /// Parses everything of a named item following its name
    fn scan_group_item(&mut self, name: &'a str) -> Result<Item, ParserError> {
        let (position, application) = self.scan_position()?;
        let implicit = self.accept(Token::Implicit).is_some();
        let explicit = self.accept(Token::Explicit).is_some();
        let r#type = self.scan_type()?;

        let mut optional = false;
        let mut has_default = false;
        match self.read_significant() {
            (Token::Optional, _) => optional = true,
            (Token::Default, _) => {
                self.scan_default_value()?;
                has_default = true;
            }
            _ => self.pushback(),
        }
        self.scan_constrained_by()?;

        Ok(Component {
            name: name.into(),
            position,
            application,
            implicit,
            explicit,
            r#type,
            optional,
            has_default,
        }
        .into())
    }

    /// Validates the form of a default value. The value is not kept.
    fn scan_default_value(&mut self) -> Result<(), ParserError> {
        match self.read_significant() {
            (Token::True | Token::False | Token::Ident, value) => {
                trace!(value, "discarded default value")
            }
            (Token::LeftBrace, _) => {
                let value = self.accept(Token::Ident);
                trace!(value = ?value, "discarded default value");
                self.expect(Token::RightBrace, "default value")?;
            }
            found => return Err(ParserError::syntax("default value", "value", found)),
        }
        Ok(())
    }
}
