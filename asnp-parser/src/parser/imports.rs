use tracing::debug;

use asnp_grammar::{Definition, Import};

use super::{error::ParserError, Parser, Token};

impl<'a> Parser<'a> {
    /// Parses the symbol list of an EXPORTS clause up to and including `;`
    pub(crate) fn scan_exports(&mut self, definition: &mut Definition) -> Result<(), ParserError> {
        let first = self.expect(Token::Ident, "exports")?;
        definition.exports.push(first.into());
        loop {
            match self.read_significant() {
                (Token::Semicolon, _) => break,
                (Token::Comma, _) => continue,
                (Token::Ident, symbol) => definition.exports.push(symbol.into()),
                found => return Err(ParserError::syntax("exports", Token::Semicolon, found)),
            }
        }
        debug!(symbols = definition.exports.len(), "parsed exports");
        Ok(())
    }

    /// Parses the `Symbol, ... FROM Module` groups of an IMPORTS clause
    /// up to and including `;`
    pub(crate) fn scan_imports(&mut self, definition: &mut Definition) -> Result<(), ParserError> {
        loop {
            let import = self.scan_import_group()?;
            debug!(module = %import.module, symbols = import.symbols.len(), "parsed import");
            definition.imports.push(import);
            match self.read_significant() {
                (Token::Semicolon, _) => return Ok(()),
                (Token::Ident, _) => self.pushback(),
                found => return Err(ParserError::syntax("imports", Token::Semicolon, found)),
            }
        }
    }

    fn scan_import_group(&mut self) -> Result<Import, ParserError> {
        let mut symbols = vec![self.expect(Token::Ident, "imports")?.to_owned()];
        while self.accept(Token::Comma).is_some() {
            symbols.push(self.expect(Token::Ident, "imports")?.into());
        }
        self.expect(Token::From, "imports")?;
        let module = self.expect(Token::Ident, "imports")?;
        if self.accept(Token::LeftBrace).is_some() {
            self.scan_object_identifier_components("imports")?;
        }
        Ok((symbols, module).into())
    }
}
