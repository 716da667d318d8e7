use tracing::trace;

use asnp_grammar::{Definition, TaggingEnvironment, AUTOMATIC, TAGS};

use super::{error::ParserError, Parser, Token};

impl<'a> Parser<'a> {
    /// Parses a module header up to and including `BEGIN`.
    ///
    /// The module identifier in braces following the module name is
    /// skipped, whatever it contains.
    pub(crate) fn scan_header(&mut self) -> Result<Definition, ParserError> {
        let name = self.expect(Token::Ident, "module header")?;

        if self.accept(Token::LeftBrace).is_some() {
            loop {
                match self.read_significant() {
                    (Token::RightBrace, _) => break,
                    found @ (Token::Eof, _) => {
                        return Err(ParserError::syntax("module header", Token::RightBrace, found))
                    }
                    (_, skipped) => trace!(skipped, "skipping module identifier component"),
                }
            }
        }

        self.expect(Token::Definitions, "module header")?;
        let tagging_environment = self.scan_tagging_environment()?;
        self.expect(Token::AssignmentOperator, "module header")?;
        self.expect(Token::Begin, "module header")?;

        Ok(Definition {
            tagging_environment,
            ..Definition::new(name)
        })
    }

    fn scan_tagging_environment(&mut self) -> Result<Option<TaggingEnvironment>, ParserError> {
        let environment = match self.read_significant() {
            (Token::Implicit, _) => TaggingEnvironment::Implicit,
            (Token::Explicit, _) => TaggingEnvironment::Explicit,
            (Token::Ident, AUTOMATIC) => TaggingEnvironment::Automatic,
            _ => {
                self.pushback();
                return Ok(None);
            }
        };
        match self.read_significant() {
            (Token::Ident, TAGS) => Ok(Some(environment)),
            found => Err(ParserError::syntax("tagging environment", TAGS, found)),
        }
    }
}
