//! The `parser` module contains the recursive-descent parser
//! responsible for interpreting a token stream as ASN1 notation.
//! The parser is made up of a number of grammar productions, each
//! of which reads tokens through a single-token pushback slot.
//!
//! The `parser` submodules provide the productions for their
//! respective eponymous ASN1 construct, with the exception
//! of `group`, which parses the member list shared by SEQUENCE,
//! SET and CHOICE, and `constraint`, which validates and discards
//! subtype constraints.
use tracing::{debug, trace};

use asnp_grammar::*;

use crate::scanner::{Lexeme, Scanner, Token};

use self::error::ParserError;

mod bit_string;
mod choice;
mod constraint;
mod enumerated;
pub mod error;
mod group;
mod header;
mod imports;
mod integer;
mod object_identifier;
mod sequence;
mod sequence_of;
mod set;
mod tag;

/// Parsing state over a single ASN1 module.
///
/// A `Parser` is consumed by [`Parser::parse`]; parse another module
/// with a new `Parser`.
#[derive(Debug)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    last: Option<Lexeme<'a>>,
    pushed_back: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
            last: None,
            pushed_back: false,
        }
    }

    /// Returns the pushed back token, or the next token of the scanner
    fn read(&mut self) -> Lexeme<'a> {
        if self.pushed_back {
            if let Some(lexeme) = self.last {
                self.pushed_back = false;
                return lexeme;
            }
        }
        let lexeme = Scanner::scan(&mut self.scanner);
        self.last = Some(lexeme);
        lexeme
    }

    /// Returns the next token that is neither whitespace nor a comment
    pub fn read_significant(&mut self) -> Lexeme<'a> {
        loop {
            let lexeme = self.read();
            if lexeme.0.is_significant() {
                return lexeme;
            }
        }
    }

    /// Marks the most recently read token as unconsumed, so that the next
    /// call to `read_significant` returns it again.
    ///
    /// # Panics
    /// Only one token can be pushed back. Panics if called twice without
    /// a read in between, or before any token was read.
    pub fn pushback(&mut self) {
        assert!(self.last.is_some(), "pushback before any token was read");
        assert!(
            !self.pushed_back,
            "pushback called twice without an intervening read"
        );
        self.pushed_back = true;
    }

    /// Consumes the next significant token if it is a `token`.
    /// Otherwise the token is pushed back and `None` is returned.
    fn accept(&mut self, token: Token) -> Option<&'a str> {
        let (found, literal) = self.read_significant();
        if found == token {
            Some(literal)
        } else {
            self.pushback();
            None
        }
    }

    /// Consumes the next significant token, failing if it is not a `token`
    fn expect(&mut self, token: Token, production: &'static str) -> Result<&'a str, ParserError> {
        match self.read_significant() {
            (found, literal) if found == token => Ok(literal),
            found => Err(ParserError::syntax(production, token, found)),
        }
    }

    /// Parses a complete module, from its header to the closing `END`
    pub fn parse(mut self) -> Result<Definition, ParserError> {
        let mut definition = self.scan_header()?;
        debug!(module = %definition.name, "parsing module body");

        loop {
            if self.accept(Token::Exports).is_some() {
                self.scan_exports(&mut definition)?;
                continue;
            }
            if self.accept(Token::Imports).is_some() {
                self.scan_imports(&mut definition)?;
                continue;
            }
            let name = match self.read_significant() {
                (Token::End, _) => {
                    self.pushback();
                    break;
                }
                (Token::Ident, name) => name,
                found @ (Token::Eof, _) => {
                    return Err(ParserError::syntax("module body", Token::End, found))
                }
                found => return Err(ParserError::syntax("declaration", Token::Ident, found)),
            };
            if let Some(declaration) = self.scan_declaration(name)? {
                debug!(
                    name = %declaration.name,
                    kind = declaration.r#type.kind(),
                    "parsed type declaration"
                );
                definition.types.push(declaration);
            }
        }

        self.expect(Token::End, "module")?;
        debug!(
            module = %definition.name,
            types = definition.types.len(),
            "parsed module"
        );
        Ok(definition)
    }

    /// Parses everything following the name of a module member.
    /// Object identifier value assignments yield no declaration.
    fn scan_declaration(&mut self, name: &'a str) -> Result<Option<TypeDeclaration>, ParserError> {
        if self.accept(Token::Object).is_some() {
            self.expect(Token::Identifier, "object identifier assignment")?;
            self.scan_object_identifier_assignment(name)?;
            return Ok(None);
        }

        if let Some(target) = self.accept(Token::Ident) {
            self.expect(Token::AssignmentOperator, "alias")?;
            let default = self.accept(Token::Ident);
            return Ok(Some(TypeDeclaration::from((
                name,
                ASN1Type::Alias((target, default).into()),
            ))));
        }

        self.expect(Token::AssignmentOperator, "type assignment")?;
        let tag = self.scan_tag()?;
        let implicit = self.accept(Token::Implicit).is_some();
        let explicit = self.accept(Token::Explicit).is_some();
        let r#type = self.scan_type()?;
        Ok(Some(TypeDeclaration {
            name: name.into(),
            implicit,
            explicit,
            tag,
            r#type,
        }))
    }

    /// Parses a single type, dispatching on its first token
    pub(crate) fn scan_type(&mut self) -> Result<ASN1Type, ParserError> {
        let (token, literal) = self.read_significant();
        if let Some(kind) = token.primitive_kind() {
            return Ok(ASN1Type::Primitive(kind));
        }
        match token {
            Token::Octet => {
                self.expect(Token::String, "type")?;
                Ok(ASN1Type::Primitive(PrimitiveKind::OctetString))
            }
            Token::Object => {
                self.expect(Token::Identifier, "type")?;
                Ok(ASN1Type::Primitive(PrimitiveKind::ObjectIdentifier))
            }
            Token::Enumerated => self.scan_enumerated(),
            Token::Sequence => self.scan_sequence(),
            Token::Set => self.scan_set(),
            Token::Choice => self.scan_choice(),
            Token::Integer => self.scan_integer(),
            Token::Bit => self.scan_bit_string(),
            Token::Ident => {
                trace!(reference = literal, "unresolved type reference");
                Ok(ASN1Type::CustomReference(literal.into()))
            }
            _ => Err(ParserError::syntax("type", "type", (token, literal))),
        }
    }
}

#[cfg(test)]
mod tests {
    use asnp_grammar::types::{AsnEnumerated, AsnInteger, Item};
    use pretty_assertions::assert_eq;

    use super::{error::ParserErrorType, *};

    fn parse(input: &str) -> Result<Definition, ParserError> {
        Parser::new(input).parse()
    }

    #[test]
    fn parses_empty_module() {
        assert_eq!(
            parse("Foo DEFINITIONS ::= BEGIN END").unwrap(),
            Definition::new("Foo")
        );
        assert_eq!(
            parse("\n  X-Y_1 DEFINITIONS\n::=\tBEGIN\nEND\n").unwrap().name,
            "X-Y_1"
        );
    }

    #[test]
    fn returns_pushed_back_token() {
        let mut parser = Parser::new("  alpha -- comment\n beta");
        let first = parser.read_significant();
        assert_eq!(first, (Token::Ident, "alpha"));
        parser.pushback();
        assert_eq!(parser.read_significant(), first);
        assert_eq!(parser.read_significant(), (Token::Ident, "beta"));
        assert_eq!(parser.read_significant(), (Token::Eof, ""));
    }

    #[test]
    #[should_panic(expected = "pushback called twice")]
    fn rejects_double_pushback() {
        let mut parser = Parser::new("alpha beta");
        parser.read_significant();
        parser.pushback();
        parser.pushback();
    }

    #[test]
    #[should_panic(expected = "before any token")]
    fn rejects_pushback_before_read() {
        Parser::new("alpha").pushback();
    }

    #[test]
    fn parses_sequence_with_optional_member() {
        let definition =
            parse("Foo DEFINITIONS ::= BEGIN Bar ::= SEQUENCE { baz INTEGER OPTIONAL } END")
                .unwrap();
        assert_eq!(definition.name, "Foo");
        assert_eq!(definition.types.len(), 1);
        let bar = &definition.types[0];
        assert_eq!(bar.name, "Bar");
        if let ASN1Type::Sequence(ref seq) = bar.r#type {
            assert_eq!(seq.of, None);
            assert_eq!(seq.items.len(), 1);
            let baz = seq.items[0].as_component().unwrap();
            assert_eq!(baz.name, "baz");
            assert_eq!(baz.r#type, ASN1Type::Integer(AsnInteger::default()));
            assert!(baz.optional);
            assert!(!baz.has_default);
        } else {
            panic!("Bar is not a SEQUENCE")
        }
    }

    #[test]
    fn parses_choice() {
        let definition =
            parse("X DEFINITIONS ::= BEGIN Y ::= CHOICE { a INTEGER, b OCTET STRING } END")
                .unwrap();
        if let ASN1Type::Choice(ref choice) = definition.types[0].r#type {
            let types: Vec<&ASN1Type> = choice
                .items
                .iter()
                .filter_map(Item::as_component)
                .map(|c| &c.r#type)
                .collect();
            assert_eq!(
                types,
                vec![
                    &ASN1Type::Integer(AsnInteger::default()),
                    &ASN1Type::Primitive(PrimitiveKind::OctetString)
                ]
            );
        } else {
            panic!("Y is not a CHOICE")
        }
    }

    #[test]
    fn parses_enumerated() {
        let definition = parse(
            "M DEFINITIONS ::= BEGIN Colors ::= ENUMERATED { red(0), green(1), blue(2) } END",
        )
        .unwrap();
        assert_eq!(
            definition.types[0].r#type,
            ASN1Type::Enumerated(AsnEnumerated {
                distinguished_values: [("red", "0"), ("green", "1"), ("blue", "2")].into()
            })
        );
    }

    #[test]
    fn reports_missing_end() {
        let err = parse("M DEFINITIONS ::= BEGIN Bar ::= INTEGER").unwrap_err();
        assert_eq!(err.expected, "END");
        assert_eq!(err.token, Token::Eof);
        assert_eq!(err.kind, ParserErrorType::SyntaxError);
    }

    #[test]
    fn rejects_unexpected_member_start() {
        let err = parse("M DEFINITIONS ::= BEGIN { END").unwrap_err();
        assert_eq!(err.production, "declaration");
        assert_eq!(err.expected, "IDENT");
        assert_eq!(err.found, "\"{\"");
    }

    #[test]
    fn parses_primitive_declarations() {
        let definition = parse(
            r#"M DEFINITIONS ::= BEGIN
            A ::= ObjectDescriptor
            B ::= GeneralString
            C ::= NumericString
            D ::= GraphicString
            E ::= VisibleString
            F ::= UTCTime
            G ::= GeneralizedTime
            H ::= T61String
            I ::= PrintableString
            J ::= OBJECT IDENTIFIER
            K ::= OCTET STRING
            L ::= UniversalString
            END"#,
        )
        .unwrap();
        let kinds: Vec<&str> = definition.types.iter().map(|t| t.r#type.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                "ObjectDescriptor",
                "GeneralString",
                "NumericString",
                "GraphicString",
                "VisibleString",
                "UTCTime",
                "GeneralizedTime",
                "T61String",
                "PrintableString",
                "ObjectIdentifier",
                "OctetString",
                "UniversalString"
            ]
        );
    }

    #[test]
    fn parses_custom_reference() {
        let definition =
            parse("M DEFINITIONS ::= BEGIN A ::= Later Later ::= INTEGER END").unwrap();
        assert_eq!(
            definition.types[0].r#type,
            ASN1Type::CustomReference("Later".into())
        );
        assert_eq!(definition.types.len(), 2);
    }

    #[test]
    fn parses_alias() {
        let definition = parse(
            "M DEFINITIONS ::= BEGIN maxSize Unsigned32 ::= 64 noDefault Other ::= END",
        )
        .unwrap();
        assert_eq!(
            definition.types[0],
            TypeDeclaration::from(("maxSize", ASN1Type::Alias(("Unsigned32", Some("64")).into())))
        );
        assert_eq!(
            definition.types[1].r#type,
            ASN1Type::Alias(("Other", None).into())
        );
    }

    #[test]
    fn parses_tagged_declarations() {
        let definition = parse(
            r#"M DEFINITIONS ::= BEGIN
            Name ::= [APPLICATION 1] IMPLICIT VisibleString
            Real ::= [UNIVERSAL 9] EXPLICIT OCTET STRING
            END"#,
        )
        .unwrap();
        let name = &definition.types[0];
        assert_eq!(name.tag, Some((TagClass::Application, "1").into()));
        assert!(name.implicit);
        assert!(!name.explicit);
        let real = &definition.types[1];
        assert_eq!(real.tag, Some((TagClass::Universal, "9").into()));
        assert!(real.explicit);
    }

    #[test]
    fn rejects_illegal_type() {
        let err = parse("M DEFINITIONS ::= BEGIN A ::= # END").unwrap_err();
        assert_eq!(err.production, "type");
        assert_eq!(err.token, Token::Illegal);
    }

    #[test]
    fn rejects_incomplete_octet_string() {
        let err = parse("M DEFINITIONS ::= BEGIN A ::= OCTET END").unwrap_err();
        assert_eq!(err.expected, "STRING");
    }
}
