use core::fmt::{Display, Formatter, Result};

use asnp_grammar::*;

/// A scanned token together with its literal text
pub type Lexeme<'a> = (Token, &'a str);

/// The lexical tokens of the ASN1 module notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    // Special tokens
    Eof,
    Illegal,
    Whitespace,
    Comment,

    // Literals
    Ident,

    // Punctuation
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    LeftParenthesis,
    RightParenthesis,
    Comma,
    Semicolon,

    // Operators
    AssignmentOperator,
    DoubleDot,
    TripleDot,

    // Keywords
    Begin,
    End,
    Definitions,
    Imports,
    Exports,
    From,
    Universal,
    Application,
    Enumerated,
    Optional,
    Default,
    True,
    False,
    Implicit,
    Explicit,
    Of,
    Integer,
    Sequence,
    Set,
    Choice,
    String,
    Bit,
    Octet,
    Identifier,
    Object,
    Size,
    Constrained,
    By,
    UtcTime,
    GeneralizedTime,
    ObjectDescriptor,
    GraphicString,
    VisibleString,
    PrintableString,
    NumericString,
    GeneralString,
    UniversalString,
    T61String,
}

impl Token {
    /// Matches an identifier run against the reserved words.
    /// The comparison is case-sensitive.
    pub fn keyword(ident: &str) -> Option<Token> {
        let token = match ident {
            BEGIN => Token::Begin,
            END => Token::End,
            DEFINITIONS => Token::Definitions,
            IMPORTS => Token::Imports,
            EXPORTS => Token::Exports,
            FROM => Token::From,
            UNIVERSAL => Token::Universal,
            APPLICATION => Token::Application,
            ENUMERATED => Token::Enumerated,
            OPTIONAL => Token::Optional,
            DEFAULT => Token::Default,
            TRUE => Token::True,
            FALSE => Token::False,
            IMPLICIT => Token::Implicit,
            EXPLICIT => Token::Explicit,
            OF => Token::Of,
            INTEGER => Token::Integer,
            SEQUENCE => Token::Sequence,
            SET => Token::Set,
            CHOICE => Token::Choice,
            STRING => Token::String,
            BIT => Token::Bit,
            OCTET => Token::Octet,
            IDENTIFIER => Token::Identifier,
            OBJECT => Token::Object,
            SIZE => Token::Size,
            CONSTRAINED => Token::Constrained,
            BY => Token::By,
            UTC_TIME => Token::UtcTime,
            GENERALIZED_TIME => Token::GeneralizedTime,
            OBJECT_DESCRIPTOR => Token::ObjectDescriptor,
            GRAPHIC_STRING => Token::GraphicString,
            VISIBLE_STRING => Token::VisibleString,
            PRINTABLE_STRING => Token::PrintableString,
            NUMERIC_STRING => Token::NumericString,
            GENERAL_STRING => Token::GeneralString,
            UNIVERSAL_STRING => Token::UniversalString,
            T61_STRING => Token::T61String,
            _ => return None,
        };
        Some(token)
    }

    /// Maps a single punctuation character to its token
    pub fn punctuation(c: char) -> Option<Token> {
        let token = match c {
            LEFT_PARENTHESIS => Token::LeftParenthesis,
            RIGHT_PARENTHESIS => Token::RightParenthesis,
            LEFT_BRACKET => Token::LeftBracket,
            RIGHT_BRACKET => Token::RightBracket,
            LEFT_BRACE => Token::LeftBrace,
            RIGHT_BRACE => Token::RightBrace,
            SEMICOLON => Token::Semicolon,
            COMMA => Token::Comma,
            _ => return None,
        };
        Some(token)
    }

    /// The payload-free type a single keyword stands for
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Token::ObjectDescriptor => Some(PrimitiveKind::ObjectDescriptor),
            Token::GeneralString => Some(PrimitiveKind::GeneralString),
            Token::NumericString => Some(PrimitiveKind::NumericString),
            Token::GraphicString => Some(PrimitiveKind::GraphicString),
            Token::VisibleString => Some(PrimitiveKind::VisibleString),
            Token::UniversalString => Some(PrimitiveKind::UniversalString),
            Token::PrintableString => Some(PrimitiveKind::PrintableString),
            Token::T61String => Some(PrimitiveKind::T61String),
            Token::UtcTime => Some(PrimitiveKind::UTCTime),
            Token::GeneralizedTime => Some(PrimitiveKind::GeneralizedTime),
            _ => None,
        }
    }

    /// Whitespace and comments carry no meaning for the grammar
    pub fn is_significant(&self) -> bool {
        !matches!(self, Token::Whitespace | Token::Comment)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            Token::Eof => "EOF",
            Token::Illegal => "ILLEGAL",
            Token::Whitespace => "WHITESPACE",
            Token::Comment => "COMMENT",
            Token::Ident => "IDENT",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::LeftParenthesis => "(",
            Token::RightParenthesis => ")",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::AssignmentOperator => ASSIGN,
            Token::DoubleDot => RANGE,
            Token::TripleDot => ELLIPSIS,
            Token::Begin => BEGIN,
            Token::End => END,
            Token::Definitions => DEFINITIONS,
            Token::Imports => IMPORTS,
            Token::Exports => EXPORTS,
            Token::From => FROM,
            Token::Universal => UNIVERSAL,
            Token::Application => APPLICATION,
            Token::Enumerated => ENUMERATED,
            Token::Optional => OPTIONAL,
            Token::Default => DEFAULT,
            Token::True => TRUE,
            Token::False => FALSE,
            Token::Implicit => IMPLICIT,
            Token::Explicit => EXPLICIT,
            Token::Of => OF,
            Token::Integer => INTEGER,
            Token::Sequence => SEQUENCE,
            Token::Set => SET,
            Token::Choice => CHOICE,
            Token::String => STRING,
            Token::Bit => BIT,
            Token::Octet => OCTET,
            Token::Identifier => IDENTIFIER,
            Token::Object => OBJECT,
            Token::Size => SIZE,
            Token::Constrained => CONSTRAINED,
            Token::By => BY,
            Token::UtcTime => UTC_TIME,
            Token::GeneralizedTime => GENERALIZED_TIME,
            Token::ObjectDescriptor => OBJECT_DESCRIPTOR,
            Token::GraphicString => GRAPHIC_STRING,
            Token::VisibleString => VISIBLE_STRING,
            Token::PrintableString => PRINTABLE_STRING,
            Token::NumericString => NUMERIC_STRING,
            Token::GeneralString => GENERAL_STRING,
            Token::UniversalString => UNIVERSAL_STRING,
            Token::T61String => T61_STRING,
        };
        f.write_str(s)
    }
}
