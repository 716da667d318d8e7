//! The `scanner` module splits ASN1 module notation into
//! a stream of lexical tokens. Every call to [`Scanner::scan`]
//! consumes exactly one token from the front of the input;
//! the lexical rules themselves are small
//! [nom](https://docs.rs/nom/latest/nom/) parsers.
//!
//! The scanner never fails. Characters that do not start any
//! token are returned as `ILLEGAL` and left for the parser to reject.
pub mod token;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_while, take_while1},
    character::complete::{anychar, char, satisfy},
    combinator::{map, map_opt, opt, recognize, value},
    sequence::{pair, preceded, terminated},
    IResult,
};

use asnp_grammar::{ASSIGN, ELLIPSIS, LINE_COMMENT, RANGE};

pub use token::{Lexeme, Token};

/// Lexical scanner over a borrowed ASN1 source.
///
/// The scanner is not restartable: once it reached the end of
/// its input, every further call to `scan` yields `EOF`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    remaining: &'a str,
    exhausted: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            remaining: input,
            exhausted: false,
        }
    }

    /// Returns the next token and its literal text.
    ///
    /// Multi-character operators (`::=`, `..`, `...`) and `EOF`
    /// carry an empty literal.
    ///
    /// Method call syntax resolves to `Iterator::scan`, so call it as
    /// `Scanner::scan(&mut scanner)`.
    pub fn scan(&mut self) -> Lexeme<'a> {
        if self.remaining.is_empty() {
            return (Token::Eof, "");
        }
        match lexeme(self.remaining) {
            Ok((remaining, lexeme)) => {
                self.remaining = remaining;
                lexeme
            }
            // `illegal` accepts any character, so this only
            // guards against an exhausted input
            Err(_) => {
                self.remaining = "";
                (Token::Eof, "")
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Lexeme<'a>;

    /// Yields all tokens up to and including the first `EOF`
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let lexeme = Scanner::scan(self);
        self.exhausted = lexeme.0 == Token::Eof;
        Some(lexeme)
    }
}

fn lexeme<'a>(input: &'a str) -> IResult<&'a str, Lexeme<'a>> {
    alt((
        whitespace,
        comment,
        identifier,
        operator,
        punctuation,
        illegal,
    ))(input)
}

fn whitespace<'a>(input: &'a str) -> IResult<&'a str, Lexeme<'a>> {
    map(take_while1(is_whitespace), |ws| (Token::Whitespace, ws))(input)
}

/// A comment starts with a single `-` and runs to the end of the line.
/// The terminating newline is consumed but not part of the literal.
fn comment<'a>(input: &'a str) -> IResult<&'a str, Lexeme<'a>> {
    map(
        terminated(
            recognize(preceded(char(LINE_COMMENT), take_till(|c: char| c == '\n'))),
            opt(char('\n')),
        ),
        |c| (Token::Comment, c),
    )(input)
}

/// Letters and digits start the same identifier run, so numbers
/// are scanned as `IDENT` as well.
fn identifier<'a>(input: &'a str) -> IResult<&'a str, Lexeme<'a>> {
    map(
        recognize(pair(
            satisfy(|c: char| c.is_ascii_alphanumeric()),
            take_while(is_identifier_char),
        )),
        |ident| (Token::keyword(ident).unwrap_or(Token::Ident), ident),
    )(input)
}

/// The longest operator is tried first, so `...` never splits into `..` and `.`
fn operator<'a>(input: &'a str) -> IResult<&'a str, Lexeme<'a>> {
    alt((
        value((Token::AssignmentOperator, ""), tag(ASSIGN)),
        value((Token::TripleDot, ""), tag(ELLIPSIS)),
        value((Token::DoubleDot, ""), tag(RANGE)),
    ))(input)
}

fn punctuation<'a>(input: &'a str) -> IResult<&'a str, Lexeme<'a>> {
    map_opt(recognize(anychar), |p: &'a str| {
        p.chars()
            .next()
            .and_then(Token::punctuation)
            .map(|token| (token, p))
    })(input)
}

fn illegal<'a>(input: &'a str) -> IResult<&'a str, Lexeme<'a>> {
    map(recognize(anychar), |c| (Token::Illegal, c))(input)
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
