//! The `asnp-parser` library reads ASN1 module definitions and outputs
//! a structural model of the declared types, the [`Definition`]. Source text
//! is split into tokens by a [nom](https://docs.rs/nom/latest/nom/)-based
//! [`scanner`] and interpreted by a recursive-descent [`Parser`] with a
//! single token of lookahead.
//!
//! The parser covers the subset of ASN1 found in application-layer protocol
//! modules such as MMS or X.509: SEQUENCE, SET and CHOICE groups, INTEGER,
//! ENUMERATED and BIT STRING named numbers, tagging, OPTIONAL and DEFAULT
//! members and the common string and time types. Type references are never
//! resolved and values are not evaluated.
//!
//! ## Example
//!
//! ```rust
//! use asnp_parser::parse_str;
//!
//! let definition = parse_str(
//!     "Foo DEFINITIONS ::= BEGIN Bar ::= SEQUENCE { baz INTEGER OPTIONAL } END",
//! )
//! .unwrap();
//! assert_eq!(definition.name, "Foo");
//! assert_eq!(definition.types[0].r#type.kind(), "Sequence");
//! ```
//!
//! Several ASN1 files can be parsed in one go:
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use asnp_parser::Asnp;
//!
//! let definitions = Asnp::parser()
//!     .add_asn_source(PathBuf::from("spec_1.asn"))
//!     .add_asn_sources(vec![PathBuf::from("spec_2.asn"), PathBuf::from("spec_3.asn")])
//!     .parse()
//!     .unwrap();
//! ```
pub mod parser;
pub mod scanner;

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
};

use thiserror::Error;
use tracing::info;

pub use asnp_grammar::Definition;
pub use parser::{
    error::{ParserError, ParserErrorType},
    Parser,
};

/// Parses a single ASN1 module
pub fn parse_str(input: &str) -> Result<Definition, ParserError> {
    Parser::new(input).parse()
}

/// Reads a single ASN1 module from `reader` and parses it
pub fn parse<R: Read>(mut reader: R) -> Result<Definition, LoadError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(parse_str(&input)?)
}

/// Failure to read or parse an ASN1 source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read ASN1 source: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parser(#[from] ParserError),
}

/// The ASNP parser
#[derive(Debug, PartialEq)]
pub struct Asnp;

impl Asnp {
    /// Provides a Builder for building ASNP parser commands
    pub fn parser() -> AsnpParser {
        AsnpParser::default()
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct AsnpParser {
    sources: Vec<PathBuf>,
}

impl From<Vec<PathBuf>> for AsnpParser {
    fn from(value: Vec<PathBuf>) -> Self {
        AsnpParser { sources: value }
    }
}

impl From<PathBuf> for AsnpParser {
    fn from(value: PathBuf) -> Self {
        AsnpParser {
            sources: vec![value],
        }
    }
}

impl AsnpParser {
    /// Add an ASN1 source to the parse command
    /// * `path_to_source` - path to ASN1 file to include
    pub fn add_asn_source(mut self, path_to_source: PathBuf) -> AsnpParser {
        self.sources.push(path_to_source);
        self
    }

    /// Add several ASN1 sources to the parse command
    /// * `paths_to_sources` - vector of paths to the ASN1 files to be included
    pub fn add_asn_sources(mut self, paths_to_sources: Vec<PathBuf>) -> AsnpParser {
        self.sources.extend(paths_to_sources);
        self
    }

    /// Runs the ASNP parser command.
    /// Returns the parsed modules in the order their sources were added,
    /// or the first error encountered.
    pub fn parse(self) -> Result<Vec<Definition>, LoadError> {
        self.sources
            .into_iter()
            .map(|src| -> Result<Definition, LoadError> {
                info!(source = %src.display(), "parsing ASN1 source");
                Ok(parse_str(&read_to_string(src)?)?)
            })
            .collect()
    }
}
