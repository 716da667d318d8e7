//! The `asnp-grammar` crate describes the single elements
//! of the ASN1 module notation understood by `asnp-parser`.
//! It includes constants for the reserved ASN1 keywords
//! and types to represent a parsed module definition
//! and the type declarations it contains.
//!
#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod types;

use alloc::{string::String, vec::Vec};
use core::fmt::{Display, Formatter, Result};
use types::*;

// Comment tokens
pub const LINE_COMMENT: char = '-';

// Bracket tokens
pub const LEFT_PARENTHESIS: char = '(';
pub const RIGHT_PARENTHESIS: char = ')';
pub const LEFT_BRACKET: char = '[';
pub const RIGHT_BRACKET: char = ']';
pub const LEFT_BRACE: char = '{';
pub const RIGHT_BRACE: char = '}';

// Type tokens
pub const INTEGER: &'static str = "INTEGER";
pub const BIT: &'static str = "BIT";
pub const OCTET: &'static str = "OCTET";
pub const STRING: &'static str = "STRING";
pub const BIT_STRING: &'static str = "BIT STRING";
pub const OCTET_STRING: &'static str = "OCTET STRING";
pub const OBJECT: &'static str = "OBJECT";
pub const IDENTIFIER: &'static str = "IDENTIFIER";
pub const OBJECT_IDENTIFIER: &'static str = "OBJECT IDENTIFIER";
pub const OBJECT_DESCRIPTOR: &'static str = "ObjectDescriptor";
pub const NUMERIC_STRING: &'static str = "NumericString";
pub const VISIBLE_STRING: &'static str = "VisibleString";
pub const GRAPHIC_STRING: &'static str = "GraphicString";
pub const GENERAL_STRING: &'static str = "GeneralString";
pub const UNIVERSAL_STRING: &'static str = "UniversalString";
pub const PRINTABLE_STRING: &'static str = "PrintableString";
pub const T61_STRING: &'static str = "T61String";
pub const UTC_TIME: &'static str = "UTCTime";
pub const GENERALIZED_TIME: &'static str = "GeneralizedTime";
pub const ENUMERATED: &'static str = "ENUMERATED";
pub const CHOICE: &'static str = "CHOICE";
pub const SEQUENCE: &'static str = "SEQUENCE";
pub const SET: &'static str = "SET";
pub const OF: &'static str = "OF";

// Tagging tokens
pub const UNIVERSAL: &'static str = "UNIVERSAL";
pub const APPLICATION: &'static str = "APPLICATION";
pub const IMPLICIT: &'static str = "IMPLICIT";
pub const EXPLICIT: &'static str = "EXPLICIT";
pub const AUTOMATIC: &'static str = "AUTOMATIC";
pub const TAGS: &'static str = "TAGS";

// Value tokens
pub const TRUE: &'static str = "TRUE";
pub const FALSE: &'static str = "FALSE";

// Module tokens
pub const BEGIN: &'static str = "BEGIN";
pub const END: &'static str = "END";
pub const DEFINITIONS: &'static str = "DEFINITIONS";
pub const IMPORTS: &'static str = "IMPORTS";
pub const EXPORTS: &'static str = "EXPORTS";
pub const FROM: &'static str = "FROM";

// Subtyping tokens
pub const SIZE: &'static str = "SIZE";
pub const DEFAULT: &'static str = "DEFAULT";
pub const OPTIONAL: &'static str = "OPTIONAL";
pub const CONSTRAINED: &'static str = "CONSTRAINED";
pub const BY: &'static str = "BY";

pub const ASSIGN: &'static str = "::=";
pub const RANGE: &'static str = "..";
pub const ELLIPSIS: &'static str = "...";
pub const COMMA: char = ',';
pub const SEMICOLON: char = ';';

/// A parsed ASN1 module.
///
/// The declarations in `types` keep the order in which they
/// appear in the module body. Object identifier value assignments
/// are recognized by the parser but never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Definition {
    pub name: String,
    pub tagging_environment: Option<TaggingEnvironment>,
    pub types: Vec<TypeDeclaration>,
    pub imports: Vec<Import>,
    pub exports: Vec<String>,
}

impl Definition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Looks up a top-level type declaration by its name
    pub fn get(&self, name: &str) -> Option<&TypeDeclaration> {
        self.types.iter().find(|t| t.name == name)
    }
}

/// Default tagging declared in a module header,
/// e.g. `DEFINITIONS IMPLICIT TAGS ::=`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaggingEnvironment {
    Automatic,
    Implicit,
    Explicit,
}

/// One `Symbol, ... FROM Module` group of an IMPORTS clause
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub module: String,
    pub symbols: Vec<String>,
}

impl From<(Vec<String>, &str)> for Import {
    fn from(value: (Vec<String>, &str)) -> Self {
        Self {
            symbols: value.0,
            module: value.1.into(),
        }
    }
}

/// A named top-level type declaration of a module.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: String,
    pub implicit: bool,
    pub explicit: bool,
    pub tag: Option<Tag>,
    pub r#type: ASN1Type,
}

impl From<(&str, ASN1Type)> for TypeDeclaration {
    fn from(value: (&str, ASN1Type)) -> Self {
        Self {
            name: value.0.into(),
            implicit: false,
            explicit: false,
            tag: None,
            r#type: value.1,
        }
    }
}

/// Tag classes that may prefix a top-level declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    Universal,
    Application,
}

/// Representation of a `[UNIVERSAL n]` or `[APPLICATION n]` tag.
/// The tag number is kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub class: TagClass,
    pub number: String,
}

impl From<(TagClass, &str)> for Tag {
    fn from(value: (TagClass, &str)) -> Self {
        Self {
            class: value.0,
            number: value.1.into(),
        }
    }
}

/// The possible types of an ASN1 data element.
/// `CustomReference` denotes a type declared elsewhere in the same
/// or an imported module; the reference is never resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ASN1Type {
    Alias(Alias),
    CustomReference(String),
    Integer(AsnInteger),
    Enumerated(AsnEnumerated),
    BitString(AsnBitString),
    Sequence(AsnSequence),
    Set(AsnSet),
    Choice(AsnChoice),
    Primitive(PrimitiveKind),
}

impl ASN1Type {
    /// Name of the variant, as printed by the command line tool
    pub fn kind(&self) -> &'static str {
        match self {
            ASN1Type::Alias(_) => "Alias",
            ASN1Type::CustomReference(_) => "CustomReference",
            ASN1Type::Integer(_) => "Integer",
            ASN1Type::Enumerated(_) => "Enumerated",
            ASN1Type::BitString(_) => "BitString",
            ASN1Type::Sequence(s) if s.of.is_some() => "SequenceOf",
            ASN1Type::Sequence(_) => "Sequence",
            ASN1Type::Set(_) => "Set",
            ASN1Type::Choice(_) => "Choice",
            ASN1Type::Primitive(p) => p.kind(),
        }
    }
}

impl Display for ASN1Type {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ASN1Type::Alias(a) => write!(f, "{}", a.target),
            ASN1Type::CustomReference(r) => write!(f, "{r}"),
            ASN1Type::Integer(_) => write!(f, "{INTEGER}"),
            ASN1Type::Enumerated(_) => write!(f, "{ENUMERATED}"),
            ASN1Type::BitString(_) => write!(f, "{BIT_STRING}"),
            ASN1Type::Sequence(AsnSequence { of: Some(of), .. }) => {
                write!(f, "{SEQUENCE} {OF} {of}")
            }
            ASN1Type::Sequence(_) => write!(f, "{SEQUENCE}"),
            ASN1Type::Set(_) => write!(f, "{SET}"),
            ASN1Type::Choice(_) => write!(f, "{CHOICE}"),
            ASN1Type::Primitive(p) => write!(f, "{p}"),
        }
    }
}

/// The ASN1 types that carry no payload beyond their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    OctetString,
    ObjectIdentifier,
    ObjectDescriptor,
    GraphicString,
    VisibleString,
    PrintableString,
    NumericString,
    GeneralString,
    UniversalString,
    T61String,
    UTCTime,
    GeneralizedTime,
}

impl PrimitiveKind {
    pub fn kind(&self) -> &'static str {
        match self {
            PrimitiveKind::OctetString => "OctetString",
            PrimitiveKind::ObjectIdentifier => "ObjectIdentifier",
            PrimitiveKind::ObjectDescriptor => "ObjectDescriptor",
            PrimitiveKind::GraphicString => "GraphicString",
            PrimitiveKind::VisibleString => "VisibleString",
            PrimitiveKind::PrintableString => "PrintableString",
            PrimitiveKind::NumericString => "NumericString",
            PrimitiveKind::GeneralString => "GeneralString",
            PrimitiveKind::UniversalString => "UniversalString",
            PrimitiveKind::T61String => "T61String",
            PrimitiveKind::UTCTime => "UTCTime",
            PrimitiveKind::GeneralizedTime => "GeneralizedTime",
        }
    }

    /// The ASN1 notation of the type
    pub fn notation(&self) -> &'static str {
        match self {
            PrimitiveKind::OctetString => OCTET_STRING,
            PrimitiveKind::ObjectIdentifier => OBJECT_IDENTIFIER,
            PrimitiveKind::ObjectDescriptor => OBJECT_DESCRIPTOR,
            PrimitiveKind::GraphicString => GRAPHIC_STRING,
            PrimitiveKind::VisibleString => VISIBLE_STRING,
            PrimitiveKind::PrintableString => PRINTABLE_STRING,
            PrimitiveKind::NumericString => NUMERIC_STRING,
            PrimitiveKind::GeneralString => GENERAL_STRING,
            PrimitiveKind::UniversalString => UNIVERSAL_STRING,
            PrimitiveKind::T61String => T61_STRING,
            PrimitiveKind::UTCTime => UTC_TIME,
            PrimitiveKind::GeneralizedTime => GENERALIZED_TIME,
        }
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.notation())
    }
}
