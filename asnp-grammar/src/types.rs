use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::ASN1Type;

/// A declaration of the form `name Target ::= value`.
/// The optional value is kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Alias {
    pub target: String,
    pub default: Option<String>,
}

impl From<(&str, Option<&str>)> for Alias {
    fn from(value: (&str, Option<&str>)) -> Self {
        Self {
            target: value.0.into(),
            default: value.1.map(Into::into),
        }
    }
}

/// Named numbers of an INTEGER, ENUMERATED or BIT STRING type.
///
/// Values are stored as raw literal text and never interpreted.
/// Inserting a name a second time replaces the earlier value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistinguishedValues {
    pub values: BTreeMap<String, String>,
    pub extensible: bool,
}

impl DistinguishedValues {
    pub fn insert(&mut self, name: &str, value: &str) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a, const N: usize> From<[(&'a str, &'a str); N]> for DistinguishedValues {
    fn from(value: [(&'a str, &'a str); N]) -> Self {
        let mut dv = DistinguishedValues::default();
        value.iter().for_each(|(name, v)| dv.insert(name, v));
        dv
    }
}

/// Representation of an ASN1 INTEGER data element
/// with its distinguished values. Value range constraints
/// are validated by the parser but not kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AsnInteger {
    pub distinguished_values: DistinguishedValues,
}

/// Representation of an ASN1 ENUMERATED data element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AsnEnumerated {
    pub distinguished_values: DistinguishedValues,
}

/// Representation of an ASN1 BIT STRING data element
/// with the named bits as distinguished values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AsnBitString {
    pub distinguished_values: DistinguishedValues,
}

/// Representation of an ASN1 SEQUENCE or, if `of` is set,
/// SEQUENCE OF data element.
///
/// The element type of a SEQUENCE OF is recorded as its
/// notation (e.g. `"OBJECT IDENTIFIER"` or a type reference)
/// rather than as a nested type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AsnSequence {
    pub of: Option<String>,
    pub items: Vec<Item>,
}

/// Representation of an ASN1 SET data element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AsnSet {
    pub items: Vec<Item>,
}

/// Representation of an ASN1 CHOICE data element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AsnChoice {
    pub items: Vec<Item>,
}

/// The data elements that own a list of items
pub trait ItemContainer {
    fn push_item(&mut self, item: Item);
    fn items(&self) -> &[Item];
}

impl ItemContainer for AsnSequence {
    fn push_item(&mut self, item: Item) {
        self.items.push(item)
    }

    fn items(&self) -> &[Item] {
        &self.items
    }
}

impl ItemContainer for AsnSet {
    fn push_item(&mut self, item: Item) {
        self.items.push(item)
    }

    fn items(&self) -> &[Item] {
        &self.items
    }
}

impl ItemContainer for AsnChoice {
    fn push_item(&mut self, item: Item) {
        self.items.push(item)
    }

    fn items(&self) -> &[Item] {
        &self.items
    }
}

/// A member of a SEQUENCE, SET or CHOICE
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Component(Component),
    /// A bare `...`
    ExtensionMarker,
}

impl Item {
    pub fn is_extension_marker(&self) -> bool {
        matches!(self, Item::ExtensionMarker)
    }

    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Item::Component(c) => Some(c),
            Item::ExtensionMarker => None,
        }
    }
}

impl From<Component> for Item {
    fn from(value: Component) -> Self {
        Item::Component(value)
    }
}

/// A named member of a SEQUENCE, SET or CHOICE.
///
/// `position` holds the tag number of a `[n]` or `[APPLICATION n]`
/// prefix as written. A DEFAULT value is checked for its form but
/// only its presence is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    pub position: Option<String>,
    pub application: bool,
    pub implicit: bool,
    pub explicit: bool,
    pub r#type: ASN1Type,
    pub optional: bool,
    pub has_default: bool,
}

impl From<(&str, ASN1Type)> for Component {
    fn from(value: (&str, ASN1Type)) -> Self {
        Self {
            name: value.0.into(),
            position: None,
            application: false,
            implicit: false,
            explicit: false,
            r#type: value.1,
            optional: false,
            has_default: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimitiveKind;

    #[test]
    fn last_insert_wins_on_duplicate_names() {
        let mut dv = DistinguishedValues::default();
        dv.insert("red", "0");
        dv.insert("red", "7");
        assert_eq!(dv.len(), 1);
        assert_eq!(dv.get("red"), Some("7"));
    }

    #[test]
    fn containers_collect_items_in_order() {
        let mut choice = AsnChoice::default();
        choice.push_item(Component::from(("a", ASN1Type::Integer(AsnInteger::default()))).into());
        choice.push_item(Item::ExtensionMarker);
        choice.push_item(
            Component::from(("b", ASN1Type::Primitive(PrimitiveKind::OctetString))).into(),
        );
        assert_eq!(choice.items().len(), 3);
        assert!(choice.items()[1].is_extension_marker());
        assert_eq!(choice.items()[2].as_component().map(|c| c.name.as_str()), Some("b"));
    }
}
