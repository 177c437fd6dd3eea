//! Canonical external representation of a dimension field.
//!
//! The representation is a key-ordered object: `name`, then `longName` (only
//! when a display override exists), then `description`. Key order is a
//! binding part of the contract so that serialized output stays deterministic
//! and diff-friendly regardless of which variant produced the value, and the
//! ordering is enforced here rather than left to a generic serializer.

use crate::field::DimensionField;
use serde::{Serialize, Serializer, ser::SerializeMap};


/// Wire keys, in emission order.
const NAME_KEY: &str = "name";
const LONG_NAME_KEY: &str = "longName";
const DESCRIPTION_KEY: &str = "description";

///
/// FieldRepr
///
/// Borrowed view of any [`DimensionField`] in its canonical shape. Every
/// variant's `Serialize` impl delegates here, so each serde path emits the
/// identical byte stream.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldRepr<'a> {
    pub name: &'a str,
    pub long_name: Option<&'a str>,
    pub description: &'a str,
}

impl<'a, F> From<&'a F> for FieldRepr<'a>
where
    F: DimensionField + ?Sized,
{
    fn from(field: &'a F) -> Self {
        Self {
            name: field.name(),
            long_name: field.long_name(),
            description: field.description(),
        }
    }
}

impl Serialize for FieldRepr<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = 2 + usize::from(self.long_name.is_some());
        let mut map = serializer.serialize_map(Some(entries))?;

        map.serialize_entry(NAME_KEY, self.name)?;
        if let Some(long_name) = self.long_name {
            map.serialize_entry(LONG_NAME_KEY, long_name)?;
        }
        map.serialize_entry(DESCRIPTION_KEY, self.description)?;

        map.end()
    }
}
