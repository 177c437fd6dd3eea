use crate::{Error, MAX_FIELD_NAME_LEN, serialize::FieldRepr};
use derive_more::Deref;
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};


///
/// DimensionField
///
/// Capability set every dimension-field variant exposes. All operations are
/// pure accessors; a field value is immutable once constructed and is owned
/// by exactly one dimension definition.
///

pub trait DimensionField: fmt::Debug {
    /// The identifying name of the field.
    ///
    /// Unique within the owning dimension's field set; uniqueness is enforced
    /// by [`FieldList`], not here.
    fn name(&self) -> &str;

    /// The display label of the field, when distinct from `name`.
    ///
    /// `None` signals that no display override exists and consumers should
    /// fall back to [`name`](Self::name). The fallback itself is the
    /// consumer's job.
    fn long_name(&self) -> Option<&str> {
        None
    }

    /// A human-readable explanation of what the field represents.
    fn description(&self) -> &str;
}

///
/// StandardField
///
/// The fields every dimension carries regardless of configuration. Neither
/// variant overrides the display label.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StandardField {
    Id,
    Desc,
}

impl DimensionField for StandardField {
    fn name(&self) -> &str {
        match self {
            Self::Id => "id",
            Self::Desc => "desc",
        }
    }

    fn description(&self) -> &str {
        match self {
            Self::Id => "Dimension ID",
            Self::Desc => "Dimension Description",
        }
    }
}

impl fmt::Display for StandardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StandardField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "desc" => Ok(Self::Desc),
            _ => Err(Error::UnknownStandardField(s.to_string())),
        }
    }
}

impl Serialize for StandardField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FieldRepr::from(self).serialize(serializer)
    }
}

///
/// FieldDef
///
/// A constructed field variant, validated once at construction and immutable
/// afterwards.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldDef {
    name: String,
    long_name: Option<String>,
    description: String,
}

impl FieldDef {
    /// Create a field with no display override.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self, Error> {
        Self::build(name.into(), None, description.into())
    }

    /// Create a field whose display label differs from its name.
    pub fn with_long_name(
        name: impl Into<String>,
        long_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::build(name.into(), Some(long_name.into()), description.into())
    }

    fn build(name: String, long_name: Option<String>, description: String) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if name.len() > MAX_FIELD_NAME_LEN {
            return Err(Error::NameTooLong {
                len: name.len(),
                max: MAX_FIELD_NAME_LEN,
            });
        }
        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }
        // a display override is either absent or non-empty
        if long_name.as_deref().is_some_and(str::is_empty) {
            return Err(Error::EmptyLongName);
        }

        Ok(Self {
            name,
            long_name,
            description,
        })
    }
}

impl DimensionField for FieldDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Serialize for FieldDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FieldRepr::from(self).serialize(serializer)
    }
}

///
/// FieldList
///
/// The ordered field set owned by one dimension definition. Iteration and
/// serialization follow insertion order; field names are unique within the
/// list.
///

#[derive(Debug, Default, Deref)]
pub struct FieldList {
    fields: Vec<Box<dyn DimensionField>>,
}

impl FieldList {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field, rejecting a name already present in the list.
    pub fn push(&mut self, field: Box<dyn DimensionField>) -> Result<(), Error> {
        if self.get(field.name()).is_some() {
            return Err(Error::DuplicateField {
                name: field.name().to_string(),
            });
        }
        self.fields.push(field);

        Ok(())
    }

    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn DimensionField> {
        self.fields
            .iter()
            .find(|field| field.name() == name)
            .map(AsRef::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DimensionField> {
        self.fields.iter().map(AsRef::as_ref)
    }
}

impl Serialize for FieldList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(FieldRepr::from))
    }
}
