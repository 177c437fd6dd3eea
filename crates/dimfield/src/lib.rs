//! Metadata contract for dimension fields.
//!
//! A dimension (a categorical axis in a multi-dimensional query model, e.g.
//! "country" or "user_id") carries a set of fields: its identifier, its
//! description, its display label, and so on. This crate defines the contract
//! each field exposes and the canonical external representation a field value
//! serializes to.

pub mod field;
pub mod serialize;

use thiserror::Error as ThisError;

/// Maximum length for field schema identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        field::{DimensionField, FieldDef, FieldList, StandardField},
        serialize::FieldRepr,
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum Error {
    #[error("duplicate field name '{name}'")]
    DuplicateField { name: String },

    #[error("field description cannot be empty")]
    EmptyDescription,

    #[error("field long name cannot be empty")]
    EmptyLongName,

    #[error("field name cannot be empty")]
    EmptyName,

    #[error("field name length {len} exceeds limit {max}")]
    NameTooLong { len: usize, max: usize },

    #[error("unknown standard field '{0}'")]
    UnknownStandardField(String),
}
