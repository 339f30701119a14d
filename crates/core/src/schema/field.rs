//! Field definition for tuple descriptors.

use crate::types::DataType;
use alloc::format;
use alloc::string::String;

/// A single named, typed field of a tuple descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDesc {
    /// Field name, possibly alias-qualified (`alias.name`).
    name: String,
    /// Data type of the field.
    data_type: DataType,
}

impl FieldDesc {
    /// Creates a new field definition.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    /// Creates a field without a name.
    pub fn unnamed(data_type: DataType) -> Self {
        Self::new(String::new(), data_type)
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the data type.
    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns a copy of this field with its name prefixed by `alias.`.
    pub fn qualified(&self, alias: &str) -> Self {
        Self {
            name: format!("{}.{}", alias, self.name),
            data_type: self.data_type,
        }
    }
}
