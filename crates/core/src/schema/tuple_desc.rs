//! Tuple descriptor for Minnow schemas.

use super::field::FieldDesc;
use crate::error::{Error, Result};
use crate::types::DataType;
use alloc::format;
use alloc::vec::Vec;
use core::fmt;

/// The schema of a tuple stream: an ordered list of fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TupleDesc {
    fields: Vec<FieldDesc>,
}

impl TupleDesc {
    /// Creates a descriptor from the given fields.
    pub fn new(fields: Vec<FieldDesc>) -> Self {
        Self { fields }
    }

    /// Creates a descriptor of unnamed fields with the given types.
    pub fn from_types(types: &[DataType]) -> Self {
        Self::new(types.iter().map(|t| FieldDesc::unnamed(*t)).collect())
    }

    /// Merges two descriptors: all left fields in order, then all right fields.
    pub fn merge(left: &TupleDesc, right: &TupleDesc) -> TupleDesc {
        let mut fields = Vec::with_capacity(left.num_fields() + right.num_fields());
        fields.extend_from_slice(&left.fields);
        fields.extend_from_slice(&right.fields);
        TupleDesc { fields }
    }

    /// Returns a copy of this descriptor with every field name prefixed by `alias.`.
    pub fn qualified(&self, alias: &str) -> TupleDesc {
        TupleDesc {
            fields: self.fields.iter().map(|f| f.qualified(alias)).collect(),
        }
    }

    /// Returns the number of fields.
    #[inline]
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Returns all fields.
    #[inline]
    pub fn fields(&self) -> &[FieldDesc] {
        &self.fields
    }

    /// Gets a field by index.
    pub fn field(&self, index: usize) -> Result<&FieldDesc> {
        self.fields
            .get(index)
            .ok_or_else(|| Error::field_not_found(format!("#{}", index)))
    }

    /// Gets a field name by index.
    pub fn field_name(&self, index: usize) -> Result<&str> {
        self.field(index).map(FieldDesc::name)
    }

    /// Gets a field type by index.
    pub fn field_type(&self, index: usize) -> Result<DataType> {
        self.field(index).map(FieldDesc::data_type)
    }

    /// Finds the index of the first field with the given name.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| Error::field_not_found(name))
    }

    /// Returns the field types in order.
    pub fn types(&self) -> impl Iterator<Item = DataType> + '_ {
        self.fields.iter().map(FieldDesc::data_type)
    }
}

impl fmt::Display for TupleDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}({})", field.name(), field.data_type())?;
        }
        Ok(())
    }
}
