//! Data type definitions for Minnow.
//!
//! This module defines the field types a tuple descriptor can declare.

use core::fmt;

/// Supported field types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Boolean type (true/false)
    Boolean,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point number
    Float64,
    /// UTF-8 string
    String,
}

impl DataType {
    /// Returns the display name used in schema renderings.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "BOOL",
            DataType::Int32 => "INT32",
            DataType::Int64 => "INT64",
            DataType::Float64 => "FLOAT64",
            DataType::String => "STRING",
        }
    }

    /// Returns whether values of this type live on an integer domain.
    ///
    /// Only integer fields get histograms.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, DataType::Int32 | DataType::Int64)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
