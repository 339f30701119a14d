//! Error types for Minnow.

use crate::types::DataType;
use alloc::string::String;
use core::fmt;

/// Result type alias for Minnow operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types shared by every Minnow layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Type mismatch error.
    TypeMismatch {
        expected: DataType,
        got: DataType,
    },
    /// Invalid schema or tuple shape.
    InvalidSchema {
        message: String,
    },
    /// Field index or name not present in a tuple descriptor.
    FieldNotFound {
        field: String,
    },
    /// Value outside the domain a histogram was built for.
    ValueOutOfRange {
        value: i64,
        min: i64,
        max: i64,
    },
    /// Invalid operation, such as pulling from a closed iterator.
    InvalidOperation {
        message: String,
    },
    /// The iterator has no more tuples.
    NoSuchElement,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {}, got {}", expected, got)
            }
            Error::InvalidSchema { message } => {
                write!(f, "Invalid schema: {}", message)
            }
            Error::FieldNotFound { field } => {
                write!(f, "Field not found: {}", field)
            }
            Error::ValueOutOfRange { value, min, max } => {
                write!(f, "Value {} outside histogram domain [{}, {}]", value, min, max)
            }
            Error::InvalidOperation { message } => {
                write!(f, "Invalid operation: {}", message)
            }
            Error::NoSuchElement => f.write_str("No more tuples"),
        }
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: DataType, got: DataType) -> Self {
        Error::TypeMismatch { expected, got }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Error::InvalidSchema {
            message: message.into(),
        }
    }

    /// Creates a field not found error.
    pub fn field_not_found(field: impl Into<String>) -> Self {
        Error::FieldNotFound {
            field: field.into(),
        }
    }

    /// Creates a histogram domain error.
    pub fn value_out_of_range(value: i64, min: i64, max: i64) -> Self {
        Error::ValueOutOfRange { value, min, max }
    }

    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Error::InvalidOperation {
            message: message.into(),
        }
    }

    /// Returns true if this error only reports iterator exhaustion.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::NoSuchElement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::type_mismatch(DataType::Int32, DataType::String);
        assert!(err.to_string().contains("Type mismatch"));

        let err = Error::field_not_found("t.id");
        assert!(err.to_string().contains("t.id"));

        let err = Error::value_out_of_range(101, 1, 100);
        assert_eq!(err.to_string(), "Value 101 outside histogram domain [1, 100]");
    }

    #[test]
    fn test_exhaustion() {
        assert!(Error::NoSuchElement.is_exhausted());
        assert!(!Error::invalid_operation("closed").is_exhausted());
    }
}
