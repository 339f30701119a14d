//! Tuple structure for Minnow.
//!
//! A `Tuple` is an ordered sequence of values tagged with the descriptor of
//! the stream it belongs to. Descriptors are shared behind an `Rc` so that
//! every tuple an operator emits points at the same schema.

use crate::error::{Error, Result};
use crate::schema::TupleDesc;
use crate::value::Value;
use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

/// A tuple of field values.
#[derive(Clone, Debug)]
pub struct Tuple {
    /// Schema of this tuple.
    desc: Rc<TupleDesc>,
    /// Values stored in this tuple, indexed by field position.
    values: Vec<Value>,
}

impl Tuple {
    /// Creates a new tuple, checking arity and field types against `desc`.
    ///
    /// Null is accepted for every field.
    pub fn new(desc: Rc<TupleDesc>, values: Vec<Value>) -> Result<Self> {
        if values.len() != desc.num_fields() {
            return Err(Error::invalid_schema(format!(
                "tuple has {} values but descriptor has {} fields",
                values.len(),
                desc.num_fields()
            )));
        }
        for (value, expected) in values.iter().zip(desc.types()) {
            if let Some(got) = value.data_type() {
                if got != expected {
                    return Err(Error::type_mismatch(expected, got));
                }
            }
        }
        Ok(Self { desc, values })
    }

    /// Concatenates all left values followed by all right values under `desc`.
    ///
    /// `desc` is expected to be the merge of both input descriptors; the
    /// inputs were already validated, so no per-field check is repeated.
    pub fn concat(desc: Rc<TupleDesc>, left: &Tuple, right: &Tuple) -> Self {
        let mut values = Vec::with_capacity(left.len() + right.len());
        values.extend_from_slice(&left.values);
        values.extend_from_slice(&right.values);
        debug_assert_eq!(values.len(), desc.num_fields());
        Self { desc, values }
    }

    /// Returns the descriptor.
    #[inline]
    pub fn desc(&self) -> &Rc<TupleDesc> {
        &self.desc
    }

    /// Returns a reference to the values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the tuple and returns its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Gets a value at the given field index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the number of values in this tuple.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this tuple has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;
    use alloc::string::ToString;
    use alloc::vec;

    fn int_text() -> Rc<TupleDesc> {
        Rc::new(TupleDesc::from_types(&[DataType::Int64, DataType::String]))
    }

    #[test]
    fn test_tuple_new() {
        let tuple = Tuple::new(int_text(), vec![Value::Int64(42), Value::String("Alice".into())]).unwrap();
        assert_eq!(tuple.len(), 2);
        assert_eq!(tuple.get(0), Some(&Value::Int64(42)));
        assert_eq!(tuple.get(2), None);
    }

    #[test]
    fn test_tuple_arity_checked() {
        let err = Tuple::new(int_text(), vec![Value::Int64(1)]).unwrap_err();
        assert!(matches!(err, Error::InvalidSchema { .. }));
    }

    #[test]
    fn test_tuple_type_checked() {
        let err = Tuple::new(int_text(), vec![Value::String("x".into()), Value::String("y".into())])
            .unwrap_err();
        assert_eq!(err, Error::type_mismatch(DataType::Int64, DataType::String));
    }

    #[test]
    fn test_tuple_accepts_null() {
        let tuple = Tuple::new(int_text(), vec![Value::Null, Value::Null]).unwrap();
        assert!(tuple.get(0).unwrap().is_null());
    }

    #[test]
    fn test_tuple_concat() {
        let left = Tuple::new(int_text(), vec![Value::Int64(1), Value::String("a".into())]).unwrap();
        let right = Tuple::new(int_text(), vec![Value::Int64(1), Value::String("x".into())]).unwrap();
        let merged = Rc::new(TupleDesc::merge(left.desc(), right.desc()));

        let joined = Tuple::concat(merged.clone(), &left, &right);
        assert_eq!(joined.len(), 4);
        assert!(Rc::ptr_eq(joined.desc(), &merged));
        assert_eq!(joined.to_string(), "(1, \"a\", 1, \"x\")");
    }
}
