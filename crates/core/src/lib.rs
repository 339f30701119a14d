//! Minnow Core - Values, tuples and schema descriptors.
//!
//! This crate provides the foundational types for the Minnow query engine:
//!
//! - `DataType`: Supported field types (Boolean, Int32, Int64, Float64, String)
//! - `Value`: Runtime values held by tuple fields
//! - `Tuple`: An ordered set of values tagged with its descriptor
//! - `schema`: Tuple descriptors and their merge operation
//! - `Error`: Error types shared by every layer
//!
//! # Example
//!
//! ```rust
//! use minnow_core::{DataType, Tuple, Value};
//! use minnow_core::schema::{FieldDesc, TupleDesc};
//! use std::rc::Rc;
//!
//! let desc = Rc::new(TupleDesc::new(vec![
//!     FieldDesc::new("id", DataType::Int64),
//!     FieldDesc::new("name", DataType::String),
//! ]));
//!
//! let tuple = Tuple::new(desc, vec![
//!     Value::Int64(1),
//!     Value::String("Alice".into()),
//! ]).unwrap();
//!
//! assert_eq!(tuple.get(1), Some(&Value::String("Alice".into())));
//! ```

#![no_std]

extern crate alloc;

mod error;
pub mod schema;
mod tuple;
mod types;
mod value;

pub use error::{Error, Result};
pub use tuple::Tuple;
pub use types::DataType;
pub use value::Value;
