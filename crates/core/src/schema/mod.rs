//! Schema module for Minnow.
//!
//! A tuple descriptor names and types each field of a tuple stream. Operators
//! derive their output descriptor from their children's.

mod field;
mod tuple_desc;

pub use field::FieldDesc;
pub use tuple_desc::TupleDesc;
