//! Pull-based iterator protocol shared by every operator.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use minnow_core::schema::TupleDesc;
use minnow_core::{Error, Result, Tuple};

/// An owned operator handle, as held by parent operators.
pub type BoxedIterator = Box<dyn DbIterator>;

/// A query operator that produces tuples one at a time on demand.
///
/// Call order is `open`, then any mix of `has_next`/`next`/`rewind`, then
/// `close`. Pulling from a closed operator fails with `InvalidOperation`;
/// pulling past the end fails with `NoSuchElement`.
pub trait DbIterator {
    /// Prepares internal state. Must be called before any pull.
    fn open(&mut self) -> Result<()>;

    /// Returns whether another tuple is available.
    fn has_next(&mut self) -> Result<bool>;

    /// Returns the next tuple.
    fn next(&mut self) -> Result<Tuple>;

    /// Resets to the position right after `open`.
    fn rewind(&mut self) -> Result<()>;

    /// Releases internal state. The operator is unusable until reopened.
    fn close(&mut self) -> Result<()>;

    /// Schema of the tuples this operator produces. Valid from construction on.
    fn tuple_desc(&self) -> &Rc<TupleDesc>;

    /// Borrows the child operators, left to right.
    fn children(&self) -> Vec<&dyn DbIterator> {
        Vec::new()
    }

    /// Replaces the child operators and returns the replaced ones.
    ///
    /// Leaf operators accept only an empty list.
    fn set_children(&mut self, children: Vec<BoxedIterator>) -> Result<Vec<BoxedIterator>> {
        if children.is_empty() {
            Ok(Vec::new())
        } else {
            Err(Error::invalid_operation(format!(
                "leaf operator takes no children, got {}",
                children.len()
            )))
        }
    }
}

/// Error for a pull against an operator that is not open.
pub(crate) fn not_open(operator: &str) -> Error {
    Error::invalid_operation(format!("{} is not open", operator))
}

/// Pulls every remaining tuple from an open iterator.
pub fn drain(iter: &mut dyn DbIterator) -> Result<Vec<Tuple>> {
    let mut tuples = Vec::new();
    while iter.has_next()? {
        tuples.push(iter.next()?);
    }
    Ok(tuples)
}
