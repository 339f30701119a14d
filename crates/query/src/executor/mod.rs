//! Query executor module.
//!
//! Every operator implements the pull-based `DbIterator` protocol.

pub mod join;
mod operator;
mod scan;

pub use join::NestedLoopJoin;
pub use operator::{drain, BoxedIterator, DbIterator};
pub use scan::SeqScan;
