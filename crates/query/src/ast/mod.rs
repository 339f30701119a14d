//! AST module for comparison operators and predicates.

mod op;
mod predicate;

pub use op::Op;
pub use predicate::{JoinPredicate, Predicate};
