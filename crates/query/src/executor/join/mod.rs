//! JOIN operator implementations.

mod nested;

pub use nested::NestedLoopJoin;
