//! Minnow Query - Selectivity statistics and pull-based execution.
//!
//! This crate provides:
//!
//! - `ast`: Comparison operators, scan predicates and join predicates
//! - `stats`: Equi-width integer histograms and per-table statistics
//! - `executor`: The `DbIterator` pull protocol, sequential scan and nested loop join
//!
//! # Example
//!
//! ```rust
//! use minnow_core::schema::{FieldDesc, TupleDesc};
//! use minnow_core::{DataType, Value};
//! use minnow_query::ast::JoinPredicate;
//! use minnow_query::executor::{drain, DbIterator, NestedLoopJoin, SeqScan};
//!
//! let desc = TupleDesc::new(vec![
//!     FieldDesc::new("id", DataType::Int64),
//!     FieldDesc::new("name", DataType::String),
//! ]);
//! let left = SeqScan::new("l", &desc, vec![
//!     vec![Value::Int64(1), Value::String("a".into())],
//! ]).unwrap();
//! let right = SeqScan::new("r", &desc, vec![
//!     vec![Value::Int64(1), Value::String("x".into())],
//!     vec![Value::Int64(2), Value::String("y".into())],
//! ]).unwrap();
//!
//! let mut join = NestedLoopJoin::new(
//!     JoinPredicate::equals(0, 0),
//!     Box::new(left),
//!     Box::new(right),
//! ).unwrap();
//! join.open().unwrap();
//! let rows = drain(&mut join).unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].len(), 4);
//! ```

#![no_std]

extern crate alloc;

pub mod ast;
pub mod executor;
pub mod stats;
