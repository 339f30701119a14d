//! Predicate definitions for tuple filtering.

use super::op::Op;
use minnow_core::{Tuple, Value};

/// A predicate comparing one field of a tuple to a constant.
#[derive(Clone, Debug, PartialEq)]
pub struct Predicate {
    field: usize,
    op: Op,
    operand: Value,
}

impl Predicate {
    pub fn new(field: usize, op: Op, operand: Value) -> Self {
        Self { field, op, operand }
    }

    #[inline]
    pub fn field(&self) -> usize {
        self.field
    }

    #[inline]
    pub fn op(&self) -> Op {
        self.op
    }

    #[inline]
    pub fn operand(&self) -> &Value {
        &self.operand
    }

    /// Evaluates `tuple[field] <op> operand`. A missing field never matches.
    pub fn filter(&self, tuple: &Tuple) -> bool {
        match tuple.get(self.field) {
            Some(value) => self.op.compare(value, &self.operand),
            None => false,
        }
    }
}

/// A join predicate compares a field of the left tuple to a field of the right tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JoinPredicate {
    field1: usize,
    op: Op,
    field2: usize,
}

impl JoinPredicate {
    /// Creates `left[field1] <op> right[field2]`.
    pub fn new(field1: usize, op: Op, field2: usize) -> Self {
        Self { field1, op, field2 }
    }

    /// Creates an equi-join predicate.
    pub fn equals(field1: usize, field2: usize) -> Self {
        Self::new(field1, Op::Equals, field2)
    }

    /// Field index into the left tuple.
    #[inline]
    pub fn field1(&self) -> usize {
        self.field1
    }

    /// Field index into the right tuple.
    #[inline]
    pub fn field2(&self) -> usize {
        self.field2
    }

    #[inline]
    pub fn op(&self) -> Op {
        self.op
    }

    /// Checks if this is an equi-join.
    pub fn is_equi_join(&self) -> bool {
        self.op == Op::Equals
    }

    /// Reverses the join predicate (swaps left and right fields).
    pub fn reverse(&self) -> Self {
        Self::new(self.field2, self.op.reverse(), self.field1)
    }

    /// Evaluates the join condition for a pair of tuples.
    pub fn filter(&self, left: &Tuple, right: &Tuple) -> bool {
        let left_value = match left.get(self.field1) {
            Some(v) => v,
            None => return false,
        };
        let right_value = match right.get(self.field2) {
            Some(v) => v,
            None => return false,
        };

        self.op.compare(left_value, right_value)
    }
}
