//! Comparison operators.

use core::cmp::Ordering;
use core::fmt;
use minnow_core::Value;

/// A comparison operator between two values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEq,
    GreaterThan,
    GreaterThanOrEq,
}

impl Op {
    /// All operators, in declaration order.
    pub const ALL: [Op; 6] = [
        Op::Equals,
        Op::NotEquals,
        Op::LessThan,
        Op::LessThanOrEq,
        Op::GreaterThan,
        Op::GreaterThanOrEq,
    ];

    /// Returns the SQL symbol of this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Equals => "=",
            Op::NotEquals => "<>",
            Op::LessThan => "<",
            Op::LessThanOrEq => "<=",
            Op::GreaterThan => ">",
            Op::GreaterThanOrEq => ">=",
        }
    }

    /// Returns the operator that holds when the operands are swapped.
    pub fn reverse(&self) -> Op {
        match self {
            Op::LessThan => Op::GreaterThan,
            Op::LessThanOrEq => Op::GreaterThanOrEq,
            Op::GreaterThan => Op::LessThan,
            Op::GreaterThanOrEq => Op::LessThanOrEq,
            other => *other,
        }
    }

    /// Evaluates `left <op> right`.
    ///
    /// Null never satisfies any comparison.
    pub fn compare(&self, left: &Value, right: &Value) -> bool {
        if left.is_null() || right.is_null() {
            return false;
        }

        let ord = left.cmp(right);
        match self {
            Op::Equals => ord == Ordering::Equal,
            Op::NotEquals => ord != Ordering::Equal,
            Op::LessThan => ord == Ordering::Less,
            Op::LessThanOrEq => ord != Ordering::Greater,
            Op::GreaterThan => ord == Ordering::Greater,
            Op::GreaterThanOrEq => ord != Ordering::Less,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_compare_ints() {
        let one = Value::Int64(1);
        let two = Value::Int64(2);

        assert!(Op::Equals.compare(&one, &one));
        assert!(!Op::Equals.compare(&one, &two));
        assert!(Op::NotEquals.compare(&one, &two));
        assert!(Op::LessThan.compare(&one, &two));
        assert!(Op::LessThanOrEq.compare(&two, &two));
        assert!(Op::GreaterThan.compare(&two, &one));
        assert!(Op::GreaterThanOrEq.compare(&one, &one));
        assert!(!Op::GreaterThanOrEq.compare(&one, &two));
    }

    #[test]
    fn test_compare_mixed_width() {
        assert!(Op::Equals.compare(&Value::Int32(7), &Value::Int64(7)));
        assert!(Op::LessThan.compare(&Value::Int32(7), &Value::Float64(7.5)));
    }

    #[test]
    fn test_null_never_matches() {
        for op in Op::ALL {
            assert!(!op.compare(&Value::Null, &Value::Int64(1)));
            assert!(!op.compare(&Value::Int64(1), &Value::Null));
            assert!(!op.compare(&Value::Null, &Value::Null));
        }
    }

    #[test]
    fn test_reverse() {
        assert_eq!(Op::LessThan.reverse(), Op::GreaterThan);
        assert_eq!(Op::GreaterThanOrEq.reverse(), Op::LessThanOrEq);
        assert_eq!(Op::Equals.reverse(), Op::Equals);

        let (a, b) = (Value::Int64(3), Value::Int64(9));
        for op in Op::ALL {
            assert_eq!(op.compare(&a, &b), op.reverse().compare(&b, &a));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Op::NotEquals.to_string(), "<>");
        assert_eq!(Op::LessThanOrEq.to_string(), "<=");
    }
}
