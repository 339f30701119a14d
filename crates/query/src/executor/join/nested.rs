//! Nested Loop Join operator.

use crate::ast::JoinPredicate;
use crate::executor::operator::{not_open, BoxedIterator, DbIterator};
use alloc::format;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace};
use minnow_core::schema::TupleDesc;
use minnow_core::{Error, Result, Tuple};

/// Iteration progress, only meaningful while open.
#[derive(Default)]
struct Cursor {
    /// Outer tuple currently being matched against the inner child.
    outer: Option<Tuple>,
    /// Output fetched by `has_next` but not yet returned by `next`.
    peeked: Option<Tuple>,
}

enum JoinState {
    Closed,
    Open(Cursor),
    /// The outer child ran out; nothing more until `rewind`.
    Exhausted,
}

/// Nested Loop Join operator.
///
/// For each tuple of the left (outer) child, rescans the right (inner)
/// child and emits the concatenation of every pair satisfying the join
/// predicate. Output order is left-then-right scan order. The inner child's
/// own cursor tracks the scan position between calls; the operator itself
/// only remembers the current outer tuple.
pub struct NestedLoopJoin {
    predicate: JoinPredicate,
    left: BoxedIterator,
    right: BoxedIterator,
    /// Merge of both children's descriptors.
    desc: Rc<TupleDesc>,
    state: JoinState,
}

impl NestedLoopJoin {
    /// Creates a join of `left` and `right` on `predicate`.
    ///
    /// Fails if either predicate field is missing from its child's schema.
    pub fn new(predicate: JoinPredicate, left: BoxedIterator, right: BoxedIterator) -> Result<Self> {
        let desc = Self::merged_desc(&predicate, &*left, &*right)?;
        Ok(Self {
            predicate,
            left,
            right,
            desc,
            state: JoinState::Closed,
        })
    }

    fn merged_desc(
        predicate: &JoinPredicate,
        left: &dyn DbIterator,
        right: &dyn DbIterator,
    ) -> Result<Rc<TupleDesc>> {
        left.tuple_desc().field(predicate.field1())?;
        right.tuple_desc().field(predicate.field2())?;
        Ok(Rc::new(TupleDesc::merge(left.tuple_desc(), right.tuple_desc())))
    }

    #[inline]
    pub fn predicate(&self) -> &JoinPredicate {
        &self.predicate
    }

    /// Alias-qualified name of the left join field.
    pub fn join_field1_name(&self) -> &str {
        self.left.tuple_desc().fields()[self.predicate.field1()].name()
    }

    /// Alias-qualified name of the right join field.
    pub fn join_field2_name(&self) -> &str {
        self.right.tuple_desc().fields()[self.predicate.field2()].name()
    }

    /// Produces the next matching pair, or `None` once the outer child is exhausted.
    fn fetch_next(&mut self) -> Result<Option<Tuple>> {
        let cursor = match &mut self.state {
            JoinState::Open(cursor) => cursor,
            JoinState::Exhausted => return Ok(None),
            JoinState::Closed => return Err(not_open("NestedLoopJoin")),
        };

        let next = nested_loop(
            cursor,
            &self.predicate,
            &mut *self.left,
            &mut *self.right,
            &self.desc,
        )?;
        if next.is_none() {
            self.state = JoinState::Exhausted;
        }
        Ok(next)
    }
}

/// Resumes the nested loop from `cursor`.
fn nested_loop(
    cursor: &mut Cursor,
    predicate: &JoinPredicate,
    left: &mut dyn DbIterator,
    right: &mut dyn DbIterator,
    desc: &Rc<TupleDesc>,
) -> Result<Option<Tuple>> {
    loop {
        let outer = match cursor.outer.take() {
            Some(outer) => outer,
            None => {
                if !left.has_next()? {
                    return Ok(None);
                }
                let outer = left.next()?;
                right.rewind()?;
                outer
            }
        };

        while right.has_next()? {
            let inner = right.next()?;
            if predicate.filter(&outer, &inner) {
                let joined = Tuple::concat(desc.clone(), &outer, &inner);
                cursor.outer = Some(outer);
                return Ok(Some(joined));
            }
        }
    }
}

impl DbIterator for NestedLoopJoin {
    fn open(&mut self) -> Result<()> {
        self.left.open()?;
        self.right.open()?;
        self.state = JoinState::Open(Cursor::default());
        trace!("opened join on {}", self);
        Ok(())
    }

    fn has_next(&mut self) -> Result<bool> {
        match &self.state {
            JoinState::Closed => return Err(not_open("NestedLoopJoin")),
            JoinState::Exhausted => return Ok(false),
            JoinState::Open(cursor) if cursor.peeked.is_some() => return Ok(true),
            JoinState::Open(_) => {}
        }

        match self.fetch_next()? {
            Some(tuple) => {
                if let JoinState::Open(cursor) = &mut self.state {
                    cursor.peeked = Some(tuple);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn next(&mut self) -> Result<Tuple> {
        if !self.has_next()? {
            return Err(Error::NoSuchElement);
        }
        match &mut self.state {
            JoinState::Open(cursor) => cursor.peeked.take().ok_or(Error::NoSuchElement),
            _ => Err(Error::NoSuchElement),
        }
    }

    fn rewind(&mut self) -> Result<()> {
        if matches!(self.state, JoinState::Closed) {
            return Err(not_open("NestedLoopJoin"));
        }
        self.left.rewind()?;
        self.right.rewind()?;
        self.state = JoinState::Open(Cursor::default());
        trace!("rewound join on {}", self);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.state = JoinState::Closed;
        let left = self.left.close();
        let right = self.right.close();
        trace!("closed join on {}", self);
        left.and(right)
    }

    fn tuple_desc(&self) -> &Rc<TupleDesc> {
        &self.desc
    }

    fn children(&self) -> Vec<&dyn DbIterator> {
        vec![&*self.left, &*self.right]
    }

    /// Takes ownership of exactly two new children, `[left, right]`.
    ///
    /// An open join is closed first and must be reopened afterwards. The
    /// replaced children are handed back in the same order.
    fn set_children(&mut self, children: Vec<BoxedIterator>) -> Result<Vec<BoxedIterator>> {
        let [left, right]: [BoxedIterator; 2] = children.try_into().map_err(|c: Vec<BoxedIterator>| {
            Error::invalid_operation(format!("join takes exactly 2 children, got {}", c.len()))
        })?;
        let desc = Self::merged_desc(&self.predicate, &*left, &*right)?;

        if !matches!(self.state, JoinState::Closed) {
            self.close()?;
        }

        let old_left = core::mem::replace(&mut self.left, left);
        let old_right = core::mem::replace(&mut self.right, right);
        self.desc = desc;
        debug!("replaced join children, output schema: {}", self.desc);
        Ok(vec![old_left, old_right])
    }
}

impl fmt::Display for NestedLoopJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.join_field1_name(),
            self.predicate.op(),
            self.join_field2_name()
        )
    }
}
