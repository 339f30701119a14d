//! Sequential scan over an in-memory tuple list.

use crate::executor::operator::{not_open, DbIterator};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use minnow_core::schema::TupleDesc;
use minnow_core::{Error, Result, Tuple, Value};

/// Sequential scan executor - yields stored tuples in insertion order.
///
/// Field names are qualified with the scan's alias.
pub struct SeqScan {
    alias: String,
    desc: Rc<TupleDesc>,
    tuples: Vec<Tuple>,
    /// Next position to emit; `None` while closed.
    position: Option<usize>,
}

impl SeqScan {
    /// Creates a scan over `rows`, each checked against `desc`.
    pub fn new(alias: impl Into<String>, desc: &TupleDesc, rows: Vec<Vec<Value>>) -> Result<Self> {
        let alias = alias.into();
        let desc = Rc::new(desc.qualified(&alias));
        let tuples = rows
            .into_iter()
            .map(|values| Tuple::new(desc.clone(), values))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            alias,
            desc,
            tuples,
            position: None,
        })
    }

    #[inline]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Number of stored tuples.
    #[inline]
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    fn position(&self) -> Result<usize> {
        self.position.ok_or_else(|| not_open("SeqScan"))
    }
}

impl DbIterator for SeqScan {
    fn open(&mut self) -> Result<()> {
        self.position = Some(0);
        Ok(())
    }

    fn has_next(&mut self) -> Result<bool> {
        Ok(self.position()? < self.tuples.len())
    }

    fn next(&mut self) -> Result<Tuple> {
        let position = self.position()?;
        let tuple = self.tuples.get(position).cloned().ok_or(Error::NoSuchElement)?;
        self.position = Some(position + 1);
        Ok(tuple)
    }

    fn rewind(&mut self) -> Result<()> {
        self.position()?;
        self.position = Some(0);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.position = None;
        Ok(())
    }

    fn tuple_desc(&self) -> &Rc<TupleDesc> {
        &self.desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::drain;
    use alloc::boxed::Box;
    use alloc::vec;
    use minnow_core::schema::FieldDesc;
    use minnow_core::DataType;

    fn users() -> SeqScan {
        let desc = TupleDesc::new(vec![
            FieldDesc::new("id", DataType::Int64),
            FieldDesc::new("name", DataType::String),
        ]);
        SeqScan::new(
            "users",
            &desc,
            vec![
                vec![Value::Int64(1), Value::String("Alice".into())],
                vec![Value::Int64(2), Value::String("Bob".into())],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_scan_yields_in_order() {
        let mut scan = users();
        scan.open().unwrap();
        let tuples = drain(&mut scan).unwrap();

        assert_eq!(tuples.len(), 2);
        assert_eq!(tuples[0].get(1), Some(&Value::String("Alice".into())));
        assert_eq!(tuples[1].get(0), Some(&Value::Int64(2)));
        assert!(Rc::ptr_eq(tuples[0].desc(), scan.tuple_desc()));
    }

    #[test]
    fn test_scan_qualifies_names() {
        let scan = users();
        assert_eq!(scan.alias(), "users");
        assert_eq!(scan.tuple_desc().field_name(0).unwrap(), "users.id");
        assert_eq!(scan.tuple_desc().field_name(1).unwrap(), "users.name");
    }

    #[test]
    fn test_scan_rejects_bad_rows() {
        let desc = TupleDesc::from_types(&[DataType::Int64]);
        let result = SeqScan::new("t", &desc, vec![vec![Value::String("x".into())]]);
        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_scan_requires_open() {
        let mut scan = users();
        assert!(matches!(scan.has_next(), Err(Error::InvalidOperation { .. })));
        assert!(matches!(scan.next(), Err(Error::InvalidOperation { .. })));
        assert!(scan.rewind().is_err());

        scan.open().unwrap();
        scan.close().unwrap();
        assert!(scan.next().is_err());
    }

    #[test]
    fn test_scan_exhaustion_and_rewind() {
        let mut scan = users();
        scan.open().unwrap();
        assert_eq!(drain(&mut scan).unwrap().len(), 2);
        assert!(!scan.has_next().unwrap());
        assert_eq!(scan.next().unwrap_err(), Error::NoSuchElement);

        scan.rewind().unwrap();
        assert_eq!(drain(&mut scan).unwrap().len(), 2);
    }

    #[test]
    fn test_scan_is_leaf() {
        let mut scan = users();
        assert!(scan.children().is_empty());
        assert!(scan.set_children(Vec::new()).unwrap().is_empty());
        assert!(scan.set_children(vec![Box::new(users()) as Box<dyn DbIterator>]).is_err());
    }
}
