//! Per-table statistics built by scanning an operator.

use super::histogram::IntHistogram;
use crate::ast::{Op, Predicate};
use crate::executor::DbIterator;
use alloc::rc::Rc;
use alloc::vec::Vec;
use hashbrown::HashMap;
use log::debug;
use minnow_core::schema::TupleDesc;
use minnow_core::{Error, Result, Value};

/// Bucket count used when the caller has no better estimate.
pub const DEFAULT_BUCKETS: usize = 100;

/// Histograms for every integer field of a tuple stream.
///
/// Nulls are not counted, so estimates describe the non-null values of a
/// field. Fields of other types, and integer fields holding only nulls,
/// have no histogram.
#[derive(Clone, Debug)]
pub struct TableStats {
    desc: Rc<TupleDesc>,
    histograms: HashMap<usize, IntHistogram>,
    total_tuples: u64,
}

impl TableStats {
    /// Scans `iter` twice: once for each field's bounds, once to fill histograms.
    ///
    /// The iterator is opened here and closed before returning, even on failure.
    pub fn build(iter: &mut dyn DbIterator, buckets: usize) -> Result<Self> {
        if buckets == 0 {
            return Err(Error::invalid_operation("histogram needs at least one bucket"));
        }

        iter.open()?;
        let scanned = Self::scan(iter, buckets);
        let closed = iter.close();
        let stats = scanned?;
        closed?;

        debug!(
            "built stats over {} tuples: {} of {} fields have histograms",
            stats.total_tuples,
            stats.histograms.len(),
            stats.desc.num_fields()
        );
        Ok(stats)
    }

    fn scan(iter: &mut dyn DbIterator, buckets: usize) -> Result<Self> {
        let desc = iter.tuple_desc().clone();
        let int_fields: Vec<usize> = desc
            .types()
            .enumerate()
            .filter(|(_, t)| t.is_integer())
            .map(|(i, _)| i)
            .collect();

        let mut bounds: HashMap<usize, (i64, i64)> = HashMap::new();
        let mut total_tuples = 0u64;
        while iter.has_next()? {
            let tuple = iter.next()?;
            total_tuples += 1;
            for &field in &int_fields {
                if let Some(v) = tuple.get(field).and_then(Value::as_int) {
                    bounds
                        .entry(field)
                        .and_modify(|(lo, hi)| {
                            *lo = (*lo).min(v);
                            *hi = (*hi).max(v);
                        })
                        .or_insert((v, v));
                }
            }
        }

        let mut histograms = HashMap::with_capacity(bounds.len());
        for (field, (lo, hi)) in bounds {
            histograms.insert(field, IntHistogram::new(buckets, lo, hi)?);
        }

        iter.rewind()?;
        while iter.has_next()? {
            let tuple = iter.next()?;
            for (field, histogram) in histograms.iter_mut() {
                if let Some(v) = tuple.get(*field).and_then(Value::as_int) {
                    histogram.add_value(v)?;
                }
            }
        }

        Ok(Self {
            desc,
            histograms,
            total_tuples,
        })
    }

    /// Schema of the scanned stream.
    #[inline]
    pub fn desc(&self) -> &Rc<TupleDesc> {
        &self.desc
    }

    /// Number of tuples seen by the scan, nulls included.
    #[inline]
    pub fn total_tuples(&self) -> u64 {
        self.total_tuples
    }

    pub fn histogram(&self, field: usize) -> Option<&IntHistogram> {
        self.histograms.get(&field)
    }

    /// Estimates the selectivity of `field <op> constant`.
    ///
    /// Returns `1.0` when there is no histogram for `field` or the constant
    /// is not an integer.
    pub fn estimate_selectivity(&self, field: usize, op: Op, constant: &Value) -> f64 {
        match (self.histograms.get(&field), constant.as_int()) {
            (Some(histogram), Some(v)) => histogram.estimate_selectivity(op, v),
            _ => 1.0,
        }
    }

    /// Estimates the selectivity of a scan predicate.
    pub fn estimate_predicate(&self, predicate: &Predicate) -> f64 {
        self.estimate_selectivity(predicate.field(), predicate.op(), predicate.operand())
    }

    /// Value-independent selectivity for `field`, or `1.0` without a histogram.
    pub fn average_selectivity(&self, field: usize) -> f64 {
        self.histograms
            .get(&field)
            .map_or(1.0, IntHistogram::average_selectivity)
    }
}
