//! Equi-width histogram over an integer domain.
//!
//! The domain `[min, max]` is split into `B` buckets of equal width
//! `(max - min + 1) / B`. Value `v` lands in bucket
//! `floor((v - min) * B / (max - min + 1))`, computed in 128-bit integer
//! arithmetic so the full `i64` range is safe. Selectivity is estimated
//! from bucket counters alone, assuming values are spread uniformly inside
//! each bucket.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use minnow_core::{Error, Result};

use crate::ast::Op;

/// A fixed-bucket frequency table over a single integer column.
#[derive(Clone, Debug, PartialEq)]
pub struct IntHistogram {
    min: i64,
    max: i64,
    counts: Vec<u64>,
    total: u64,
}

impl IntHistogram {
    /// Creates an empty histogram with `buckets` buckets over `[min, max]`.
    pub fn new(buckets: usize, min: i64, max: i64) -> Result<Self> {
        if buckets == 0 {
            return Err(Error::invalid_operation("histogram needs at least one bucket"));
        }
        if min > max {
            return Err(Error::invalid_operation("histogram domain has min > max"));
        }
        Ok(Self {
            min,
            max,
            counts: vec![0; buckets],
            total: 0,
        })
    }

    #[inline]
    pub fn buckets(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of values ingested so far.
    #[inline]
    pub fn total_values(&self) -> u64 {
        self.total
    }

    /// Counter of bucket `index`, if it exists.
    pub fn bucket_count(&self, index: usize) -> Option<u64> {
        self.counts.get(index).copied()
    }

    /// Number of integers in the domain.
    #[inline]
    fn span(&self) -> i128 {
        self.max as i128 - self.min as i128 + 1
    }

    /// Bucket width in domain units.
    #[inline]
    fn width(&self) -> f64 {
        self.span() as f64 / self.buckets() as f64
    }

    #[inline]
    fn contains(&self, v: i64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Bucket of an in-domain value.
    fn bucket_index(&self, v: i64) -> usize {
        debug_assert!(self.contains(v));
        let offset = v as i128 - self.min as i128;
        (offset * self.buckets() as i128 / self.span()) as usize
    }

    /// Share of bucket `index` lying below the domain offset `point`, in `[0, 1]`.
    ///
    /// Integer `v` occupies `[v - min, v - min + 1)` in offset units.
    fn fraction_below(&self, index: usize, point: f64) -> f64 {
        let width = self.width();
        let start = index as f64 * width;
        ((point - start) / width).clamp(0.0, 1.0)
    }

    /// Records one value.
    ///
    /// Values outside `[min, max]` are rejected with `ValueOutOfRange` and
    /// leave the histogram unchanged.
    pub fn add_value(&mut self, v: i64) -> Result<()> {
        if !self.contains(v) {
            return Err(Error::value_out_of_range(v, self.min, self.max));
        }
        let index = self.bucket_index(v);
        self.counts[index] += 1;
        self.total += 1;
        Ok(())
    }

    /// Estimates the fraction of ingested values satisfying `value <op> v`.
    ///
    /// An empty histogram estimates `0.0` for every operator. Out-of-domain
    /// constants saturate to `0.0` or `1.0`.
    pub fn estimate_selectivity(&self, op: Op, v: i64) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        if v < self.min {
            return match op {
                Op::Equals | Op::LessThan | Op::LessThanOrEq => 0.0,
                Op::NotEquals | Op::GreaterThan | Op::GreaterThanOrEq => 1.0,
            };
        }
        if v > self.max {
            return match op {
                Op::Equals | Op::GreaterThan | Op::GreaterThanOrEq => 0.0,
                Op::NotEquals | Op::LessThan | Op::LessThanOrEq => 1.0,
            };
        }

        let total = self.total as f64;
        let index = self.bucket_index(v);
        let share = self.counts[index] as f64 / total;
        let offset = (v as i128 - self.min as i128) as f64;

        let selectivity = match op {
            Op::Equals => self.equality(share),
            Op::NotEquals => 1.0 - self.equality(share),
            Op::LessThan => self.below(index) + self.fraction_below(index, offset) * share,
            Op::LessThanOrEq => {
                self.below(index) + self.fraction_below(index, offset + 1.0) * share
            }
            Op::GreaterThan => {
                self.above(index) + (1.0 - self.fraction_below(index, offset + 1.0)) * share
            }
            Op::GreaterThanOrEq => {
                self.above(index) + (1.0 - self.fraction_below(index, offset)) * share
            }
        };

        selectivity.clamp(0.0, 1.0)
    }

    /// Point estimate for one value in a bucket holding `share` of all values.
    ///
    /// A bucket narrower than one unit still holds at most one distinct integer.
    fn equality(&self, share: f64) -> f64 {
        share / self.width().max(1.0)
    }

    /// Share of values in buckets strictly below `index`.
    fn below(&self, index: usize) -> f64 {
        let count: u64 = self.counts[..index].iter().sum();
        count as f64 / self.total as f64
    }

    /// Share of values in buckets strictly above `index`.
    fn above(&self, index: usize) -> f64 {
        let count: u64 = self.counts[index + 1..].iter().sum();
        count as f64 / self.total as f64
    }

    /// Default selectivity when no predicate constant is known: one bucket's share.
    pub fn average_selectivity(&self) -> f64 {
        1.0 / self.buckets() as f64
    }

    /// Integer range `[lo, hi]` covered by bucket `index`; `lo > hi` if it covers none.
    fn bucket_range(&self, index: usize) -> (i128, i128) {
        let width = self.width();
        let lo = libm::ceil(index as f64 * width) as i128;
        let hi = libm::ceil((index + 1) as f64 * width) as i128 - 1;
        let base = self.min as i128;
        (base + lo, base + hi.min(self.span() - 1))
    }
}

impl fmt::Display for IntHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "IntHistogram [{}, {}] buckets={} total={}",
            self.min,
            self.max,
            self.buckets(),
            self.total
        )?;
        for (i, count) in self.counts.iter().enumerate() {
            let (lo, hi) = self.bucket_range(i);
            if lo > hi {
                writeln!(f, "  #{:<4} (empty range): {}", i, count)?;
            } else {
                writeln!(f, "  #{:<4} [{}, {}]: {}", i, lo, hi, count)?;
            }
        }
        Ok(())
    }
}
