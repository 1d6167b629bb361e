//! Fenwick counter (binary indexed tree) over a fixed index range.

use crate::error::{Error, Result};
use crate::monoid::Monoid;

/// Point-increment, prefix-query tree over logical indices `0..len`.
///
/// `buf[0]` is unused; slot `j` holds the fold of the `rightmost_bit(j)`
/// positions ending at `j` (1-indexed).
#[derive(Clone, Debug)]
pub struct Bit<T> {
    buf: Vec<T>,
}

impl<T: Monoid + Clone> Bit<T> {
    /// Zero-filled counter. A `len` of 0 accepts no increments.
    pub fn new(len: usize) -> Self {
        Bit {
            buf: vec![T::empty(); len + 1],
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` at `index`.
    pub fn increment(&mut self, index: usize, delta: &T) -> Result<()> {
        if index >= self.len() {
            return Err(Error::OutOfRange {
                index: index as isize,
                len: self.len(),
            });
        }

        let mut j = index + 1;
        while j <= self.len() {
            self.buf[j] = self.buf[j].append(delta);
            j += rightmost_bit(j);
        }
        Ok(())
    }

    /// Fold of every delta applied at `0..=index`. `query(-1)` is the empty prefix.
    pub fn query(&self, index: isize) -> Result<T> {
        if index < -1 || index >= self.len() as isize {
            return Err(Error::OutOfRange {
                index,
                len: self.len(),
            });
        }

        let mut acc = T::empty();
        let mut j = (index + 1) as usize;
        while j > 0 {
            acc = acc.append(&self.buf[j]);
            j -= rightmost_bit(j);
        }
        Ok(acc)
    }
}

fn rightmost_bit(n: usize) -> usize {
    n & n.wrapping_neg()
}
