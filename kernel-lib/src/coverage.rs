//! Interval-pair coverage by convolving endpoint histograms.
//!
//! Input: `K M` on the first line, then `K` lines of `start end` with
//! `0 <= start <= end <= M`. Output: `2M + 1` totals, entry `P` counting
//! the ordered interval pairs `(a, b)` (self pairs included) with
//! `a.start + b.start <= P <= a.end + b.end`.

use crate::error::{Error, Result};
use crate::input::{non_negative, Lines};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalSet {
    /// Largest endpoint any interval may use.
    pub max: usize,
    pub intervals: Vec<(usize, usize)>,
}

/// Per-magnitude counts of interval starts and ends, each of size `max + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histograms {
    pub starts: Vec<i64>,
    pub ends: Vec<i64>,
}

impl Histograms {
    pub fn build(set: &IntervalSet) -> Result<Self> {
        let len = set
            .max
            .checked_add(1)
            .ok_or(Error::MagnitudeTooLarge(set.max))?;
        let mut starts = zeroed(len)?;
        let mut ends = zeroed(len)?;
        for &(start, end) in &set.intervals {
            starts[start] += 1;
            ends[end] += 1;
        }
        Ok(Histograms { starts, ends })
    }
}

fn zeroed(len: usize) -> Result<Vec<i64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| Error::Alloc { len })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Slots in the difference array, `2 * max + 2`.
fn diff_len(max: usize) -> Result<usize> {
    max.checked_mul(2)
        .and_then(|v| v.checked_add(2))
        .ok_or(Error::MagnitudeTooLarge(max))
}

pub fn parse(text: &str) -> Result<IntervalSet> {
    let mut lines = Lines::new(text);
    let header = lines.next_ints(2)?;
    let count = non_negative("interval count", header[0])?;
    let max = non_negative("maximum magnitude", header[1])?;
    diff_len(max)?;

    let mut intervals = Vec::new();
    for _ in 0..count {
        let pair = lines.next_ints(2)?;
        let (start, end) = (pair[0], pair[1]);
        if start > end {
            return Err(Error::InvalidInterval { start, end });
        }
        for &value in &[start, end] {
            if value < 0 || value as u64 > max as u64 {
                return Err(Error::EndpointOutOfRange { value, max });
            }
        }
        intervals.push((start as usize, end as usize));
    }

    trace!("parsed {} intervals up to {}", intervals.len(), max);
    Ok(IntervalSet { max, intervals })
}

/// Coverage of every position `0..=2 * max`.
pub fn coverage(set: &IntervalSet) -> Result<Vec<i64>> {
    let max = set.max;
    let len = diff_len(max)?;
    let hist = Histograms::build(set)?;

    // diff[p] - diff[p - 1] is the change in coverage entering p.
    let mut diff = zeroed(len)?;
    for i in 0..=max {
        let (start_i, end_i) = (hist.starts[i], hist.ends[i]);
        if start_i == 0 && end_i == 0 {
            continue;
        }
        for j in 0..=max {
            diff[i + j] += start_i * hist.starts[j];
            diff[i + j + 1] -= end_i * hist.ends[j];
        }
    }

    diff.truncate(2 * max + 1);
    let mut covered = 0i64;
    for slot in diff.iter_mut() {
        covered += *slot;
        *slot = covered;
    }
    Ok(diff)
}
