//! Inversions left after cutting every hair down to each possible length.
//!
//! Input: `N` on the first line, then `N` hair lengths on the second.
//! Output: `N` totals, entry `L` being the number of pairs `i < j` with
//! `min(h_i, L) > min(h_j, L)`.

use crate::bit::Bit;
use crate::error::{Error, Result};
use crate::input::{non_negative, Lines};

/// Parses the hair lengths, saturating each at `N - 1`.
///
/// No truncation length beyond `N - 1` is ever asked for, so longer hairs
/// are indistinguishable from a hair of length `N - 1`.
pub fn parse(text: &str) -> Result<Vec<usize>> {
    let mut lines = Lines::new(text);
    let n = lines.next_ints(1)?[0];
    let n = non_negative("hair count", n)?;
    if n == 0 {
        return Err(Error::NoHairs);
    }

    let max_len = (n - 1) as i64;
    let hairs = lines
        .next_ints(n)?
        .into_iter()
        .map(|h| {
            if h < 0 {
                return Err(Error::NegativeLength(h));
            }
            Ok(h.min(max_len) as usize)
        })
        .collect::<Result<Vec<_>>>()?;

    trace!("parsed {} hairs", hairs.len());
    Ok(hairs)
}

/// Badness for every truncation length `0..N`, where `N = hairs.len()`.
///
/// Every hair must already be clamped below `N`.
pub fn badness(hairs: &[usize]) -> Result<Vec<u64>> {
    let n = hairs.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let last = (n - 1) as isize;

    // seen[h]: hairs of length h so far.
    let mut seen = Bit::<u64>::new(n);
    // by_len[h]: inversions whose later, shorter hair has length h.
    let mut by_len = vec![0u64; n];
    let mut total = 0u64;

    for &h in hairs {
        let taller = seen.query(last)? - seen.query(h as isize)?;
        by_len[h] += taller;
        total += taller;
        seen.increment(h, &1)?;
    }
    debug!("{} inversions before any cut", total);

    // Cutting to L flattens every inversion whose shorter hair is at least L.
    let mut levels = vec![0u64; n];
    for len in (0..n).rev() {
        total -= by_len[len];
        levels[len] = total;
    }
    Ok(levels)
}
