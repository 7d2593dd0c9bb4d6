//! Sampling without replacement.

use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::Range;

/// Draw `k` distinct values from `range`, in draw order.
///
/// Runs a partial Fisher-Yates shuffle over the range, so the cost is
/// bounded by the range length and never depends on collisions. Returns
/// `None` if the range holds fewer than `k` values.
pub fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    range: Range<usize>,
    k: usize,
) -> Option<Vec<usize>> {
    if k > range.len() {
        return None;
    }
    let mut pool: Vec<usize> = range.collect();
    let (chosen, _) = pool.partial_shuffle(rng, k);
    Some(chosen.to_vec())
}
