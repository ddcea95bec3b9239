//! Evenly spaced partitioning of `[0, total)` across workers.

use std::ops::Range;

/// `workers + 1` integer boundary points from `0` to `total`.
///
/// Point `k` is `floor(k * total / workers)`, computed in 128-bit so large
/// totals never lose precision. Points are non-decreasing and the last one is
/// always `total`. Zero workers yields only the origin.
pub fn boundaries(total: u64, workers: usize) -> Vec<u64> {
    if workers == 0 {
        return vec![0];
    }
    let w = workers as u128;
    (0..=workers)
        .map(|k| ((k as u128 * total as u128) / w) as u64)
        .collect()
}

/// Contiguous half-open sub-ranges, one per worker, covering `[0, total)`.
pub fn split_ranges(total: u64, workers: usize) -> Vec<Range<u64>> {
    boundaries(total, workers)
        .windows(2)
        .map(|pair| pair[0]..pair[1])
        .collect()
}
