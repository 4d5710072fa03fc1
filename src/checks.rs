//! Correctness helpers. The sorting and partitioning routines use them as invariant oracles when
//! checks are enabled, callers can use them to verify results.

use std::cmp::Ordering;

use crate::{
    error::check_range,
    util::precondition,
    Compare, Predicate,
};

/// Returns true if `v[lo..hi]` is non-decreasing under `cmp`.
///
/// Ranges holding zero or one element are sorted. Requires `lo <= hi <= v.len()`.
pub fn is_sorted<T, F>(v: &[T], lo: usize, hi: usize, cmp: F) -> bool
where
    F: Compare<T>,
{
    precondition!(check_range(v.len(), lo, hi));
    v[lo..hi]
        .windows(2)
        .all(|pair| cmp(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Returns true if `pred` holds for every element of `v[lo..hi]`, stopping at the first element
/// that fails. Requires `lo <= hi <= v.len()`.
pub fn for_each<T, P>(v: &[T], lo: usize, hi: usize, pred: P) -> bool
where
    P: Predicate<T>,
{
    precondition!(check_range(v.len(), lo, hi));
    v[lo..hi].iter().all(pred)
}
