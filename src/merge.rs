use std::cmp::Ordering;

use crate::{
    checks::is_sorted,
    error::check_split,
    util::{debug, debug_assertions::test_merge_runs, invariant, precondition},
    Compare,
};

/// Merges the sorted runs `v[lo..mid]` and `v[mid..hi]` into one sorted run `v[lo..hi]`.
///
/// The element from the left run is taken only if it compares strictly less than the one from
/// the right run, so on ties the right run goes first. The merge is therefore *not* stable.
///
/// Uses a scratch buffer of `hi - lo` elements that is dropped before returning.
pub fn merge<T, F>(v: &mut [T], lo: usize, mid: usize, hi: usize, cmp: F)
where
    T: Clone,
    F: Compare<T>,
{
    precondition!(check_split(v.len(), lo, mid, hi));
    invariant!(test_merge_runs(v, lo, mid, hi, &cmp));
    debug!(lo, mid, hi, "merge");

    let (left, right) = v[lo..hi].split_at(mid - lo);
    let mut scratch = Vec::with_capacity(hi - lo);

    // i: next element of the left run
    // j: next element of the right run
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if cmp(&left[i], &right[j]) == Ordering::Less {
            scratch.push(left[i].clone());
            i += 1;
        } else {
            scratch.push(right[j].clone());
            j += 1;
        }
    }

    // At most one of them is non-empty
    scratch.extend_from_slice(&left[i..]);
    scratch.extend_from_slice(&right[j..]);
    invariant!(scratch.len() == hi - lo);

    for (slot, elem) in v[lo..hi].iter_mut().zip(scratch) {
        *slot = elem;
    }
    invariant!(is_sorted(v, lo, hi, &cmp));
}
