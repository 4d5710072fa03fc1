//! Generic algorithms over ranges `[lo, hi)` of slices: insertion sort, merge sort, merging of
//! sorted runs, partitioning by a predicate and the `is_sorted`/`for_each` checks.
//!
//! With the `debug_checks` feature, precondition and loop invariant assertions stay enabled in
//! release builds. The `trace` feature emits diagnostic events through `tracing`.
use std::cmp::Ordering;

pub mod checked;
mod checks;
pub mod error;
mod insertion_sort;
mod merge;
mod merge_sort;
mod partition;
mod util;

use util::invariant;

pub use checks::{for_each, is_sorted};
pub use error::RangeError;
pub use insertion_sort::insertion_sort;
pub use merge::merge;
pub use merge_sort::merge_sort;
pub use partition::partition;

/// Three-way comparator, implemented for every `Fn(&T, &T) -> Ordering`.
pub trait Compare<T>: Fn(&T, &T) -> Ordering {}
impl<T, F: Fn(&T, &T) -> Ordering> Compare<T> for F {}

/// Element classifier, implemented for every `Fn(&T) -> bool`.
pub trait Predicate<T>: Fn(&T) -> bool {}
impl<T, P: Fn(&T) -> bool> Predicate<T> for P {}

/// Sorts the whole slice with [merge_sort].
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let len = v.len();
    merge_sort(v, 0, len, T::cmp);
    invariant!(is_sorted(v, 0, len, T::cmp));
}

/// Sorts the whole slice with [merge_sort] using `compare`.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = v.len();
    merge_sort(v, 0, len, &compare);
    invariant!(is_sorted(v, 0, len, &compare));
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], f: F)
where
    T: Clone,
    F: Fn(&T) -> K,
    K: Ord,
{
    let compare = |a: &T, b: &T| f(a).cmp(&f(b));
    let len = v.len();
    merge_sort(v, 0, len, compare);
    invariant!(is_sorted(v, 0, len, compare));
}

/// Sorts the whole slice with [insertion_sort], which unlike [sort_by] keeps equal elements in
/// their original order. Quadratic, so only meant for short slices.
#[inline]
pub fn stable_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = v.len();
    insertion_sort(v, 0, len, &compare);
    invariant!(is_sorted(v, 0, len, &compare));
}
