use crate::{
    checks::{for_each, is_sorted},
    Compare, Predicate,
};

/// Loop invariant of [crate::partition]: before step `i`, `v[..k]` satisfies the predicate and
/// `v[k..i]` does not.
pub(crate) fn test_partition<T, P>(v: &[T], k: usize, i: usize, pred: &P) -> bool
where
    P: Predicate<T>,
{
    if k > i || i > v.len() {
        return false;
    }
    if !for_each(v, 0, k, pred) {
        eprintln!("partition prefix [0, {k}) holds an element failing the predicate");
        return false;
    }
    if !for_each(v, k, i, |x: &T| !pred(x)) {
        eprintln!("partition middle [{k}, {i}) holds an element satisfying the predicate");
        return false;
    }
    true
}

/// Precondition of [crate::merge]: both runs are sorted on their own.
pub(crate) fn test_merge_runs<T, F>(v: &[T], lo: usize, mid: usize, hi: usize, cmp: &F) -> bool
where
    F: Compare<T>,
{
    if !is_sorted(v, lo, mid, cmp) {
        eprintln!("merge left run [{lo}, {mid}) is not sorted");
        return false;
    }
    if !is_sorted(v, mid, hi, cmp) {
        eprintln!("merge right run [{mid}, {hi}) is not sorted");
        return false;
    }
    true
}
