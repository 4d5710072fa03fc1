use crate::{
    checks::is_sorted,
    error::check_range,
    merge::merge,
    util::{invariant, precondition},
    Compare,
};

/// Sorts `v[lo..hi]` with top-down merge sort in *O*(*n* \* log(*n*)) time.
///
/// Each [merge] allocates its own scratch buffer and frees it again, so at most `hi - lo`
/// additional elements are alive at any point. Not stable, see [merge].
pub fn merge_sort<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: F)
where
    T: Clone,
    F: Compare<T>,
{
    precondition!(check_range(v.len(), lo, hi));
    recurse(v, lo, hi, &cmp);
    invariant!(is_sorted(v, lo, hi, &cmp));
}

fn recurse<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: &F)
where
    T: Clone,
    F: Compare<T>,
{
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    recurse(v, lo, mid, cmp);
    recurse(v, mid, hi, cmp);
    merge(v, lo, mid, hi, cmp);
}
