use std::cmp::Ordering;

use crate::{
    checks::is_sorted,
    error::check_range,
    util::{debug, invariant, precondition},
    Compare,
};

/// Sorts `v[lo..hi]` in place using insertion sort, which is *O*(*n*^2) worst-case.
///
/// Stable: an element is only moved past elements that compare strictly greater. Elements
/// outside of the range are never read or moved.
pub fn insertion_sort<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: F)
where
    F: Compare<T>,
{
    precondition!(check_range(v.len(), lo, hi));
    debug!(lo, hi, "insertion sort");

    let run = &mut v[lo..hi];
    for current in 1..run.len() {
        invariant!(is_sorted(run, 0, current, &cmp));

        // Find the gap: the start of the run of elements in front of `current` that are greater
        let mut insert = current;
        while insert > 0 && cmp(&run[insert - 1], &run[current]) == Ordering::Greater {
            insert -= 1;
        }
        // Shift them one place to the right and put the key into the gap
        run[insert..=current].rotate_right(1);
    }
}
