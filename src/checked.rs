//! Variants of the range operations that validate their range up front and report a violation
//! as a [RangeError] instead of panicking. On error the slice is left untouched.

use crate::{
    checks::{for_each, is_sorted},
    error::{check_range, check_split, RangeError},
    insertion_sort::insertion_sort,
    merge::merge,
    merge_sort::merge_sort,
    Compare, Predicate,
};

pub fn try_is_sorted<T, F>(v: &[T], lo: usize, hi: usize, cmp: F) -> Result<bool, RangeError>
where
    F: Compare<T>,
{
    check_range(v.len(), lo, hi)?;
    Ok(is_sorted(v, lo, hi, cmp))
}

pub fn try_for_each<T, P>(v: &[T], lo: usize, hi: usize, pred: P) -> Result<bool, RangeError>
where
    P: Predicate<T>,
{
    check_range(v.len(), lo, hi)?;
    Ok(for_each(v, lo, hi, pred))
}

/// Both runs must already be sorted, that is not checked here.
pub fn try_merge<T, F>(
    v: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    cmp: F,
) -> Result<(), RangeError>
where
    T: Clone,
    F: Compare<T>,
{
    check_split(v.len(), lo, mid, hi)?;
    merge(v, lo, mid, hi, cmp);
    Ok(())
}

pub fn try_insertion_sort<T, F>(
    v: &mut [T],
    lo: usize,
    hi: usize,
    cmp: F,
) -> Result<(), RangeError>
where
    F: Compare<T>,
{
    check_range(v.len(), lo, hi)?;
    insertion_sort(v, lo, hi, cmp);
    Ok(())
}

pub fn try_merge_sort<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: F) -> Result<(), RangeError>
where
    T: Clone,
    F: Compare<T>,
{
    check_range(v.len(), lo, hi)?;
    merge_sort(v, lo, hi, cmp);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{try_for_each, try_insertion_sort, try_is_sorted, try_merge, try_merge_sort};
    use crate::error::RangeError;

    fn ascending(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn valid_ranges_delegate() {
        let mut v = [3, 1, 2, 0];
        assert_eq!(try_is_sorted(&v, 0, 4, ascending), Ok(false));
        assert_eq!(try_for_each(&v, 0, 3, |x: &i32| *x > 0), Ok(true));

        assert_eq!(try_insertion_sort(&mut v, 0, 3, ascending), Ok(()));
        assert_eq!(v, [1, 2, 3, 0]);
        assert_eq!(try_merge(&mut v, 0, 3, 4, ascending), Ok(()));
        assert_eq!(v, [0, 1, 2, 3]);

        let mut w = [9, 8, 7];
        assert_eq!(try_merge_sort(&mut w, 0, 3, ascending), Ok(()));
        assert_eq!(w, [7, 8, 9]);
    }

    #[test]
    fn invalid_ranges_leave_slice_untouched() {
        let mut v = [3, 1, 2];
        assert_eq!(
            try_insertion_sort(&mut v, 2, 1, ascending),
            Err(RangeError::Inverted { lo: 2, hi: 1 })
        );
        assert_eq!(
            try_merge_sort(&mut v, 0, 4, ascending),
            Err(RangeError::OutOfBounds { hi: 4, len: 3 })
        );
        assert_eq!(
            try_merge(&mut v, 1, 0, 3, ascending),
            Err(RangeError::SplitOutside { lo: 1, mid: 0, hi: 3 })
        );
        assert_eq!(v, [3, 1, 2]);
    }

    #[test]
    fn invalid_read_ranges() {
        let v = [1, 2, 3];
        assert_eq!(
            try_is_sorted(&v, 1, 5, ascending),
            Err(RangeError::OutOfBounds { hi: 5, len: 3 })
        );
        assert_eq!(
            try_for_each(&v, 3, 2, |_: &i32| true),
            Err(RangeError::Inverted { lo: 3, hi: 2 })
        );
    }

    #[test]
    fn errors_box_into_dyn_error() {
        let mut v = [1];
        let result: Result<(), Box<dyn std::error::Error>> = (|| {
            try_merge_sort(&mut v, 0, 2, ascending)?;
            Ok(())
        })();
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "range end 2 is out of bounds for slice of length 1");
    }
}
