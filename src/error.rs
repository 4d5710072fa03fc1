//! Range validation.
//!
//! Every operation works on a half-open range `[lo, hi)` of a slice and requires
//! `lo <= hi <= len`; [crate::merge] additionally requires `lo <= mid <= hi`. The plain
//! operations panic on a violation when checks are compiled in, the functions in
//! [crate::checked] report it as a [RangeError] instead.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

/// A range argument that does not describe a valid part of the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The range starts after it ends.
    Inverted {
        /// Start of the range.
        lo: usize,
        /// End of the range.
        hi: usize,
    },

    /// The range ends past the end of the slice.
    OutOfBounds {
        /// End of the range.
        hi: usize,
        /// Length of the slice.
        len: usize,
    },

    /// The split point of a merge lies outside the range.
    SplitOutside {
        /// Start of the range.
        lo: usize,
        /// Split point between the two runs.
        mid: usize,
        /// End of the range.
        hi: usize,
    },
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RangeError::Inverted { lo, hi } => {
                write!(f, "range start {lo} is greater than range end {hi}")
            }
            RangeError::OutOfBounds { hi, len } => {
                write!(f, "range end {hi} is out of bounds for slice of length {len}")
            }
            RangeError::SplitOutside { lo, mid, hi } => {
                write!(f, "split point {mid} is outside of range [{lo}, {hi})")
            }
        }
    }
}

impl Error for RangeError {}

/// Checks `lo <= hi <= len`.
#[inline]
pub fn check_range(len: usize, lo: usize, hi: usize) -> std::result::Result<(), RangeError> {
    if lo > hi {
        return Err(RangeError::Inverted { lo, hi });
    }
    if hi > len {
        return Err(RangeError::OutOfBounds { hi, len });
    }
    Ok(())
}

/// Checks `lo <= mid <= hi <= len`.
#[inline]
pub fn check_split(
    len: usize,
    lo: usize,
    mid: usize,
    hi: usize,
) -> std::result::Result<(), RangeError> {
    check_range(len, lo, hi)?;
    if mid < lo || mid > hi {
        return Err(RangeError::SplitOutside { lo, mid, hi });
    }
    Ok(())
}
