pub(crate) mod debug_assertions;

/// Turns a comparator returning a signed integer (negative, zero, positive) into one returning
/// [`std::cmp::Ordering`].
///
/// ```
/// let int_cmp = |a: &i32, b: &i32| a - b;
/// let mut v = [3, -8, 1, 2];
/// ordkit::sort_by(&mut v, ordkit::sign_to_compare!(int_cmp));
/// assert_eq!(v, [-8, 1, 2, 3]);
/// ```
#[macro_export]
macro_rules! sign_to_compare {
    ( $x:ident ) => {{
        |a, b| $x(a, b).cmp(&0)
    }};
}

/// True when invariant and precondition checks are compiled in.
pub(crate) const CHECKS_ENABLED: bool = cfg!(any(debug_assertions, feature = "debug_checks"));

/// Asserts only when checks are enabled; compiles to nothing otherwise.
macro_rules! invariant {
    ($($x:tt)*) => {
        if $crate::util::CHECKS_ENABLED {
            assert!($($x)*);
        }
    };
}

/// Panics with the range error when checks are enabled.
macro_rules! precondition {
    ( $check:expr ) => {
        if $crate::util::CHECKS_ENABLED {
            if let Err(e) = $check {
                panic!("precondition violated: {e}");
            }
        }
    };
}

macro_rules! debug {
    ($($x:tt)*) => {
        {
            #[cfg(feature = "trace")]
            {
                tracing::trace!($($x)*);
            }
        }
    };
}

pub(crate) use {debug, invariant, precondition};
