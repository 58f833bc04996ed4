//! Aliasing-contract assertions.
//!
//! The original C interface expressed non-overlap requirements with an
//! `NN_OVERLAP` macro over raw pointers; slices carry their own bounds, so
//! the equivalent check here compares address ranges directly. These are
//! contract violations per the error-handling design: they abort via a
//! `debug_assert`, never a `Result`.

/// True iff the two slices occupy disjoint memory.
pub(crate) fn disjoint<T>(a: &[T], b: &[T]) -> bool {
    let a_start = a.as_ptr() as usize;
    let a_end = a_start + a.len() * core::mem::size_of::<T>();
    let b_start = b.as_ptr() as usize;
    let b_end = b_start + b.len() * core::mem::size_of::<T>();
    a_end <= b_start || b_end <= a_start
}

/// Assert that `a` and `b` do not (partially) overlap. Equal slices (full
/// aliasing) are allowed by many callers and checked separately; this only
/// rules out the partial-overlap case the specification forbids outright.
macro_rules! debug_assert_disjoint {
    ($a:expr, $b:expr) => {
        debug_assert!(
            $crate::assert::disjoint($a, $b),
            "buffers must not overlap"
        );
    };
}

pub(crate) use debug_assert_disjoint;
