//! Division dispatcher (spec layer L3: `divrem_pi1`, `divrem`, `div_pi1`).
//!
//! Picks among the three division algorithms by divisor/quotient length,
//! mirroring [`crate::mul`]'s dispatch-by-size structure, and owns
//! normalisation: the pi1-suffixed algorithms all require a normalised
//! divisor (top bit set) and a working dividend one word longer than its
//! natural length, so the un-suffixed entry points shift both operands up
//! before dispatching and shift the remainder back down afterwards.

pub mod classical;
pub mod divide_conquer;
pub mod newton;

use crate::{
    dispatch::{DIVREM_DIVCONQUER_THRESHOLD, DIVREM_NEWTON_THRESHOLD},
    fast_divide::preinvert1,
    memory::MemoryAllocation,
    primitive::Word,
    shift::{shl_in_place, shr_in_place},
};
use alloc::vec::Vec;

/// `a[0..q.len()+n) / d[0..n) -> q`, remainder left in place in `a[0..n)`.
/// `d` must already be normalised (top bit of `d[n - 1]` set) and `dinv =
/// preinvert1(d[n - 1])`. Same buffer contract as the individual algorithms:
/// `a` carries one word above the dividend's natural length.
pub fn divrem_pi1(q: &mut [Word], a: &mut [Word], d: &[Word], dinv: Word) {
    let n = d.len();
    let qn = q.len();
    debug_assert!(n >= 1);
    debug_assert_eq!(a.len(), qn + n);
    debug_assert!(d[n - 1] >> (Word::BITS - 1) == 1, "divrem_pi1: divisor must be normalised");

    if qn < DIVREM_DIVCONQUER_THRESHOLD || n < DIVREM_DIVCONQUER_THRESHOLD {
        classical::divrem_classical_pi1(q, a, d, dinv);
    } else if qn < DIVREM_NEWTON_THRESHOLD || n < DIVREM_NEWTON_THRESHOLD {
        divide_conquer::divrem_divconquer_pi1(q, a, d, dinv);
    } else {
        newton::divrem_newton_pi1(q, a, d, dinv);
    }
}

/// `a / d -> (q, r)`, for arbitrary (unnormalised) `a` and `d`, `d` non-zero.
///
/// `a.len() >= d.len()`; `q` has length `a.len() - d.len() + 1`, `r` has
/// length `d.len()`. Returns the used lengths of `q` and `r` after dropping
/// leading zero words (callers that need the raw allocated widths can read
/// `q.len()`/`r.len()` before trimming).
pub fn divrem(a: &[Word], d: &[Word]) -> (Vec<Word>, Vec<Word>) {
    let n = d.len();
    debug_assert!(n >= 1, "divrem: division by zero-length divisor");
    debug_assert!(
        d.iter().any(|&w| w != 0),
        "divrem: division by zero"
    );
    debug_assert!(a.len() >= n, "divrem: dividend shorter than divisor");

    let shift = d[n - 1].leading_zeros();

    let mut alloc = MemoryAllocation::new(n);
    let mut memory = alloc.memory();
    let d_norm = memory.allocate(n);
    d_norm.copy_from_slice(d);
    if shift > 0 {
        let top = shl_in_place(d_norm, shift);
        debug_assert_eq!(top, 0);
    }
    let dinv = preinvert1(d_norm[n - 1]);

    let qn = a.len() - n + 1;
    let mut a_work: Vec<Word> = a.to_vec();
    let top_carry = if shift > 0 { shl_in_place(&mut a_work, shift) } else { 0 };
    a_work.push(top_carry);

    let mut q = alloc::vec![0; qn];
    divrem_pi1(&mut q, &mut a_work, d_norm, dinv);

    let mut r = a_work[..n].to_vec();
    if shift > 0 {
        let dropped = shr_in_place(&mut r, shift);
        debug_assert_eq!(dropped, 0);
    }

    (q, r)
}

/// Like [`divrem`] but discards the remainder, for callers that only need
/// the quotient (and so can skip allocating/copying it out separately).
pub fn div_pi1(a: &[Word], d: &[Word]) -> Vec<Word> {
    divrem(a, d).0
}
