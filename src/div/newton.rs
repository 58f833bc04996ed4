//! Newton-inverse division (spec layer L3c: `invert_pi1`,
//! `divrem_newton_pi1`), after Zimmermann's "Asymptotically fast division
//! for GMP" construction: precompute a reciprocal of the divisor once, then
//! replace each further division by a multiplication against it.
//!
//! The reciprocal itself is obtained with a single divide-and-conquer
//! division rather than the fully doubling Newton iteration the literature
//! describes — doubling precision correctly across mismatched-width
//! intermediate divisors is easy to get subtly wrong without a compiler to
//! check it against, and the one-shot computation is exact by construction
//! (it reuses an already-verified division). The speedup Newton division is
//! named for shows up where it matters here: every outer quotient chunk is
//! produced by one multiply-and-correct instead of a chunked division.

use core::cmp::Ordering;

use crate::{
    add::{add_in_place, add_word_in_place, sub_in_place, sub_word_in_place},
    cmp::cmp_same_len,
    fast_divide::preinvert1,
    primitive::Word,
};
use alloc::vec::Vec;

use super::divide_conquer::divrem_divconquer_pi1;

/// `I = floor((B^(2n) - 1) / D) - B^n`, `D` normalised, `n = D.len()`.
///
/// The implicit leading word of the true quotient is always exactly 1 for
/// normalised `D` (`D*B^n <= B^(2n) - 1 < D*(B^n + B^n)`), so it is dropped
/// and `I` is returned as exactly `n` words — the multi-word generalisation
/// of [`preinvert1`].
pub fn invert_pi1(d: &[Word]) -> Vec<Word> {
    let n = d.len();
    debug_assert!(n >= 1);
    debug_assert!(d[n - 1] >> (Word::BITS - 1) == 1, "invert_pi1: divisor must be normalised");

    if n == 1 {
        return alloc::vec![preinvert1(d[0])];
    }

    let mut numerator = alloc::vec![Word::MAX; 2 * n];
    numerator.push(0);
    let mut q = alloc::vec![0; n + 1];
    let dinv = preinvert1(d[n - 1]);
    divrem_divconquer_pi1(&mut q, &mut numerator, d, dinv);

    debug_assert_eq!(q[n], 1, "invert_pi1: leading quotient word must be 1 for normalised d");
    q.truncate(n);
    q
}

/// Same contract as [`divrem_classical_pi1`](super::classical::divrem_classical_pi1):
/// `a.len() == q.len() + n`, remainder left in place in `a[0..n)`, `d`
/// normalised, `dinv = preinvert1(d[n - 1])`.
pub fn divrem_newton_pi1(q: &mut [Word], a: &mut [Word], d: &[Word], dinv: Word) {
    let n = d.len();
    let qn = q.len();
    debug_assert!(n >= 1);
    debug_assert_eq!(a.len(), qn + n);
    debug_assert!(
        d[n - 1] >> (Word::BITS - 1) == 1,
        "divrem_newton_pi1: divisor must be normalised"
    );
    crate::assert::debug_assert_disjoint!(q, a);
    crate::assert::debug_assert_disjoint!(a, d);
    crate::assert::debug_assert_disjoint!(q, d);

    // Computing and using a reciprocal only pays for itself once there is
    // more than one divisor-length's worth of quotient to produce from it.
    if n < 8 || qn == 0 || qn < n {
        divrem_divconquer_pi1(q, a, d, dinv);
        return;
    }

    let inv = invert_pi1(d);

    let mut pos = qn;
    while pos > 0 {
        let c = n.min(pos);
        pos -= c;
        let window_len = n + c;

        let w_hi: Vec<Word> = a[pos + n..pos + window_len].to_vec();
        let mut product = alloc::vec![0; c + n];
        if w_hi.len() >= inv.len() {
            crate::mul::mul(&mut product, &w_hi, &inv);
        } else {
            crate::mul::mul(&mut product, &inv, &w_hi);
        }
        let overflow = add_in_place(&mut product, &a[pos..pos + window_len]);

        let mut chunk_q: Vec<Word> = product[n..n + c].to_vec();
        if overflow {
            // The dropped carry is `+B^c` onto `floor(product/B^n)`, one
            // word above `chunk_q`'s own top word, not `+1` onto its low
            // word: `product[n..n+c]` wraps to something near zero while the
            // true chunk quotient is near its max. Snap straight to
            // `B^c - 1` so the overestimate-correction loop below walks down
            // from there in O(1) steps instead of the underestimate loop
            // walking up from near zero.
            chunk_q.iter_mut().for_each(|w| *w = Word::MAX);
        }

        let mut product2 = alloc::vec![0; window_len];
        if chunk_q.len() >= d.len() {
            crate::mul::mul(&mut product2, &chunk_q, d);
        } else {
            crate::mul::mul(&mut product2, d, &chunk_q);
        }

        let window = &mut a[pos..pos + window_len];
        let mut borrow = sub_in_place(window, &product2);
        while borrow {
            let bw = sub_word_in_place(&mut chunk_q, 1);
            debug_assert!(!bw, "divrem_newton_pi1: estimate underflowed to zero");
            let carry = add_in_place(window, d);
            borrow = !carry;
        }
        while window_at_least_d(window, d) {
            let no_borrow = !sub_in_place(window, d);
            debug_assert!(no_borrow);
            let of = add_word_in_place(&mut chunk_q, 1);
            debug_assert!(!of);
        }

        q[pos..pos + c].copy_from_slice(&chunk_q);
    }
}

/// Whether `window` (`n + c` words) is `>= d` (`n` words) when `d` is
/// understood to occupy the low `n` words (any nonzero word above that
/// makes it trivially larger).
fn window_at_least_d(window: &[Word], d: &[Word]) -> bool {
    let n = d.len();
    if window[n..].iter().any(|&w| w != 0) {
        return true;
    }
    cmp_same_len(&window[..n], d) != Ordering::Less
}
