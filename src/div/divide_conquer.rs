//! Divide-and-conquer division (spec layer L3b: `divrem_divconquer_pi1`).
//!
//! Processes the quotient in `ceil(n/2)`-word chunks instead of one word at
//! a time: each chunk is estimated by running the classical routine against
//! only the top half of the divisor (`d_hi`), then corrected against the
//! full divisor with a decrement-and-add-back loop exactly analogous to
//! Knuth's single-word correction, just at chunk granularity. This is a
//! single level of splitting rather than the fully recursive scheme
//! (Burnikel-Ziegler), traded for an implementation whose correctness
//! follows directly from the classical algorithm it's built from.

use crate::{
    add::{add_in_place, sub_in_place, sub_word_in_place},
    math::ceil_div,
    primitive::Word,
};

use super::classical::divrem_classical_pi1;

/// Same contract as [`divrem_classical_pi1`]: `a.len() == q.len() + n`,
/// remainder left in place in `a[0..n)`, `d` normalised, `dinv =
/// preinvert1(d[n - 1])`.
pub fn divrem_divconquer_pi1(q: &mut [Word], a: &mut [Word], d: &[Word], dinv: Word) {
    let n = d.len();
    let qn = q.len();
    debug_assert!(n >= 1);
    debug_assert_eq!(a.len(), qn + n);
    debug_assert!(
        d[n - 1] >> (Word::BITS - 1) == 1,
        "divrem_divconquer_pi1: divisor must be normalised"
    );
    crate::assert::debug_assert_disjoint!(q, a);
    crate::assert::debug_assert_disjoint!(a, d);
    crate::assert::debug_assert_disjoint!(q, d);

    // Splitting pays off only once the divisor is wide enough that a
    // half-size classical estimate is itself meaningfully cheaper.
    if n < 4 || qn == 0 {
        divrem_classical_pi1(q, a, d, dinv);
        return;
    }

    let h = ceil_div(n, 2);
    let d_hi = &d[n - h..];

    let mut pos = qn;
    while pos > 0 {
        let c = h.min(pos);
        pos -= c;
        let window_len = n + c;

        // Estimate the chunk quotient from the top `h + c` words of the
        // window divided by the top `h` words of the divisor alone; this
        // truncated-divisor estimate can only overestimate the true value.
        let est_len = h + c;
        let mut est_num: alloc::vec::Vec<Word> =
            a[pos + window_len - est_len..pos + window_len].to_vec();
        est_num.push(0);
        let mut est_q = alloc::vec![0; c + 1];
        divrem_classical_pi1(&mut est_q, &mut est_num, d_hi, dinv);

        let mut chunk_q: alloc::vec::Vec<Word> = if est_q[c] != 0 {
            alloc::vec![Word::MAX; c]
        } else {
            est_q[..c].to_vec()
        };

        let mut product = alloc::vec![0; window_len];
        if chunk_q.len() >= d.len() {
            crate::mul::mul(&mut product, &chunk_q, d);
        } else {
            crate::mul::mul(&mut product, d, &chunk_q);
        }

        let window = &mut a[pos..pos + window_len];
        let mut borrow = sub_in_place(window, &product);
        while borrow {
            let bw = sub_word_in_place(&mut chunk_q, 1);
            debug_assert!(!bw, "divrem_divconquer_pi1: estimate underflowed to zero");
            let carry = add_in_place(window, d);
            borrow = !carry;
        }

        q[pos..pos + c].copy_from_slice(&chunk_q);
    }
}
