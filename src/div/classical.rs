//! Schoolbook division (spec layer L3a: `divrem_classical_pi1`), Knuth's
//! TAOCP Volume 2 Algorithm D with the 3-word-by-2-word quotient-digit
//! estimate done via [`divw2by1`].

use crate::{
    add::add_same_len_in_place,
    fast_divide::divw2by1,
    primitive::{subb, Word},
    scalar::{divrem_1_pi1, submul_1},
};

/// `a[0..q.len()+n) / d[0..n) -> q`, remainder left in place in `a[0..n)`.
///
/// `a` is the Knuth "u" array: one word longer than the dividend's natural
/// length, so the sliding `n+1`-word window has room at the top on the
/// first step. Callers with an exact `q.len()+n-1`-word dividend zero-pad
/// the extra top word before calling.
///
/// `d` must be normalised (top bit of `d[n - 1]` set); `dinv =
/// preinvert1(d[n - 1])`. `n >= 1`.
pub fn divrem_classical_pi1(q: &mut [Word], a: &mut [Word], d: &[Word], dinv: Word) {
    let n = d.len();
    let qn = q.len();
    debug_assert!(n >= 1);
    debug_assert_eq!(a.len(), qn + n);
    debug_assert!(
        d[n - 1] >> (Word::BITS - 1) == 1,
        "divrem_classical_pi1: divisor must be normalised"
    );
    crate::assert::debug_assert_disjoint!(q, a);
    crate::assert::debug_assert_disjoint!(a, d);
    crate::assert::debug_assert_disjoint!(q, d);

    if n == 1 {
        let cy = a[qn];
        let rem = divrem_1_pi1(q, cy, &a[..qn], d[0], dinv);
        a[0] = rem;
        return;
    }

    let base: u128 = 1u128 << Word::BITS;
    let dtop = d[n - 1];
    let dsecond = u128::from(d[n - 2]);

    for j in (0..qn).rev() {
        let u_top = a[j + n];
        let u_next = a[j + n - 1];
        let u_third = a[j + n - 2];

        let (mut qhat, mut rhat): (u128, u128) = if u_top == dtop {
            (base - 1, u128::from(u_next) + u128::from(dtop))
        } else {
            let (q0, r0) = divw2by1(u_top, u_next, dtop, dinv);
            (u128::from(q0), u128::from(r0))
        };

        while rhat < base && qhat * dsecond > rhat * base + u128::from(u_third) {
            qhat -= 1;
            rhat += u128::from(dtop);
        }
        let mut qhat = qhat as Word;

        let window = &mut a[j..j + n + 1];
        let borrow_word = submul_1(&mut window[..n], d, qhat);
        let (new_top, borrow) = subb(window[n], borrow_word, false);
        window[n] = new_top;

        if borrow {
            qhat -= 1;
            let carry = add_same_len_in_place(&mut window[..n], d);
            window[n] = window[n].wrapping_add(Word::from(carry));
            debug_assert_eq!(window[n], 0);
        }
        q[j] = qhat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fast_divide::preinvert1;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_divrem_classical_basic() {
        // d = 2^127, a = 2^127 + 5: quotient 1, remainder 5. `a` carries one
        // extra zero word above its natural 2-word extent for the window.
        let d = [0u64, 1u64 << 63];
        let mut a = [5u64, 1u64 << 63, 0];
        let dinv = preinvert1(d[1]);
        let mut q = [0; 1];
        divrem_classical_pi1(&mut q, &mut a, &d, dinv);
        assert_eq!(q, [1]);
        assert_eq!(a[..2], [5, 0]);
    }

    /// Recompose `q*d + r` with the crate's own multiply/add and check it
    /// reproduces the original dividend, rather than widening into a fixed
    /// machine integer (which caps the sizes this test could exercise).
    fn check_divrem(a_original: &[Word], d: &[Word], q: &[Word], rem: &[Word]) {
        let n = d.len();
        let qd_len = q.len() + n;
        let mut prod = vec![0; qd_len];
        if q.len() >= n {
            crate::mul::mul(&mut prod, q, d);
        } else {
            crate::mul::mul(&mut prod, d, q);
        }
        let carry = crate::add::add_in_place(&mut prod, rem);
        assert!(!carry);
        assert_eq!(&prod[..a_original.len()], a_original);
        assert!(prod[a_original.len()..].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_divrem_classical_matches_direct_multiply() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..300 {
            let n = rng.gen_range(2..5);
            // `m` is the dividend's natural length; the working buffer `a`
            // carries one extra zero word on top of it.
            let m = n + rng.gen_range(0..5);

            let mut d: Vec<Word> = (0..n).map(|_| rng.gen()).collect();
            d[n - 1] |= 1 << 63;
            let dinv = preinvert1(d[n - 1]);

            let a_natural: Vec<Word> = (0..m).map(|_| rng.gen()).collect();
            let mut a_work = a_natural.clone();
            a_work.push(0);

            let mut q = vec![0; m - n + 1];
            divrem_classical_pi1(&mut q, &mut a_work, &d, dinv);

            check_divrem(&a_natural, &d, &q, &a_work[..n]);
        }
    }
}
