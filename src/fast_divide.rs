//! Precomputed single-word reciprocal and the two-word-by-one-word division
//! it enables (spec layer L0: `preinvert1`, `divw2by1`).
//!
//! Based on Möller & Granlund, "Improved Division by Invariant Integers"
//! (MG10), <https://gmplib.org/~tege/division-paper.pdf>, the same reference
//! the teacher corpus's own fast-division modules cite.

use crate::primitive::{double_word, extend_word, split_double_word, Word};

/// Precompute the reciprocal of a normalised word `d` (top bit set), for use
/// with [`divw2by1`].
///
/// `pi1 = floor((2^(2*WORD_BITS) - 1) / d) - 2^WORD_BITS`.
///
/// # Panics
/// Panics (via `debug_assert`) if `d` is not normalised, i.e. its top bit is
/// not set.
#[inline]
#[must_use]
pub fn preinvert1(d: Word) -> Word {
    debug_assert!(d >> (Word::BITS - 1) == 1, "preinvert1: d must be normalised");
    let numerator = double_word(Word::MAX, Word::MAX - d);
    (numerator / extend_word(d)) as Word
}

/// Divide the two-word value `hi * 2^WORD_BITS + lo` by the normalised word
/// `d`, given `pi1 = preinvert1(d)`.
///
/// Requires `hi < d`. Returns `(q, r)` with `r < d` and
/// `hi * 2^WORD_BITS + lo == q * d + r`.
///
/// Implements Algorithm 4 of MG10.
#[inline]
#[must_use]
pub fn divw2by1(hi: Word, lo: Word, d: Word, pi1: Word) -> (Word, Word) {
    debug_assert!(d >> (Word::BITS - 1) == 1, "divw2by1: d must be normalised");
    debug_assert!(hi < d, "divw2by1: hi must be less than d");

    let u = double_word(lo, hi);
    let q = u + extend_word(hi) * extend_word(pi1);
    let (q0, q1) = split_double_word(q);
    let q1 = q1.wrapping_add(1);
    let r = lo.wrapping_sub(q1.wrapping_mul(d));

    let (q1, r) = if r > q0 {
        (q1.wrapping_sub(1), r.wrapping_add(d))
    } else {
        (q1, r)
    };
    if r >= d {
        (q1.wrapping_add(1), r.wrapping_sub(d))
    } else {
        (q1, r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_preinvert1_reference() {
        assert_eq!(preinvert1(1 << 63), Word::MAX - 1);
        assert_eq!(preinvert1(Word::MAX), 0);
    }

    #[test]
    fn test_divw2by1_boundary_small() {
        // Exercise the correction-loop boundary with a fixed normalised d, at
        // a handful of `hi` values near the edges of its valid range plus a
        // few random ones, rather than the full `0..d` range (~2^63 values).
        let d: Word = 0x8000_0000_0000_0007;
        let pi1 = preinvert1(d);
        let mut rng = StdRng::seed_from_u64(2);
        let his: Vec<Word> = [0, 1, 2, d - 2, d - 1]
            .iter()
            .copied()
            .chain((0..20).map(|_| rng.gen_range(0..d)))
            .collect();
        for hi in his {
            for lo in [0, 1, Word::MAX, d.wrapping_sub(1), d] {
                let (q, r) = divw2by1(hi, lo, d, pi1);
                assert!(r < d);
                let n = double_word(lo, hi);
                assert_eq!(n, extend_word(q) * extend_word(d) + extend_word(r));
            }
        }
    }

    #[test]
    fn test_divw2by1_random() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            let d: Word = rng.gen::<Word>() | (1 << 63);
            let pi1 = preinvert1(d);
            let hi: Word = rng.gen_range(0..d);
            let lo: Word = rng.gen();
            let (q, r) = divw2by1(hi, lo, d, pi1);
            assert!(r < d);
            let n = double_word(lo, hi);
            assert_eq!(n, extend_word(q) * extend_word(d) + extend_word(r));
        }
    }
}
