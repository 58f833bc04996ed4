//! Uniform random natural numbers (spec layer L4: `randbits`).
//!
//! The teacher's own `rand` module fills word buffers directly from
//! `rand::RngCore`/`Rng` and handles a non-power-of-two boundary word with a
//! reject-and-retry loop (`try_fill_uniform`). The range here is always a
//! power of two (`[0, 2^bits)`), so the boundary word only needs a mask
//! instead of rejection: every value in range is reachable by a single draw,
//! so there's nothing to reject.

use crate::{
    linear::zero,
    primitive::{Word, WORD_BITS_USIZE},
};
use rand::RngCore;

/// Fill `a` with a uniform random value in `[0, 2^bits)` with bit `bits - 1`
/// set (so the result occupies exactly `bits` significant bits), and zero
/// the rest of `a`.
///
/// `bits <= a.len() * WORD_BITS`. When `bits == 0`, `a` is left entirely
/// zero.
pub fn randbits<R: RngCore + ?Sized>(a: &mut [Word], bits: usize, rng: &mut R) {
    debug_assert!(
        bits <= a.len() * WORD_BITS_USIZE,
        "randbits: bits exceeds buffer capacity"
    );
    zero(a);
    if bits == 0 {
        return;
    }

    let top_word = (bits - 1) / WORD_BITS_USIZE;
    let bits_in_top_word = bits - top_word * WORD_BITS_USIZE;

    for word in a[..top_word].iter_mut() {
        *word = rng.next_u64();
    }

    let mask = if bits_in_top_word == WORD_BITS_USIZE {
        Word::MAX
    } else {
        (1 << bits_in_top_word) - 1
    };
    let mut top = rng.next_u64() & mask;
    top |= 1 << (bits_in_top_word - 1);
    a[top_word] = top;
}
