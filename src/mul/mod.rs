//! Multiplication dispatcher (spec layer L2: `mul_m`, `mul`).
//!
//! `mul_m` picks among the three algorithms by size, for same-length
//! operands. `mul` handles the general `a.len() >= b.len()` case: when the
//! operands are close enough in size for Karatsuba's entry condition it
//! dispatches directly; when `a` is much longer than `b` it falls back to
//! school multiplication by blocks, chunking `a` into `b.len()`-sized pieces
//! and accumulating shifted partial products.

pub mod classical;
pub mod fft;
pub mod karatsuba;

use crate::{
    dispatch::{MUL_FFT_THRESHOLD, MUL_KARATSUBA_THRESHOLD},
    memory::MemoryAllocation,
    primitive::Word,
};

/// `r[0..2m) = a * b`, `a.len() == b.len() == m`, `r` disjoint from `a`/`b`.
pub fn mul_m(r: &mut [Word], a: &[Word], b: &[Word]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(r.len(), 2 * a.len());
    dispatch_balanced_enough(r, a, b);
}

/// `r[0..m+n) = a * b`, `a.len() == m >= n == b.len()`, `r` disjoint from
/// `a`/`b`.
pub fn mul(r: &mut [Word], a: &[Word], b: &[Word]) {
    let m = a.len();
    let n = b.len();
    debug_assert_eq!(r.len(), m + n);
    debug_assert!(m >= n);
    crate::assert::debug_assert_disjoint!(r, a);
    crate::assert::debug_assert_disjoint!(r, b);

    if n == 0 {
        crate::linear::zero(r);
        return;
    }
    if n >= crate::math::ceil_div(m + 1, 2) {
        dispatch_balanced_enough(r, a, b);
    } else {
        mul_by_blocks(r, a, b);
    }
}

/// Dispatch by size for operands already close enough in length to satisfy
/// Karatsuba's `n >= ceil((m+1)/2)` entry condition (`a.len() == b.len()`
/// qualifies trivially). `a.len() >= b.len()`.
fn dispatch_balanced_enough(r: &mut [Word], a: &[Word], b: &[Word]) {
    let m = a.len();
    if m <= MUL_KARATSUBA_THRESHOLD {
        classical::mul_classical(r, a, b);
    } else if m <= MUL_FFT_THRESHOLD {
        karatsuba::mul_karatsuba(r, a, b);
    } else {
        fft::mul_fft(r, a, b);
    }
}

/// `a.len() == m`, `b.len() == n`, `m >= n > 0` but `n < ceil((m+1)/2)`:
/// split `a` into `n`-sized chunks (the last possibly shorter) and sum the
/// shifted chunk*b products.
fn mul_by_blocks(r: &mut [Word], a: &[Word], b: &[Word]) {
    let n = b.len();
    crate::linear::zero(r);

    let mut offset = 0;
    for chunk in a.chunks(n) {
        let clen = chunk.len();
        let mut alloc = MemoryAllocation::new(clen + n);
        let mut memory = alloc.memory();
        let tmp = memory.allocate(clen + n);
        if clen >= n {
            dispatch_balanced_enough(tmp, chunk, b);
        } else {
            // `chunk` can be far shorter than `b`'s Karatsuba entry bound
            // (the last chunk of `a.chunks(n)` especially), so the balance
            // precondition needs re-checking here, not just size dispatch.
            mul(tmp, b, chunk);
        }

        let window = &mut r[offset..offset + clen + n];
        let carry = crate::add::add_in_place(window, tmp);
        if carry {
            let rest = &mut r[offset + clen + n..];
            let out = crate::add::add_carry_in_place(rest, true);
            debug_assert!(!out);
        }
        offset += n;
    }
}
