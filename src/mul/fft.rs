//! Number-theoretic-transform multiplication (spec layer L2c: `mul_fft`).
//!
//! Used only for operands past the FFT threshold. Each operand is split
//! into base-2^32 digits, the digit sequences are convolved using three
//! fixed NTT-friendly primes (values widely used for 32-bit convolution,
//! each with primitive root 3: `998244353 = 119*2^23+1`,
//! `1004535809 = 479*2^21+1`, `469762049 = 7*2^26+1`), the three per-prime
//! residues are recombined into the exact integer coefficient by Garner's
//! algorithm, and the result is carry-propagated back into words. The
//! transform itself is an internal implementation detail; only the bit-exact
//! integer product is part of the contract.

use crate::primitive::Word;
use alloc::vec::Vec;

const PRIMES: [u64; 3] = [998_244_353, 1_004_535_809, 469_762_049];
const ROOT: u64 = 3;

/// `r[0..m+n) = a1 * a2`.
pub fn mul_fft(r: &mut [Word], a1: &[Word], a2: &[Word]) {
    let m = a1.len();
    let n = a2.len();
    debug_assert_eq!(r.len(), m + n);
    debug_assert!(m >= n);
    crate::assert::debug_assert_disjoint!(r, a1);
    crate::assert::debug_assert_disjoint!(r, a2);

    if n == 0 {
        crate::linear::zero(r);
        return;
    }

    let digits_a = words_to_digits(a1);
    let digits_b = words_to_digits(a2);
    let out_digit_len = digits_a.len() + digits_b.len();
    let len = out_digit_len.next_power_of_two().max(1);

    // Each coefficient is a sum of at most `len` products of two 32-bit
    // digits; bound the result against the modulus product so silent
    // overflow of the CRT reconstruction can never happen.
    let max_coeff = (len as u128) * u128::from(u32::MAX) * u128::from(u32::MAX);
    let modulus_product: u128 = PRIMES.iter().map(|&p| u128::from(p)).product();
    debug_assert!(max_coeff < modulus_product, "NTT modulus too small for this size");

    let mut residues = [Vec::new(), Vec::new(), Vec::new()];
    for (slot, &p) in residues.iter_mut().zip(PRIMES.iter()) {
        *slot = convolve_mod(&digits_a, &digits_b, len, p, ROOT);
    }

    let coeffs = garner_combine(&residues, out_digit_len);
    let out_digits = carry_propagate(&coeffs);
    digits_to_words(r, &out_digits);
}

/// Split a word array into little-endian base-2^32 digits.
fn words_to_digits(a: &[Word]) -> Vec<u64> {
    let mut digits = Vec::with_capacity(a.len() * 2);
    for &word in a {
        digits.push(word & 0xFFFF_FFFF);
        digits.push(word >> 32);
    }
    digits
}

/// Pack base-2^32 digits back into words, truncating/zero-extending `r`.
fn digits_to_words(r: &mut [Word], digits: &[u32]) {
    crate::linear::zero(r);
    for (i, word) in r.iter_mut().enumerate() {
        let lo = digits.get(2 * i).copied().unwrap_or(0) as Word;
        let hi = digits.get(2 * i + 1).copied().unwrap_or(0) as Word;
        *word = lo | (hi << 32);
    }
    debug_assert!(digits
        .get(r.len() * 2..)
        .map_or(true, |tail| tail.iter().all(|&d| d == 0)));
}

/// Cyclic convolution of `a` and `b` (zero-padded to `len`, a power of two)
/// modulo the NTT-friendly prime `modulus`, with primitive root `root`.
fn convolve_mod(a: &[u64], b: &[u64], len: usize, modulus: u64, root: u64) -> Vec<u64> {
    let mut fa: Vec<u64> = (0..len)
        .map(|i| a.get(i).copied().unwrap_or(0) % modulus)
        .collect();
    let mut fb: Vec<u64> = (0..len)
        .map(|i| b.get(i).copied().unwrap_or(0) % modulus)
        .collect();

    ntt(&mut fa, false, modulus, root);
    ntt(&mut fb, false, modulus, root);
    for i in 0..len {
        fa[i] = modmul(fa[i], fb[i], modulus);
    }
    ntt(&mut fa, true, modulus, root);
    fa
}

/// In-place iterative Cooley-Tukey NTT over `Z/modulus`. `a.len()` must be a
/// power of two dividing `modulus - 1`.
fn ntt(a: &mut [u64], invert: bool, modulus: u64, root: u64) {
    let len = a.len();
    debug_assert!(len.is_power_of_two());

    // Bit-reversal permutation.
    let mut j = 0usize;
    for i in 1..len {
        let mut bit = len >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            a.swap(i, j);
        }
    }

    let mut half = 1usize;
    while half < len {
        let step = (modulus - 1) / (half as u64 * 2);
        let mut w_len = modpow(root, step, modulus);
        if invert {
            w_len = modpow(w_len, modulus - 2, modulus);
        }
        let mut start = 0;
        while start < len {
            let mut w = 1u64;
            for k in 0..half {
                let u = a[start + k];
                let v = modmul(a[start + k + half], w, modulus);
                a[start + k] = modadd(u, v, modulus);
                a[start + k + half] = modsub(u, v, modulus);
                w = modmul(w, w_len, modulus);
            }
            start += half * 2;
        }
        half *= 2;
    }

    if invert {
        let len_inv = modpow(len as u64, modulus - 2, modulus);
        for x in a.iter_mut() {
            *x = modmul(*x, len_inv, modulus);
        }
    }
}

#[inline]
fn modadd(a: u64, b: u64, modulus: u64) -> u64 {
    let s = a + b;
    if s >= modulus {
        s - modulus
    } else {
        s
    }
}

#[inline]
fn modsub(a: u64, b: u64, modulus: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        a + modulus - b
    }
}

#[inline]
fn modmul(a: u64, b: u64, modulus: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(modulus)) as u64
}

fn modpow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    base %= modulus;
    let mut result = 1u64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = modmul(result, base, modulus);
        }
        base = modmul(base, base, modulus);
        exp >>= 1;
    }
    result
}

/// Recombine three residues (mod `PRIMES[0..3]`) into exact `u128`
/// coefficients via Garner's algorithm.
fn garner_combine(residues: &[Vec<u64>; 3], count: usize) -> Vec<u128> {
    let (p0, p1, p2) = (PRIMES[0], PRIMES[1], PRIMES[2]);
    let inv_p0_mod_p1 = modpow(p0 % p1, p1 - 2, p1);
    let inv_p0_mod_p2 = modpow(p0 % p2, p2 - 2, p2);
    let inv_p1_mod_p2 = modpow(p1 % p2, p2 - 2, p2);

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let r0 = residues[0][i];
        let r1 = residues[1][i];
        let r2 = residues[2][i];

        let t0 = r0;
        let t1 = modmul(modsub(r1, t0 % p1, p1), inv_p0_mod_p1, p1);
        let t2_partial = modmul(modsub(r2, t0 % p2, p2), inv_p0_mod_p2, p2);
        let t2 = modmul(modsub(t2_partial, t1 % p2, p2), inv_p1_mod_p2, p2);

        let x = u128::from(t0) + u128::from(t1) * u128::from(p0)
            + u128::from(t2) * u128::from(p0) * u128::from(p1);
        out.push(x);
    }
    out
}

/// Carry-propagate base-2^32 coefficients (which may individually exceed
/// 2^32) into normalised base-2^32 digits.
fn carry_propagate(coeffs: &[u128]) -> Vec<u32> {
    let mut out = Vec::with_capacity(coeffs.len() + 4);
    let mut carry: u128 = 0;
    for &c in coeffs {
        let v = c + carry;
        out.push((v & 0xFFFF_FFFF) as u32);
        carry = v >> 32;
    }
    while carry > 0 {
        out.push((carry & 0xFFFF_FFFF) as u32);
        carry >>= 32;
    }
    out
}
