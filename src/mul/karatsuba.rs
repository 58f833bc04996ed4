//! Karatsuba multiplication (spec layer L2b: `mul_karatsuba`).
//!
//! `p = a * b` computed as three half-size products via the split
//! `a = a0 + a1*2^(hB)`, `b = b0 + b1*2^(hB)`:
//!
//! - `z0 = a0*b0`
//! - `z2 = a1*b1`
//! - `z1 = (a0+a1)*(b0+b1) - z0 - z2`
//!
//! placed at offsets `0`, `h`, `2h`. Because `a0+a1` and `b0+b1` are sums
//! (not the sign-tracked differences some formulations use), `z1` is always
//! non-negative and no sign bookkeeping is needed.

use crate::{
    add::add_in_place,
    memory::MemoryAllocation,
    primitive::Word,
};

/// `p[0..m+n) = a * b`, `a.len() == m >= n == b.len() >= ceil((m+1)/2)`, `p`
/// disjoint from `a` and `b`.
pub fn mul_karatsuba(p: &mut [Word], a: &[Word], b: &[Word]) {
    let m = a.len();
    let n = b.len();
    debug_assert_eq!(p.len(), m + n);
    debug_assert!(m >= n);
    debug_assert!(n >= crate::math::ceil_div(m + 1, 2));
    crate::assert::debug_assert_disjoint!(p, a);
    crate::assert::debug_assert_disjoint!(p, b);

    let h = crate::math::ceil_div(m, 2);
    let (a0, a1) = a.split_at(h);
    let (b0, b1) = b.split_at(h);

    // z0 = a0 * b0, placed directly into p[0..2h).
    super::mul_m(&mut p[..2 * h], a0, b0);
    // z2 = a1 * b1, placed directly into p[2h..m+n).
    super::mul(&mut p[2 * h..], a1, b1);

    let mut alloc = MemoryAllocation::new(4 * h + 4);
    let mut memory = alloc.memory();
    let sum_a = memory.allocate(h + 1);
    sum_a[..h].copy_from_slice(a0);
    let carry = add_in_place(&mut sum_a[..], a1);
    debug_assert!(!carry);

    let sum_b = memory.allocate(h + 1);
    sum_b[..h].copy_from_slice(b0);
    let carry = add_in_place(&mut sum_b[..], b1);
    debug_assert!(!carry);

    let prod = memory.allocate(2 * (h + 1));
    super::mul_m(prod, sum_a, sum_b);

    let carry = crate::add::sub_in_place(prod, &p[..2 * h]);
    debug_assert!(!carry);
    let carry = crate::add::sub_in_place(prod, &p[2 * h..]);
    debug_assert!(!carry);

    let target = &mut p[h..];
    if prod.len() <= target.len() {
        let carry = add_in_place(target, prod);
        debug_assert!(!carry);
    } else {
        let (used, unused) = prod.split_at(target.len());
        debug_assert!(unused.iter().all(|&w| w == 0));
        let carry = add_in_place(target, used);
        debug_assert!(!carry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mul::classical::mul_classical;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_karatsuba_matches_classical() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let m = rng.gen_range(2..60);
            let n = rng.gen_range(crate::math::ceil_div(m + 1, 2)..=m);
            let a: Vec<Word> = (0..m).map(|_| rng.gen()).collect();
            let b: Vec<Word> = (0..n).map(|_| rng.gen()).collect();

            let mut r1 = vec![0; m + n];
            mul_classical(&mut r1, &a, &b);

            let mut r2 = vec![0; m + n];
            mul_karatsuba(&mut r2, &a, &b);

            assert_eq!(r1, r2, "m={m} n={n}");
        }
    }
}
