//! End-to-end scenarios against the decimal front end and the division
//! dispatcher, in the style of the teacher's own `tests/arithmetic.rs` and
//! `tests/div.rs`: literal worked examples rather than property sweeps.

use natcore::{div::divrem, getstr, setstr, Word};

fn parse(s: &str) -> Vec<Word> {
    let mut buf = vec![0; s.len() / 18 + 2];
    let len = setstr(&mut buf, s).unwrap();
    buf.truncate(len);
    buf
}

#[test]
fn e1_add() {
    let a = parse("123456789012345678901234567890");
    let b = parse("987654321098765432109876543210");

    let len = a.len().max(b.len()) + 1;
    let mut a_ext = a.clone();
    a_ext.resize(len, 0);
    let mut b_ext = b.clone();
    b_ext.resize(len, 0);
    let carry = natcore::add::add_in_place(&mut a_ext, &b_ext);
    assert!(!carry);

    assert_eq!(getstr(&a_ext), "1111111110111111111011111111100");
}

#[test]
fn e2_mul() {
    let a = parse("123456789012345678901234567890");
    let b = parse("987654321098765432109876543210");

    let (hi, lo) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    let mut r = vec![0; hi.len() + lo.len()];
    natcore::mul::mul(&mut r, hi, lo);

    assert_eq!(
        getstr(&r),
        "121932631137021795226185032733622923332237463801111263526900"
    );
}

#[test]
fn e3_divrem_mersenne_like() {
    // a = 2^1024 - 1, b = 2^512 + 1.
    let mut a = vec![Word::MAX; 16];
    let mut b = vec![0; 8];
    b[0] = 1;
    b.push(1);

    let (q, r) = divrem(&a, &b);

    // q*b + r must reconstruct a, and r must be in [0, b).
    let mut prod = vec![0; q.len() + b.len()];
    if q.len() >= b.len() {
        natcore::mul::mul(&mut prod, &q, &b);
    } else {
        natcore::mul::mul(&mut prod, &b, &q);
    }
    let mut r_ext = r.clone();
    r_ext.resize(prod.len(), 0);
    let carry = natcore::add::add_in_place(&mut prod, &r_ext);
    assert!(!carry);
    a.resize(prod.len(), 0);
    assert_eq!(prod, a);
    assert!(natcore::cmp::cmp_same_len(&r, &b) == std::cmp::Ordering::Less);

    // The expected quotient for 2^(2k)-1 divided by 2^k+1 is 2^k-1 exactly,
    // with a zero remainder: (2^k-1)(2^k+1) = 2^(2k)-1. For k a multiple of
    // the word width, 2^k-1 is exactly `k/64` all-ones words.
    let expected_q = vec![Word::MAX; 8];
    assert_eq!(natcore::linear::normalise(&q), natcore::linear::normalise(&expected_q));
    assert_eq!(
        &q[..natcore::linear::normalise(&q)],
        &expected_q[..natcore::linear::normalise(&expected_q)]
    );
    assert_eq!(natcore::linear::normalise(&r), 0);
}

#[test]
fn e4_divrem_powers_of_ten() {
    let a = parse(&("1".to_string() + &"0".repeat(100)));
    let b = parse(&("1".to_string() + &"0".repeat(50)));

    let (q, r) = divrem(&a, &b);
    assert_eq!(getstr(&q), "1".to_string() + &"0".repeat(50));
    assert_eq!(natcore::linear::normalise(&r), 0);
}

#[test]
fn e5_divrem_zero_by_one() {
    let a = [0u64];
    let b = [1u64];
    let (q, r) = divrem(&a, &b);
    assert_eq!(natcore::linear::normalise(&q), 0);
    assert_eq!(natcore::linear::normalise(&r), 0);
}

#[test]
fn e6_mul_algorithm_agreement_large() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(101);
    let m = 4096 / 64;
    let a: Vec<Word> = (0..m).map(|_| rng.gen()).collect();
    let b: Vec<Word> = (0..m).map(|_| rng.gen()).collect();

    let mut r_classical = vec![0; 2 * m];
    natcore::mul::classical::mul_classical(&mut r_classical, &a, &b);

    let mut r_karatsuba = vec![0; 2 * m];
    natcore::mul::karatsuba::mul_karatsuba(&mut r_karatsuba, &a, &b);

    let mut r_fft = vec![0; 2 * m];
    natcore::mul::fft::mul_fft(&mut r_fft, &a, &b);

    assert_eq!(r_classical, r_karatsuba);
    assert_eq!(r_classical, r_fft);
}
