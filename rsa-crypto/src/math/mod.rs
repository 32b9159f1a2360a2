//! # Big-integer number theory
//!
//! Free functions over [`BigInt`] that the rest of the crate is built
//! on: Euclidean and extended Euclidean algorithms, binary modular
//! exponentiation, and the Legendre and Jacobi symbols.

use crate::errors::RsaCryptoError;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Greatest common divisor by the Euclidean algorithm.
///
/// Operates on absolute values, so the result is always non-negative;
/// `gcd(0, 0) = 0` by convention.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();

    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }

    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y = g` and `g = gcd(a, b) >= 0`.
/// When the loop ends on a negative leading value the whole triple is
/// negated, so `g` stays non-negative for negative inputs too.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut a, mut b) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !b.is_zero() {
        let quotient = &a / &b;

        let r = &a % &b;
        a = std::mem::replace(&mut b, r);

        let next_x = &old_x - &quotient * &x;
        old_x = std::mem::replace(&mut x, next_x);

        let next_y = &old_y - &quotient * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    if a.is_negative() {
        a = -a;
        old_x = -old_x;
        old_y = -old_y;
    }

    (a, old_x, old_y)
}

/// Binary (square-and-multiply) modular exponentiation:
/// `value^exponent mod modulus` in O(log exponent) multiplications.
///
/// The base is reduced into `[0, modulus)` first. Returns 0 for
/// `modulus == 1`, consistent with residue arithmetic.
pub fn mod_pow(
    value: &BigInt,
    exponent: &BigInt,
    modulus: &BigInt,
) -> Result<BigInt, RsaCryptoError> {
    if !modulus.is_positive() {
        return Err(RsaCryptoError::NonPositiveModulus(modulus.clone()));
    }
    if exponent.is_negative() {
        return Err(RsaCryptoError::NegativeExponent(exponent.clone()));
    }
    if modulus.is_one() {
        return Ok(BigInt::zero());
    }

    let mut result = BigInt::one();
    let mut base = value.mod_floor(modulus);
    let mut exp = exponent.clone();

    while exp.is_positive() {
        if exp.is_odd() {
            result = &result * &base % modulus;
        }
        exp >>= 1;
        base = &base * &base % modulus;
    }

    Ok(result)
}

/// Legendre symbol (a/p) via Euler's criterion `a^((p-1)/2) mod p`,
/// mapped to {-1, 0, 1}.
///
/// `p` must be odd and greater than 2. Primality of `p` is NOT
/// verified here; the result is meaningless unless the caller
/// guarantees it.
pub fn legendre_symbol(a: &BigInt, p: &BigInt) -> Result<i32, RsaCryptoError> {
    if *p < BigInt::from(3) || p.is_even() {
        return Err(RsaCryptoError::InvalidLegendreModulus(p.clone()));
    }

    if a.is_multiple_of(p) {
        return Ok(0);
    }

    let exponent = (p - 1u32) >> 1;
    let result = mod_pow(a, &exponent, p)?;

    if result.is_one() { Ok(1) } else { Ok(-1) }
}

/// Jacobi symbol (a/n) computed through quadratic reciprocity, without
/// factoring `n`.
///
/// `n` must be positive and odd. Returns 0 exactly when
/// `gcd(a, n) > 1`, otherwise 1 or -1.
pub fn jacobi_symbol(a: &BigInt, n: &BigInt) -> Result<i32, RsaCryptoError> {
    if !n.is_positive() || n.is_even() {
        return Err(RsaCryptoError::InvalidJacobiModulus(n.clone()));
    }

    Ok(jacobi_reduce(a.mod_floor(n), n.clone()))
}

fn jacobi_reduce(mut a: BigInt, n: BigInt) -> i32 {
    if n.is_one() {
        return 1;
    }
    if a.is_zero() {
        return 0;
    }

    let mut j = 1;

    // Strip factors of 2 from a; (2/n) = -1 iff n ≡ 3, 5 (mod 8).
    let three = BigInt::from(3);
    while a.is_even() {
        a >>= 1;
        let n_mod_8 = &n % 8u32;
        if n_mod_8 == three || n_mod_8 == BigInt::from(5) {
            j = -j;
        }
    }

    // a is odd here (the loop above just ran); reciprocity needs that.
    if &a % 4u32 == three && &n % 4u32 == three {
        j = -j;
    }

    let reduced = n.mod_floor(&a);
    j * jacobi_reduce(reduced, a)
}

/// Modular inverse of `a` mod `m`, or `None` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    let (g, x, _) = extended_gcd(a, m);
    if !g.is_one() {
        return None;
    }

    Some(x.mod_floor(m))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_gcd_known_values() {
        assert_eq!(gcd(&big(48), &big(18)), big(6));
        assert_eq!(gcd(&big(20), &big(5)), big(5));
        assert_eq!(gcd(&big(17), &big(23)), big(1));
        assert_eq!(gcd(&big(50), &big(0)), big(50));
        assert_eq!(gcd(&big(0), &big(30)), big(30));
        assert_eq!(gcd(&big(0), &big(0)), big(0));
    }

    #[test]
    fn test_gcd_negative_operands() {
        assert_eq!(gcd(&big(-48), &big(18)), big(6));
        assert_eq!(gcd(&big(48), &big(-18)), big(6));
        assert_eq!(gcd(&big(-48), &big(-18)), big(6));
    }

    #[test]
    fn test_gcd_large_values() {
        let a: BigInt = "3000000021".parse().unwrap();
        let b: BigInt = "5000000035".parse().unwrap();
        assert_eq!(gcd(&a, &b), "1000000007".parse().unwrap());
    }

    #[quickcheck]
    fn prop_gcd_symmetric_and_non_negative(a: i64, b: i64) -> bool {
        let (a, b) = (big(a), big(b));
        let g = gcd(&a, &b);
        g == gcd(&b, &a) && g == gcd(&a.abs(), &b.abs()) && !g.is_negative()
    }

    #[quickcheck]
    fn prop_extended_gcd_satisfies_bezout(a: i64, b: i64) -> bool {
        let (a, b) = (big(a), big(b));
        let (g, x, y) = extended_gcd(&a, &b);
        g == &a * &x + &b * &y && g == gcd(&a, &b)
    }

    #[test]
    fn test_extended_gcd_negative_operands() {
        for (a, b) in [(-48i64, 18i64), (48, -18), (0, 30), (50, 0)] {
            let (a, b) = (big(a), big(b));
            let (g, x, y) = extended_gcd(&a, &b);
            assert_eq!(g, gcd(&a, &b));
            assert_eq!(g, &a * &x + &b * &y);
            assert!(!g.is_negative());
        }
    }

    #[test]
    fn test_mod_pow_known_values() -> Result<(), RsaCryptoError> {
        assert_eq!(mod_pow(&big(4), &big(13), &big(497))?, big(445));
        assert_eq!(mod_pow(&big(12345), &big(0), &big(987))?, big(1));
        assert_eq!(mod_pow(&big(100), &big(1), &big(30))?, big(10));
        assert_eq!(mod_pow(&big(0), &big(123), &big(456))?, big(0));
        assert_eq!(mod_pow(&big(1), &big(12345), &big(987))?, big(1));
        assert_eq!(mod_pow(&big(123), &big(456), &big(1))?, big(0));
        Ok(())
    }

    #[test]
    fn test_mod_pow_rejects_bad_arguments() {
        assert!(matches!(
            mod_pow(&big(2), &big(3), &big(0)),
            Err(RsaCryptoError::NonPositiveModulus(_))
        ));
        assert!(matches!(
            mod_pow(&big(2), &big(3), &big(-7)),
            Err(RsaCryptoError::NonPositiveModulus(_))
        ));
        assert!(matches!(
            mod_pow(&big(2), &big(-1), &big(7)),
            Err(RsaCryptoError::NegativeExponent(_))
        ));
    }

    #[quickcheck]
    fn prop_mod_pow_matches_naive(value: u32, exponent: u8, modulus: u16) -> TestResult {
        if modulus == 0 {
            return TestResult::discard();
        }

        let m = big(modulus as i64);
        let mut expected = BigInt::one() % &m;
        for _ in 0..exponent {
            expected = expected * big(value as i64) % &m;
        }

        let actual = mod_pow(&big(value as i64), &big(exponent as i64), &m).unwrap();
        TestResult::from_bool(actual == expected)
    }

    #[test]
    fn test_legendre_known_values() -> Result<(), RsaCryptoError> {
        assert_eq!(legendre_symbol(&big(4), &big(5))?, 1);
        assert_eq!(legendre_symbol(&big(2), &big(5))?, -1);
        assert_eq!(legendre_symbol(&big(10), &big(5))?, 0);
        assert_eq!(legendre_symbol(&big(-1), &big(13))?, 1);
        Ok(())
    }

    #[test]
    fn test_legendre_rejects_bad_modulus() {
        assert!(legendre_symbol(&big(3), &big(2)).is_err());
        assert!(legendre_symbol(&big(3), &big(10)).is_err());
        assert!(legendre_symbol(&big(3), &big(-7)).is_err());
    }

    #[test]
    fn test_jacobi_known_values() -> Result<(), RsaCryptoError> {
        assert_eq!(jacobi_symbol(&big(2), &big(15))?, 1);
        assert_eq!(jacobi_symbol(&big(1), &big(1))?, 1);
        assert_eq!(jacobi_symbol(&big(5), &big(15))?, 0);
        assert_eq!(jacobi_symbol(&big(1001), &big(9907))?, -1);
        Ok(())
    }

    #[test]
    fn test_jacobi_rejects_bad_modulus() {
        assert!(jacobi_symbol(&big(2), &big(0)).is_err());
        assert!(jacobi_symbol(&big(2), &big(-15)).is_err());
        assert!(jacobi_symbol(&big(2), &big(8)).is_err());
    }

    #[test]
    fn test_jacobi_equals_legendre_for_prime_modulus() -> Result<(), RsaCryptoError> {
        let p = big(31);
        for a in -10i64..30 {
            let a = big(a);
            assert_eq!(jacobi_symbol(&a, &p)?, legendre_symbol(&a, &p)?);
        }
        Ok(())
    }

    #[test]
    fn test_jacobi_zero_exactly_on_shared_factor() -> Result<(), RsaCryptoError> {
        let n = big(45);
        for a in 0i64..45 {
            let a = big(a);
            let expect_zero = gcd(&a, &n) > BigInt::one();
            assert_eq!(jacobi_symbol(&a, &n)? == 0, expect_zero, "a = {a}");
        }
        Ok(())
    }

    #[test]
    fn test_mod_inverse() {
        assert_eq!(mod_inverse(&big(17), &big(3120)), Some(big(2753)));
        assert_eq!(mod_inverse(&big(6), &big(9)), None);
        // Result is normalized into [0, m) even for negative a.
        assert_eq!(mod_inverse(&big(-17), &big(3120)), Some(big(3120 - 2753)));
    }
}
