//! # Wiener's attack
//!
//! Recovers a small RSA private exponent from the public key alone.
//! When `d < (1/3) n^(1/4)`, the fraction `k/d` from
//! `e*d - k*phi = 1` shows up as a convergent of the continued-fraction
//! expansion of `e/n`; each convergent is tested by reconstructing a
//! candidate phi and checking that the resulting quadratic in p and q
//! has integer roots.

use crate::rsa::keys::RsaPublicKey;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use serde::{Deserialize, Serialize};

/// One convergent k/d of the continued-fraction expansion of e/n.
/// Produced in increasing-index order; `denominator_d` is the candidate
/// secret exponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuedFraction {
    pub numerator_k: BigInt,
    pub denominator_d: BigInt,
}

/// Outcome of one attack run. `found_d` and `found_phi` are present
/// exactly when `is_successful`; `convergents` always holds every
/// convergent computed up to termination, win or lose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WienerAttackResult {
    pub is_successful: bool,
    pub found_d: Option<BigInt>,
    pub found_phi: Option<BigInt>,
    pub convergents: Vec<ContinuedFraction>,
}

impl WienerAttackResult {
    fn success(d: BigInt, phi: BigInt, convergents: Vec<ContinuedFraction>) -> Self {
        Self {
            is_successful: true,
            found_d: Some(d),
            found_phi: Some(phi),
            convergents,
        }
    }

    fn failure(convergents: Vec<ContinuedFraction>) -> Self {
        Self {
            is_successful: false,
            found_d: None,
            found_phi: None,
            convergents,
        }
    }
}

/// Runs Wiener's attack against a public key.
///
/// Convergents come from the Euclidean quotients of (e, n) via the
/// standard recurrence `k_i = q_i*k_{i-1} + k_{i-2}`,
/// `d_i = q_i*d_{i-1} + d_{i-2}`. The expansion is finite, so the
/// attack always terminates; a failure result means the key is not
/// Wiener-weak, not that something went wrong.
pub fn attack(public_key: &RsaPublicKey) -> WienerAttackResult {
    let e = &public_key.e;
    let n = &public_key.n;
    let mut convergents = Vec::new();

    let mut a = e.clone();
    let mut b = n.clone();
    let (mut prev_k, mut k) = (BigInt::zero(), BigInt::one());
    let (mut prev_d, mut d) = (BigInt::one(), BigInt::zero());

    while !b.is_zero() {
        let quotient = &a / &b;
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);

        let next_k = &quotient * &k + &prev_k;
        let next_d = &quotient * &d + &prev_d;
        prev_k = std::mem::replace(&mut k, next_k);
        prev_d = std::mem::replace(&mut d, next_d);

        convergents.push(ContinuedFraction {
            numerator_k: k.clone(),
            denominator_d: d.clone(),
        });

        // 0/1 convergents and even denominators can never give a valid
        // secret exponent.
        if k.is_zero() || d.is_zero() || d.is_even() {
            continue;
        }

        // e*d - k*phi = 1, so phi = (e*d - 1) / k when it divides.
        let ed_minus_1 = e * &d - 1u32;
        if !ed_minus_1.is_multiple_of(&k) {
            continue;
        }
        let phi = ed_minus_1 / &k;

        // p and q would be the roots of x^2 - (n - phi + 1)x + n = 0.
        let s = n - &phi + 1u32;
        let discriminant = &s * &s - n * 4u32;
        if discriminant.is_negative() {
            continue;
        }

        if let Some(root) = exact_sqrt(&discriminant) {
            // (s ± root) / 2 must both be integers.
            if (&s + &root).is_even() {
                return WienerAttackResult::success(d, phi, convergents);
            }
        }
    }

    WienerAttackResult::failure(convergents)
}

/// Newton's-method integer square root, verified by squaring; `None`
/// when `value` is negative or not a perfect square.
fn exact_sqrt(value: &BigInt) -> Option<BigInt> {
    if value.is_negative() {
        return None;
    }
    if value.is_zero() {
        return Some(BigInt::zero());
    }

    let mut x = value / 2u32 + 1u32;
    let mut y = (&x + value / &x) / 2u32;
    while y < x {
        x = y;
        y = (&x + value / &x) / 2u32;
    }

    if &x * &x == *value { Some(x) } else { None }
}
