//! # Probabilistic primality testing
//!
//! One fixed driver ([`PrimalityTest::is_prime`]) over a closed set of
//! single-round witness tests. Each round draws a fresh random witness
//! and can only answer "certainly composite" or "passes this round";
//! the driver runs enough rounds to push the false-positive probability
//! below the caller's target.

pub mod witness;

use crate::errors::RsaCryptoError;
use crate::math;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

use serde::{Deserialize, Serialize};

/// Selector for the single-round witness test run by the shared driver.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PrimalityTest {
    /// Fermat's little theorem check. Cannot reliably detect Carmichael
    /// numbers, no matter how many rounds are run; that weakness is
    /// inherent to the test and intentionally kept.
    Fermat,
    /// Euler's criterion against the Jacobi symbol.
    SolovayStrassen,
    /// Strong pseudoprime test on the 2^s * d decomposition of n - 1.
    MillerRabin,
}

impl PrimalityTest {
    /// Probabilistic primality check.
    ///
    /// `probability` is the lower bound on the confidence of a `true`
    /// answer and must lie in `[0.5, 1)`. Each round's false-positive
    /// probability is bounded by 1/2, so the driver runs
    /// `ceil(-log2(1 - probability))` rounds; any round that finds a
    /// compositeness witness short-circuits to `false`.
    pub fn is_prime(&self, number: &BigInt, probability: f64) -> Result<bool, RsaCryptoError> {
        let two = BigInt::from(2);
        if *number < two {
            return Ok(false);
        }
        if *number == two || *number == BigInt::from(3) {
            return Ok(true);
        }
        if number.is_even() {
            return Ok(false);
        }

        if !(0.5..1.0).contains(&probability) {
            return Err(RsaCryptoError::ProbabilityOutOfRange(probability));
        }

        for _ in 0..iterations_for(probability) {
            if !self.single_round(number)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// One round of the selected test against a fresh random witness.
    /// `false` means `number` is certainly composite.
    fn single_round(&self, number: &BigInt) -> Result<bool, RsaCryptoError> {
        match self {
            PrimalityTest::Fermat => fermat_round(number),
            PrimalityTest::SolovayStrassen => solovay_strassen_round(number),
            PrimalityTest::MillerRabin => miller_rabin_round(number),
        }
    }
}

/// Rounds needed so that (1/2)^k <= 1 - probability.
fn iterations_for(probability: f64) -> u32 {
    (-(1.0 - probability).log2()).ceil() as u32
}

/// Witnesses are drawn from [2, n - 2]: 1 and n - 1 satisfy every test
/// trivially and would waste the round.
fn draw_witness(number: &BigInt) -> BigInt {
    witness::random_in_range(&BigInt::from(2), &(number - 2u32))
}

fn fermat_round(number: &BigInt) -> Result<bool, RsaCryptoError> {
    let a = draw_witness(number);

    // a^(n-1) != 1 (mod n) proves n composite.
    let result = math::mod_pow(&a, &(number - 1u32), number)?;

    Ok(result.is_one())
}

fn solovay_strassen_round(number: &BigInt) -> Result<bool, RsaCryptoError> {
    let a = draw_witness(number);

    let jacobi = math::jacobi_symbol(&a, number)?;
    // J(a, n) = 0 means gcd(a, n) > 1.
    if jacobi == 0 {
        return Ok(false);
    }

    let exponent = (number - 1u32) >> 1;
    let euler = math::mod_pow(&a, &exponent, number)?;

    // mod_pow never returns a negative residue, so -1 compares as n - 1.
    let canonical_jacobi = if jacobi == -1 {
        number - 1u32
    } else {
        BigInt::from(jacobi)
    };

    Ok(euler == canonical_jacobi)
}

fn miller_rabin_round(number: &BigInt) -> Result<bool, RsaCryptoError> {
    // n - 1 = 2^s * d with d odd.
    let mut d = number - 1u32;
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let a = draw_witness(number);
    let n_minus_1 = number - 1u32;

    let mut x = math::mod_pow(&a, &d, number)?;
    if x.is_one() || x == n_minus_1 {
        return Ok(true);
    }

    for _ in 1..s {
        x = math::mod_pow(&x, &BigInt::from(2), number)?;

        // Hitting 1 here exposes a nontrivial square root of 1.
        if x.is_one() {
            return Ok(false);
        }
        if x == n_minus_1 {
            return Ok(true);
        }
    }

    Ok(false)
}
