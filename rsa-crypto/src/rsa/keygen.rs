use crate::errors::RsaCryptoError;
use crate::math;
use crate::primality::{PrimalityTest, witness};
use crate::rsa::keys::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};

/// Default public exponent, the fourth Fermat prime.
pub const DEFAULT_PUBLIC_EXPONENT: u32 = 65537;

/// Generates RSA key pairs from primes certified by the configured
/// primality oracle.
///
/// Prime sampling and the Wiener safety gate are unbounded retry loops:
/// they terminate with probability 1 but carry no deterministic bound,
/// so callers needing responsiveness should run generation on a worker
/// thread.
#[derive(Debug, Clone)]
pub struct RsaKeyGenerator {
    test: PrimalityTest,
    probability: f64,
    bit_length: u64,
    min_prime_distance_bits: u64,
}

impl RsaKeyGenerator {
    /// Creates a generator producing primes of exactly `bit_length`
    /// bits, each certified by `test` at confidence `probability`.
    ///
    /// The prime-distance safety check defaults to `bit_length / 4`
    /// bits; see [`Self::with_min_prime_distance_bits`].
    pub fn try_with(
        test: PrimalityTest,
        probability: f64,
        bit_length: u64,
    ) -> Result<Self, RsaCryptoError> {
        if !(0.5..1.0).contains(&probability) {
            return Err(RsaCryptoError::ProbabilityOutOfRange(probability));
        }
        if bit_length < 4 {
            return Err(RsaCryptoError::BitLengthTooSmall(bit_length));
        }

        Ok(Self {
            test,
            probability,
            bit_length,
            min_prime_distance_bits: bit_length / 4,
        })
    }

    /// Minimum bit length of |p - q|. Primes closer than this make n
    /// factorable by searching around sqrt(n). A heuristic guard, not a
    /// proof of safety; 0 disables it.
    pub fn with_min_prime_distance_bits(mut self, bits: u64) -> Self {
        self.min_prime_distance_bits = bits;
        self
    }

    /// Generates a key pair with the default public exponent 65537.
    pub fn generate_key_pair(&self) -> Result<RsaKeyPair, RsaCryptoError> {
        self.generate_key_pair_with_exponent(BigInt::from(DEFAULT_PUBLIC_EXPONENT))
    }

    /// Generates a key pair starting from the supplied public exponent,
    /// which must be odd and greater than 1.
    ///
    /// When `e` shares a factor with phi(n) it is bumped by 2 until
    /// coprime, so the returned public key may carry a larger exponent
    /// than requested.
    pub fn generate_key_pair_with_exponent(
        &self,
        e: BigInt,
    ) -> Result<RsaKeyPair, RsaCryptoError> {
        if e <= BigInt::one() || e.is_even() {
            return Err(RsaCryptoError::InvalidPublicExponent(e));
        }

        loop {
            let p = self.sample_prime()?;
            let q = self.sample_distinct_prime(&p)?;

            let n = &p * &q;
            let phi = (&p - 1u32) * (&q - 1u32);

            let mut e = e.clone();
            while !math::gcd(&e, &phi).is_one() {
                e += 2u32;
            }

            // d = e^(-1) mod phi, from the Bezout coefficient of e.
            let (_, x, _) = math::extended_gcd(&e, &phi);
            let d = x.mod_floor(&phi);

            // Wiener safety gate: d must exceed roughly n^(1/4),
            // approximated by bit length. Anything below falls to the
            // continued-fraction attack; resample both primes.
            if d.bits() <= n.bits() / 4 {
                continue;
            }

            return Ok(RsaKeyPair {
                public_key: RsaPublicKey::new(e, n.clone()),
                private_key: RsaPrivateKey::new(d, n),
            });
        }
    }

    /// Samples odd candidates of exactly `bit_length` bits until the
    /// oracle certifies one.
    fn sample_prime(&self) -> Result<BigInt, RsaCryptoError> {
        loop {
            let candidate = witness::random_odd_bits(self.bit_length);
            if self.test.is_prime(&candidate, self.probability)? {
                return Ok(candidate);
            }
        }
    }

    /// Samples a prime distinct from `p` and, when the distance check
    /// is enabled, far enough from it.
    fn sample_distinct_prime(&self, p: &BigInt) -> Result<BigInt, RsaCryptoError> {
        loop {
            let q = self.sample_prime()?;
            if q == *p {
                continue;
            }
            if (p - &q).abs().bits() < self.min_prime_distance_bits {
                continue;
            }
            return Ok(q);
        }
    }
}
