//! Uniform big-integer sampling from the OS CSPRNG.
//!
//! Witness unpredictability is a security property of the probabilistic
//! primality tests, so draws come from [`OsRng`] rather than a seeded
//! PRNG, and uniformity is guaranteed by rejection sampling instead of
//! modular reduction.

use num_bigint::{BigInt, BigUint};
use rand::RngCore;
use rand::rngs::OsRng;

/// Draws a uniform integer from `[min, max]`, both ends inclusive.
///
/// A byte-aligned candidate is masked down to the span's bit width and
/// redrawn whenever it overshoots the span. The mask keeps the expected
/// number of redraws below 2 regardless of the range.
pub fn random_in_range(min: &BigInt, max: &BigInt) -> BigInt {
    debug_assert!(min <= max, "empty sampling range");

    let span: BigUint = (max - min).magnitude().clone();
    let bits = span.bits();
    if bits == 0 {
        return min.clone();
    }

    let num_bytes = bits.div_ceil(8) as usize;
    let top_mask = match bits % 8 {
        0 => 0xFF,
        rem => (1u8 << rem) - 1,
    };

    let mut buf = vec![0u8; num_bytes];
    loop {
        OsRng.fill_bytes(&mut buf);
        buf[0] &= top_mask;

        let candidate = BigUint::from_bytes_be(&buf);
        if candidate <= span {
            return min + BigInt::from(candidate);
        }
    }
}

/// Random integer of exactly `bit_length` bits with the bottom bit set:
/// the forced top bit pins the length, the forced bottom bit keeps the
/// candidate odd.
pub fn random_odd_bits(bit_length: u64) -> BigInt {
    debug_assert!(bit_length >= 2, "bit length too small for an odd prime");

    let num_bytes = bit_length.div_ceil(8) as usize;
    let mut buf = vec![0u8; num_bytes];
    OsRng.fill_bytes(&mut buf);

    let mut candidate = BigUint::from_bytes_be(&buf) >> (num_bytes as u64 * 8 - bit_length);
    candidate.set_bit(bit_length - 1, true);
    candidate.set_bit(0, true);

    BigInt::from(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;

    #[test]
    fn test_random_in_range_stays_in_bounds() {
        let min = BigInt::from(2);
        let max = BigInt::from(11);
        for _ in 0..500 {
            let v = random_in_range(&min, &max);
            assert!(v >= min && v <= max, "out of range: {v}");
        }
    }

    #[test]
    fn test_random_in_range_degenerate_range() {
        let v = BigInt::from(7);
        assert_eq!(random_in_range(&v, &v), v);
    }

    #[test]
    fn test_random_in_range_covers_small_range() {
        // 500 draws over 4 values miss one with probability ~2^-207.
        let min = BigInt::from(0);
        let max = BigInt::from(3);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let v = random_in_range(&min, &max);
            seen[u32::try_from(v).unwrap() as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_random_odd_bits_shape() {
        for _ in 0..50 {
            let candidate = random_odd_bits(32);
            assert_eq!(candidate.bits(), 32);
            assert!(candidate.is_odd());
        }
    }

    #[test]
    fn test_random_odd_bits_unaligned_length() {
        for _ in 0..50 {
            let candidate = random_odd_bits(13);
            assert_eq!(candidate.bits(), 13);
            assert!(candidate.is_odd());
        }
    }
}
