//! Textbook RSA: `c = m^e mod n`, `m = c^d mod n`.
//!
//! No padding is applied. The round trip is exact for any message in
//! `[0, n)`; keeping messages in range is the caller's job, as is any
//! mapping between text and integers.

use crate::errors::RsaCryptoError;
use crate::math;
use crate::rsa::keys::{RsaPrivateKey, RsaPublicKey};

use num_bigint::BigInt;

pub fn encrypt(message: &BigInt, key: &RsaPublicKey) -> Result<BigInt, RsaCryptoError> {
    math::mod_pow(message, &key.e, &key.n)
}

pub fn decrypt(ciphertext: &BigInt, key: &RsaPrivateKey) -> Result<BigInt, RsaCryptoError> {
    math::mod_pow(ciphertext, &key.d, &key.n)
}
