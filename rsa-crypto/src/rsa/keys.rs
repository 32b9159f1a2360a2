use num_bigint::BigInt;

use serde::{Deserialize, Serialize};

/// Public half of an RSA key: exponent `e` and modulus `n = p * q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPublicKey {
    pub e: BigInt,
    pub n: BigInt,
}

/// Private half of an RSA key: exponent `d = e^(-1) mod phi(n)` and the
/// modulus shared with the public half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPrivateKey {
    pub d: BigInt,
    pub n: BigInt,
}

/// A matched public/private pair produced by one key-generation run.
/// Both halves carry the same modulus; neither is valid with a key from
/// another run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    pub fn new(e: BigInt, n: BigInt) -> Self {
        Self { e, n }
    }

    /// Bit length of the modulus.
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}

impl RsaPrivateKey {
    pub fn new(d: BigInt, n: BigInt) -> Self {
        Self { d, n }
    }

    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}
