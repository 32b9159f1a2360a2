use crate::errors::RsaCryptoError;
use crate::primality::PrimalityTest;
use crate::rsa::codec;
use crate::rsa::keygen::RsaKeyGenerator;
use crate::rsa::keys::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};

use num_bigint::BigInt;

/// Facade bundling key generation and the codec behind one surface.
/// This is the boundary a UI or demo layer talks to; everything it does
/// is delegated.
#[derive(Debug, Clone)]
pub struct RsaService {
    generator: RsaKeyGenerator,
}

impl RsaService {
    pub fn try_with(
        test: PrimalityTest,
        probability: f64,
        bit_length: u64,
    ) -> Result<Self, RsaCryptoError> {
        Ok(Self {
            generator: RsaKeyGenerator::try_with(test, probability, bit_length)?,
        })
    }

    pub fn generate_key_pair(&self) -> Result<RsaKeyPair, RsaCryptoError> {
        self.generator.generate_key_pair()
    }

    pub fn encrypt(
        &self,
        message: &BigInt,
        key: &RsaPublicKey,
    ) -> Result<BigInt, RsaCryptoError> {
        codec::encrypt(message, key)
    }

    pub fn decrypt(
        &self,
        ciphertext: &BigInt,
        key: &RsaPrivateKey,
    ) -> Result<BigInt, RsaCryptoError> {
        codec::decrypt(ciphertext, key)
    }
}
