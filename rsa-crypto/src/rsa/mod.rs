//! # RSA
//!
//! Key models, the safety-gated key generator, the textbook
//! encrypt/decrypt codec, and a service facade bundling them behind one
//! surface for callers.

pub mod codec;
pub mod keygen;
pub mod keys;
pub mod service;

pub use keygen::{DEFAULT_PUBLIC_EXPONENT, RsaKeyGenerator};
pub use keys::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use service::RsaService;
