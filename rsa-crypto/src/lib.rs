//! RSA core primitives: arbitrary-precision modular arithmetic,
//! probabilistic primality testing, key generation, textbook
//! encrypt/decrypt, and Wiener's continued-fraction attack on keys
//! with small private exponents.

pub mod errors;
pub mod math;
pub mod primality;
pub mod rsa;
pub mod wiener;
