use num_bigint::BigInt;

#[derive(thiserror::Error, Debug)]
pub enum RsaCryptoError {
    /// Error when a modular operation receives a modulus <= 0.
    #[error("Modulus must be positive, got {0}")]
    NonPositiveModulus(BigInt),
    /// Error when an exponent for modular exponentiation is negative.
    #[error("Exponent must be non-negative, got {0}")]
    NegativeExponent(BigInt),
    #[error("Legendre symbol requires an odd modulus greater than 2, got {0}")]
    InvalidLegendreModulus(BigInt),
    #[error("Jacobi symbol requires a positive odd modulus, got {0}")]
    InvalidJacobiModulus(BigInt),

    #[error("Probability must lie in [0.5, 1), got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("Public exponent must be odd and greater than 1, got {0}")]
    InvalidPublicExponent(BigInt),
    #[error("Prime bit length must be at least 4, got {0}")]
    BitLengthTooSmall(u64),
}
