/// Modular-arithmetic operation errors.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// The modulus is zero, negative, or outside the signed 32-bit domain.
    #[error("modulus must be a positive 32-bit integer")]
    ModulusNonPositive,
    /// gcd(a, m) != 1, so no inverse of a exists modulo m. An even
    /// modulus in the Montgomery path surfaces here: it shares a factor
    /// of two with the radix.
    #[error("no modular inverse exists")]
    NoInverse,
    /// Bit-scan of zero: no bit is set.
    #[error("bit scan of zero")]
    BitScanOfZero,
    /// A negative exponent was passed to a modular exponentiation.
    #[error("exponent must be non-negative")]
    NegativeExponent,
}
