//! Fermat compositeness witnesses.

use crate::pow::powm;
use modkit_types::MathError;

/// Deterministic witness bases sufficient for every modulus below 2^32.
pub const WITNESS_BASES_32: [i32; 3] = [2, 7, 61];

/// Deterministic witness bases sufficient for every modulus below 2^64.
///
/// Kept for callers with a wider exponentiation; this crate's moduli are
/// limited to the signed 32-bit domain.
pub const WITNESS_BASES_64: [u64; 7] =
    [2, 325, 9375, 28178, 450775, 9780504, 1795265022];

/// Report whether `a` is a Fermat witness proving `n` composite.
///
/// Checks `a^(n-1) mod n != 1`. A `true` result proves compositeness
/// whenever `a` is not a multiple of `n`; `false` proves nothing on its
/// own (composites can pass for some bases).
pub fn witness(a: i32, n: i32) -> Result<bool, MathError> {
    if n <= 0 {
        return Err(MathError::ModulusNonPositive);
    }
    Ok(powm(a, n - 1, n)? != 1)
}
