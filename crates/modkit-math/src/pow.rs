//! Binary (square-and-multiply) modular exponentiation.

use modkit_types::MathError;

/// Compute `a^d mod n` by square-and-multiply, reducing with direct
/// remainder division at every step.
///
/// This is the reference implementation the Montgomery path is validated
/// against; the two must agree for every valid `(a, d, n)` with `n > 0`.
/// Products are computed in `i64` before reduction.
pub fn powm(a: i32, d: i32, n: i32) -> Result<i32, MathError> {
    if n <= 0 {
        return Err(MathError::ModulusNonPositive);
    }
    if d < 0 {
        return Err(MathError::NegativeExponent);
    }
    let n = n as i64;
    let mut a = (a as i64).rem_euclid(n);
    let mut r = 1 % n;
    let mut d = d;
    while d != 0 {
        if d & 1 == 1 {
            r = (r * a) % n;
        }
        d >>= 1;
        a = (a * a) % n;
    }
    Ok(r as i32)
}
