//! Extended Euclidean algorithm and modular inverse.

use modkit_types::MathError;

/// Solve `a*x + b*y = gcd(a, b)` for integers `a`, `b`.
///
/// Returns `(gcd, x, y)`. Base case `b == 0` yields `(a, 1, 0)`, so the
/// gcd carries the sign of the recursion's terminal remainder (e.g.
/// `extended_euclidean(-4, 0)` is `(-4, 1, 0)`, and `(0, 0)` degenerates
/// to `(0, 1, 0)`). Quotients round toward zero, which pins down the
/// particular Bézout pair produced; [`inverse_m`] relies on that choice
/// when it normalizes sign.
pub fn extended_euclidean(a: i32, b: i32) -> (i32, i32, i32) {
    let (d, x, y) = xgcd(a as i64, b as i64);
    (d as i32, x as i32, y as i32)
}

/// Recursive extended Euclid over `i64`.
///
/// Shared with the Montgomery parameter derivation, where the radix can
/// reach `2^31` and no longer fits an `i32`.
pub(crate) fn xgcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        return (a, 1, 0);
    }
    let (d, x1, y1) = xgcd(b, a % b);
    (d, y1, x1 - (a / b) * y1)
}

/// Return the modular inverse of `a` modulo `m`, in `[0, m)`.
///
/// Errors with `ModulusNonPositive` for `m <= 0` and `NoInverse` when
/// `gcd(a, m) != 1`.
pub fn inverse_m(a: i32, m: i32) -> Result<i32, MathError> {
    if m <= 0 {
        return Err(MathError::ModulusNonPositive);
    }
    Ok(inverse(a as i64, m as i64)? as i32)
}

/// `inverse_m` over `i64`, for callers whose operands exceed `i32`.
///
/// The caller guarantees `m > 0`. The Bézout coefficient for `(a, m)`
/// lies in `(-m, m)`, so a single addition of `m` normalizes it.
pub(crate) fn inverse(a: i64, m: i64) -> Result<i64, MathError> {
    let (d, x, _) = xgcd(a, m);
    // A negative a can surface the gcd as -1; negate the coefficient
    // along with it.
    let mut inv = match d {
        1 => x,
        -1 => -x,
        _ => return Err(MathError::NoInverse),
    };
    if inv < 0 {
        inv += m;
    }
    Ok(inv)
}
