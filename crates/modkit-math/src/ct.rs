//! Constant-time helpers for the reduction path.
//!
//! The REDC final step is a conditional subtraction; doing it branch-free
//! keeps the reduction free of value-dependent branching.

use subtle::Choice;

/// Constant-time select: returns `a` if choice == 0, `b` if choice == 1.
pub(crate) fn ct_select(a: i64, b: i64, choice: Choice) -> i64 {
    let mask = -(choice.unwrap_u8() as i64); // 0 or all ones
    a ^ (mask & (a ^ b))
}

/// Constant-time `if a >= n { a - n } else { a }` for non-negative operands.
pub(crate) fn ct_sub_if_gte(a: i64, n: i64) -> i64 {
    let diff = a.wrapping_sub(n);
    // The sign bit of the difference is set exactly when a < n.
    let gte = Choice::from(((diff >> 63) as u8 & 1) ^ 1);
    ct_select(a, diff, gte)
}
