//! Bit-level utilities used to size a Montgomery radix.

use modkit_types::MathError;

/// Return the zero-based index of the highest set bit of `n`.
///
/// Scans with binary masks, halving the candidate range five times
/// (16, 8, 4, 2, 1 bits). Returns `Err(BitScanOfZero)` for `n == 0`,
/// which has no set bit.
pub fn msb32(n: u32) -> Result<u32, MathError> {
    if n == 0 {
        return Err(MathError::BitScanOfZero);
    }
    let mut n = n;
    let mut idx = 0;
    if n & 0xffff_0000 != 0 {
        idx += 16;
        n &= 0xffff_0000;
    }
    if n & 0xff00_ff00 != 0 {
        idx += 8;
        n &= 0xff00_ff00;
    }
    if n & 0xf0f0_f0f0 != 0 {
        idx += 4;
        n &= 0xf0f0_f0f0;
    }
    if n & 0xcccc_cccc != 0 {
        idx += 2;
        n &= 0xcccc_cccc;
    }
    if n & 0xaaaa_aaaa != 0 {
        idx += 1;
    }
    Ok(idx)
}

/// Return the smallest power of two strictly greater than `n`.
///
/// Smears the highest set bit into every lower position, then adds one.
/// Wraps to 0 for `n >= 2^31`, matching 32-bit unsigned arithmetic.
pub fn next_pow2(n: u32) -> u32 {
    let mut n = n;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    n.wrapping_add(1)
}
