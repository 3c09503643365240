//! Montgomery reduction and Montgomery-domain modular exponentiation.

use crate::bits::msb32;
use crate::ct::ct_sub_if_gte;
use crate::gcd;
use modkit_types::MathError;

/// Montgomery multiplication context for a fixed odd modulus.
///
/// Precomputes the constants the reduction needs: the radix
/// `r = 2^r_bits` (the smallest power of two above the modulus), `n1`
/// with `n * n1 ≡ -1 (mod r)`, and `r1 = r^-1 mod n`. Reusing a context
/// across calls avoids re-deriving them on every exponentiation.
pub struct MontgomeryCtx {
    /// The modulus n (odd, positive).
    n: i64,
    /// Radix bit width: one more than the index of n's highest set bit.
    r_bits: u32,
    /// Low-word mask `2^r_bits - 1`.
    mask: i64,
    /// Negated inverse of n modulo the radix.
    n1: i64,
    /// Inverse of the radix modulo n.
    r1: i64,
}

impl MontgomeryCtx {
    /// Create a context for the given modulus.
    ///
    /// The modulus must be positive, fit in `i32`, and be coprime to the
    /// radix; an even modulus shares a factor of two with it and yields
    /// `NoInverse`.
    pub fn new(n: u32) -> Result<Self, MathError> {
        if n == 0 || n > i32::MAX as u32 {
            return Err(MathError::ModulusNonPositive);
        }
        let r_bits = msb32(n)? + 1;
        let r = 1i64 << r_bits;
        let n1 = (gcd::inverse(n as i64, r)? - r).abs();
        let r1 = gcd::inverse(r, n as i64)?;
        Ok(Self {
            n: n as i64,
            r_bits,
            mask: r - 1,
            n1,
            r1,
        })
    }

    /// Return the modulus.
    pub fn modulus(&self) -> i32 {
        self.n as i32
    }

    /// Return the radix bit width.
    pub fn r_bits(&self) -> u32 {
        self.r_bits
    }

    /// Return the negated inverse of the modulus modulo the radix.
    pub fn n1(&self) -> i32 {
        self.n1 as i32
    }

    /// Return the inverse of the radix modulo the modulus.
    pub fn r1(&self) -> i32 {
        self.r1 as i32
    }

    /// Convert into Montgomery form: `x * r mod n`.
    ///
    /// The input is reduced into `[0, n)` first, so negative and
    /// out-of-range values behave like their canonical residues.
    pub fn to_mont(&self, x: i32) -> i64 {
        ((x as i64).rem_euclid(self.n) << self.r_bits) % self.n
    }

    /// Convert out of Montgomery form: `s * r^-1 mod n`.
    pub fn from_mont(&self, s: i64) -> i64 {
        (s * self.r1) % self.n
    }

    /// One REDC step: divide `a` by the radix modulo n, without division.
    ///
    /// Picks `m` so that `a + m*n` is divisible by the radix, shifts, and
    /// applies one conditional subtraction. Requires `a < n * 2^r_bits`
    /// (any product of two values in `[0, n)` qualifies), which lands the
    /// pre-subtraction value below `2n` and the result in `[0, n)`.
    pub fn reduce(&self, a: i64) -> i64 {
        let m = ((a & self.mask) * self.n1) & self.mask;
        let t = (a + m * self.n) >> self.r_bits;
        ct_sub_if_gte(t, self.n)
    }

    /// Montgomery multiplication: `a * b * r^-1 mod n`.
    /// Both operands must be in Montgomery form.
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        self.reduce(a * b)
    }

    /// Compute `x^d mod n` entirely through Montgomery-domain operations.
    ///
    /// Square-and-multiply over the bits of `d`, with [`Self::reduce`]
    /// in place of multiply-then-mod. `d == 0` leaves the accumulator at
    /// the Montgomery form of 1, which converts back to `1 mod n`.
    pub fn exp(&self, x: i32, d: i32) -> Result<i32, MathError> {
        if d < 0 {
            return Err(MathError::NegativeExponent);
        }
        let mut s = (1i64 << self.r_bits) % self.n;
        let mut i = self.to_mont(x);
        let mut d = d;
        while d != 0 {
            if d & 1 == 1 {
                s = self.reduce(s * i);
            }
            d >>= 1;
            i = self.reduce(i * i);
        }
        Ok(self.from_mont(s) as i32)
    }
}

/// Montgomery constant `n1`: the negated inverse of `n` modulo the radix
/// `next_pow2(n)`, taken as an absolute value.
pub fn montgomery_n1(n: u32) -> Result<i32, MathError> {
    Ok(MontgomeryCtx::new(n)?.n1())
}

/// Montgomery constant `r1`: the inverse of the radix `next_pow2(n)`
/// modulo `n`, used to convert a result out of Montgomery form.
pub fn montgomery_r1(n: u32) -> Result<i32, MathError> {
    Ok(MontgomeryCtx::new(n)?.r1())
}

/// One-shot REDC step against an explicit parameter set.
///
/// `n1` must be the constant derived for the same modulus, and `r_bits`
/// the bit width used to derive it (`msb32(n) + 1`). See
/// [`MontgomeryCtx::reduce`] for the input-range requirement.
pub fn montgomery_reduce(a: i64, r_bits: u32, n: i32, n1: i32) -> i32 {
    let mask = (1i64 << r_bits) - 1;
    let m = ((a & mask) * n1 as i64) & mask;
    let t = (a + m * n as i64) >> r_bits;
    ct_sub_if_gte(t, n as i64) as i32
}

/// Compute `x^d mod n`, deriving the Montgomery parameters on the fly.
///
/// Callers exponentiating repeatedly against one modulus should build a
/// [`MontgomeryCtx`] once and call [`MontgomeryCtx::exp`] instead.
pub fn montgomery(x: i32, d: i32, n: u32) -> Result<i32, MathError> {
    MontgomeryCtx::new(n)?.exp(x, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pow::powm;

    #[test]
    fn test_parameter_relations() {
        for n in [3u32, 17, 43, 97, 32749] {
            let ctx = MontgomeryCtx::new(n).unwrap();
            let r = 1i64 << ctx.r_bits();
            let n = n as i64;
            // r * r1 ≡ 1 (mod n)
            assert_eq!((r * ctx.r1() as i64) % n, 1 % n);
            // n * n1 ≡ -1 (mod r)
            assert_eq!((n * ctx.n1() as i64) % r, r - 1);
        }
    }

    #[test]
    fn test_reference_constants() {
        // n = 43: r = 64, 43 * 3 = 129 ≡ 1 (mod 64), n1 = 64 - 3 = 61,
        // and 64 ≡ 21 (mod 43) with 21 * 41 = 861 = 20*43 + 1.
        assert_eq!(montgomery_n1(43).unwrap(), 61);
        assert_eq!(montgomery_r1(43).unwrap(), 41);
    }

    #[test]
    fn test_even_modulus_rejected() {
        assert!(matches!(
            MontgomeryCtx::new(100),
            Err(MathError::NoInverse)
        ));
    }

    #[test]
    fn test_bad_modulus_rejected() {
        assert!(matches!(
            MontgomeryCtx::new(0),
            Err(MathError::ModulusNonPositive)
        ));
        assert!(matches!(
            MontgomeryCtx::new(u32::MAX),
            Err(MathError::ModulusNonPositive)
        ));
    }

    #[test]
    fn test_mont_roundtrip() {
        let ctx = MontgomeryCtx::new(97).unwrap();
        for x in [0, 1, 42, 96] {
            let m = ctx.to_mont(x);
            assert_eq!(ctx.from_mont(m), x as i64);
        }
    }

    #[test]
    fn test_mont_mul() {
        let ctx = MontgomeryCtx::new(97).unwrap();
        let a = ctx.to_mont(45);
        let b = ctx.to_mont(67);
        // 45 * 67 = 3015 ≡ 8 (mod 97)
        assert_eq!(ctx.from_mont(ctx.mul(a, b)), 8);
    }

    #[test]
    fn test_reduce_halves_by_radix() {
        let ctx = MontgomeryCtx::new(43).unwrap();
        // reduce(a) ≡ a * r^-1 (mod n), result in [0, n)
        for a in [0i64, 1, 42, 43, 1000, 42 * 42] {
            let got = ctx.reduce(a);
            assert!((0..43).contains(&got));
            assert_eq!(
                (got * (1i64 << ctx.r_bits())) % 43,
                a % 43,
                "reduce({a}) mismatch"
            );
        }
    }

    #[test]
    fn test_free_reduce_matches_ctx() {
        let ctx = MontgomeryCtx::new(43).unwrap();
        for a in [0i64, 1, 42, 43, 1000, 42 * 42] {
            assert_eq!(
                montgomery_reduce(a, ctx.r_bits(), 43, ctx.n1()) as i64,
                ctx.reduce(a)
            );
        }
    }

    #[test]
    fn test_exp_basic() {
        let ctx = MontgomeryCtx::new(97).unwrap();
        // 3^4 = 81 mod 97 = 81
        assert_eq!(ctx.exp(3, 4).unwrap(), 81);
    }

    #[test]
    fn test_exp_zero_exponent() {
        assert_eq!(montgomery(5, 0, 43).unwrap(), 1);
        assert_eq!(montgomery(0, 0, 43).unwrap(), 1);
        // 1 mod 1 = 0
        assert_eq!(montgomery(5, 0, 1).unwrap(), 0);
    }

    #[test]
    fn test_exp_negative_exponent() {
        assert!(matches!(
            montgomery(3, -1, 43),
            Err(MathError::NegativeExponent)
        ));
    }

    #[test]
    fn test_exp_fermat() {
        // a^(p-1) ≡ 1 (mod p) for prime p
        let ctx = MontgomeryCtx::new(97).unwrap();
        for a in [2, 3, 5, 42, 96] {
            assert_eq!(ctx.exp(a, 96).unwrap(), 1, "Fermat failed for a={a}");
        }
    }

    #[test]
    fn test_exp_identity_roundtrip() {
        // montgomery(x, 1, n) == x mod n
        for n in [3u32, 43, 97, 12345] {
            for x in [0, 1, 2, 7, 42, 9999] {
                assert_eq!(
                    montgomery(x, 1, n).unwrap(),
                    (x as i64 % n as i64) as i32
                );
            }
        }
    }

    #[test]
    fn test_agrees_with_powm() {
        for n in [3u32, 5, 43, 97, 101, 32749] {
            for a in [0, 1, 2, 3, 17, 40] {
                for d in 0..32 {
                    assert_eq!(
                        montgomery(a, d, n).unwrap(),
                        powm(a, d, n as i32).unwrap(),
                        "mismatch at a={a} d={d} n={n}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_large_modulus() {
        // Largest odd modulus in the domain; products stress the i64
        // intermediates.
        let n = i32::MAX as u32; // 2^31 - 1, odd
        let ctx = MontgomeryCtx::new(n).unwrap();
        for (a, d) in [(2, 40), (1 << 30, 3), (i32::MAX - 1, 7)] {
            assert_eq!(
                ctx.exp(a, d).unwrap(),
                powm(a, d, n as i32).unwrap(),
                "mismatch at a={a} d={d}"
            );
        }
    }
}
