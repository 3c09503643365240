#![doc = "Fixed-width modular arithmetic for probabilistic primality testing."]

mod bits;
mod ct;
mod gcd;
mod montgomery;
mod pow;
mod witness;

pub use bits::{msb32, next_pow2};
pub use gcd::{extended_euclidean, inverse_m};
pub use montgomery::{
    montgomery, montgomery_n1, montgomery_r1, montgomery_reduce, MontgomeryCtx,
};
pub use pow::powm;
pub use witness::{witness, WITNESS_BASES_32, WITNESS_BASES_64};
