#![forbid(unsafe_code)]
#![doc = "Common types and error codes for the modkit modular-arithmetic toolkit."]

pub mod error;

pub use error::*;
