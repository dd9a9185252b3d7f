//! # padic-integers
//!
//! Integer primitives for the p-adic orbit visualiser.
//!
//! This crate provides:
//! - Euclidean `mod`/`div`, `gcd` and modular inverses over machine words
//! - Precomputed inverse tables for a fixed prime (`InverseTable`)
//! - Arbitrary precision integers for Hensel lifting (`Integer`)
//! - Exact reduced ratios for norm magnitudes (`Ratio`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod modular;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::{div_floor, gcd, mod_floor, mod_inverse, InverseTable};
pub use rational::Ratio;
