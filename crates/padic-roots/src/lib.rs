//! Modular roots for p-adic iteration.
//!
//! This crate provides:
//! - **Root tables**: every square or cube root of every residue mod p
//! - **Hensel lifting**: extending a root mod p to a root mod p^n
//!
//! Both are pure functions of their arguments. Callers that evaluate many
//! residues against the same prime build the tables once and use
//! [`lift_root`] directly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod hensel;
pub mod table;

#[cfg(test)]
mod proptests;

pub use hensel::{compute_step, is_root, lift_cube_root, lift_root, lift_square_root};
pub use table::{RootKind, RootTable};
