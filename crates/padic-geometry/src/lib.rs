//! # padic-geometry
//!
//! Placing integers in the plane according to their p-adic structure.
//!
//! This crate provides:
//! - Archimedean and p-adic norms with exact magnitudes (`Norm`)
//! - Lazy base-p digit expansions (`Digits`)
//! - The fractal embedding of digit expansions into the plane (`FractalEmbedder`)
//!
//! ## Embedding
//!
//! Digit `d` at position `i` contributes the vector of length `p^-i` at
//! angle `2πd/p`. Integers that agree on their first `k` digits therefore
//! land within `O(p^-k)` of each other, which is exactly p-adic closeness.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod embed;
pub mod expansion;
pub mod norm;

pub use embed::{circle_point, embed, FractalEmbedder, Point2D};
pub use expansion::{digits_of, expansion_len, from_digits, padded_digits, Digits};
pub use norm::{valuation, Norm};
