//! # padic-viz
//!
//! Animated orbits of integers under p-adic dynamics.
//!
//! Every integer `0..=max_int` is pushed through a cubic polynomial modulo
//! `p^power`, optionally followed by Hensel-lifted square and cube roots.
//! Each tick yields a [`Transition`] that the host samples into [`Frame`]s of
//! coloured dots, placed either by the fractal p-adic digit embedding or on a
//! circle whose radius is the integer's norm.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use padic_viz::prelude::*;
//!
//! let config = VizConfig::default().with_prime(5).with_roots(true, false);
//! let mut viz = Visualizer::new(config)?;
//! viz.tick();
//! let frame = viz.frame(0.5);
//! ```
//!
//! The numeric crates are re-exported as [`integers`], [`roots`] and
//! [`geometry`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub use padic_geometry as geometry;
pub use padic_integers as integers;
pub use padic_roots as roots;

pub mod bubble;
pub mod cache;
pub mod color;
pub mod config;
pub mod error;
pub mod iteration;
pub mod layout;
pub mod polynomial;
pub mod scene;
pub mod visualizer;

pub use bubble::{BubbleState, Motion};
pub use cache::{StepCache, StepTables};
pub use color::{hsv_to_rgb, Palette, Rgb};
pub use config::{is_prime, NormChoice, VizConfig, MAX_POINTS, MAX_PRIME};
pub use error::{Result, VizError};
pub use iteration::Iteration;
pub use layout::{Layout, LayoutMode};
pub use polynomial::Polynomial;
pub use scene::{Dot, Frame, Link, Transition};
pub use visualizer::Visualizer;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{Frame, LayoutMode, NormChoice, Polynomial, Visualizer, VizConfig};
    pub use padic_geometry::{Norm, Point2D};
    pub use padic_integers::{Integer, Ratio};
    pub use padic_roots::RootKind;
}

#[cfg(test)]
mod proptests;
