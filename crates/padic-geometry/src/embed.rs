//! Planar embeddings.
//!
//! [`FractalEmbedder`] sends the digit expansion of `n` to a sum of shrinking
//! polar vectors, one per digit. The picture is translated so that zero,
//! whose digits are all `0`, sits at the origin: each digit contributes
//! `r·(cos θ − 1, sin θ)`, which differs from the plain polar sum only by
//! the constant `Σ r_i`.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::ops::{Add, Mul, Sub};

use crate::expansion::{expansion_len, Digits};

/// A position in the visualisation plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2D {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts polar coordinates to Cartesian.
    #[must_use]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(radius * cos, radius * sin)
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Euclidean distance.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// The point at fraction `turn` of a full circle of the given radius.
#[must_use]
pub fn circle_point(turn: f64, radius: f64) -> Point2D {
    Point2D::from_polar(radius, TAU * turn)
}

/// Precomputed embedding for a fixed prime and precision.
///
/// Building one and each [`FractalEmbedder::embed`] are both `O(L)`,
/// independent of the size of `p`.
#[derive(Clone, Debug)]
pub struct FractalEmbedder {
    prime: u64,
    len: usize,
    /// `2π / p`.
    step: f64,
    /// `p^-i` for each digit position `i`.
    radii: Vec<f64>,
}

impl FractalEmbedder {
    /// Embedder whose precision is the digit count of `max_value` in base `prime`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(max_value: u64, prime: u64) -> Self {
        let len = expansion_len(prime, max_value);
        let p = prime as f64;
        let radii = std::iter::successors(Some(1.0), |r| Some(r / p))
            .take(len)
            .collect();

        Self {
            prime,
            len,
            step: TAU / p,
            radii,
        }
    }

    /// The prime base.
    #[must_use]
    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// Number of digits every integer is expanded to.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.len
    }

    /// Position of `n`. Digits past the precision are ignored.
    #[must_use]
    pub fn embed(&self, n: u64) -> Point2D {
        // Digits stops early; the missing positions are zero and contribute nothing.
        Digits::new(self.prime, n)
            .zip(&self.radii)
            .map(|(digit, &radius)| self.contribution(digit, radius))
            .fold(Point2D::ORIGIN, Add::add)
    }

    /// `r·(cos θ_d − 1, sin θ_d)`, zero for `d = 0`.
    #[allow(clippy::cast_precision_loss)]
    fn contribution(&self, digit: u64, radius: f64) -> Point2D {
        if digit == 0 {
            return Point2D::ORIGIN;
        }
        Point2D::from_polar(radius, self.step * digit as f64) - Point2D::new(radius, 0.0)
    }
}

/// Position of `n` with the precision set by `max_value`.
#[must_use]
pub fn embed(max_value: u64, p: u64, n: u64) -> Point2D {
    FractalEmbedder::new(max_value, p).embed(n)
}
