//! Visualisation parameters.
//!
//! Every knob the host exposes lives in [`VizConfig`]. Configs are plain data:
//! they can be built in code, deserialised from JSON, and are checked with
//! [`VizConfig::validate`] before a [`crate::Visualizer`] accepts them.

use padic_geometry::{Norm, Point2D};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VizError};
use crate::layout::LayoutMode;
use crate::polynomial::Polynomial;

/// Largest `max_int` a configuration may ask for.
pub const MAX_POINTS: u64 = 1 << 20;

/// Largest prime a configuration may ask for. Root and inverse tables hold
/// one entry per residue mod `p`.
pub const MAX_PRIME: u64 = 1 << 16;

/// Which norm drives the circular layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormChoice {
    /// Ordinary absolute value.
    Infinite,
    /// p-adic norm for the configured prime.
    #[default]
    #[serde(rename = "padic")]
    PAdic,
}

/// Full configuration of a visualisation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Prime base `p`.
    pub prime: u64,
    /// Precision: all arithmetic happens modulo `p^power`.
    pub power: u32,
    /// Integers `0..=max_int` are drawn.
    pub max_int: u64,
    /// The iterated map.
    pub polynomial: Polynomial,
    /// Compose a Hensel-lifted square root after the polynomial.
    pub square_root: bool,
    /// Compose a Hensel-lifted cube root after the polynomial (and square root).
    pub cube_root: bool,
    /// Fractal or circular placement.
    pub layout: LayoutMode,
    /// Norm used by the circular layout.
    pub norm: NormChoice,
    /// Scale of the fractal layout.
    pub scale: f64,
    /// Radius of the circular layout.
    pub radius: f64,
    /// Centre of both layouts.
    pub center: Point2D,
    /// Radius of each drawn dot.
    pub dot_radius: f64,
    /// Draw gradient lines between consecutive integers.
    pub connect: bool,
    /// Palette saturation in `[0, 1]`.
    pub saturation: f64,
    /// Palette value (brightness) in `[0, 1]`.
    pub value: f64,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            prime: 3,
            power: 4,
            max_int: 80,
            polynomial: Polynomial::default(),
            square_root: false,
            cube_root: false,
            layout: LayoutMode::Fractal,
            norm: NormChoice::PAdic,
            scale: 200.0,
            radius: 200.0,
            center: Point2D::ORIGIN,
            dot_radius: 3.0,
            connect: false,
            saturation: 0.8,
            value: 0.9,
        }
    }
}

impl VizConfig {
    /// Parses a JSON configuration; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises the configuration as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails (non-finite floats).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Sets the prime.
    #[must_use]
    pub fn with_prime(mut self, prime: u64) -> Self {
        self.prime = prime;
        self
    }

    /// Sets the precision power.
    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    /// Sets the largest drawn integer.
    #[must_use]
    pub fn with_max_int(mut self, max_int: u64) -> Self {
        self.max_int = max_int;
        self
    }

    /// Sets the iterated polynomial.
    #[must_use]
    pub fn with_polynomial(mut self, polynomial: Polynomial) -> Self {
        self.polynomial = polynomial;
        self
    }

    /// Enables or disables the square-root and cube-root steps.
    #[must_use]
    pub fn with_roots(mut self, square_root: bool, cube_root: bool) -> Self {
        self.square_root = square_root;
        self.cube_root = cube_root;
        self
    }

    /// Sets the layout.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the norm of the circular layout.
    #[must_use]
    pub fn with_norm(mut self, norm: NormChoice) -> Self {
        self.norm = norm;
        self
    }

    /// Enables or disables connecting lines.
    #[must_use]
    pub fn with_connect(mut self, connect: bool) -> Self {
        self.connect = connect;
        self
    }

    /// `p^power`, the modulus every value is reduced by.
    ///
    /// # Errors
    ///
    /// Returns [`VizError::ModulusOverflow`] if it does not fit in a `u64`.
    pub fn modulus(&self) -> Result<u64> {
        self.prime
            .checked_pow(self.power)
            .ok_or(VizError::ModulusOverflow {
                prime: self.prime,
                power: self.power,
            })
    }

    /// The norm used by the circular layout.
    #[must_use]
    pub fn norm(&self) -> Norm {
        match self.norm {
            NormChoice::Infinite => Norm::Infinite,
            NormChoice::PAdic => Norm::PAdic(self.prime),
        }
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns the first rejected parameter.
    pub fn validate(&self) -> Result<()> {
        if self.prime > MAX_PRIME {
            return Err(VizError::PrimeTooLarge(self.prime));
        }
        if !is_prime(self.prime) {
            return Err(VizError::NotPrime(self.prime));
        }
        if self.power == 0 {
            return Err(VizError::InvalidPower(self.power));
        }
        self.modulus()?;
        if self.max_int > MAX_POINTS {
            return Err(VizError::RangeTooLarge(self.max_int));
        }
        for (name, value) in [
            ("scale", self.scale),
            ("radius", self.radius),
            ("dot_radius", self.dot_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(VizError::InvalidParameter(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        for (name, value) in [("saturation", self.saturation), ("value", self.value)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(VizError::InvalidParameter(format!(
                    "{name} must lie in [0, 1], got {value}"
                )));
            }
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(VizError::InvalidParameter("center must be finite".into()));
        }
        Ok(())
    }
}

/// Trial division; the primes drawn here are small.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
