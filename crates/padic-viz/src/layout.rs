//! Where each integer is drawn.

use padic_geometry::{circle_point, FractalEmbedder, Norm, Point2D};
use padic_integers::{Integer, Ratio};
use serde::{Deserialize, Serialize};

use crate::config::VizConfig;
use crate::error::Result;

/// The two placements the visualiser offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// p-adic digit embedding.
    #[default]
    Fractal,
    /// Angle from the integer's value, radius from its norm.
    Circular,
}

/// A layout resolved against one configuration.
#[derive(Clone, Debug)]
pub struct Layout {
    mode: LayoutMode,
    embedder: FractalEmbedder,
    norm: Norm,
    max_int: u64,
    scale: f64,
    radius: f64,
    center: Point2D,
}

impl Layout {
    /// Resolves the layout for `config`.
    ///
    /// The fractal precision covers both the drawn range and every residue
    /// modulo `p^power`, so iterated values never lose digits.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: &VizConfig) -> Result<Self> {
        config.validate()?;
        let modulus = config.modulus()?;
        let precision_bound = config.max_int.max(modulus.saturating_sub(1));
        Ok(Self {
            mode: config.layout,
            embedder: FractalEmbedder::new(precision_bound, config.prime),
            norm: config.norm(),
            max_int: config.max_int,
            scale: config.scale,
            radius: config.radius,
            center: config.center,
        })
    }

    /// The active mode.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Position of `n` in the plane.
    #[must_use]
    pub fn position(&self, n: u64) -> Point2D {
        match self.mode {
            LayoutMode::Fractal => self.center + self.embedder.embed(n) * self.scale,
            LayoutMode::Circular => self.center + self.circular(n),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn circular(&self, n: u64) -> Point2D {
        let turn = n as f64 / (self.max_int as f64 + 1.0);
        circle_point(turn, self.radius * self.radial_fraction(n))
    }

    /// Radius as a fraction of the layout radius, in `[0, 1]`.
    fn radial_fraction(&self, n: u64) -> f64 {
        let value = i64::try_from(n).unwrap_or(i64::MAX);
        match self.norm {
            Norm::PAdic(_) => self.norm.magnitude_f64(value),
            Norm::Infinite => {
                if self.max_int == 0 {
                    return 0.0;
                }
                let scaled = self.norm.magnitude(value)
                    * Ratio::new(Integer::new(1), Integer::from(self.max_int));
                scaled.to_f64().min(1.0)
            }
        }
    }
}
