//! Display colours. Each drawn integer gets a hue proportional to its value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a colour.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Converts HSV (all components in `[0, 1]`, hue wrapping) to RGB.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(1.0) * 6.0;
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let channel = |x: f64| (x * 255.0).round() as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Colours for `0..count`, computed once per configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Evenly spaced hues at the given saturation and value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(count: usize, saturation: f64, value: f64) -> Self {
        let colors = (0..count)
            .map(|i| hsv_to_rgb(i as f64 / count as f64, saturation, value))
            .collect();
        Self { colors }
    }

    /// Colour of integer `n`; indices wrap around the palette.
    #[must_use]
    pub fn color(&self, n: u64) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::default();
        }
        let len = self.colors.len() as u64;
        let index = usize::try_from(n % len).unwrap_or(0);
        self.colors[index]
    }

    /// Number of colours.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
