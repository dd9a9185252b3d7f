//! The cubic map iterated over the integer range.

use padic_integers::Integer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `f(x) = cubic·x³ + quadratic·x² + linear·x + constant`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Polynomial {
    /// Coefficient of `x³`.
    pub cubic: i64,
    /// Coefficient of `x²`.
    pub quadratic: i64,
    /// Coefficient of `x`.
    pub linear: i64,
    /// Constant term.
    pub constant: i64,
}

impl Polynomial {
    /// Creates a polynomial from its coefficients, highest degree first.
    #[must_use]
    pub const fn new(cubic: i64, quadratic: i64, linear: i64, constant: i64) -> Self {
        Self {
            cubic,
            quadratic,
            linear,
            constant,
        }
    }

    /// The identity map `f(x) = x`.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(0, 0, 1, 0)
    }

    /// Exact value at `x` (Horner's rule).
    #[must_use]
    pub fn eval(&self, x: &Integer) -> Integer {
        let mut acc = Integer::new(self.cubic);
        for c in [self.quadratic, self.linear, self.constant] {
            acc = acc * x + Integer::new(c);
        }
        acc
    }

    /// `f(x) mod modulus`, in `[0, modulus)`.
    #[must_use]
    pub fn eval_mod(&self, x: u64, modulus: u64) -> u64 {
        let value = self.eval(&Integer::from(x));
        value
            .rem_floor(&Integer::from(modulus))
            .to_u64()
            .unwrap_or(0)
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        [self.constant, self.linear, self.quadratic, self.cubic]
            .iter()
            .rposition(|&c| c != 0)
            .and_then(|d| u32::try_from(d).ok())
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::new(0, 1, 0, 1)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = [
            (self.cubic, "x^3"),
            (self.quadratic, "x^2"),
            (self.linear, "x"),
            (self.constant, ""),
        ];
        let mut wrote = false;
        for (c, var) in terms {
            if c == 0 {
                continue;
            }
            let sign = if c < 0 { "-" } else { "+" };
            if wrote {
                write!(f, " {sign} ")?;
            } else if c < 0 {
                write!(f, "-")?;
            }
            let magnitude = c.unsigned_abs();
            if magnitude != 1 || var.is_empty() {
                write!(f, "{magnitude}")?;
            }
            write!(f, "{var}")?;
            wrote = true;
        }
        if !wrote {
            write!(f, "0")?;
        }
        Ok(())
    }
}
