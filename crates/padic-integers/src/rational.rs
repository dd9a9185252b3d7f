//! Exact rational numbers.
//!
//! Norm magnitudes are kept exact until the renderer asks for a float.

use dashu::base::{Abs, BitTest, Inverse, UnsignedAbs};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul};

use crate::Integer;

/// A rational number in lowest terms.
///
/// The denominator is always positive and the sign is carried by the numerator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Ratio(RBig);

impl Ratio {
    /// Creates a ratio from numerator and denominator, reducing it.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let negative = denominator.is_negative();
        let value = RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        );
        if negative {
            Self(-value)
        } else {
            Self(value)
        }
    }

    /// Creates a ratio from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a ratio from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the ratio is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }

    /// Approximates the ratio as an `f64` for display.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        let numerator = self.0.numerator().clone();
        let denominator = self.0.denominator().clone();

        // Keep the top 62 bits of each part and fold the dropped bits into the exponent.
        let num_shift = numerator.bit_len().saturating_sub(62);
        let den_shift = denominator.bit_len().saturating_sub(62);
        let numerator = i64::try_from(numerator >> num_shift).unwrap_or(0);
        let denominator = u64::try_from(denominator >> den_shift).unwrap_or(0);

        if denominator == 0 {
            return 0.0;
        }
        let exponent = i32::try_from(num_shift).unwrap_or(i32::MAX)
            - i32::try_from(den_shift).unwrap_or(i32::MAX);
        numerator as f64 / denominator as f64 * 2f64.powi(exponent)
    }

    /// Returns a reference to the inner `dashu::RBig`.
    #[must_use]
    pub fn as_inner(&self) -> &RBig {
        &self.0
    }
}

impl Zero for Ratio {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Ratio {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ratio({self})")
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Add for Ratio {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul for Ratio {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl From<Integer> for Ratio {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<u64> for Ratio {
    fn from(n: u64) -> Self {
        Self(RBig::from(UBig::from(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction() {
        let r = Ratio::from_i64(4, 6);
        assert_eq!(r.numerator().to_i64(), Some(2));
        assert_eq!(r.denominator().to_i64(), Some(3));
    }

    #[test]
    fn test_sign_moves_to_numerator() {
        let r = Ratio::from_i64(3, -9);
        assert_eq!(r.numerator().to_i64(), Some(-1));
        assert_eq!(r.denominator().to_i64(), Some(3));
        assert_eq!(r, Ratio::from_i64(-1, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Ratio::from_i64(3, 1).to_string(), "3");
        assert_eq!(Ratio::from_i64(2, 8).to_string(), "1/4");
        assert_eq!(format!("{:?}", Ratio::from_i64(-1, 2)), "Ratio(-1/2)");
    }

    #[test]
    fn test_to_f64() {
        assert!((Ratio::from_i64(1, 4).to_f64() - 0.25).abs() < 1e-12);
        assert!((Ratio::from_i64(-7, 2).to_f64() + 3.5).abs() < 1e-12);
        assert_eq!(Ratio::zero().to_f64(), 0.0);

        let tiny = Ratio::new(Integer::new(1), Integer::new(2).pow(100));
        let expected = 2f64.powi(-100);
        assert!((tiny.to_f64() - expected).abs() < expected * 1e-9);
    }

    #[test]
    fn test_recip_and_pow() {
        let half = Ratio::from_i64(1, 2);
        assert_eq!(half.pow(3), Ratio::from_i64(1, 8));
        assert_eq!(half.recip(), Ratio::from(2u64));
        assert!(Ratio::from_i64(1, 4) < half);
    }
}
