//! Norms on the integers.
//!
//! The p-adic magnitude here is `2^-k` where `p^k` exactly divides `n`,
//! not the textbook `p^-k`. Using a fixed base puts every prime on the same
//! `[0, 1]` scale, so circular layouts for different primes are comparable.

use num_traits::{One, Zero};
use padic_integers::{Integer, Ratio};
use serde::{Deserialize, Serialize};

/// How the "size" of an integer is measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "prime", rename_all = "snake_case")]
pub enum Norm {
    /// The ordinary absolute value.
    Infinite,
    /// The p-adic norm for the given prime.
    #[serde(rename = "padic")]
    PAdic(u64),
}

impl Norm {
    /// Exact magnitude of `n` under this norm.
    ///
    /// - `Infinite`: `|n|`
    /// - `PAdic(p)`: `0` for `n = 0`, otherwise `1 / 2^k` with `k = v_p(n)`
    #[must_use]
    pub fn magnitude(&self, n: i64) -> Ratio {
        match *self {
            Norm::Infinite => Ratio::from_integer(Integer::new(n).abs()),
            Norm::PAdic(p) => {
                if n == 0 {
                    return Ratio::zero();
                }
                let k = valuation(p, n).unwrap_or(0);
                Ratio::new(Integer::one(), Integer::new(2).pow(k))
            }
        }
    }

    /// [`Norm::magnitude`] as a float, for layout.
    #[must_use]
    pub fn magnitude_f64(&self, n: i64) -> f64 {
        self.magnitude(n).to_f64()
    }

    /// The prime of a p-adic norm.
    #[must_use]
    pub fn prime(&self) -> Option<u64> {
        match *self {
            Norm::Infinite => None,
            Norm::PAdic(p) => Some(p),
        }
    }

    /// Returns true for p-adic norms.
    #[must_use]
    pub fn is_padic(&self) -> bool {
        matches!(self, Norm::PAdic(_))
    }
}

/// The exponent of the largest power of `p` dividing `n`.
///
/// Returns `None` for `n = 0` (divisible by every power) and for `p < 2`.
#[must_use]
pub fn valuation(p: u64, n: i64) -> Option<u32> {
    if n == 0 || p < 2 {
        return None;
    }
    let mut rest = n.unsigned_abs();
    let mut k = 0;
    while rest % p == 0 {
        rest /= p;
        k += 1;
    }
    Some(k)
}
