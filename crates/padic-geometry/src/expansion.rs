//! Base-p digit expansions, least significant digit first.

use std::iter::FusedIterator;

/// Lazy iterator over the base-`p` digits of a non-negative integer.
///
/// Yields digits least significant first and stops once the remaining
/// quotient is zero. Zero expands to the single digit `0`. The iterator is
/// `Clone`, so an expansion can be restarted from any point.
///
/// The base must be at least 2.
#[derive(Clone, Debug)]
pub struct Digits {
    base: u64,
    rest: u64,
    done: bool,
}

impl Digits {
    /// Starts the expansion of `n` in base `base`.
    #[must_use]
    pub fn new(base: u64, n: u64) -> Self {
        debug_assert!(base >= 2, "digit expansion needs a base of at least 2");
        Self {
            base,
            rest: n,
            done: false,
        }
    }
}

impl Iterator for Digits {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        let digit = self.rest % self.base;
        self.rest /= self.base;
        if self.rest == 0 {
            self.done = true;
        }
        Some(digit)
    }
}

impl FusedIterator for Digits {}

/// All base-`p` digits of `n`, least significant first.
#[must_use]
pub fn digits_of(p: u64, n: u64) -> Vec<u64> {
    Digits::new(p, n).collect()
}

/// Number of base-`p` digits of `max`; the fixed precision of an embedding.
#[must_use]
pub fn expansion_len(p: u64, max: u64) -> usize {
    Digits::new(p, max).count()
}

/// The first `len` digits of `n`, zero padded.
///
/// Digits beyond `len` are dropped, which reads `n` modulo `p^len`.
#[must_use]
pub fn padded_digits(p: u64, n: u64, len: usize) -> Vec<u64> {
    Digits::new(p, n)
        .chain(std::iter::repeat(0))
        .take(len)
        .collect()
}

/// Reassembles `Σ digits[i]·p^i`. Returns `None` on overflow.
#[must_use]
pub fn from_digits(p: u64, digits: &[u64]) -> Option<u64> {
    digits
        .iter()
        .rev()
        .try_fold(0u64, |acc, &d| acc.checked_mul(p)?.checked_add(d))
}
