//! Modular arithmetic over machine words.
//!
//! These are the primitives every other layer reduces to: Euclidean
//! remainder and quotient, gcd, and inverses via the extended Euclidean
//! algorithm. A zero modulus is tolerated and yields zero rather than a
//! panic.

use std::fmt;

/// Euclidean remainder: the unique value in `[0, |m|)` congruent to `a`.
///
/// Returns `0` when `m == 0`.
#[must_use]
pub fn mod_floor(a: i64, m: i64) -> i64 {
    if m == 0 {
        return 0;
    }
    a.rem_euclid(m)
}

/// Quotient matching [`mod_floor`], so `a == div_floor(a, m) * m + mod_floor(a, m)`.
///
/// Returns `0` when `m == 0`.
#[must_use]
pub fn div_floor(a: i64, m: i64) -> i64 {
    if m == 0 {
        return 0;
    }
    a.div_euclid(m)
}

/// Greatest common divisor, always non-negative. `gcd(a, 0) == |a|`.
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // gcd(i64::MIN, 0) is the only value that does not fit back
    i64::try_from(a).unwrap_or(i64::MAX)
}

/// Computes the inverse of `a` modulo `m` using the extended Euclidean algorithm.
///
/// Returns `Some(x)` with `0 <= x < m` and `a * x ≡ 1 (mod m)`, or `None`
/// when `gcd(a, m) != 1`. Modulus `1` is special-cased to `Some(1)` and a
/// non-positive modulus has no inverses.
#[must_use]
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m <= 0 {
        return None;
    }
    if m == 1 {
        return Some(1);
    }

    let mut t = 0i128;
    let mut new_t = 1i128;
    let mut r = i128::from(m);
    let mut new_r = i128::from(mod_floor(a, m));

    while new_r != 0 {
        let quotient = r / new_r;
        (t, new_t) = (new_t, t - quotient * new_t);
        (r, new_r) = (new_r, r - quotient * new_r);
    }

    if r != 1 {
        return None;
    }

    let inverse = t.rem_euclid(i128::from(m));
    i64::try_from(inverse).ok()
}

/// Multiplicative inverses of every residue modulo a fixed `p`.
///
/// Built once per prime; non-units map to `None`.
#[derive(Clone, PartialEq, Eq)]
pub struct InverseTable {
    modulus: u64,
    inverses: Vec<Option<u64>>,
}

impl InverseTable {
    /// Builds the table for modulus `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` does not fit in an `i64`.
    #[must_use]
    pub fn new(p: u64) -> Self {
        let m = i64::try_from(p).expect("modulus must fit in an i64");
        let inverses = (0..m)
            .map(|residue| mod_inverse(residue, m).and_then(|x| u64::try_from(x).ok()))
            .collect();
        Self {
            modulus: p,
            inverses,
        }
    }

    /// Returns the modulus the table was built for.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Looks up the inverse of `residue mod p`.
    #[must_use]
    pub fn get(&self, residue: u64) -> Option<u64> {
        if self.modulus == 0 {
            return None;
        }
        let index = usize::try_from(residue % self.modulus).ok()?;
        self.inverses.get(index).copied().flatten()
    }

    /// Number of residues that have an inverse.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.inverses.iter().filter(|x| x.is_some()).count()
    }
}

impl fmt::Debug for InverseTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InverseTable")
            .field("modulus", &self.modulus)
            .field("units", &self.unit_count())
            .finish()
    }
}
