//! Brute-force root tables modulo a prime.
//!
//! For each `i` in `0..p` the table records `i` under the residue `i^k mod p`.
//! A prime has at most `k` roots per residue, so buckets rarely spill out of
//! their inline storage.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Which root a table (or a lifting step) extracts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RootKind {
    /// `y` with `y² ≡ r`.
    Square,
    /// `y` with `y³ ≡ r`.
    Cube,
}

impl RootKind {
    /// The exponent `k` in `y^k ≡ r`.
    #[must_use]
    pub const fn exponent(self) -> u32 {
        match self {
            RootKind::Square => 2,
            RootKind::Cube => 3,
        }
    }

    /// Computes `x^k mod m` without overflow. Zero when `m == 0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn power_mod(self, x: u64, m: u64) -> u64 {
        if m == 0 {
            return 0;
        }
        let m = u128::from(m);
        let x = u128::from(x) % m;
        let result = match self {
            RootKind::Square => x * x % m,
            RootKind::Cube => x * x % m * x % m,
        };
        // result < m <= u64::MAX
        result as u64
    }

    /// The derivative of `y^k` at `y`, reduced mod `m`: `2y` or `3y²`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn derivative_mod(self, y: u64, m: u64) -> u64 {
        if m == 0 {
            return 0;
        }
        let m128 = u128::from(m);
        let y = u128::from(y) % m128;
        let result = match self {
            RootKind::Square => 2 * y % m128,
            RootKind::Cube => 3 * (y * y % m128) % m128,
        };
        result as u64
    }
}

/// Roots of every residue modulo `p` for one [`RootKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootTable {
    prime: u64,
    kind: RootKind,
    roots: FxHashMap<u64, SmallVec<[u64; 3]>>,
}

impl RootTable {
    /// Builds the table in a single pass over `0..p`.
    ///
    /// Within a bucket, roots appear in increasing order.
    #[must_use]
    pub fn build(prime: u64, kind: RootKind) -> Self {
        let mut roots: FxHashMap<u64, SmallVec<[u64; 3]>> = FxHashMap::default();
        for i in 0..prime {
            roots
                .entry(kind.power_mod(i, prime))
                .or_default()
                .push(i);
        }
        Self { prime, kind, roots }
    }

    /// Square roots modulo `p`.
    #[must_use]
    pub fn square(prime: u64) -> Self {
        Self::build(prime, RootKind::Square)
    }

    /// Cube roots modulo `p`.
    #[must_use]
    pub fn cube(prime: u64) -> Self {
        Self::build(prime, RootKind::Cube)
    }

    /// The modulus the table was built for.
    #[must_use]
    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// The kind of root stored.
    #[must_use]
    pub fn kind(&self) -> RootKind {
        self.kind
    }

    /// All roots of `residue mod p`, smallest first. Empty if there are none.
    #[must_use]
    pub fn find(&self, residue: u64) -> &[u64] {
        if self.prime == 0 {
            return &[];
        }
        self.roots
            .get(&(residue % self.prime))
            .map_or(&[][..], |bucket| bucket.as_slice())
    }

    /// Residues that have at least one root, in ascending order.
    #[must_use]
    pub fn residues(&self) -> Vec<u64> {
        let mut residues: Vec<u64> = self.roots.keys().copied().collect();
        residues.sort_unstable();
        residues
    }
}
