//! Memoised root and inverse tables.
//!
//! Tables depend only on the prime (and root kind), so they survive changes
//! to every other parameter. The owner decides when to drop them.

use padic_integers::InverseTable;
use padic_roots::{RootKind, RootTable};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

/// Tables shared by every step evaluated for one prime.
#[derive(Clone, Debug)]
pub struct StepTables {
    /// Base roots mod p.
    pub roots: Arc<RootTable>,
    /// Inverses mod p.
    pub inverses: Arc<InverseTable>,
}

/// Cache of tables keyed by `(prime, kind)` and `prime`.
#[derive(Debug, Default)]
pub struct StepCache {
    roots: FxHashMap<(u64, RootKind), Arc<RootTable>>,
    inverses: FxHashMap<u64, Arc<InverseTable>>,
}

impl StepCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root table for `(prime, kind)`, built on first use.
    pub fn root_table(&mut self, prime: u64, kind: RootKind) -> Arc<RootTable> {
        self.roots
            .entry((prime, kind))
            .or_insert_with(|| {
                debug!(prime, ?kind, "building root table");
                Arc::new(RootTable::build(prime, kind))
            })
            .clone()
    }

    /// Inverse table for `prime`, built on first use.
    pub fn inverse_table(&mut self, prime: u64) -> Arc<InverseTable> {
        self.inverses
            .entry(prime)
            .or_insert_with(|| {
                debug!(prime, "building inverse table");
                Arc::new(InverseTable::new(prime))
            })
            .clone()
    }

    /// Both tables needed to lift roots of `kind` modulo powers of `prime`.
    pub fn tables(&mut self, prime: u64, kind: RootKind) -> StepTables {
        StepTables {
            roots: self.root_table(prime, kind),
            inverses: self.inverse_table(prime),
        }
    }

    /// Drops tables for every prime other than `prime`.
    pub fn retain_prime(&mut self, prime: u64) {
        self.roots.retain(|&(p, _), _| p == prime);
        self.inverses.retain(|&p, _| p == prime);
    }

    /// Drops everything.
    pub fn invalidate(&mut self) {
        self.roots.clear();
        self.inverses.clear();
    }

    /// Number of cached tables of either sort.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len() + self.inverses.len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_shared() {
        let mut cache = StepCache::new();
        let a = cache.root_table(7, RootKind::Square);
        let b = cache.root_table(7, RootKind::Square);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        let tables = cache.tables(7, RootKind::Cube);
        assert_eq!(tables.roots.kind(), RootKind::Cube);
        assert_eq!(tables.inverses.modulus(), 7);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_retain_and_invalidate() {
        let mut cache = StepCache::new();
        cache.tables(5, RootKind::Square);
        cache.tables(7, RootKind::Square);
        cache.retain_prime(7);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.root_table(7, RootKind::Square).prime(), 7);

        cache.invalidate();
        assert!(cache.is_empty());
    }
}
