//! One step of the iterated map.
//!
//! A step sends `x` to `f(x) mod p^power`, then optionally to a square root
//! and then a cube root of that, both Hensel-lifted to `p^power`. A root
//! step that has nothing to lift drops the value.

use padic_integers::Integer;
use padic_roots::{lift_root, RootKind};

use crate::cache::{StepCache, StepTables};
use crate::config::VizConfig;
use crate::error::Result;
use crate::polynomial::Polynomial;

/// The composed step for one configuration. Cheap to share across threads.
#[derive(Clone, Debug)]
pub struct Iteration {
    polynomial: Polynomial,
    power: u32,
    modulus: u64,
    square: Option<StepTables>,
    cube: Option<StepTables>,
}

impl Iteration {
    /// Resolves the step for `config`, taking tables from `cache`.
    ///
    /// # Errors
    ///
    /// Returns an error if `p^power` overflows.
    pub fn new(config: &VizConfig, cache: &mut StepCache) -> Result<Self> {
        let modulus = config.modulus()?;
        let square = config
            .square_root
            .then(|| cache.tables(config.prime, RootKind::Square));
        let cube = config
            .cube_root
            .then(|| cache.tables(config.prime, RootKind::Cube));
        Ok(Self {
            polynomial: config.polynomial,
            power: config.power,
            modulus,
            square,
            cube,
        })
    }

    /// The modulus `p^power` all values live in.
    #[must_use]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Image of `x`, or `None` if a root step has no lift.
    #[must_use]
    pub fn apply(&self, x: u64) -> Option<u64> {
        let mut value = self.polynomial.eval_mod(x, self.modulus);
        for tables in [&self.square, &self.cube].into_iter().flatten() {
            value = self.lift(tables, value)?;
        }
        Some(value)
    }

    fn lift(&self, tables: &StepTables, value: u64) -> Option<u64> {
        lift_root(
            &tables.roots,
            &tables.inverses,
            self.power,
            &Integer::from(value),
        )?
        .to_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iteration(config: &VizConfig) -> Iteration {
        Iteration::new(config, &mut StepCache::new()).unwrap()
    }

    #[test]
    fn test_polynomial_only() {
        // x² + 1 mod 81
        let step = iteration(&VizConfig::default());
        assert_eq!(step.modulus(), 81);
        assert_eq!(step.apply(4), Some(17));
        assert_eq!(step.apply(9), Some(1));
        assert_eq!(step.apply(80), Some(2)); // 6401 = 79·81 + 2
    }

    #[test]
    fn test_square_root_step() {
        // identity then √ mod 9: √4 lifts to 7
        let config = VizConfig::default()
            .with_power(2)
            .with_polynomial(Polynomial::identity())
            .with_roots(true, false);
        let step = iteration(&config);
        assert_eq!(step.apply(4), Some(7));
        // 2 is not a square mod 3
        assert_eq!(step.apply(2), None);
        // 0 has a vanishing derivative
        assert_eq!(step.apply(0), None);
    }

    #[test]
    fn test_square_then_cube() {
        // mod 125: x ↦ √x then ∛; cubing is bijective mod 5
        let config = VizConfig::default()
            .with_prime(5)
            .with_power(3)
            .with_polynomial(Polynomial::identity())
            .with_roots(true, true);
        let step = iteration(&config);
        for x in 1..125u64 {
            if let Some(y) = step.apply(x) {
                // y³ is a square root of x
                let s = y * y % 125 * y % 125;
                assert_eq!(s * s % 125, x);
            }
        }
        assert!(step.apply(4).is_some());
    }

    #[test]
    fn test_tables_come_from_cache() {
        let mut cache = StepCache::new();
        let config = VizConfig::default().with_roots(true, true);
        let _ = Iteration::new(&config, &mut cache).unwrap();
        // square + cube root tables, one inverse table
        assert_eq!(cache.len(), 3);
        let _ = Iteration::new(&config, &mut cache).unwrap();
        assert_eq!(cache.len(), 3);
    }
}
