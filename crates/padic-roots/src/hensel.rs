//! Hensel lifting of modular roots.
//!
//! Lifts a root of `y^k ≡ r (mod p)` to a root modulo `p^power`, gaining one
//! p-adic digit per step. Each step solves the linear congruence
//! `f + k·y^(k-1)·d ≡ 0 (mod p)` for the next digit `d`, where `f` is the
//! exact quotient `(n^k - r) / p^i`.
//!
//! Failure is not an error here: a residue without a base root, or a base
//! root where the derivative vanishes mod p, simply has no lift.

use num_traits::One;
use padic_integers::{Integer, InverseTable};

use crate::table::{RootKind, RootTable};

/// Lifts a root of `target` against caller-owned tables.
///
/// `table` and `inverses` must be built for the same prime. The first base
/// root of `target mod p` is used. With `power <= 1` the base root itself is
/// returned.
#[must_use]
pub fn lift_root(
    table: &RootTable,
    inverses: &InverseTable,
    power: u32,
    target: &Integer,
) -> Option<Integer> {
    let p = table.prime();
    debug_assert_eq!(p, inverses.modulus(), "tables built for different primes");

    let prime = Integer::from(p);
    let residue = target.rem_floor(&prime).to_u64()?;
    let base = *table.find(residue).first()?;

    let kind = table.kind();
    let inverse = inverses.get(kind.derivative_mod(base, p))?;
    let negated_inverse = Integer::from(p - inverse);

    let modulus = prime.pow(power);
    let target = target.rem_floor(&modulus);

    let mut n = Integer::from(base);
    let mut pk = prime.clone();
    while pk < modulus {
        let f = (n.pow(kind.exponent()) - &target) / &pk;
        let digit = (f * &negated_inverse).rem_floor(&prime);
        n = n + digit * &pk;
        pk = pk * &prime;
    }

    Some(n)
}

/// Square root of `target` modulo `p^power`, if one can be lifted.
#[must_use]
pub fn lift_square_root(p: u64, power: u32, target: &Integer) -> Option<Integer> {
    compute_step(p, power, target, RootKind::Square)
}

/// Cube root of `target` modulo `p^power`, if one can be lifted.
#[must_use]
pub fn lift_cube_root(p: u64, power: u32, target: &Integer) -> Option<Integer> {
    compute_step(p, power, target, RootKind::Cube)
}

/// One root step: builds the tables for `p` and lifts.
///
/// Prefer [`lift_root`] when lifting many residues for the same prime.
#[must_use]
pub fn compute_step(p: u64, power: u32, target: &Integer, kind: RootKind) -> Option<Integer> {
    if p < 2 {
        return None;
    }
    let table = RootTable::build(p, kind);
    let inverses = InverseTable::new(p);
    lift_root(&table, &inverses, power, target)
}

/// Checks `root^k ≡ target (mod p^power)`.
#[must_use]
pub fn is_root(kind: RootKind, p: u64, power: u32, root: &Integer, target: &Integer) -> bool {
    let modulus = Integer::from(p).pow(power);
    if modulus.is_one() {
        return true;
    }
    root.pow(kind.exponent()).rem_floor(&modulus) == target.rem_floor(&modulus)
}
