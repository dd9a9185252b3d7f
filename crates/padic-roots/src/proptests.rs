//! Property-based tests for root tables and Hensel lifting.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use padic_integers::{Integer, InverseTable};

    use crate::{compute_step, is_root, lift_root, RootKind, RootTable};

    fn small_prime() -> impl Strategy<Value = u64> {
        prop::sample::select(vec![3u64, 5, 7, 11, 13, 17, 19, 23])
    }

    fn root_kind() -> impl Strategy<Value = RootKind> {
        prop_oneof![Just(RootKind::Square), Just(RootKind::Cube)]
    }

    proptest! {
        #[test]
        fn table_entries_are_roots(p in small_prime(), kind in root_kind()) {
            let table = RootTable::build(p, kind);
            for residue in table.residues() {
                let roots = table.find(residue);
                prop_assert!(!roots.is_empty());
                prop_assert!(roots.windows(2).all(|w| w[0] < w[1]));
                for &y in roots {
                    prop_assert_eq!(kind.power_mod(y, p), residue);
                }
            }
        }

        #[test]
        fn table_partitions_residues(p in small_prime(), kind in root_kind()) {
            let table = RootTable::build(p, kind);
            let total: usize = table.residues().iter().map(|&r| table.find(r).len()).sum();
            prop_assert_eq!(u64::try_from(total).ok(), Some(p));
        }

        #[test]
        fn lifted_roots_satisfy_congruence(
            p in small_prime(),
            power in 1u32..12u32,
            target in 0i64..1_000_000i64,
            kind in root_kind(),
        ) {
            let target = Integer::new(target);
            if let Some(root) = compute_step(p, power, &target, kind) {
                prop_assert!(is_root(kind, p, power, &root, &target));
                prop_assert!(root < Integer::from(p).pow(power));
            }
        }

        #[test]
        fn lifts_exist_for_unit_squares(p in small_prime(), base in 1u64..1000u64, power in 1u32..10u32) {
            // any unit square lifts when p is odd
            let y = base % p;
            prop_assume!(y != 0);
            let target = Integer::from(y * y);
            let table = RootTable::square(p);
            let inverses = InverseTable::new(p);
            let root = lift_root(&table, &inverses, power, &target);
            prop_assert!(root.is_some());
        }
    }
}
