//! Property-based tests for the modular primitives.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{div_floor, gcd, mod_floor, mod_inverse, Integer, InverseTable, Ratio};

    fn small_int() -> impl Strategy<Value = i64> {
        -10_000i64..10_000i64
    }

    fn modulus() -> impl Strategy<Value = i64> {
        1i64..500i64
    }

    proptest! {
        #[test]
        fn mod_floor_in_range(a in small_int(), m in modulus()) {
            let r = mod_floor(a, m);
            prop_assert!(0 <= r && r < m);
        }

        #[test]
        fn div_mod_reconstruct(a in small_int(), m in modulus()) {
            prop_assert_eq!(div_floor(a, m) * m + mod_floor(a, m), a);
        }

        #[test]
        fn gcd_divides_both(a in small_int(), b in small_int()) {
            let g = gcd(a, b);
            prop_assert!(g >= 0);
            if g != 0 {
                prop_assert_eq!(a % g, 0);
                prop_assert_eq!(b % g, 0);
            }
        }

        #[test]
        fn gcd_matches_big_integers(a in small_int(), b in small_int()) {
            let big = Integer::new(a).gcd(&Integer::new(b));
            prop_assert_eq!(big.to_i64(), Some(gcd(a, b)));
        }

        #[test]
        fn inverse_law(a in small_int(), m in 2i64..500i64) {
            match mod_inverse(a, m) {
                Some(x) => {
                    prop_assert!(0 <= x && x < m);
                    prop_assert_eq!(mod_floor(a * x, m), 1);
                }
                None => prop_assert_ne!(gcd(a, m), 1),
            }
        }

        #[test]
        fn inverse_table_matches_function(p in 2u64..200u64, residue in 0u64..1000u64) {
            let table = InverseTable::new(p);
            #[allow(clippy::cast_possible_wrap)]
            let expected = mod_inverse(residue as i64, p as i64).map(|x| x as u64);
            prop_assert_eq!(table.get(residue), expected);
        }

        #[test]
        fn rem_floor_matches_mod_floor(a in small_int(), m in modulus()) {
            let r = Integer::new(a).rem_floor(&Integer::new(m));
            prop_assert_eq!(r.to_i64(), Some(mod_floor(a, m)));
        }

        #[test]
        fn ratio_lowest_terms(num in small_int(), den in prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]) {
            let r = Ratio::from_i64(num, den);
            let n = r.numerator();
            let d = r.denominator();
            prop_assert!(!d.is_negative() && !d.is_zero());
            if n.is_zero() {
                prop_assert!(d.is_one());
            } else {
                prop_assert!(n.gcd(&d).is_one());
            }
        }
    }
}
