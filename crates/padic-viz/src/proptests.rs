//! Property-based tests for orbit state, layouts and frames.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::bubble::BubbleState;
    use crate::cache::StepCache;
    use crate::config::{NormChoice, VizConfig};
    use crate::iteration::Iteration;
    use crate::layout::{Layout, LayoutMode};
    use crate::polynomial::Polynomial;
    use crate::visualizer::Visualizer;

    fn small_prime() -> impl Strategy<Value = u64> {
        prop::sample::select(vec![2u64, 3, 5, 7, 11])
    }

    fn polynomial() -> impl Strategy<Value = Polynomial> {
        (-5i64..=5, -5i64..=5, -5i64..=5, -20i64..=20)
            .prop_map(|(c, q, l, k)| Polynomial::new(c, q, l, k))
    }

    fn config() -> impl Strategy<Value = VizConfig> {
        (
            small_prime(),
            1u32..=3,
            0u64..=60,
            polynomial(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(p, power, max_int, f, square, cube)| {
                VizConfig::default()
                    .with_prime(p)
                    .with_power(power)
                    .with_max_int(max_int)
                    .with_polynomial(f)
                    .with_roots(square, cube)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn advance_stays_in_residue_ring(config in config(), steps in 1usize..4) {
            let step = Iteration::new(&config, &mut StepCache::new()).unwrap();
            let modulus = step.modulus();
            let mut state = BubbleState::new(config.max_int);
            for _ in 0..steps {
                let live = state.live_count();
                let motions = state.advance(&step);
                prop_assert_eq!(motions.len(), live);
                for motion in &motions {
                    prop_assert!(motion.to.map_or(true, |to| to < modulus));
                    prop_assert!(motion.origin <= config.max_int);
                }
                let survivors = motions.iter().filter(|m| m.to.is_some()).count();
                prop_assert!(state.live_count() <= survivors);
            }
        }

        #[test]
        fn fractal_layout_reads_residues(config in config(), n in 0u64..10_000) {
            let layout = Layout::new(&config).unwrap();
            let modulus = config.modulus().unwrap();
            // precision covers every residue, so n and n + p^L may differ only beyond it
            let wide = (config.max_int + 1).max(modulus);
            let mut period = 1u64;
            while period < wide {
                period *= config.prime;
            }
            let a = layout.position(n);
            let b = layout.position(n + period);
            prop_assert!(a.distance(b) < 1e-6);
        }

        #[test]
        fn circular_layout_within_radius(
            config in config(),
            infinite in any::<bool>(),
            n in 0u64..1_000_000,
        ) {
            let norm = if infinite { NormChoice::Infinite } else { NormChoice::PAdic };
            let config = config.with_layout(LayoutMode::Circular).with_norm(norm);
            let layout = Layout::new(&config).unwrap();
            let d = layout.position(n).distance(config.center);
            prop_assert!(d <= config.radius + 1e-9);
        }

        #[test]
        fn frames_cover_every_moving_value(config in config(), t in -1.0f64..2.0) {
            let mut viz = Visualizer::new(config.with_connect(true)).unwrap();
            let moving = viz.tick().len();
            let frame = viz.frame(t);
            prop_assert_eq!(frame.dots.len(), moving);
            prop_assert!((0.0..=1.0).contains(&frame.progress));
            prop_assert!(frame.links.len() <= frame.dots.len());
            for dot in &frame.dots {
                prop_assert!(dot.position.x.is_finite() && dot.position.y.is_finite());
                prop_assert!(dot.radius >= 0.0);
            }
        }
    }
}
