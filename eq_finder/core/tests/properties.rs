//! Property tests for indexing, partitioning and evaluation

use eq_finder_core::search::{evaluate, is_dimensionless, partition, EquationSpace};
use eq_finder_core::*;
use proptest::prelude::*;

fn space(constants: usize, max_exponent: i64, full: bool) -> EquationSpace {
    let config = SearchConfig {
        max_exponent,
        mirror: if full { MirrorPolicy::Full } else { MirrorPolicy::Canonical },
        ..Default::default()
    };
    EquationSpace::new(constants, &config).unwrap()
}

fn arb_constant() -> impl Strategy<Value = Constant> {
    (1e-12f64..1e12, prop::array::uniform4(-3i32..=3)).prop_map(|(magnitude, units)| {
        Constant::new("k", magnitude, units)
    })
}

proptest! {
    /// Walking from any start visits consecutive indices and never repeats
    #[test]
    fn prop_advance_matches_index(
        constants in 1usize..=4,
        max_exponent in 0i64..=3,
        full in any::<bool>(),
        start_frac in 0.0f64..1.0,
    ) {
        let space = space(constants, max_exponent, full);
        let n = space.num_equations();
        let start = ((n as f64 * start_frac) as u64).min(n - 1);

        let mut indexer = space.indexer(Partition::new(0, start, n));
        indexer.reset_from(start);

        let mut expected = start;
        loop {
            prop_assert_eq!(indexer.index(), expected);
            prop_assert_eq!(space.index_of(indexer.exponents()), Some(expected));
            let at = space.vector_at(expected);
            prop_assert_eq!(at.as_deref(), Some(indexer.exponents()));
            if !indexer.advance() {
                break;
            }
            expected += 1;
        }
        prop_assert_eq!(expected, n - 1);
    }

    /// Partitions tile [0, n) without gaps or overlaps
    #[test]
    fn prop_partitions_cover(n in 0u64..1_000_000_000_000, workers in 1usize..64) {
        let parts = partition(n, workers);

        prop_assert_eq!(parts.len(), workers);
        prop_assert_eq!(parts[0].start, 0);
        prop_assert_eq!(parts[workers - 1].stop, n);
        for pair in parts.windows(2) {
            prop_assert_eq!(pair[0].stop, pair[1].start);
        }

        let sizes: Vec<u64> = parts.iter().map(|p| p.len()).collect();
        let (min, max) = (sizes.iter().min().unwrap(), sizes.iter().max().unwrap());
        prop_assert!(max - min <= 1);
    }

    /// Log-domain evaluation agrees with the direct product
    #[test]
    fn prop_magnitude_matches_product(
        constants in prop::collection::vec(arb_constant(), 1..5),
        seed in prop::collection::vec(-3i64..=3, 5),
    ) {
        let exponents = &seed[..constants.len()];
        let direct: f64 = constants
            .iter()
            .zip(exponents)
            .map(|(c, &e)| c.magnitude.powi(e as i32))
            .product();

        let value = evaluate(&constants, exponents).value().unwrap();
        prop_assert!(((value - direct) / direct).abs() < 1e-9);
    }

    /// Negating an equation keeps it dimensionless and inverts its magnitude
    #[test]
    fn prop_mirror_symmetry(
        constants in prop::collection::vec(arb_constant(), 1..5),
        seed in prop::collection::vec(-3i64..=3, 5),
    ) {
        let exponents = &seed[..constants.len()];
        let mirrored: Vec<i64> = exponents.iter().map(|e| -e).collect();

        prop_assert_eq!(
            is_dimensionless(&constants, exponents),
            is_dimensionless(&constants, &mirrored)
        );

        let m = evaluate(&constants, exponents).value().unwrap();
        let inv = evaluate(&constants, &mirrored).value().unwrap();
        prop_assert!((m * inv - 1.0).abs() < 1e-9);
    }
}
