//! Unit tests for sugar-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CellId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(1) < AgentId(2));
        assert!(CellId(100) > CellId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(CellId(3).to_string(), "CellId(3)");
    }
}

#[cfg(test)]
mod coord {
    use proptest::prelude::*;

    use crate::Coord;

    #[test]
    fn wraps_negative_positions() {
        assert_eq!(Coord::wrapped(-1, -1, 10, 5), Coord::new(9, 4));
        assert_eq!(Coord::wrapped(-11, 0, 10, 5), Coord::new(9, 0));
    }

    #[test]
    fn wraps_past_the_far_edge() {
        assert_eq!(Coord::wrapped(10, 5, 10, 5), Coord::new(0, 0));
        assert_eq!(Coord::wrapped(23, 7, 10, 5), Coord::new(3, 2));
    }

    #[test]
    fn index_is_row_major() {
        let c = Coord::new(3, 2);
        assert_eq!(c.index(10), 23);
        assert_eq!(Coord::from_index(23, 10), c);
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(4, 9).to_string(), "(4, 9)");
    }

    proptest! {
        #[test]
        fn wrapping_is_periodic(
            x in -10_000i64..10_000,
            y in -10_000i64..10_000,
            w in 1u32..64,
            h in 1u32..64,
        ) {
            let c = Coord::wrapped(x, y, w, h);
            prop_assert!(c.x < w && c.y < h);
            prop_assert_eq!(Coord::wrapped(x + w as i64, y, w, h), c);
            prop_assert_eq!(Coord::wrapped(x, y + h as i64, w, h), c);
            prop_assert_eq!(Coord::wrapped(x - 3 * w as i64, y - 2 * h as i64, w, h), c);
        }
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick::default(), Tick::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..1_000_000);
            let b: u32 = r2.gen_range(0..1_000_000);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(-3i64..=3);
            assert!((-3..=3).contains(&v));
        }
    }

    #[test]
    fn one_in_one_is_certain() {
        let mut rng = SimRng::new(7);
        assert!((0..100).all(|_| rng.one_in(1)));
        assert!((0..100).all(|_| rng.one_in(0)));
    }

    #[test]
    fn one_in_many_sometimes_fails() {
        let mut rng = SimRng::new(7);
        let hits = (0..1000).filter(|_| rng.one_in(4)).count();
        assert!(hits > 100 && hits < 400, "got {hits}");
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimRng::new(1);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn optional_seed_is_deterministic_when_set() {
        let mut a = SimRng::from_optional_seed(Some(9));
        let mut b = SimRng::new(9);
        assert_eq!(a.gen_range(0u64..u64::MAX), b.gen_range(0u64..u64::MAX));
    }
}

#[cfg(test)]
mod config {
    use crate::{SimRng, SugarscapeConfig, UniformRange};

    #[test]
    fn default_is_valid() {
        let cfg = SugarscapeConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cell_count(), 35 * 35);
    }

    #[test]
    fn sample_stays_in_closed_interval() {
        let range = UniformRange::new(5, 7);
        let mut rng = SimRng::new(3);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = range.sample(&mut rng);
            assert!(range.contains(v));
            seen[(v - 5) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "both endpoints must be reachable");
    }

    #[test]
    fn degenerate_range_samples_its_only_value() {
        let mut rng = SimRng::new(3);
        assert_eq!(UniformRange::new(4, 4).sample(&mut rng), 4);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let cfg = SugarscapeConfig { width: 0, ..SugarscapeConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_full_grid() {
        let cfg = SugarscapeConfig {
            width: 4,
            height: 4,
            agent_count: 16,
            ..SugarscapeConfig::default()
        };
        assert!(cfg.validate().is_err());
        let ok = SugarscapeConfig {
            agent_count: 15,
            vision_range: UniformRange::new(1, 4),
            ..cfg
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let cfg = SugarscapeConfig {
            vision_range: UniformRange::new(6, 1),
            ..SugarscapeConfig::default()
        };
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("vision_range"), "{err}");
    }

    #[test]
    fn vision_is_capped_by_the_wider_side() {
        let cfg = SugarscapeConfig {
            width: 12,
            height: 20,
            vision_range: UniformRange::new(1, 20),
            ..SugarscapeConfig::default()
        };
        assert!(cfg.validate().is_ok());

        let far = SugarscapeConfig { vision_range: UniformRange::new(1, 100_000), ..cfg };
        let err = far.validate().unwrap_err().to_string();
        assert!(err.contains("vision_range"), "{err}");
        assert!(err.contains("[0, 20]"), "{err}");
    }

    #[test]
    fn rejects_negative_metabolism() {
        let cfg = SugarscapeConfig {
            metabolism_range: UniformRange::new(-1, 2),
            ..SugarscapeConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_deposit_odds() {
        let cfg = SugarscapeConfig { deposit_odds: 0, ..SugarscapeConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn focal_points_at_thirds() {
        let cfg = SugarscapeConfig { width: 35, height: 50, ..SugarscapeConfig::default() };
        assert_eq!(cfg.focal_points(), [(11, 16), (22, 32)]);
    }

    #[test]
    fn seeding_radii_step_below_smaller_third() {
        let cfg = SugarscapeConfig { width: 150, height: 45, ..SugarscapeConfig::default() };
        // min(50, 15) = 15 → 10, 12, 14
        assert_eq!(cfg.seeding_radii().collect::<Vec<_>>(), vec![10, 12, 14]);
    }

    #[test]
    fn small_grids_get_no_seeding_rings() {
        let cfg = SugarscapeConfig { width: 10, height: 10, ..SugarscapeConfig::default() };
        assert_eq!(cfg.seeding_radii().count(), 0);
    }
}
