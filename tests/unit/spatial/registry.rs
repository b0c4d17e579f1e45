//! Tests for redundant bin registration and single-bin proximity queries

#[cfg(test)]
mod tests {
    use walkerpaths::WalkerError;
    use walkerpaths::algorithm::random::RandomSource;
    use walkerpaths::math::Vec2;
    use walkerpaths::spatial::{Domain, SpatialRegistry};

    fn registry(half_size: f64) -> SpatialRegistry {
        SpatialRegistry::new(Domain::new(half_size), 2.0, 1.0)
            .expect("Failed to create registry")
    }

    // Tests construction rejects bins smaller than the threshold
    // Verified by removing the bin size check
    #[test]
    fn test_new_rejects_invalid_parameters() {
        let domain = Domain::new(10.0);

        assert!(matches!(
            SpatialRegistry::new(domain, 0.5, 1.0),
            Err(WalkerError::InvalidParameter {
                parameter: "bin_size",
                ..
            })
        ));
        assert!(SpatialRegistry::new(domain, 0.0, 0.0).is_err());
        assert!(SpatialRegistry::new(domain, f64::NAN, 1.0).is_err());
        assert!(SpatialRegistry::new(Domain::new(0.0), 2.0, 1.0).is_err());
        assert!(SpatialRegistry::new(domain, 1.0, 1.0).is_ok());
    }

    // Tests the grid covers the domain plus one guard ring
    // Verified by dropping the guard ring
    #[test]
    fn test_grid_dimensions() {
        assert_eq!(registry(10.0).bin_dimensions(), (13, 13));
        assert_eq!(registry(9.0).bin_dimensions(), (12, 12));
        assert_eq!(registry(0.5).bin_dimensions(), (4, 4));
    }

    // Tests bin coordinates use floor division for negative values
    // Verified by truncating instead of flooring
    #[test]
    fn test_bin_coordinates_floor() {
        let registry = registry(10.0);

        assert_eq!(registry.bin_coordinates(Vec2::new(1.0, 0.0)), [0, 0]);
        assert_eq!(registry.bin_coordinates(Vec2::new(-0.5, -2.0)), [-1, -1]);
        assert_eq!(registry.bin_coordinates(Vec2::new(3.9, -4.1)), [1, -3]);
        assert!(registry.bin_index(Vec2::new(f64::NAN, 0.0)).is_none());
        assert!(registry.bin_index(Vec2::new(500.0, 0.0)).is_none());
    }

    // Tests a point is copied into its bin and all eight neighbours
    // Verified by registering only the containing bin
    #[test]
    fn test_register_point_fills_neighbourhood() {
        let mut registry = registry(10.0);
        let point = Vec2::new(1.0, 0.0);
        let id = registry.register_point(point);

        assert_eq!(id.index(), 0);
        assert_eq!(registry.point_count(), 1);
        assert_eq!(registry.entry_count(), 9);

        for bx in -1..=1 {
            for by in -1..=1 {
                let probe = Vec2::new(f64::from(bx) * 2.0 + 1.0, f64::from(by) * 2.0 + 1.0);
                let entries = registry.bin_entries(probe);
                assert_eq!(entries.len(), 1, "bin ({bx}, {by}) should hold the point");
                assert!(entries.iter().all(|entry| entry.id == id));
            }
        }
        assert!(registry.bin_entries(Vec2::new(5.0, 1.0)).is_empty());
    }

    // Tests registration near the domain corner stays on the grid
    // Verified by removing the guard ring from the grid size
    #[test]
    fn test_register_point_at_corner() {
        let mut registry = registry(10.0);
        registry.register_point(Vec2::new(10.0, 10.0));
        registry.register_point(Vec2::new(-10.0, -10.0));

        assert_eq!(registry.point_count(), 2);
        assert_eq!(registry.entry_count(), 18);
    }

    // Tests ids count up in registration order
    // Verified by reusing ids
    #[test]
    fn test_ids_increase() {
        let mut registry = registry(10.0);
        let first = registry.register_point(Vec2::new(0.0, 0.0));
        let second = registry.register_point(Vec2::new(5.0, 5.0));

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert!(first < second);
    }

    // Tests points outside the domain are always blocked
    // Verified by skipping the domain check
    #[test]
    fn test_query_blocks_outside_domain() {
        let registry = registry(10.0);

        assert!(!registry.query_blocked(Vec2::new(0.0, 0.0), None, 1.0));
        assert!(!registry.query_blocked(Vec2::new(10.0, -10.0), None, 1.0));
        assert!(registry.query_blocked(Vec2::new(10.5, 0.0), None, 1.0));
        assert!(registry.query_blocked(Vec2::new(f64::NAN, 0.0), None, 1.0));
    }

    // Tests the threshold is strict and the excluded id is ignored
    // Verified by using <= in the distance test
    #[test]
    fn test_query_threshold_and_exclusion() {
        let mut registry = registry(10.0);
        let id = registry.register_point(Vec2::new(0.0, 0.0));

        assert!(registry.query_blocked(Vec2::new(0.5, 0.0), None, 1.0));
        assert!(!registry.query_blocked(Vec2::new(1.0, 0.0), None, 1.0));
        assert!(!registry.query_blocked(Vec2::new(0.5, 0.0), Some(id), 1.0));

        let other = registry.register_point(Vec2::new(0.0, 0.5));
        assert!(registry.query_blocked(Vec2::new(0.5, 0.0), Some(id), 1.0));
        assert!(registry.query_blocked(Vec2::new(0.5, 0.0), Some(other), 1.0));
    }

    // Tests exclusion skips only the given entry, not every entry at its position
    // Verified by excluding entries whose position equals the excluded one
    #[test]
    fn test_query_exclusion_by_identity() {
        let mut registry = registry(10.0);
        let first = registry.register_point(Vec2::new(3.0, 3.0));
        let twin = registry.register_point(Vec2::new(3.0, 3.0));

        assert_ne!(first, twin);
        assert!(registry.query_blocked(Vec2::new(3.5, 3.0), Some(first), 1.0));
        assert!(registry.query_blocked(Vec2::new(3.5, 3.0), Some(twin), 1.0));
        assert_eq!(registry.point_count(), 2);
    }

    // Tests the single-bin query agrees with a brute-force scan
    // Verified by registering into the containing bin only
    #[test]
    fn test_query_matches_brute_force() {
        let mut registry = registry(10.0);
        let mut rng = RandomSource::new(7);
        let mut points = Vec::new();

        for _ in 0..200 {
            let point = Vec2::new(rng.range(-10.0, 10.0), rng.range(-10.0, 10.0));
            registry.register_point(point);
            points.push(point);
        }

        for _ in 0..2000 {
            let probe = Vec2::new(rng.range(-10.0, 10.0), rng.range(-10.0, 10.0));
            let expected = points.iter().any(|point| point.distance(probe) < 1.0);
            assert_eq!(
                registry.query_blocked(probe, None, 1.0),
                expected,
                "query disagrees with brute force at {probe:?}"
            );
        }
    }
}
