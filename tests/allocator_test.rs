use wind_vectors::vectors::{
    allocate_vector_points, AllocationError, OffsetPool, Region, VectorPoint, VectorPointAllocator,
};

fn min_pair_distance(points: &[VectorPoint]) -> f64 {
    let mut min = f64::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            min = min.min(a.distance_to(b));
        }
    }
    min
}

#[test]
fn test_fills_small_region() {
    // 10x10 degrees at separation 2
    let region = Region::new(0.0, 10.0, 0.0, 10.0).unwrap();

    for seed in 0..10 {
        let points = allocate_vector_points(None, &region, 2.0, 1000, Some(seed)).unwrap();
        // The 5x5 exclusion block spaces points about 1.5 separations apart,
        // giving 6-9 points here
        assert!(points.len() >= 6, "seed {}: only {} points", seed, points.len());
        assert!(min_pair_distance(&points) >= 0.8);
        assert!(points.iter().all(|p| p.age == 0));
    }
}

#[test]
fn test_minimum_separation() {
    let region = Region::new(-30.0, 30.0, 10.0, 50.0).unwrap();
    let separation = 2.5;

    for seed in 0..5 {
        let points = allocate_vector_points(None, &region, separation, 10_000, Some(seed)).unwrap();
        let min = min_pair_distance(&points);
        assert!(min >= 0.4 * separation);
        // The exclusion block is never smaller than the separation disk
        assert!(min >= separation * (1.0 - 1e-9), "seed {}: min distance {}", seed, min);
    }
}

#[test]
fn test_large_region_is_covered() {
    let region = Region::new(0.0, 100.0, 0.0, 100.0).unwrap();
    let points = allocate_vector_points(None, &region, 5.0, 10_000, Some(21)).unwrap();
    assert!(points.len() > 60, "only {} points", points.len());

    // Every 20x20 block of the region holds at least one point
    for bx in 0..5 {
        for by in 0..5 {
            let (x0, y0) = (bx as f64 * 20.0, by as f64 * 20.0);
            let hit = points
                .iter()
                .any(|p| p.lon >= x0 && p.lon <= x0 + 20.0 && p.lat >= y0 && p.lat <= y0 + 20.0);
            assert!(hit, "empty block at ({}, {})", x0, y0);
        }
    }
}

#[test]
fn test_region_containment() {
    let region = Region::new(-180.0, 180.0, -90.0, 90.0).unwrap();
    let points = allocate_vector_points(None, &region, 10.0, 10_000, Some(3)).unwrap();
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| region.contains(p.lon, p.lat)));
}

#[test]
fn test_determinism() {
    let region = Region::new(0.0, 60.0, -20.0, 20.0).unwrap();
    let previous = vec![VectorPoint::with_age(10.0, 0.0, 4), VectorPoint::with_age(40.0, 5.0, 1)];

    let a = allocate_vector_points(Some(&previous), &region, 3.0, 5_000, Some(99)).unwrap();
    let b = allocate_vector_points(Some(&previous), &region, 3.0, 5_000, Some(99)).unwrap();
    assert_eq!(a, b);

    let c = allocate_vector_points(Some(&previous), &region, 3.0, 5_000, Some(100)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_independent_pools_do_not_interfere() {
    let region = Region::new(0.0, 30.0, 0.0, 30.0).unwrap();
    let reference = VectorPointAllocator::new(OffsetPool::from_seed(1))
        .allocate_seeded(None, &region, 2.0, 5_000, Some(5))
        .unwrap();

    // Use a second allocator in between
    let other = VectorPointAllocator::new(OffsetPool::from_seed(2));
    other.allocate_seeded(None, &region, 2.0, 5_000, Some(5)).unwrap();

    let again = VectorPointAllocator::new(OffsetPool::from_seed(1))
        .allocate_seeded(None, &region, 2.0, 5_000, Some(5))
        .unwrap();
    assert_eq!(reference, again);
}

#[test]
fn test_capacity_respected() {
    let region = Region::new(0.0, 50.0, 0.0, 50.0).unwrap();
    let full = allocate_vector_points(None, &region, 3.0, 10_000, Some(8)).unwrap();
    let needed = full.len();

    // Exactly enough capacity succeeds with the same result
    let exact = allocate_vector_points(None, &region, 3.0, needed, Some(8)).unwrap();
    assert_eq!(exact, full);

    // One fewer fails outright rather than truncating
    let result = allocate_vector_points(None, &region, 3.0, needed - 1, Some(8));
    assert_eq!(
        result,
        Err(AllocationError::InsufficientPoints { max_points: needed - 1 })
    );
}

#[test]
fn test_region_smaller_than_separation() {
    let region = Region::new(0.0, 1.0, 0.0, 1.0).unwrap();
    let points = allocate_vector_points(None, &region, 10.0, 5, Some(0)).unwrap();
    assert_eq!(points, vec![VectorPoint::new(0.1, 0.1)]);
}

#[test]
fn test_single_point_capacity_overflows() {
    let region = Region::new(0.0, 10.0, 0.0, 10.0).unwrap();
    let result = allocate_vector_points(None, &region, 2.0, 1, Some(0));
    match result {
        Err(e @ AllocationError::InsufficientPoints { .. }) => assert!(e.is_configuration_error()),
        other => panic!("expected InsufficientPoints, got {:?}", other),
    }
}

#[test]
fn test_reallocation_keeps_previous_points() {
    let region = Region::new(0.0, 40.0, 0.0, 40.0).unwrap();

    for seed in 0..5 {
        let first = allocate_vector_points(None, &region, 3.0, 5_000, Some(seed)).unwrap();
        let second = allocate_vector_points(Some(&first), &region, 3.0, 5_000, Some(seed + 50)).unwrap();

        assert!(second.len() >= first.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!((a.lon, a.lat), (b.lon, b.lat));
            assert_eq!(b.age, a.age + 1);
        }
        assert!(second[first.len()..].iter().all(|p| p.age == 0));
    }
}

#[test]
fn test_previous_points_in_shrunk_region() {
    let region = Region::new(0.0, 100.0, 0.0, 100.0).unwrap();
    // Shrinking from the high side keeps the occupancy grid aligned
    let shrunk = Region::new(0.0, 70.3, 0.0, 60.3).unwrap();

    for seed in 0..5 {
        let first = allocate_vector_points(None, &region, 5.0, 10_000, Some(seed)).unwrap();
        let inside: Vec<VectorPoint> = first
            .iter()
            .filter(|p| shrunk.contains(p.lon, p.lat))
            .copied()
            .collect();
        assert!(!inside.is_empty());

        let second = allocate_vector_points(Some(&first), &shrunk, 5.0, 10_000, Some(seed + 100)).unwrap();
        assert!(second.len() >= inside.len());
        for (a, b) in inside.iter().zip(second.iter()) {
            assert_eq!((a.lon, a.lat), (b.lon, b.lat));
            assert_eq!(b.age, a.age + 1);
        }
        assert!(second[inside.len()..].iter().all(|p| p.age == 0));
        assert!(second.iter().all(|p| shrunk.contains(p.lon, p.lat)));
    }
}

#[test]
fn test_ages_accumulate_over_calls() {
    let region = Region::new(0.0, 20.0, 0.0, 20.0).unwrap();
    let mut points = allocate_vector_points(None, &region, 2.0, 1_000, Some(1)).unwrap();
    for _ in 0..3 {
        points = allocate_vector_points(Some(&points), &region, 2.0, 1_000, Some(2)).unwrap();
    }
    assert_eq!(points[0].age, 3);
}

#[test]
fn test_previous_points_all_outside_region() {
    let region = Region::new(0.0, 10.0, 0.0, 10.0).unwrap();
    let previous = vec![VectorPoint::with_age(50.0, 50.0, 9)];
    let points = allocate_vector_points(Some(&previous), &region, 2.0, 1_000, Some(4)).unwrap();
    // Falls back to the deterministic seed point
    assert_eq!(points[0], VectorPoint::new(1.0, 1.0));
    assert!(points.iter().all(|p| p.age == 0));
}
