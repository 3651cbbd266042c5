use circlefill_designer::{
    place_new, repack, Circle, CircleRequest, PlacementEngine, Rectangle,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::{assert_edge_clearance, assert_no_overlap, CountingRng};

fn rect(x0: f64, y0: f64, w: f64, h: f64) -> Rectangle {
    Rectangle::new(x0, y0, w, h).unwrap()
}

#[test]
fn test_infeasible_request_draws_nothing() {
    let r = rect(0.0, 0.0, 200.0, 100.0);
    let mut rng = CountingRng::new(1);
    // d/2 + s == min(w, h) / 2
    let err = place_new(&r, &[], 60.0, 5, 20.0, &mut rng).unwrap_err();
    assert!(err.is_infeasible_geometry());
    assert_eq!(rng.calls, 0);

    let err = place_new(&r, &[], 300.0, 1, 0.0, &mut rng).unwrap_err();
    assert!(err.is_infeasible_geometry());
    assert_eq!(rng.calls, 0);
}

#[test]
fn test_invalid_request_is_rejected() {
    let r = rect(0.0, 0.0, 200.0, 200.0);
    let mut rng = CountingRng::new(2);
    assert!(place_new(&r, &[], 0.0, 1, 0.0, &mut rng)
        .unwrap_err()
        .is_invalid_parameter());
    assert!(place_new(&r, &[], 10.0, 0, 0.0, &mut rng)
        .unwrap_err()
        .is_invalid_parameter());
    assert!(place_new(&r, &[], 10.0, 1, -1.0, &mut rng)
        .unwrap_err()
        .is_invalid_parameter());
    assert!(CircleRequest::new(10.0, 1, f64::NAN).is_err());
    assert_eq!(rng.calls, 0);
}

#[test]
fn test_default_scenario_places_all_circles() {
    let r = Rectangle::default();
    let mut rng = StdRng::seed_from_u64(42);
    let outcome = place_new(&r, &[], 100.0, 5, 20.0, &mut rng).unwrap();
    assert_eq!(outcome.satisfied_count(), 5);
    assert_eq!(outcome.requested, 5);
    assert!(!outcome.is_partial());
    assert!(outcome.placed.iter().all(|c| c.diameter == 100.0));
    assert_no_overlap(&outcome.placed, 20.0);
    assert_edge_clearance(&r, &outcome.placed, 20.0);
}

#[test]
fn test_new_circles_avoid_existing_ones() {
    let r = rect(0.0, 0.0, 400.0, 400.0);
    let existing = vec![
        Circle::new(100.0, 100.0, 80.0).unwrap(),
        Circle::new(300.0, 300.0, 120.0).unwrap(),
    ];
    let snapshot = existing.clone();
    let mut rng = StdRng::seed_from_u64(7);
    let outcome = place_new(&r, &existing, 40.0, 8, 5.0, &mut rng).unwrap();

    // existing collection is never touched
    assert_eq!(existing, snapshot);

    let mut all = existing.clone();
    all.extend(outcome.placed.iter().copied());
    assert_no_overlap(&all, 5.0);
    assert_edge_clearance(&r, &outcome.placed, 5.0);
}

#[test]
fn test_first_failed_slot_stops_placement() {
    // Center range is [30, 70] on both axes; two Ø60 circles need 60 mm
    // between centers but the range diagonal is only ~56.6 mm.
    let r = rect(0.0, 0.0, 100.0, 100.0);
    let engine = PlacementEngine::with_attempts(50, 50);

    let mut rng_two = CountingRng::new(9);
    let two = engine
        .place_new(&r, &[], &CircleRequest::new(60.0, 2, 0.0).unwrap(), &mut rng_two)
        .unwrap();
    let mut rng_many = CountingRng::new(9);
    let many = engine
        .place_new(&r, &[], &CircleRequest::new(60.0, 40, 0.0).unwrap(), &mut rng_many)
        .unwrap();

    assert_eq!(two.satisfied_count(), 1);
    assert_eq!(many.satisfied_count(), 1);
    assert_eq!(many.shortfall(), 39);
    assert!(many.is_partial());
    // Nothing is attempted after the slot that failed
    assert_eq!(rng_two.calls, rng_many.calls);
}

#[test]
fn test_placement_is_deterministic_for_seed() {
    let r = rect(-100.0, -50.0, 600.0, 300.0);
    let a = place_new(&r, &[], 30.0, 10, 4.0, &mut StdRng::seed_from_u64(5)).unwrap();
    let b = place_new(&r, &[], 30.0, 10, 4.0, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_repack_keeps_diameters_and_invariants() {
    let r = rect(10.0, 10.0, 800.0, 2000.0);
    let mut rng = StdRng::seed_from_u64(11);
    let mut circles = place_new(&r, &[], 100.0, 5, 20.0, &mut rng).unwrap().placed;
    circles.extend(place_new(&r, &circles, 50.0, 5, 20.0, &mut rng).unwrap().placed);
    let before = circles.len();

    let outcome = repack(&r, &circles, 20.0, &mut rng).unwrap();
    assert_eq!(outcome.requested, before);
    assert!(outcome.satisfied_count() <= before);
    assert_no_overlap(&outcome.placed, 20.0);
    assert_edge_clearance(&r, &outcome.placed, 20.0);

    let mut input: Vec<f64> = circles.iter().map(|c| c.diameter).collect();
    for c in &outcome.placed {
        let idx = input
            .iter()
            .position(|d| *d == c.diameter)
            .expect("output diameter must come from the input");
        input.swap_remove(idx);
    }
}

#[test]
fn test_repack_places_largest_first() {
    let r = rect(0.0, 0.0, 1000.0, 1000.0);
    let circles = vec![
        Circle::new(0.0, 0.0, 20.0).unwrap(),
        Circle::new(0.0, 0.0, 80.0).unwrap(),
        Circle::new(0.0, 0.0, 50.0).unwrap(),
        Circle::new(0.0, 0.0, 65.0).unwrap(),
    ];
    let outcome = repack(&r, &circles, 10.0, &mut StdRng::seed_from_u64(3)).unwrap();
    let diameters: Vec<f64> = outcome.placed.iter().map(|c| c.diameter).collect();
    assert_eq!(diameters, vec![80.0, 65.0, 50.0, 20.0]);
}

#[test]
fn test_repack_skips_infeasible_and_continues() {
    let r = rect(0.0, 0.0, 200.0, 200.0);
    let circles = vec![
        Circle::new(100.0, 100.0, 500.0).unwrap(),
        Circle::new(50.0, 50.0, 20.0).unwrap(),
        Circle::new(150.0, 150.0, 20.0).unwrap(),
    ];
    let outcome = repack(&r, &circles, 5.0, &mut StdRng::seed_from_u64(21)).unwrap();
    assert_eq!(outcome.requested, 3);
    assert_eq!(outcome.satisfied_count(), 2);
    assert!(outcome.placed.iter().all(|c| c.diameter == 20.0));
}

#[test]
fn test_repack_ignores_old_positions() {
    // Old positions overlap heavily; repacking must not care.
    let r = rect(0.0, 0.0, 500.0, 500.0);
    let circles = vec![Circle::new(250.0, 250.0, 40.0).unwrap(); 6];
    let outcome = repack(&r, &circles, 2.0, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(outcome.satisfied_count(), 6);
    assert_no_overlap(&outcome.placed, 2.0);
}

#[test]
fn test_repack_empty_draws_nothing() {
    let r = rect(0.0, 0.0, 100.0, 100.0);
    let mut rng = CountingRng::new(4);
    let outcome = repack(&r, &[], 10.0, &mut rng).unwrap();
    assert!(outcome.placed.is_empty());
    assert!(!outcome.is_partial());
    assert_eq!(rng.calls, 0);
}

#[test]
fn test_repack_rejects_negative_spacing() {
    let r = rect(0.0, 0.0, 100.0, 100.0);
    let circles = vec![Circle::new(50.0, 50.0, 10.0).unwrap()];
    assert!(repack(&r, &circles, -1.0, &mut StdRng::seed_from_u64(0))
        .unwrap_err()
        .is_invalid_parameter());
}

#[test]
fn test_engine_budgets() {
    let engine = PlacementEngine::default();
    assert_eq!(engine.place_attempts(), 600);
    assert_eq!(engine.repack_attempts(), 800);
    let engine = PlacementEngine::with_attempts(0, 0);
    assert_eq!(engine.place_attempts(), 1);
    assert_eq!(engine.repack_attempts(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_placement_respects_spacing_and_edges(
        x0 in -500.0f64..500.0,
        y0 in -500.0f64..500.0,
        w in 50.0f64..600.0,
        h in 50.0f64..600.0,
        diameter in 2.0f64..80.0,
        count in 1usize..12,
        spacing in 0.0f64..15.0,
        seed in any::<u64>(),
    ) {
        let r = Rectangle::new(x0, y0, w, h).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        match place_new(&r, &[], diameter, count, spacing, &mut rng) {
            Ok(outcome) => {
                prop_assert!(outcome.satisfied_count() <= count);
                assert_no_overlap(&outcome.placed, spacing);
                assert_edge_clearance(&r, &outcome.placed, spacing);

                let mixed = repack(&r, &outcome.placed, spacing, &mut rng).unwrap();
                prop_assert!(mixed.satisfied_count() <= outcome.satisfied_count());
                assert_no_overlap(&mixed.placed, spacing);
                assert_edge_clearance(&r, &mixed.placed, spacing);
            }
            Err(err) => {
                prop_assert!(err.is_infeasible_geometry());
                prop_assert!(diameter / 2.0 + spacing >= w.min(h) / 2.0);
            }
        }
    }
}
