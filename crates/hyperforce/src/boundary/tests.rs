use super::*;
use crate::error::LayoutError;
use crate::geom::{centroid, ConvexHull};
use nalgebra::Vector2;
use proptest::prelude::*;

fn unit_square_hull() -> ConvexHull {
    ConvexHull::from_points(&[
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn inflation_strictly_encloses_the_square() {
    let hull = unit_square_hull();
    let inflated = inflate(&hull, 0.008).unwrap();
    for p in hull.hull_points() {
        assert!(inflated.contains(p, -1e-6), "{p:?} not strictly inside");
    }
    assert!(inflated.area() > 1.0);
}

#[test]
fn inflation_flips_the_offset_side_when_needed() {
    // Corners on the increasing-x side of their centroid line start inside
    // the hull and must be pushed the other way; the result still encloses.
    let hull = unit_square_hull();
    let inflated = inflate(&hull, 0.05).unwrap();
    assert_eq!(inflated.vertices.len(), 4);
    for p in hull.hull_points() {
        assert!(inflated.contains(p, -1e-6));
    }
}

#[test]
fn ordering_square_hull_is_a_hamiltonian_cycle() {
    let hull = unit_square_hull();
    let order = order_cycle(&hull).unwrap();
    assert_eq!(order.len(), hull.vertices.len());
    let mut sorted = order.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), order.len());
    for i in 0..order.len() {
        let (a, b) = (order[i], order[(i + 1) % order.len()]);
        assert!(
            hull.simplices
                .iter()
                .any(|s| (s[0] == a && s[1] == b) || (s[0] == b && s[1] == a)),
            "({a}, {b}) not hull-edge-adjacent"
        );
    }
}

#[test]
fn ordering_rejects_broken_adjacency() {
    let hull = unit_square_hull();
    // Two disjoint triangles: the walk closes the first one early and the
    // second is left unconsumed.
    let broken = ConvexHull {
        points: (0..6).map(|i| Vector2::new(i as f64, (i * i) as f64)).collect(),
        vertices: (0..6).collect(),
        simplices: vec![[0, 1], [1, 2], [2, 0], [3, 4], [4, 5], [5, 3]],
        facets: hull.facets.clone(),
    };
    assert_eq!(order_cycle(&broken).err(), Some(LayoutError::BrokenHullCycle));
}

#[test]
fn smoothing_interpolates_and_preserves_symmetry() {
    let square = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ];
    let curve = smooth_closed(&square, 1000);
    assert_eq!(curve.len(), 1000);
    // Equal chords and a multiple-of-four sample count put a sample on
    // every control point.
    assert!((curve[0] - square[0]).norm() < 1e-12);
    assert!((curve[250] - square[1]).norm() < 1e-9);
    assert!((curve[500] - square[2]).norm() < 1e-9);
    assert!((curve[750] - square[3]).norm() < 1e-9);
    let c = centroid(&curve);
    assert!((c - Vector2::new(0.5, 0.5)).norm() < 1e-9);
}

#[test]
fn smoothing_handles_tiny_inputs() {
    assert!(smooth_closed(&[], 100).is_empty());
    let single = vec![Vector2::new(0.3, 0.4)];
    let curve = smooth_closed(&single, 10);
    assert_eq!(curve.len(), 10);
    assert!(curve.iter().all(|p| (p - single[0]).norm() < 1e-12));
}

proptest! {
    #[test]
    fn inflation_contains_every_input_point(
        raw in proptest::collection::vec((0.0f64..1.0, 0.0f64..1.0), 5..20)
    ) {
        let points: Vec<Vector2<f64>> =
            raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
        if let Ok(hull) = ConvexHull::from_points(&points) {
            let inflated = inflate(&hull, 0.008).unwrap();
            for &p in &points {
                prop_assert!(inflated.contains(p, 1e-9));
            }
            prop_assert!(inflated.area() >= hull.area());
        }
    }

    #[test]
    fn ordering_visits_every_hull_point_once(
        raw in proptest::collection::vec((0.0f64..1.0, 0.0f64..1.0), 5..20)
    ) {
        let points: Vec<Vector2<f64>> =
            raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect();
        if let Ok(hull) = ConvexHull::from_points(&points) {
            let order = order_cycle(&hull).unwrap();
            prop_assert_eq!(order.len(), hull.vertices.len());
            for i in 0..order.len() {
                let (a, b) = (order[i], order[(i + 1) % order.len()]);
                prop_assert!(hull.simplices.iter().any(
                    |s| (s[0] == a && s[1] == b) || (s[0] == b && s[1] == a)
                ));
            }
        }
    }
}
