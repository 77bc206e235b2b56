use nalgebra::Vector2;

use crate::error::LayoutError;
use crate::geom::{centroid, ConvexHull};

/// Enlarge a hull so that its convex hull strictly encloses every original
/// boundary point.
///
/// Each boundary point moves `offset` units along the line through itself
/// and the hull centroid. Scaling the hull about its centroid instead would
/// distort the aspect ratio of elongated hulls; the per-point offset
/// preserves local shape. The side is chosen toward increasing x first and
/// flipped when the candidate lands inside the original hull (which happens
/// near sharp vertices); the membership test, not the side heuristic, is
/// what guarantees outward displacement.
pub fn inflate(hull: &ConvexHull, offset: f64) -> Result<ConvexHull, LayoutError> {
    let boundary = hull.hull_points();
    let center = centroid(&boundary);
    let mut inflated = Vec::with_capacity(boundary.len());
    for &x in &boundary {
        let dir = x - center;
        let norm = dir.norm();
        let mut u = if norm > 1e-12 {
            dir / norm
        } else {
            Vector2::new(1.0, 0.0)
        };
        if u.x < 0.0 {
            u = -u;
        }
        let mut candidate = x + u * offset;
        if hull.contains(candidate, 1e-12) {
            candidate = x - u * offset;
        }
        inflated.push(candidate);
    }
    ConvexHull::from_points(&inflated)
}
