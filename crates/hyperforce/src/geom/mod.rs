//! 2D geometry: convex hulls with facet equations, plus small utilities.
//!
//! Purpose
//! - Provide the hull representation the boundary pipeline needs: input
//!   points, hull vertices in CCW order, hull edges as index pairs
//!   ("simplices"), and half-plane facet equations for membership tests.
//! - Keep the API minimal and numerically explicit (tolerance-aware).

mod hull;
mod util;

pub use hull::{ConvexHull, Facet};
pub use util::{angle_between, centroid};
