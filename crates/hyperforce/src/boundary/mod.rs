//! Hyperedge boundary curves: hull inflation, point ordering, smoothing.
//!
//! Purpose
//! - Turn the convex hull of a hyperedge's node positions into a smooth
//!   closed curve that strictly encloses every member, giving the drawn
//!   boundary visual clearance from the nodes.
//!
//! Model
//! - Inflate: offset every hull point outward along its centroid line and
//!   recompute the hull (`inflate`).
//! - Order: walk the inflated hull's simplex adjacency into a single cycle
//!   (`order_cycle`).
//! - Smooth: fit a closed interpolating spline through the ordered points
//!   and sample it densely (`smooth_closed`).
//!
//! Reference
//! - Arafat, Bressan: Hypergraph Drawing by Force-Directed Placement.
//!   DEXA 2017.

mod inflate;
mod order;
mod smooth;

pub use inflate::inflate;
pub use order::order_cycle;
pub use smooth::smooth_closed;

#[cfg(test)]
mod tests;
