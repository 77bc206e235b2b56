//! Boundary errors.
//!
//! The numeric core clamps near-zero distances and force magnitudes instead
//! of failing; errors here are reserved for invalid inputs rejected before
//! any iteration starts, and for degenerate geometry that makes a hyperedge
//! boundary curve impossible.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("iteration budget must be positive")]
    ZeroIterations,

    #[error("mass vector length {got} does not match node count {expected}")]
    MassLength { expected: usize, got: usize },

    #[error("convex hull needs at least 3 distinct non-collinear points, got {points}")]
    DegenerateHull { points: usize },

    #[error("hull simplices do not form a single closed cycle")]
    BrokenHullCycle,

    #[error("hyperedge contains no vertices")]
    EmptyHyperedge,

    #[error("hyperedge vertex {vertex} out of range for {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },
}
