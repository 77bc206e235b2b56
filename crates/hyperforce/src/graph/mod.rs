//! Graphs, hypergraphs, expansion strategies, and the default mass function.
//!
//! Purpose
//! - `Graph` holds the symmetric 0/1 adjacency matrix the simulator reads.
//! - `Hypergraph` drives expansion and tells the drawing pipeline which node
//!   groups need a boundary curve; it is never mutated by the core.
//! - `Expansion` materializes hyperedges as ordinary edges; `Star` and
//!   `Wheel` append one synthetic hub node per hyperedge after all real
//!   nodes, and the expansion reports how many hubs were added so callers
//!   can strip the trailing positions afterwards.

mod centrality;
mod hyper;
mod types;

pub use centrality::closeness_centrality;
pub use hyper::{Expanded, Expansion, Hypergraph};
pub use types::Graph;

#[cfg(test)]
mod tests;
