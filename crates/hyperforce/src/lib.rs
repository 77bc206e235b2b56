//! Force-directed hypergraph layout with social gravity.
//!
//! Pipeline
//! - Expand a hypergraph into an ordinary graph (`graph::Expansion`).
//! - Run the force simulator (`layout::force_directed`): Fruchterman-Reingold
//!   repulsion and attraction plus an escalating pull of high-centrality
//!   nodes toward the layout centroid, which breaks stagnation.
//! - For each hyperedge with three or more members, inflate the convex hull
//!   of its node positions, order the hull points into a cycle, and fit a
//!   closed smoothing curve for rendering (`boundary`, `draw`).
//!
//! References
//! - Bannister, Eppstein, Goodrich, Trott: Force-Directed Graph Drawing
//!   Using Social Gravity and Scaling. GD 2012.
//! - Arafat, Bressan: Hypergraph Drawing by Force-Directed Placement.
//!   DEXA 2017.

pub mod boundary;
pub mod draw;
pub mod error;
pub mod geom;
pub mod graph;
pub mod layout;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{inflate, order_cycle, smooth_closed};
    pub use crate::draw::{layout_hypergraph, BoundaryCfg, HypergraphLayout, Outline};
    pub use crate::error::LayoutError;
    pub use crate::geom::{angle_between, centroid, ConvexHull, Facet};
    pub use crate::graph::{closeness_centrality, Expanded, Expansion, Graph, Hypergraph};
    pub use crate::layout::{force_directed, SimCfg, SimResult};
    pub use nalgebra::Vector2 as Vec2;
}
