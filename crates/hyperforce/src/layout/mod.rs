//! Force simulator: Fruchterman-Reingold with social gravity.
//!
//! Purpose
//! - Assign 2D coordinates to graph nodes by iterating pairwise repulsion,
//!   edge attraction, and a gravity pull of high-mass nodes toward the
//!   layout centroid.
//! - Gravity starts at zero and escalates whenever motion stagnates, which
//!   breaks the stalls that plain repulsion/attraction runs into on highly
//!   asymmetric hypergraph expansions. Once gravity saturates, further
//!   iteration cannot improve the layout and the loop exits early.
//!
//! Reference
//! - Bannister, Eppstein, Goodrich, Trott: Force-Directed Graph Drawing
//!   Using Social Gravity and Scaling. GD 2012.

mod force;

pub use force::{force_directed, SimCfg, SimResult};
