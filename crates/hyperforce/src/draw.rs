//! Drawing pipeline: expand, simulate, and compute per-hyperedge outlines.
//!
//! The pipeline owns no rendering; it hands positions and outline
//! primitives (closed curves, ellipses, circles) to whatever renderer the
//! caller uses.

use nalgebra::Vector2;

use crate::boundary::{inflate, order_cycle, smooth_closed};
use crate::error::LayoutError;
use crate::geom::{angle_between, ConvexHull};
use crate::graph::{Expanded, Expansion, Graph, Hypergraph};
use crate::layout::{force_directed, SimCfg};

/// Boundary-drawing configuration.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryCfg {
    /// Outward offset applied to hull points before smoothing.
    pub offset: f64,
    /// Samples along each hyperedge's closed curve.
    pub samples: usize,
    /// Minor-axis width of the ellipse around two-member hyperedges.
    pub pair_width: f64,
    /// Clearance added to the member distance for the ellipse major axis.
    pub pair_margin: f64,
    /// Radius of the circle around single-member hyperedges.
    pub singleton_radius: f64,
}

impl Default for BoundaryCfg {
    fn default() -> Self {
        Self {
            offset: 0.008,
            samples: 1000,
            pair_width: 0.020,
            pair_margin: 0.03,
            singleton_radius: 0.010,
        }
    }
}

/// Drawable outline of one hyperedge.
#[derive(Clone, Debug)]
pub enum Outline {
    /// Dense closed curve around three or more members.
    Curve(Vec<Vector2<f64>>),
    /// Ellipse around exactly two members, major axis along the pair.
    Ellipse {
        center: Vector2<f64>,
        width: f64,
        height: f64,
        angle_deg: f64,
    },
    /// Circle around a single member.
    Circle { center: Vector2<f64>, radius: f64 },
}

/// Full layout artifact: node positions plus one outline slot per
/// hyperedge, index-aligned with the hypergraph's hyperedge sequence.
/// `None` marks a hyperedge whose boundary curve failed on degenerate
/// geometry and was skipped.
#[derive(Clone, Debug)]
pub struct HypergraphLayout {
    pub positions: Vec<Vector2<f64>>,
    pub outlines: Vec<Option<Outline>>,
}

/// Lay out a hypergraph: expand it, run the force simulation, strip the
/// synthetic hub positions, and compute an outline per hyperedge.
///
/// `mass_fn` maps the expanded graph to the per-node mass vector;
/// `closeness_centrality` is the usual choice.
pub fn layout_hypergraph<F>(
    hg: &Hypergraph,
    strategy: Expansion,
    mass_fn: F,
    sim: &SimCfg,
    boundary: &BoundaryCfg,
) -> Result<HypergraphLayout, LayoutError>
where
    F: Fn(&Graph) -> Vec<f64>,
{
    let Expanded { graph, hub_count } = hg.expand(strategy);
    tracing::info!(
        strategy = ?strategy,
        nodes = graph.n(),
        edges = graph.edge_count(),
        hub_count,
        "expanded hypergraph"
    );
    let mass = mass_fn(&graph);
    let mut positions = force_directed(&graph, &mass, sim)?.positions;
    positions.truncate(hg.n_vertices());

    let mut outlines = Vec::with_capacity(hg.hyperedges().len());
    for (e, members) in hg.hyperedges().iter().enumerate() {
        let outline = match members.len() {
            1 => Some(Outline::Circle {
                center: positions[members[0]],
                radius: boundary.singleton_radius,
            }),
            2 => {
                let (p0, p1) = (positions[members[0]], positions[members[1]]);
                Some(Outline::Ellipse {
                    center: (p0 + p1) * 0.5,
                    width: boundary.pair_width,
                    height: (p1 - p0).norm() + boundary.pair_margin,
                    angle_deg: angle_between(p0, p1) + 90.0,
                })
            }
            _ => match hyperedge_curve(&positions, members, boundary) {
                Ok(curve) => Some(Outline::Curve(curve)),
                Err(err) => {
                    tracing::warn!(hyperedge = e, %err, "skipping boundary curve");
                    None
                }
            },
        };
        outlines.push(outline);
    }
    Ok(HypergraphLayout {
        positions,
        outlines,
    })
}

fn hyperedge_curve(
    positions: &[Vector2<f64>],
    members: &[usize],
    cfg: &BoundaryCfg,
) -> Result<Vec<Vector2<f64>>, LayoutError> {
    let pts: Vec<Vector2<f64>> = members.iter().map(|&v| positions[v]).collect();
    let hull = ConvexHull::from_points(&pts)?;
    let inflated = inflate(&hull, cfg.offset)?;
    let order = order_cycle(&inflated)?;
    let ordered: Vec<Vector2<f64>> = order.iter().map(|&i| inflated.points[i]).collect();
    Ok(smooth_closed(&ordered, cfg.samples))
}
