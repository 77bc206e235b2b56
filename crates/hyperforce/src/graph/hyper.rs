use crate::error::LayoutError;

use super::Graph;

/// Hypergraph: `n_vertices` labeled `0..n`, plus hyperedges as vertex-index
/// sets. Duplicate members within a hyperedge collapse; member order is
/// irrelevant and not preserved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hypergraph {
    n_vertices: usize,
    hyperedges: Vec<Vec<usize>>,
}

impl Hypergraph {
    pub fn new(
        n_vertices: usize,
        hyperedges: impl IntoIterator<Item = Vec<usize>>,
    ) -> Result<Self, LayoutError> {
        let mut edges = Vec::new();
        for mut members in hyperedges {
            if members.is_empty() {
                return Err(LayoutError::EmptyHyperedge);
            }
            if let Some(&v) = members.iter().find(|&&v| v >= n_vertices) {
                return Err(LayoutError::VertexOutOfRange {
                    vertex: v,
                    vertices: n_vertices,
                });
            }
            members.sort_unstable();
            members.dedup();
            edges.push(members);
        }
        Ok(Self {
            n_vertices,
            hyperedges: edges,
        })
    }

    #[inline]
    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    #[inline]
    pub fn hyperedges(&self) -> &[Vec<usize>] {
        &self.hyperedges
    }

    /// Materialize hyperedges as ordinary edges.
    ///
    /// `Star` and `Wheel` append one hub node per hyperedge after all real
    /// nodes; the returned `hub_count` tells callers how many trailing
    /// positions to strip from the simulator output.
    pub fn expand(&self, strategy: Expansion) -> Expanded {
        let hub_count = match strategy {
            Expansion::Star | Expansion::Wheel => self.hyperedges.len(),
            Expansion::Complete | Expansion::Cycle => 0,
        };
        let mut graph = Graph::new(self.n_vertices + hub_count);
        for (e, members) in self.hyperedges.iter().enumerate() {
            let hub = self.n_vertices + e;
            match strategy {
                Expansion::Complete => {
                    for (i, &a) in members.iter().enumerate() {
                        for &b in &members[i + 1..] {
                            graph.add_edge(a, b);
                        }
                    }
                }
                Expansion::Cycle => ring(&mut graph, members),
                Expansion::Star => {
                    for &v in members {
                        graph.add_edge(hub, v);
                    }
                }
                Expansion::Wheel => {
                    ring(&mut graph, members);
                    for &v in members {
                        graph.add_edge(hub, v);
                    }
                }
            }
        }
        Expanded { graph, hub_count }
    }
}

fn ring(graph: &mut Graph, members: &[usize]) {
    for pair in members.windows(2) {
        graph.add_edge(pair[0], pair[1]);
    }
    if members.len() > 2 {
        graph.add_edge(members[members.len() - 1], members[0]);
    }
}

/// Hyperedge expansion strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// Clique over the hyperedge members.
    Complete,
    /// Ring through the members (a single edge for two members).
    Cycle,
    /// Synthetic hub connected to every member.
    Star,
    /// Ring through the members plus a hub connected to every member.
    Wheel,
}

/// Expansion result: the ordinary graph and the number of trailing hub nodes.
#[derive(Clone, Debug)]
pub struct Expanded {
    pub graph: Graph,
    pub hub_count: usize,
}
