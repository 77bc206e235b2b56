use super::*;
use crate::error::LayoutError;

fn path(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for i in 1..n {
        g.add_edge(i - 1, i);
    }
    g
}

#[test]
fn adjacency_is_symmetric_and_loop_free() {
    let mut g = Graph::new(3);
    g.add_edge(0, 1);
    g.add_edge(1, 1);
    assert!(g.has_edge(0, 1));
    assert!(g.has_edge(1, 0));
    assert!(!g.has_edge(1, 1));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0]);
}

#[test]
fn closeness_on_a_path_of_three() {
    let g = path(3);
    let c = closeness_centrality(&g);
    // Middle node reaches both ends at distance 1.
    assert!((c[1] - 1.0).abs() < 1e-12);
    assert!((c[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((c[2] - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn closeness_handles_disconnection() {
    let mut g = Graph::new(4);
    g.add_edge(0, 1);
    let c = closeness_centrality(&g);
    // Component of size 2: r - 1 = 1, sum_d = 1, scaled by 1/(n-1).
    assert!((c[0] - 1.0 / 3.0).abs() < 1e-12);
    assert!((c[1] - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(c[2], 0.0);
    assert_eq!(c[3], 0.0);
}

#[test]
fn hypergraph_validation() {
    assert_eq!(
        Hypergraph::new(3, vec![vec![]]).err(),
        Some(LayoutError::EmptyHyperedge)
    );
    assert_eq!(
        Hypergraph::new(3, vec![vec![0, 3]]).err(),
        Some(LayoutError::VertexOutOfRange {
            vertex: 3,
            vertices: 3
        })
    );
    let hg = Hypergraph::new(3, vec![vec![2, 0, 2, 1]]).unwrap();
    assert_eq!(hg.hyperedges(), &[vec![0, 1, 2]]);
}

#[test]
fn complete_expansion_builds_cliques() {
    let hg = Hypergraph::new(4, vec![vec![0, 1, 2], vec![2, 3]]).unwrap();
    let Expanded { graph, hub_count } = hg.expand(Expansion::Complete);
    assert_eq!(hub_count, 0);
    assert_eq!(graph.n(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.has_edge(0, 1) && graph.has_edge(0, 2) && graph.has_edge(1, 2));
    assert!(graph.has_edge(2, 3));
}

#[test]
fn cycle_expansion_builds_rings() {
    let hg = Hypergraph::new(5, vec![vec![0, 1, 2, 3], vec![3, 4]]).unwrap();
    let Expanded { graph, hub_count } = hg.expand(Expansion::Cycle);
    assert_eq!(hub_count, 0);
    // Ring 0-1-2-3-0 plus the single pair edge.
    assert_eq!(graph.edge_count(), 5);
    assert!(graph.has_edge(3, 0));
    assert!(!graph.has_edge(0, 2));
}

#[test]
fn star_expansion_appends_hubs() {
    let hg = Hypergraph::new(4, vec![vec![0, 1, 2], vec![2, 3]]).unwrap();
    let Expanded { graph, hub_count } = hg.expand(Expansion::Star);
    assert_eq!(hub_count, 2);
    assert_eq!(graph.n(), 6);
    assert!(graph.has_edge(4, 0) && graph.has_edge(4, 1) && graph.has_edge(4, 2));
    assert!(graph.has_edge(5, 2) && graph.has_edge(5, 3));
    // No direct member-member edges.
    assert!(!graph.has_edge(0, 1));
}

#[test]
fn wheel_expansion_is_ring_plus_hub() {
    let hg = Hypergraph::new(3, vec![vec![0, 1, 2]]).unwrap();
    let Expanded { graph, hub_count } = hg.expand(Expansion::Wheel);
    assert_eq!(hub_count, 1);
    assert_eq!(graph.n(), 4);
    assert!(graph.has_edge(0, 1) && graph.has_edge(1, 2) && graph.has_edge(2, 0));
    assert!(graph.has_edge(3, 0) && graph.has_edge(3, 1) && graph.has_edge(3, 2));
}
