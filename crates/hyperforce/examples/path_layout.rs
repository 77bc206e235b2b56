//! Lay out a small hypergraph and print the positions and outline kinds.
//!
//! Run with: cargo run -p hyperforce --example path_layout

use hyperforce::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<(), LayoutError> {
    SubscriberBuilder::default().with_target(false).init();

    let hg = Hypergraph::new(
        6,
        vec![vec![0, 1, 2, 3], vec![3, 4, 5], vec![5], vec![1, 4]],
    )?;
    let sim = SimCfg {
        seed: Some(1),
        iterations: 500,
        ..SimCfg::default()
    };
    let layout = layout_hypergraph(
        &hg,
        Expansion::Cycle,
        closeness_centrality,
        &sim,
        &BoundaryCfg::default(),
    )?;

    for (i, p) in layout.positions.iter().enumerate() {
        println!("node {i}: ({:.4}, {:.4})", p.x, p.y);
    }
    for (e, outline) in layout.outlines.iter().enumerate() {
        match outline {
            Some(Outline::Curve(samples)) => {
                println!("hyperedge {e}: closed curve with {} samples", samples.len());
            }
            Some(Outline::Ellipse { center, .. }) => {
                println!("hyperedge {e}: ellipse at ({:.4}, {:.4})", center.x, center.y);
            }
            Some(Outline::Circle { center, radius }) => {
                println!(
                    "hyperedge {e}: circle at ({:.4}, {:.4}) r={radius}",
                    center.x, center.y
                );
            }
            None => println!("hyperedge {e}: boundary skipped"),
        }
    }
    Ok(())
}
