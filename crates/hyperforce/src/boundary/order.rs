use crate::error::LayoutError;
use crate::geom::ConvexHull;

/// Order a hull's points into a single closed cycle by walking its simplex
/// adjacency.
///
/// Starts from one simplex's point pair, then repeatedly consumes the
/// unused simplex sharing the cycle's last point and appends its other
/// point. A valid 2D convex hull yields exactly one Hamiltonian cycle;
/// anything else (duplicate or degenerate input) fails with
/// `BrokenHullCycle`.
pub fn order_cycle(hull: &ConvexHull) -> Result<Vec<usize>, LayoutError> {
    let mut pool = hull.simplices.clone();
    if pool.len() < 3 {
        return Err(LayoutError::BrokenHullCycle);
    }
    let seed = pool.remove(0);
    let mut order = vec![seed[0], seed[1]];
    while !pool.is_empty() {
        let last = order[order.len() - 1];
        let Some(j) = pool.iter().position(|s| s[0] == last || s[1] == last) else {
            return Err(LayoutError::BrokenHullCycle);
        };
        let s = pool.remove(j);
        order.push(if s[0] == last { s[1] } else { s[0] });
    }
    // The final simplex must close the walk back to the seed point.
    if order.first() != order.last() {
        return Err(LayoutError::BrokenHullCycle);
    }
    order.pop();

    // Every hull point exactly once.
    let mut walked = order.clone();
    walked.sort_unstable();
    let mut expected = hull.vertices.clone();
    expected.sort_unstable();
    if walked != expected {
        return Err(LayoutError::BrokenHullCycle);
    }
    Ok(order)
}
