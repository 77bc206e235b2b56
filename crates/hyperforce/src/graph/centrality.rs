use std::collections::VecDeque;

use super::Graph;

/// Closeness centrality, one value per node, usable as the simulator's
/// mass vector.
///
/// Uses the Wasserman-Faust improved formula so values stay comparable
/// across disconnected graphs:
/// `C(u) = ((r - 1) / sum_d) * ((r - 1) / (n - 1))`
/// where `r` is the number of nodes reachable from `u` (including `u`)
/// and `sum_d` the sum of their BFS distances. Isolated nodes get 0.
pub fn closeness_centrality(g: &Graph) -> Vec<f64> {
    let n = g.n();
    let mut out = vec![0.0; n];
    if n <= 1 {
        return out;
    }
    let mut dist = vec![usize::MAX; n];
    let mut queue = VecDeque::new();
    for v in 0..n {
        dist.fill(usize::MAX);
        dist[v] = 0;
        queue.clear();
        queue.push_back(v);
        let mut reached = 0usize;
        let mut total = 0usize;
        while let Some(u) = queue.pop_front() {
            reached += 1;
            total += dist[u];
            for w in g.neighbors(u) {
                if dist[w] == usize::MAX {
                    dist[w] = dist[u] + 1;
                    queue.push_back(w);
                }
            }
        }
        if reached > 1 && total > 0 {
            let r = (reached - 1) as f64;
            out[v] = (r / total as f64) * (r / (n - 1) as f64);
        }
    }
    out
}
