use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::LayoutError;
use crate::graph::Graph;

/// Simulator configuration. Every tuning constant of the schedule is a
/// named field; the defaults are the documented baseline.
#[derive(Clone, Copy, Debug)]
pub struct SimCfg {
    /// Maximum number of iterations.
    pub iterations: usize,
    /// Stagnation bound on the mean per-node displacement magnitude.
    pub threshold: f64,
    /// Gravity growth rate.
    pub gravity: f64,
    /// Seed for the initial positions. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Lower clamp on inter-node distances.
    pub min_distance: f64,
    /// Lower clamp on force magnitudes during step normalization.
    pub min_force: f64,
    /// Factor by which the stagnation bound tightens after each detection.
    pub threshold_shrink: f64,
    /// Divisor of the iteration counter in the gravity increment, so
    /// escalation accelerates the later in the run stagnation is detected.
    /// The quotient is rounded to the nearest integer, so escalation starts
    /// contributing from `gravity_ramp / 2` iterations onward.
    pub gravity_ramp: usize,
    /// Early exit once accumulated gravity exceeds `gravity_ceiling * gravity`.
    pub gravity_ceiling: f64,
}

impl Default for SimCfg {
    fn default() -> Self {
        Self {
            iterations: 50,
            threshold: 7e-3,
            gravity: 6.0,
            seed: None,
            min_distance: 0.01,
            min_force: 0.01,
            threshold_shrink: 3.0,
            gravity_ramp: 200,
            gravity_ceiling: 20.0,
        }
    }
}

/// Simulator output: final positions plus the schedule state at exit.
#[derive(Clone, Debug)]
pub struct SimResult {
    /// One coordinate per node, index-aligned with the graph.
    pub positions: Vec<Vector2<f64>>,
    /// Iterations actually run (`<= cfg.iterations`).
    pub iterations: usize,
    /// Accumulated gravity at exit; non-decreasing over the run.
    pub gravity: f64,
}

/// Iterate the force model until the budget is exhausted or gravity
/// saturates.
///
/// Positions start uniformly random in the unit square (reproducible for a
/// fixed seed). Each iteration computes every node's net force against a
/// snapshot of the previous positions, rescales it so no node moves farther
/// than the current temperature, and applies all displacements at once.
pub fn force_directed(
    g: &Graph,
    mass: &[f64],
    cfg: &SimCfg,
) -> Result<SimResult, LayoutError> {
    let n = g.n();
    if n == 0 {
        return Err(LayoutError::EmptyGraph);
    }
    if cfg.iterations == 0 {
        return Err(LayoutError::ZeroIterations);
    }
    if mass.len() != n {
        return Err(LayoutError::MassLength {
            expected: n,
            got: mass.len(),
        });
    }

    let adj = g.adjacency();
    let k = (1.0 / n as f64).sqrt();
    let mut rng = match cfg.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut pos: Vec<Vector2<f64>> = (0..n)
        .map(|_| Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let mut t = 0.1 * initial_spread(&pos);
    // Linear cooling: the last budgeted iteration lands at step size ~dt.
    let dt = t / (cfg.iterations as f64 + 1.0);
    let ceiling = cfg.gravity_ceiling * cfg.gravity;
    let mut gamma = 0.0_f64;
    let mut threshold = cfg.threshold;
    let mut disp = vec![Vector2::zeros(); n];
    let mut ran = 0usize;

    tracing::info!(n, k, iterations = cfg.iterations, seed = ?cfg.seed, "starting simulation");

    for iteration in 0..cfg.iterations {
        ran = iteration + 1;
        let center = pos
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p)
            / n as f64;

        // Force pass over the snapshot; all nodes then move simultaneously.
        for v in 0..n {
            let pv = pos[v];
            let mut f = Vector2::zeros();
            for (u, pu) in pos.iter().enumerate() {
                if u == v {
                    continue;
                }
                let delta = pv - pu;
                let d = delta.norm().max(cfg.min_distance);
                f += delta * (k * k / (d * d) - adj[(v, u)] * d / k);
            }
            f += (center - pv) * (gamma * mass[v]);
            disp[v] = f;
        }

        let mut moved = 0.0;
        for v in 0..n {
            let step = disp[v] * (t / disp[v].norm().max(cfg.min_force));
            pos[v] += step;
            moved += step.norm();
        }
        t -= dt;

        if moved / (n as f64) < threshold {
            threshold /= cfg.threshold_shrink;
            gamma += cfg.gravity * (iteration as f64 / cfg.gravity_ramp as f64).round();
            tracing::debug!(iteration, gamma, threshold, "stagnation, escalating gravity");
        }
        if gamma > ceiling {
            tracing::info!(iteration, gamma, "gravity saturated, stopping early");
            break;
        }
    }

    tracing::info!(iterations = ran, gamma, "simulation finished");
    Ok(SimResult {
        positions: pos,
        iterations: ran,
        gravity: gamma,
    })
}

/// Larger of the position spreads along each axis.
fn initial_spread(pos: &[Vector2<f64>]) -> f64 {
    let mut min = pos[0];
    let mut max = pos[0];
    for p in pos {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (max.x - min.x).max(max.y - min.y)
}
