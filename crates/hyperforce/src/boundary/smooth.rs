use nalgebra::Vector2;

/// Closed interpolating spline through an ordered cyclic point sequence,
/// sampled at `samples` evenly spaced parameter values.
///
/// Catmull-Rom segments with chord-length parameterization: the curve
/// passes through every control point and wraps around periodically. The
/// samples cover one full period, so the first sample coincides with the
/// first control point and the last sample stops just short of it.
pub fn smooth_closed(points: &[Vector2<f64>], samples: usize) -> Vec<Vector2<f64>> {
    let m = points.len();
    if m == 0 || samples == 0 {
        return Vec::new();
    }
    if m < 3 {
        return vec![points[0]; samples];
    }

    // Cumulative chord lengths around the cycle.
    let mut cum = Vec::with_capacity(m + 1);
    cum.push(0.0);
    for i in 0..m {
        let chord = (points[(i + 1) % m] - points[i]).norm().max(1e-12);
        cum.push(cum[i] + chord);
    }
    let total = cum[m];

    let mut out = Vec::with_capacity(samples);
    let mut seg = 0usize;
    for j in 0..samples {
        let u = total * j as f64 / samples as f64;
        while seg < m - 1 && cum[seg + 1] <= u {
            seg += 1;
        }
        let span = cum[seg + 1] - cum[seg];
        let tau = ((u - cum[seg]) / span).clamp(0.0, 1.0);
        out.push(eval_segment(points, seg, tau));
    }
    out
}

/// Cubic Hermite on segment `i..i+1` with Catmull-Rom tangents
/// `0.5 * (p[i+1] - p[i-1])`, indices wrapping cyclically.
fn eval_segment(p: &[Vector2<f64>], i: usize, tau: f64) -> Vector2<f64> {
    let m = p.len();
    let p0 = p[(i + m - 1) % m];
    let p1 = p[i];
    let p2 = p[(i + 1) % m];
    let p3 = p[(i + 2) % m];
    let m1 = (p2 - p0) * 0.5;
    let m2 = (p3 - p1) * 0.5;
    let t2 = tau * tau;
    let t3 = t2 * tau;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + tau;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    p1 * h00 + m1 * h10 + p2 * h01 + m2 * h11
}
