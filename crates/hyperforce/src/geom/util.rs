use nalgebra::Vector2;

/// Angle of the segment from `a` to `b`, in degrees.
#[inline]
pub fn angle_between(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Arithmetic mean of a point set. Zero for an empty slice.
pub fn centroid(points: &[Vector2<f64>]) -> Vector2<f64> {
    if points.is_empty() {
        return Vector2::zeros();
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p);
    sum / points.len() as f64
}
