use nalgebra::Vector2;

use crate::error::LayoutError;

/// Half-plane facet `normal · x + offset <= 0` for points inside the hull.
///
/// Normals are unit-length and point outward.
#[derive(Clone, Copy, Debug)]
pub struct Facet {
    pub normal: Vector2<f64>,
    pub offset: f64,
}

impl Facet {
    #[inline]
    pub fn satisfies_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.normal.dot(&p) + self.offset <= eps
    }
}

/// Convex hull of a 2D point cloud.
///
/// Invariants:
/// - `vertices` index into `points`, CCW order, no repeats.
/// - `simplices` are the hull edges as unordered index pairs; together they
///   form a single closed cycle over `vertices`.
/// - One facet per hull edge, same order as `simplices`.
#[derive(Clone, Debug)]
pub struct ConvexHull {
    pub points: Vec<Vector2<f64>>,
    pub vertices: Vec<usize>,
    pub simplices: Vec<[usize; 2]>,
    pub facets: Vec<Facet>,
}

impl ConvexHull {
    /// Andrew's monotone chain over the input points.
    ///
    /// Collinear points along a hull edge are dropped; fewer than 3 distinct
    /// non-collinear points is an input error.
    pub fn from_points(points: &[Vector2<f64>]) -> Result<Self, LayoutError> {
        let mut idx: Vec<usize> = (0..points.len()).collect();
        idx.sort_by(|&a, &b| {
            let (pa, pb) = (points[a], points[b]);
            match pa.x.partial_cmp(&pb.x).unwrap_or(std::cmp::Ordering::Equal) {
                std::cmp::Ordering::Equal => {
                    pa.y.partial_cmp(&pb.y).unwrap_or(std::cmp::Ordering::Equal)
                }
                o => o,
            }
        });
        idx.dedup_by(|a, b| (points[*a] - points[*b]).norm() < 1e-12);
        if idx.len() < 3 {
            return Err(LayoutError::DegenerateHull {
                points: points.len(),
            });
        }

        let mut lower: Vec<usize> = Vec::with_capacity(idx.len());
        for &i in &idx {
            while lower.len() >= 2
                && cross(
                    points[lower[lower.len() - 2]],
                    points[lower[lower.len() - 1]],
                    points[i],
                ) <= 0.0
            {
                lower.pop();
            }
            lower.push(i);
        }
        let mut upper: Vec<usize> = Vec::with_capacity(idx.len());
        for &i in idx.iter().rev() {
            while upper.len() >= 2
                && cross(
                    points[upper[upper.len() - 2]],
                    points[upper[upper.len() - 1]],
                    points[i],
                ) <= 0.0
            {
                upper.pop();
            }
            upper.push(i);
        }
        lower.pop();
        upper.pop();
        let mut vertices = lower;
        vertices.extend(upper);
        if vertices.len() < 3 {
            return Err(LayoutError::DegenerateHull {
                points: points.len(),
            });
        }

        let mut simplices = Vec::with_capacity(vertices.len());
        let mut facets = Vec::with_capacity(vertices.len());
        for k in 0..vertices.len() {
            let a = vertices[k];
            let b = vertices[(k + 1) % vertices.len()];
            simplices.push([a, b]);
            let edge = points[b] - points[a];
            // For CCW hull order, outward normal is 90 degrees CW.
            let n = Vector2::new(edge.y, -edge.x);
            let normal = n / n.norm();
            facets.push(Facet {
                normal,
                offset: -normal.dot(&points[a]),
            });
        }

        Ok(Self {
            points: points.to_vec(),
            vertices,
            simplices,
            facets,
        })
    }

    /// Half-space membership test: inside iff every facet holds within `tol`.
    ///
    /// Pass a negative `tol` to require strict interiority.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>, tol: f64) -> bool {
        self.facets.iter().all(|f| f.satisfies_eps(p, tol))
    }

    /// Hull boundary points in CCW order.
    pub fn hull_points(&self) -> Vec<Vector2<f64>> {
        self.vertices.iter().map(|&i| self.points[i]).collect()
    }

    /// Enclosed area (shoelace over the hull vertices).
    pub fn area(&self) -> f64 {
        let m = self.vertices.len();
        let mut acc = 0.0;
        for k in 0..m {
            let p = self.points[self.vertices[k]];
            let q = self.points[self.vertices[(k + 1) % m]];
            acc += p.x * q.y - q.x * p.y;
        }
        acc.abs() * 0.5
    }
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
