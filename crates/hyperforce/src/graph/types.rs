use nalgebra::DMatrix;

/// Undirected graph as a dense symmetric 0/1 adjacency matrix.
///
/// Self-loops are ignored; the matrix is immutable during simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    adj: DMatrix<f64>,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: DMatrix::zeros(n, n),
        }
    }

    /// Insert the undirected edge `{i, j}`. Self-loops are dropped.
    pub fn add_edge(&mut self, i: usize, j: usize) {
        if i != j {
            self.adj[(i, j)] = 1.0;
            self.adj[(j, i)] = 1.0;
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.adj.nrows()
    }

    #[inline]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adj[(i, j)] != 0.0
    }

    #[inline]
    pub fn adjacency(&self) -> &DMatrix<f64> {
        &self.adj
    }

    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.n()).filter(move |&j| self.adj[(v, j)] != 0.0)
    }

    pub fn edge_count(&self) -> usize {
        let n = self.n();
        (0..n)
            .map(|i| ((i + 1)..n).filter(|&j| self.has_edge(i, j)).count())
            .sum()
    }
}
