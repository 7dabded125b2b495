use crate::graph::*;
use tracing::debug;

/// Complement graphs.
///
/// A complement has the same encoding and the same vertices as its source, and holds one
/// directed edge for every missing connection between two distinct vertices,
/// whatever the directions in the source were.
pub trait Complement {
    fn complement(&self) -> Self;
}

/// Considers ordered pairs: `v -> w` is added iff `w` is not an out-neighbor of `v`.
impl Complement for ListGraph {
    fn complement(&self) -> Self {
        let n = self.vertex_size();
        let mut present = vec![false; n];
        let mut adjacency = Vec::with_capacity(n);
        for v in self.iter_vertices() {
            present.iter_mut().for_each(|x| *x = false);
            for w in self.neighbors(&v) {
                present[w.to_raw()] = true;
            }
            let row: Vec<_> = (0..n)
                .filter(|w| *w != v.to_raw() && !present[*w])
                .map(VertexId)
                .collect();
            adjacency.push(row);
        }
        let res = ListGraph::from_neighbors(adjacency);
        debug!(vertices = n, edges = res.edge_size(), "list complement");
        res
    }
}

/// Considers ordered pairs: cell `(v, w)` is set iff it is clear in the source.
impl Complement for MatrixGraph {
    fn complement(&self) -> Self {
        let n = self.vertex_size();
        let mut grid = Grid::new(n, n);
        for v in self.iter_vertices() {
            for w in self.iter_vertices() {
                if v != w && !self.has_arc(&v, &w) {
                    grid.set(v.to_raw(), w.to_raw(), true);
                }
            }
        }
        debug!(vertices = n, "matrix complement");
        MatrixGraph::from_grid(grid)
    }
}

/// Considers unordered pairs: `v -> w` with `v < w` is added iff no column joins them.
///
/// For a simple graph the complement has $\|V\|(\|V\|-1)/2 - \|E\|$ edges.
impl Complement for IncidenceGraph {
    fn complement(&self) -> Self {
        let n = self.vertex_size();
        let pairs: Vec<_> = (0..n)
            .flat_map(|v| (v + 1..n).map(move |w| (VertexId(v), VertexId(w))))
            .filter(|(v, w)| !self.are_connected(v, w))
            .collect();
        let mut grid = Grid::new(n, pairs.len());
        for (e, (v, w)) in pairs.iter().enumerate() {
            grid.set(v.to_raw(), e, Incidence::Plus);
            grid.set(w.to_raw(), e, Incidence::Minus);
        }
        debug!(vertices = n, edges = pairs.len(), "incidence complement");
        IncidenceGraph::from_grid(grid)
    }
}
