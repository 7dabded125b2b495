use crate::graph::*;

/// Reachability and connectivity over out-neighbors.
pub trait Connectivity
where
    Self: QueryableGraph + Sized,
{
    /// Marks every vertex reachable from `start`, `start` included.
    ///
    /// The search keeps its frontier on the heap, so its depth is not bounded by the stack.
    /// Nothing is marked if `start` is not a vertex.
    fn reachable_from(&self, start: &VertexId) -> Vec<bool> {
        let mut visited = vec![false; self.vertex_size()];
        if !self.contains_vertex(start) {
            return visited;
        }
        let mut stack = vec![*start];
        visited[start.to_raw()] = true;
        while let Some(u) = stack.pop() {
            for w in self.out_neighbors(&u) {
                if !visited[w.to_raw()] {
                    visited[w.to_raw()] = true;
                    stack.push(w);
                }
            }
        }
        visited
    }

    /// Whether every vertex reaches every other one along edge directions.
    ///
    /// For undirected graphs this is plain connectivity.
    /// An empty graph is connected.
    fn is_connected(&self) -> bool {
        self.iter_vertices()
            .all(|v| self.reachable_from(&v).into_iter().all(|x| x))
    }
}

impl<G: QueryableGraph> Connectivity for G {}
