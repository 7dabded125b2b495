use crate::graph::*;
use std::collections::VecDeque;
use tracing::warn;

/// Unweighted shortest paths.
pub trait ShortestPath
where
    Self: QueryableGraph + Sized,
{
    /// Number of edges on a shortest path from `start` to `end`.
    ///
    /// Returns `Some(0)` if they are the same vertex, and `None` if `end` cannot be
    /// reached or either of them is not a vertex.
    fn shortest_path(&self, start: &VertexId, end: &VertexId) -> Option<usize> {
        if !self.contains_vertex(start) || !self.contains_vertex(end) {
            warn!(%start, %end, size = self.vertex_size(), "shortest path: no such vertex");
            return None;
        }
        if start == end {
            return Some(0);
        }
        let mut distance: Vec<Option<usize>> = vec![None; self.vertex_size()];
        distance[start.to_raw()] = Some(0);
        let mut queue = VecDeque::from([(*start, 0usize)]);
        while let Some((u, d)) = queue.pop_front() {
            for w in self.out_neighbors(&u) {
                if distance[w.to_raw()].is_none() {
                    if w == *end {
                        return Some(d + 1);
                    }
                    distance[w.to_raw()] = Some(d + 1);
                    queue.push_back((w, d + 1));
                }
            }
        }
        None
    }
}

impl<G: QueryableGraph> ShortestPath for G {}
