use crate::{graph::*, Result};

/// A parent-pointer tree found by a depth-first search.
///
/// It covers exactly the vertices reachable from its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    root: VertexId,
    parents: Vec<Option<VertexId>>,
}

impl SpanningTree {
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// The vertex `v` was discovered from. `None` for the root and unreached vertices.
    pub fn parent(&self, v: &VertexId) -> Option<VertexId> {
        self.parents.get(v.to_raw()).copied().flatten()
    }

    pub fn contains_vertex(&self, v: &VertexId) -> bool {
        *v == self.root || self.parent(v).is_some()
    }

    /// Tree edges as `(parent, child)`, ordered by child.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(v, p)| p.map(|p| (p, VertexId(v))))
    }

    /// Number of tree edges.
    pub fn edge_size(&self) -> usize {
        self.edges().count()
    }
}

impl std::fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (p, c) in self.edges() {
            writeln!(f, "{} - {}", p, c)?;
        }
        Ok(())
    }
}

pub trait FindSpanningTree
where
    Self: QueryableGraph + Sized,
{
    /// Grows a tree from `start` with an explicit stack.
    ///
    /// Vertices are claimed by the first vertex that pushes them.
    fn spanning_tree(&self, start: VertexId) -> Result<SpanningTree> {
        let start = self.check_vertex(start)?;
        let mut visited = vec![false; self.vertex_size()];
        let mut parents = vec![None; self.vertex_size()];
        let mut stack = vec![start];
        visited[start.to_raw()] = true;
        while let Some(u) = stack.pop() {
            for w in self.out_neighbors(&u) {
                if !visited[w.to_raw()] {
                    visited[w.to_raw()] = true;
                    parents[w.to_raw()] = Some(u);
                    stack.push(w);
                }
            }
        }
        Ok(SpanningTree {
            root: start,
            parents,
        })
    }
}

impl<G: QueryableGraph> FindSpanningTree for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithm::Connectivity, Error};
    use quickcheck_macros::quickcheck;

    #[test]
    fn star() {
        let g = ListGraph::from_adjacency(vec![vec![1, 2, 3], vec![0], vec![0], vec![0]])
            .unwrap();
        let tree = g.spanning_tree(VertexId(0)).unwrap();
        assert_eq!(tree.root(), VertexId(0));
        assert_eq!(tree.parent(&VertexId(0)), None);
        assert_eq!(
            tree.edges().collect::<Vec<_>>(),
            vec![
                (VertexId(0), VertexId(1)),
                (VertexId(0), VertexId(2)),
                (VertexId(0), VertexId(3)),
            ]
        );
        assert_eq!(format!("{}", tree), "0 - 1\n0 - 2\n0 - 3\n");
    }

    #[test]
    fn unreachable_vertices_are_left_out() {
        let mut g = MatrixGraph::with_vertices(3);
        g.add_edge(VertexId(0), VertexId(1), Direction::Directed)
            .unwrap();
        let tree = g.spanning_tree(VertexId(1)).unwrap();
        assert_eq!(tree.edge_size(), 0);
        assert!(tree.contains_vertex(&VertexId(1)));
        assert!(!tree.contains_vertex(&VertexId(0)));
        assert!(matches!(
            g.spanning_tree(VertexId(3)),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[quickcheck]
    fn covers_what_is_reachable(ops: Ops) {
        let g: IncidenceGraph = ops.apply();
        for v in g.iter_vertices() {
            let tree = g.spanning_tree(v).unwrap();
            let reachable = g.reachable_from(&v);
            let covered = reachable.iter().filter(|x| **x).count();
            assert_eq!(tree.edge_size(), covered - 1);
            for w in g.iter_vertices() {
                assert_eq!(tree.contains_vertex(&w), reachable[w.to_raw()]);
                if let Some(p) = tree.parent(&w) {
                    assert!(g.has_arc(&p, &w));
                }
            }
        }
    }

    #[quickcheck]
    fn connected_graph_has_full_tree(graph: SimpleGraph) {
        let g: ListGraph = graph.build();
        if g.vertex_size() == 0 || !g.is_connected() {
            return;
        }
        let tree = g.spanning_tree(VertexId(0)).unwrap();
        assert_eq!(tree.edge_size(), g.vertex_size() - 1);
        assert!(g.iter_vertices().all(|v| tree.contains_vertex(&v)));
    }
}
