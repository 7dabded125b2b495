use crate::graph::*;
use petgraph::{graph::NodeIndex, Directed, Graph};

/// Copies a graph into a [petgraph::Graph].
///
/// Node `i` of the copy is weighted with `VertexId(i)`.
/// An undirected edge becomes a pair of opposite arcs, both weighted with
/// [Direction::Undirected], so petgraph's directed algorithms see the same reachability.
pub trait ToPetgraph
where
    Self: QueryableGraph,
{
    fn to_petgraph(&self) -> Graph<VertexId, Direction, Directed, usize> {
        let mut res = Graph::with_capacity(self.vertex_size(), self.edge_size());
        for v in self.iter_vertices() {
            res.add_node(v);
        }
        for e in self.iter_edges() {
            let a = NodeIndex::new(e.source.to_raw());
            let b = NodeIndex::new(e.sink.to_raw());
            res.add_edge(a, b, e.direction);
            if !e.direction.is_directed() {
                res.add_edge(b, a, e.direction);
            }
        }
        res
    }
}

impl<G: QueryableGraph> ToPetgraph for G {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_edges_become_two_arcs() {
        let mut g = MatrixGraph::with_vertices(3);
        g.add_edge(VertexId(0), VertexId(1), Direction::Undirected)
            .unwrap();
        g.add_edge(VertexId(2), VertexId(1), Direction::Directed)
            .unwrap();
        let pg = g.to_petgraph();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 3);
        assert_eq!(pg[NodeIndex::new(2)], VertexId(2));
        assert!(pg.contains_edge(NodeIndex::new(1), NodeIndex::new(0)));
        assert!(!pg.contains_edge(NodeIndex::new(1), NodeIndex::new(2)));
    }

    #[test]
    fn isolated_vertices_are_kept() {
        let g = ListGraph::with_vertices(4);
        let pg = g.to_petgraph();
        assert_eq!(pg.node_count(), 4);
        assert_eq!(pg.edge_count(), 0);
        assert!(!petgraph::algo::is_cyclic_directed(&pg));
    }
}
