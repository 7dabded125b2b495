//! Visualize graphs in the graphviz format.
use crate::graph::*;

/**
 * Dumps a graph into graphviz format.
 *
 * Every store may mix directed and undirected edges, so the output is always a `digraph`
 * and undirected edges are drawn with `dir=none`.
 *
 * # Examples
 *
 * ```rust
 * use reprgraph::{algorithm::graphviz::*, graph::*};
 *
 * let mut g = ListGraph::with_vertices(3);
 * g.add_edge(VertexId(0), VertexId(1), Direction::Directed).unwrap();
 * g.add_edge(VertexId(1), VertexId(2), Direction::Undirected).unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"digraph trial {
 *   0 ;
 *   1 ;
 *   2 ;
 *   0 -> 1 ;
 *   1 -> 2 [dir=none] ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz
where
    Self: QueryableGraph,
{
    /**
     * Dumps the graph to a `std::io::Write` object in the graphviz format.
     *
     * Edges are written in the order of [QueryableGraph::iter_edges].
     */
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        writeln!(out, "digraph {} {{", graph_name)?;
        for v in self.iter_vertices() {
            writeln!(out, "  {} ;", v)?;
        }
        for e in self.iter_edges() {
            if e.direction.is_directed() {
                writeln!(out, "  {} -> {} ;", e.source, e.sink)?;
            } else {
                writeln!(out, "  {} -> {} [dir=none] ;", e.source, e.sink)?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<G> DumpInGraphviz for G where G: QueryableGraph {}
