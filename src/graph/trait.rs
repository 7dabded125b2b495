use crate::{graph::*, Error, IndexKind, Result};

/// Read-only interfaces shared by every graph store.
///
/// Vertices are always `0..vertex_size()`.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;

    /// Number of edges yielded by [QueryableGraph::iter_edges].
    fn edge_size(&self) -> usize {
        self.iter_edges().count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }

    /// Validates a vertex index supplied from outside.
    fn check_vertex(&self, v: VertexId) -> Result<VertexId> {
        if self.contains_vertex(&v) {
            Ok(v)
        } else {
            Err(Error::IndexOutOfRange {
                kind: IndexKind::Vertex,
                index: v.to_raw(),
                bound: self.vertex_size(),
            })
        }
    }

    /// Iterates over semantic edges without any specific order.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Iterates over vertices reachable from `v` by one edge.
    /// A vertex may show up more than once for parallel edges.
    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Whether `sink` can be reached from `source` by one edge.
    fn has_arc(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.contains_vertex(source) && self.out_neighbors(source).any(|w| w == *sink)
    }

    fn debug<'a>(&'a self) -> GraphDebug<'a, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

pub trait GrowableGraph {
    /// A graph with `vertex_size` isolated vertices.
    fn with_vertices(vertex_size: usize) -> Self;
    /// Appends one isolated vertex.
    fn push_vertex(&mut self) -> VertexId;
    fn add_edge(&mut self, source: VertexId, sink: VertexId, direction: Direction) -> Result<()>;
}

pub trait EdgeShrinkableGraph {
    fn remove_edge(&mut self, source: VertexId, sink: VertexId, direction: Direction)
        -> Result<()>;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph {
    /// Removes a vertex and renumbers every vertex after it.
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()>;
}

/// How a new vertex is attached to the existing graph.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Attachment {
    /// No edges.
    Isolated,
    /// One edge from the new vertex to the given one.
    Pendant(VertexId),
    /// Replaces the edge between the two given vertices by a path through the new vertex.
    Subdivision(VertexId, VertexId),
}

/// Vertex insertion in the three attachment modes.
pub trait InsertVertex
where
    Self: QueryableGraph + GrowableGraph + EdgeShrinkableGraph + Sized,
{
    /// Adds a vertex, which is always the last one, and returns its ID.
    ///
    /// Nothing changes if the attachment refers to missing vertices or a missing edge.
    fn add_vertex(&mut self, attachment: Attachment, direction: Direction) -> Result<VertexId> {
        match attachment {
            Attachment::Isolated => Ok(self.push_vertex()),
            Attachment::Pendant(to) => {
                let to = self.check_vertex(to)?;
                let v = self.push_vertex();
                self.add_edge(v, to, direction)?;
                Ok(v)
            }
            Attachment::Subdivision(a, b) => {
                let a = self.check_vertex(a)?;
                let b = self.check_vertex(b)?;
                self.remove_edge(a, b, direction)?;
                let v = self.push_vertex();
                self.add_edge(a, v, direction)?;
                self.add_edge(v, b, direction)?;
                Ok(v)
            }
        }
    }
}

impl<G> InsertVertex for G where G: QueryableGraph + GrowableGraph + EdgeShrinkableGraph + Sized {}
