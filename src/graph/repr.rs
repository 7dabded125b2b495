use crate::{graph::*, Result};
use std::str::FromStr;

/// The three encodings a graph can be stored in.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum GraphKind {
    /// Out-neighbor lists, see [ListGraph].
    List,
    /// Boolean adjacency matrix, see [MatrixGraph].
    Matrix,
    /// Incidence matrix, see [IncidenceGraph].
    Incidence,
}

impl FromStr for GraphKind {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().as_str() {
            "list" => Ok(GraphKind::List),
            "matrix" => Ok(GraphKind::Matrix),
            "incidence" => Ok(GraphKind::Incidence),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown GraphKind: {s}"),
            )),
        }
    }
}

/// A graph in any of the three encodings, chosen at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphRepr {
    List(ListGraph),
    Matrix(MatrixGraph),
    Incidence(IncidenceGraph),
}

macro_rules! dispatch {
    ($repr:expr, $g:ident => $body:expr) => {
        match $repr {
            GraphRepr::List($g) => $body,
            GraphRepr::Matrix($g) => $body,
            GraphRepr::Incidence($g) => $body,
        }
    };
}

impl GraphRepr {
    /// An empty graph of the given kind with `vertex_size` isolated vertices.
    pub fn with_vertices(kind: GraphKind, vertex_size: usize) -> Self {
        match kind {
            GraphKind::List => GraphRepr::List(ListGraph::with_vertices(vertex_size)),
            GraphKind::Matrix => GraphRepr::Matrix(MatrixGraph::with_vertices(vertex_size)),
            GraphKind::Incidence => {
                GraphRepr::Incidence(IncidenceGraph::with_vertices(vertex_size))
            }
        }
    }

    pub fn kind(&self) -> GraphKind {
        match self {
            GraphRepr::List(_) => GraphKind::List,
            GraphRepr::Matrix(_) => GraphKind::Matrix,
            GraphRepr::Incidence(_) => GraphKind::Incidence,
        }
    }

    pub fn add_edge(&mut self, source: VertexId, sink: VertexId, direction: Direction) -> Result<()> {
        dispatch!(self, g => g.add_edge(source, sink, direction))
    }

    pub fn add_vertex(&mut self, attachment: Attachment, direction: Direction) -> Result<VertexId> {
        dispatch!(self, g => g.add_vertex(attachment, direction))
    }

    /// A complement of the same kind.
    pub fn complement(&self) -> Self {
        use crate::algorithm::Complement;
        match self {
            GraphRepr::List(g) => GraphRepr::List(g.complement()),
            GraphRepr::Matrix(g) => GraphRepr::Matrix(g.complement()),
            GraphRepr::Incidence(g) => GraphRepr::Incidence(g.complement()),
        }
    }
}

impl EdgeShrinkableGraph for GraphRepr {
    fn remove_edge(
        &mut self,
        source: VertexId,
        sink: VertexId,
        direction: Direction,
    ) -> Result<()> {
        dispatch!(self, g => g.remove_edge(source, sink, direction))
    }
}

impl VertexShrinkableGraph for GraphRepr {
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        dispatch!(self, g => g.remove_vertex(vertex))
    }
}

impl QueryableGraph for GraphRepr {
    fn vertex_size(&self) -> usize {
        dispatch!(self, g => g.vertex_size())
    }

    fn edge_size(&self) -> usize {
        dispatch!(self, g => g.edge_size())
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        dispatch!(self, g => g.iter_edges())
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        dispatch!(self, g => g.out_neighbors(v))
    }

    fn has_arc(&self, source: &VertexId, sink: &VertexId) -> bool {
        dispatch!(self, g => g.has_arc(source, sink))
    }
}

impl std::fmt::Display for GraphRepr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, g => write!(f, "{}", g))
    }
}
