use crate::graph::VertexId;
use thiserror::Error;

/// What an out-of-range index was meant to address.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum IndexKind {
    Vertex,
    Edge,
}

impl std::fmt::Display for IndexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexKind::Vertex => write!(f, "vertex"),
            IndexKind::Edge => write!(f, "edge"),
        }
    }
}

/// Errors reported by graph stores, the loader and the algorithms.
///
/// Every error is recoverable: a rejected operation leaves the graph exactly as it was
/// before the call.
#[derive(Debug, Error)]
pub enum Error {
    /// The graph source could not be opened or read.
    #[error("cannot read the graph source: {0}")]
    FileUnreadable(#[from] std::io::Error),

    /// A rendered graph could not be written out.
    #[error("cannot write the graph: {0}")]
    FileUnwritable(std::io::Error),

    /// A vertex or edge index outside `[0, bound)`.
    #[error("{kind} {index} is out of range [0, {bound})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        bound: usize,
    },

    /// The edge to remove does not exist, or the representation cannot hold it.
    #[error("no compatible edge from vertex {from} to vertex {to}")]
    IncompatibleEdge { from: VertexId, to: VertexId },

    /// A loaded row, or the number of rows, disagrees with the dimension derived by the
    /// counting pass.
    #[error("line {line}: expected {expected} entries, found {found}")]
    DimensionMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A token that is not allowed by the input format.
    #[error("line {line}: malformed token `{token}`")]
    MalformedToken { line: usize, token: String },

    /// An incidence column which does not describe exactly one edge.
    #[error("column {edge} does not describe a single edge")]
    MalformedEdge { edge: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
