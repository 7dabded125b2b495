use super::VertexId;

/// ID for edges, which are essentially `usize`.
///
/// Only incidence matrices address edges directly: an `EdgeId` is a column index.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);
    pub const MAX: EdgeId = EdgeId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

/// Whether an edge can be traversed in one direction or in both.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Directed,
    Undirected,
}

impl Direction {
    pub fn is_directed(&self) -> bool {
        matches!(self, Direction::Directed)
    }
}

impl From<bool> for Direction {
    /// `true` means directed.
    fn from(directed: bool) -> Self {
        if directed {
            Direction::Directed
        } else {
            Direction::Undirected
        }
    }
}

/// Information about a semantic edge.
///
/// For undirected edges `source` and `sink` are just the two endpoints,
/// the smaller one first.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
    pub direction: Direction,
}

impl Edge {
    pub fn directed(source: VertexId, sink: VertexId) -> Self {
        Self {
            source,
            sink,
            direction: Direction::Directed,
        }
    }

    pub fn undirected(a: VertexId, b: VertexId) -> Self {
        Self {
            source: a.min(b),
            sink: a.max(b),
            direction: Direction::Undirected,
        }
    }
}
