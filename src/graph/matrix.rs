use crate::{graph::*, Error, Result};
use tracing::{trace, warn};

/// A graph stored as a square boolean adjacency matrix.
///
/// Cell `(v, w)` is set iff there is an edge from `v` to `w`.
/// Parallel edges collapse into one, so re-adding an existing edge changes nothing.
#[derive(Clone, PartialEq, Eq)]
pub struct MatrixGraph {
    adjacency: Grid<bool>,
}

impl Default for MatrixGraph {
    fn default() -> Self {
        Self::with_vertices(0)
    }
}

impl MatrixGraph {
    /// Builds a graph from raw rows. Every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let mut res = Self::with_vertices(rows.len());
        for (v, row) in rows.into_iter().enumerate() {
            if row.len() != res.vertex_size() {
                return Err(Error::DimensionMismatch {
                    line: v + 1,
                    expected: res.vertex_size(),
                    found: row.len(),
                });
            }
            for (w, cell) in row.into_iter().enumerate() {
                res.adjacency.set(v, w, cell);
            }
        }
        Ok(res)
    }

    /// Wraps a grid which is known to be square.
    pub(crate) fn from_grid(adjacency: Grid<bool>) -> Self {
        Self { adjacency }
    }

    pub fn adjacency(&self) -> &Grid<bool> {
        &self.adjacency
    }
}

impl GrowableGraph for MatrixGraph {
    fn with_vertices(vertex_size: usize) -> Self {
        Self {
            adjacency: Grid::new(vertex_size, vertex_size),
        }
    }

    fn push_vertex(&mut self) -> VertexId {
        self.adjacency.push_row();
        self.adjacency.push_column();
        VertexId(self.adjacency.rows() - 1)
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId, direction: Direction) -> Result<()> {
        let source = self.check_vertex(source)?;
        let sink = self.check_vertex(sink)?;
        trace!(%source, %sink, ?direction, "matrix: add edge");
        self.adjacency.set(source.to_raw(), sink.to_raw(), true);
        if !direction.is_directed() {
            self.adjacency.set(sink.to_raw(), source.to_raw(), true);
        }
        Ok(())
    }
}

impl EdgeShrinkableGraph for MatrixGraph {
    fn remove_edge(
        &mut self,
        source: VertexId,
        sink: VertexId,
        direction: Direction,
    ) -> Result<()> {
        let source = self.check_vertex(source)?;
        let sink = self.check_vertex(sink)?;
        if !self.has_arc(&source, &sink) {
            warn!(%source, %sink, "matrix: no edge to remove");
            return Err(Error::IncompatibleEdge {
                from: source,
                to: sink,
            });
        }
        self.adjacency.set(source.to_raw(), sink.to_raw(), false);
        if !direction.is_directed() {
            self.adjacency.set(sink.to_raw(), source.to_raw(), false);
        }
        trace!(%source, %sink, ?direction, "matrix: removed edge");
        Ok(())
    }
}

impl VertexShrinkableGraph for MatrixGraph {
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        let vertex = self.check_vertex(vertex)?;
        self.adjacency.remove_row(vertex.to_raw());
        self.adjacency.remove_column(vertex.to_raw());
        trace!(%vertex, "matrix: removed vertex");
        Ok(())
    }
}

impl QueryableGraph for MatrixGraph {
    fn vertex_size(&self) -> usize {
        self.adjacency.rows()
    }

    /// Symmetric pairs of cells are reported as one undirected edge.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let n = self.vertex_size();
        let it = (0..n)
            .flat_map(move |v| (0..n).map(move |w| (VertexId(v), VertexId(w))))
            .filter_map(move |(v, w)| {
                if !self.has_arc(&v, &w) {
                    None
                } else if v == w || !self.has_arc(&w, &v) {
                    Some(Edge::directed(v, w))
                } else if v < w {
                    Some(Edge::undirected(v, w))
                } else {
                    None
                }
            });
        Box::new(it)
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        if !self.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        let it = self
            .adjacency
            .row(v.to_raw())
            .iter()
            .enumerate()
            .filter(|(_, x)| **x)
            .map(|(w, _)| VertexId(w));
        Box::new(it)
    }

    fn has_arc(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.adjacency
            .get(source.to_raw(), sink.to_raw())
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for MatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MatrixGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

/// Renders the loader's input format: rows of `0`/`1`.
impl std::fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in 0..self.adjacency.rows() {
            let row: Vec<_> = self
                .adjacency
                .row(v)
                .iter()
                .map(|x| if *x { "1" } else { "0" })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
