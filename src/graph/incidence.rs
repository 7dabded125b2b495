use crate::{graph::*, Error, IndexKind, Result};
use tracing::{debug, trace, warn};

/// One cell of an incidence matrix.
#[repr(i8)]
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Incidence {
    /// Head of a directed edge.
    Minus = -1,
    #[default]
    Zero = 0,
    /// Tail of a directed edge, or either endpoint of an undirected one.
    Plus = 1,
}

impl Incidence {
    pub fn value(self) -> i8 {
        self as i8
    }

    pub fn is_zero(self) -> bool {
        self == Incidence::Zero
    }
}

impl TryFrom<i8> for Incidence {
    type Error = i8;

    fn try_from(x: i8) -> std::result::Result<Self, Self::Error> {
        match x {
            -1 => Ok(Incidence::Minus),
            0 => Ok(Incidence::Zero),
            1 => Ok(Incidence::Plus),
            _ => Err(x),
        }
    }
}

/// A graph stored as a $\|V\| \times \|E\|$ incidence matrix.
///
/// Every column is one edge: `+1`/`+1` for an undirected edge, `+1` at the tail and `-1`
/// at the head for a directed one. Self-loops cannot be expressed.
///
/// Whether the graph counts as directed is a property of the whole matrix,
/// see [IncidenceGraph::is_directed].
#[derive(Clone, PartialEq, Eq)]
pub struct IncidenceGraph {
    incidence: Grid<Incidence>,
}

impl Default for IncidenceGraph {
    fn default() -> Self {
        Self::with_vertices(0)
    }
}

impl IncidenceGraph {
    /// Builds a graph from raw rows, one per vertex, each holding `edge_size` cells.
    pub fn from_rows(rows: Vec<Vec<Incidence>>, edge_size: usize) -> Result<Self> {
        let mut incidence = Grid::new(rows.len(), edge_size);
        for (v, row) in rows.into_iter().enumerate() {
            if row.len() != edge_size {
                return Err(Error::DimensionMismatch {
                    line: v + 1,
                    expected: edge_size,
                    found: row.len(),
                });
            }
            for (e, cell) in row.into_iter().enumerate() {
                incidence.set(v, e, cell);
            }
        }
        let res = Self { incidence };
        for e in 0..edge_size {
            res.endpoints(EdgeId(e))?;
        }
        Ok(res)
    }

    /// Wraps a grid whose columns are known to be well-formed edges.
    pub(crate) fn from_grid(incidence: Grid<Incidence>) -> Self {
        Self { incidence }
    }

    pub fn incidence(&self) -> &Grid<Incidence> {
        &self.incidence
    }

    /// Validates an edge index supplied from outside.
    pub fn check_edge(&self, e: EdgeId) -> Result<EdgeId> {
        if e.to_raw() < self.incidence.cols() {
            Ok(e)
        } else {
            Err(Error::IndexOutOfRange {
                kind: IndexKind::Edge,
                index: e.to_raw(),
                bound: self.incidence.cols(),
            })
        }
    }

    /// Whether any edge at all is directed.
    ///
    /// This is a graph-wide mode rather than a per-edge property: a single `-1` anywhere
    /// makes the whole graph directed. Compensating edges added by
    /// [VertexShrinkableGraph::remove_vertex] follow this mode.
    pub fn is_directed(&self) -> bool {
        (0..self.incidence.rows())
            .any(|v| self.incidence.row(v).contains(&Incidence::Minus))
    }

    /// The graph-wide mode of [IncidenceGraph::is_directed] as a [Direction].
    pub fn direction(&self) -> Direction {
        self.is_directed().into()
    }

    /// Whether two vertices share an edge, in whichever direction.
    pub fn are_connected(&self, a: &VertexId, b: &VertexId) -> bool {
        if !self.contains_vertex(a) || !self.contains_vertex(b) {
            return false;
        }
        let ra = self.incidence.row(a.to_raw());
        let rb = self.incidence.row(b.to_raw());
        ra.iter()
            .zip(rb.iter())
            .any(|(x, y)| !x.is_zero() && !y.is_zero())
    }

    /// Edges with a nonzero entry for `v`.
    pub fn incident_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        if !self.contains_vertex(v) {
            return Box::new(std::iter::empty());
        }
        let it = self
            .incidence
            .row(v.to_raw())
            .iter()
            .enumerate()
            .filter(|(_, x)| !x.is_zero())
            .map(|(e, _)| EdgeId(e));
        Box::new(it)
    }

    /// Reads one column back as an edge.
    pub fn endpoints(&self, e: EdgeId) -> Result<Edge> {
        let e = self.check_edge(e)?;
        let ends: Vec<_> = self
            .incidence
            .column(e.to_raw())
            .enumerate()
            .filter(|(_, x)| !x.is_zero())
            .map(|(v, x)| (VertexId(v), x))
            .collect();
        match ends.as_slice() {
            [(a, Incidence::Plus), (b, Incidence::Plus)] => Ok(Edge::undirected(*a, *b)),
            [(a, Incidence::Plus), (b, Incidence::Minus)] => Ok(Edge::directed(*a, *b)),
            [(a, Incidence::Minus), (b, Incidence::Plus)] => Ok(Edge::directed(*b, *a)),
            _ => Err(Error::MalformedEdge { edge: e.to_raw() }),
        }
    }

    /// The other nonzero row of column `e`, together with its cell.
    fn opposite(&self, e: usize, v: usize) -> Option<(VertexId, Incidence)> {
        self.incidence
            .column(e)
            .enumerate()
            .find(|(r, x)| *r != v && !x.is_zero())
            .map(|(r, x)| (VertexId(r), x))
    }

    fn reject_self_loop(&self, v: VertexId) -> Result<()> {
        warn!(vertex = %v, "incidence: self-loops cannot be stored");
        Err(Error::IncompatibleEdge { from: v, to: v })
    }
}

impl GrowableGraph for IncidenceGraph {
    fn with_vertices(vertex_size: usize) -> Self {
        Self {
            incidence: Grid::new(vertex_size, 0),
        }
    }

    fn push_vertex(&mut self) -> VertexId {
        self.incidence.push_row();
        VertexId(self.incidence.rows() - 1)
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId, direction: Direction) -> Result<()> {
        let source = self.check_vertex(source)?;
        let sink = self.check_vertex(sink)?;
        if source == sink {
            return self.reject_self_loop(source);
        }
        self.incidence.push_column();
        let e = self.incidence.cols() - 1;
        self.incidence.set(source.to_raw(), e, Incidence::Plus);
        let head = if direction.is_directed() {
            Incidence::Minus
        } else {
            Incidence::Plus
        };
        self.incidence.set(sink.to_raw(), e, head);
        trace!(%source, %sink, ?direction, edge = e, "incidence: add edge");
        Ok(())
    }
}

impl EdgeShrinkableGraph for IncidenceGraph {
    /// Scans the columns shared by `source` and `sink` in order.
    ///
    /// A directed column `source -> sink` is removed. An undirected column is removed for an
    /// undirected request and turned into `sink -> source` for a directed one.
    /// Meeting a `sink -> source` column first rejects the removal.
    fn remove_edge(
        &mut self,
        source: VertexId,
        sink: VertexId,
        direction: Direction,
    ) -> Result<()> {
        let source = self.check_vertex(source)?;
        let sink = self.check_vertex(sink)?;
        if source == sink {
            return self.reject_self_loop(source);
        }
        for e in 0..self.incidence.cols() {
            let s = self.incidence.row(source.to_raw())[e];
            let t = self.incidence.row(sink.to_raw())[e];
            match (s, t) {
                (Incidence::Plus, Incidence::Minus) => {
                    self.incidence.remove_column(e);
                    trace!(%source, %sink, edge = e, "incidence: removed directed edge");
                    return Ok(());
                }
                (Incidence::Plus, Incidence::Plus) => {
                    if direction.is_directed() {
                        self.incidence.set(source.to_raw(), e, Incidence::Minus);
                        trace!(%source, %sink, edge = e, "incidence: kept reverse direction");
                    } else {
                        self.incidence.remove_column(e);
                        trace!(%source, %sink, edge = e, "incidence: removed undirected edge");
                    }
                    return Ok(());
                }
                (Incidence::Minus, Incidence::Plus) => {
                    warn!(%source, %sink, edge = e, "incidence: edge points the other way");
                    return Err(Error::IncompatibleEdge {
                        from: source,
                        to: sink,
                    });
                }
                _ => {}
            }
        }
        warn!(%source, %sink, "incidence: no edge to remove");
        Err(Error::IncompatibleEdge {
            from: source,
            to: sink,
        })
    }
}

impl VertexShrinkableGraph for IncidenceGraph {
    /// Removes a vertex without breaking paths through it.
    ///
    /// For every pair of neighbors `a -> vertex -> b` not already sharing a column,
    /// a compensating edge is added before the vertex and its edges go away.
    /// Compensating edges are directed iff [IncidenceGraph::is_directed].
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        let vertex = self.check_vertex(vertex)?;
        let v = vertex.to_raw();
        let direction = self.direction();

        // (column, cell of `vertex`, neighbor, cell of neighbor)
        let incident: Vec<_> = (0..self.incidence.cols())
            .filter_map(|e| {
                let mine = self.incidence.row(v)[e];
                if mine.is_zero() {
                    return None;
                }
                self.opposite(e, v).map(|(w, theirs)| (e, mine, w, theirs))
            })
            .collect();

        for (i, &(_, _, a, into_vertex)) in incident.iter().enumerate() {
            for (j, &(_, out_of_vertex, b, _)) in incident.iter().enumerate() {
                if i == j || a == b {
                    continue;
                }
                let through = into_vertex == Incidence::Plus && out_of_vertex == Incidence::Plus;
                if through && !self.has_arc(&a, &b) {
                    debug!(from = %a, to = %b, removed = %vertex, "incidence: compensating edge");
                    self.add_edge(a, b, direction)?;
                }
            }
        }

        let mut columns: Vec<_> = incident.iter().map(|(e, ..)| *e).collect();
        columns.sort_unstable_by(|x, y| y.cmp(x));
        columns.dedup();
        for e in columns {
            self.incidence.remove_column(e);
        }
        self.incidence.remove_row(v);
        trace!(%vertex, "incidence: removed vertex");
        Ok(())
    }
}

impl QueryableGraph for IncidenceGraph {
    fn vertex_size(&self) -> usize {
        self.incidence.rows()
    }

    fn edge_size(&self) -> usize {
        self.incidence.cols()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = (0..self.incidence.cols()).filter_map(|e| self.endpoints(EdgeId(e)).ok());
        Box::new(it)
    }

    /// Follows every column in which `v` is nonzero to its other endpoint.
    ///
    /// Traversal ignores direction: the head of a directed edge reaches its tail as well.
    /// Directions only matter to [EdgeShrinkableGraph::remove_edge],
    /// [VertexShrinkableGraph::remove_vertex] and [QueryableGraph::iter_edges].
    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let raw = v.to_raw();
        let it = self
            .incident_edges(v)
            .filter_map(move |e| self.opposite(e.to_raw(), raw).map(|(w, _)| w));
        Box::new(it)
    }
}

impl std::fmt::Debug for IncidenceGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "IncidenceGraph {{")?;
        for v in self.iter_vertices() {
            write!(f, "  {:?}: edges", v)?;
            for e in self.incident_edges(&v) {
                write!(f, " {}", e.to_raw())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "}}")
    }
}

/// Renders the loader's input format: rows of `-1`/`0`/`1`.
impl std::fmt::Display for IncidenceGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in 0..self.incidence.rows() {
            let row: Vec<_> = self
                .incidence
                .row(v)
                .iter()
                .map(|x| x.value().to_string())
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(g: &IncidenceGraph) -> Vec<Vec<i8>> {
        (0..g.vertex_size())
            .map(|v| g.incidence().row(v).iter().map(|x| x.value()).collect())
            .collect()
    }

    fn path(n: usize, direction: Direction) -> IncidenceGraph {
        let mut g = IncidenceGraph::with_vertices(n);
        for v in 1..n {
            g.add_edge(VertexId(v - 1), VertexId(v), direction).unwrap();
        }
        g
    }

    #[test]
    fn add_edge_appends_a_column() {
        let mut g = IncidenceGraph::with_vertices(3);
        g.add_edge(VertexId(0), VertexId(1), Direction::Undirected)
            .unwrap();
        g.add_edge(VertexId(2), VertexId(0), Direction::Directed)
            .unwrap();
        assert_eq!(cells(&g), vec![vec![1, -1], vec![1, 0], vec![0, 1]]);
        assert_eq!(g.edge_size(), 2);
        assert!(g.is_directed());
        assert_eq!(
            g.endpoints(EdgeId(1)).unwrap(),
            Edge::directed(VertexId(2), VertexId(0))
        );
        assert!(g.endpoints(EdgeId(2)).is_err());
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut g = IncidenceGraph::with_vertices(1);
        assert!(matches!(
            g.add_edge(VertexId(0), VertexId(0), Direction::Directed),
            Err(Error::IncompatibleEdge { .. })
        ));
        assert_eq!(g.edge_size(), 0);
    }

    #[test]
    fn remove_directed_edge_splices_the_column() {
        let mut g = path(4, Direction::Directed);
        g.remove_edge(VertexId(1), VertexId(2), Direction::Directed)
            .unwrap();
        assert_eq!(g.edge_size(), 2);
        assert_eq!(
            g.iter_edges().collect::<Vec<_>>(),
            vec![
                Edge::directed(VertexId(0), VertexId(1)),
                Edge::directed(VertexId(2), VertexId(3)),
            ]
        );
    }

    #[test]
    fn remove_against_direction_is_rejected() {
        let mut g = path(2, Direction::Directed);
        let before = g.clone();
        assert!(matches!(
            g.remove_edge(VertexId(1), VertexId(0), Direction::Directed),
            Err(Error::IncompatibleEdge { .. })
        ));
        assert!(g == before);
    }

    #[test]
    fn directed_removal_of_undirected_edge_keeps_reverse() {
        let mut g = path(2, Direction::Undirected);
        g.remove_edge(VertexId(0), VertexId(1), Direction::Directed)
            .unwrap();
        assert_eq!(cells(&g), vec![vec![-1], vec![1]]);
        assert_eq!(
            g.endpoints(EdgeId(0)).unwrap(),
            Edge::directed(VertexId(1), VertexId(0))
        );
    }

    #[test]
    fn remove_stops_at_a_reversed_column() {
        let mut g = IncidenceGraph::with_vertices(2);
        g.add_edge(VertexId(1), VertexId(0), Direction::Directed)
            .unwrap();
        g.add_edge(VertexId(0), VertexId(1), Direction::Directed)
            .unwrap();
        let before = g.clone();
        assert!(matches!(
            g.remove_edge(VertexId(0), VertexId(1), Direction::Directed),
            Err(Error::IncompatibleEdge { .. })
        ));
        assert!(g == before);
        assert_eq!(g.edge_size(), 2);
    }

    #[test]
    fn traversal_ignores_direction() {
        let g = path(3, Direction::Directed);
        assert_eq!(
            g.out_neighbors(&VertexId(1)).collect::<Vec<_>>(),
            vec![VertexId(0), VertexId(2)]
        );
        assert!(g.has_arc(&VertexId(2), &VertexId(1)));
        assert_eq!(g.out_neighbors(&VertexId(3)).count(), 0);
    }

    #[test]
    fn remove_vertex_compensates_undirected() {
        // 0 - 1 - 2, and 3 hanging off 1
        let mut g = path(3, Direction::Undirected);
        g.push_vertex();
        g.add_edge(VertexId(1), VertexId(3), Direction::Undirected)
            .unwrap();
        g.remove_vertex(VertexId(1)).unwrap();
        assert_eq!(g.vertex_size(), 3);
        let mut edges: Vec<_> = g.iter_edges().collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                Edge::undirected(VertexId(0), VertexId(1)),
                Edge::undirected(VertexId(0), VertexId(2)),
                Edge::undirected(VertexId(1), VertexId(2)),
            ]
        );
    }

    #[test]
    fn remove_vertex_compensates_along_direction() {
        // 0 -> 1 -> 2 and 3 -> 1
        let mut g = path(3, Direction::Directed);
        g.push_vertex();
        g.add_edge(VertexId(3), VertexId(1), Direction::Directed)
            .unwrap();
        g.remove_vertex(VertexId(1)).unwrap();
        let mut edges: Vec<_> = g.iter_edges().collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                Edge::directed(VertexId(0), VertexId(1)),
                Edge::directed(VertexId(2), VertexId(1)),
            ]
        );
    }

    #[test]
    fn remove_vertex_skips_existing_shortcuts() {
        let mut g = path(3, Direction::Undirected);
        g.add_edge(VertexId(0), VertexId(2), Direction::Undirected)
            .unwrap();
        g.remove_vertex(VertexId(1)).unwrap();
        assert_eq!(
            g.iter_edges().collect::<Vec<_>>(),
            vec![Edge::undirected(VertexId(0), VertexId(1))]
        );
    }

    #[test]
    fn malformed_columns_are_rejected() {
        let rows = vec![
            vec![Incidence::Plus, Incidence::Minus],
            vec![Incidence::Zero, Incidence::Minus],
        ];
        assert!(matches!(
            IncidenceGraph::from_rows(rows, 2),
            Err(Error::MalformedEdge { edge: 0 })
        ));
    }
}
