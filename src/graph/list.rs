use crate::{graph::*, Error, Result};
use ahash::RandomState;
use std::collections::HashMap;
use tracing::{trace, warn};

/// A graph stored as one out-neighbor list per vertex.
///
/// It is a multigraph: parallel edges and self-loops are kept.
/// An undirected edge is stored as two opposite entries.
///
/// |                 | Complexity                          |
/// | --------------- | ----------------------------------- |
/// | `add_edge`      | $O(1)$                              |
/// | `remove_edge`   | $O(\deg v + \deg w)$                |
/// | `push_vertex`   | $O(1)$                              |
/// | `remove_vertex` | $O(\|V\| + \|E\|)$                  |
/// | `out_neighbors` | $O(1)$ per neighbor                 |
/// | `iter_edges`    | $O(\|E\| \log \|E\|)$               |
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ListGraph {
    adjacency: Vec<Vec<VertexId>>,
}

impl ListGraph {
    /// Builds a graph from raw neighbor lists, one per vertex.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let mut res = Self::with_vertices(adjacency.len());
        for (v, neighbors) in adjacency.into_iter().enumerate() {
            for w in neighbors {
                res.add_edge(VertexId(v), VertexId(w), Direction::Directed)?;
            }
        }
        Ok(res)
    }

    /// Wraps neighbor lists whose entries are known to be in range.
    pub(crate) fn from_neighbors(adjacency: Vec<Vec<VertexId>>) -> Self {
        Self { adjacency }
    }

    pub fn adjacency(&self) -> &[Vec<VertexId>] {
        &self.adjacency
    }

    /// Out-neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: &VertexId) -> &[VertexId] {
        self.adjacency
            .get(v.to_raw())
            .map(|x| x.as_slice())
            .unwrap_or(&[])
    }
}

impl GrowableGraph for ListGraph {
    fn with_vertices(vertex_size: usize) -> Self {
        Self {
            adjacency: vec![vec![]; vertex_size],
        }
    }

    fn push_vertex(&mut self) -> VertexId {
        self.adjacency.push(vec![]);
        VertexId(self.adjacency.len() - 1)
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId, direction: Direction) -> Result<()> {
        let source = self.check_vertex(source)?;
        let sink = self.check_vertex(sink)?;
        trace!(%source, %sink, ?direction, "list: add edge");
        self.adjacency[source.to_raw()].push(sink);
        if !direction.is_directed() {
            self.adjacency[sink.to_raw()].push(source);
        }
        Ok(())
    }
}

impl EdgeShrinkableGraph for ListGraph {
    fn remove_edge(
        &mut self,
        source: VertexId,
        sink: VertexId,
        direction: Direction,
    ) -> Result<()> {
        let source = self.check_vertex(source)?;
        let sink = self.check_vertex(sink)?;
        let row = &mut self.adjacency[source.to_raw()];
        match row.iter().position(|w| *w == sink) {
            Some(pos) => {
                row.remove(pos);
            }
            None => {
                warn!(%source, %sink, "list: no edge to remove");
                return Err(Error::IncompatibleEdge {
                    from: source,
                    to: sink,
                });
            }
        }
        if !direction.is_directed() {
            let row = &mut self.adjacency[sink.to_raw()];
            if let Some(pos) = row.iter().position(|w| *w == source) {
                row.remove(pos);
            }
        }
        trace!(%source, %sink, ?direction, "list: removed edge");
        Ok(())
    }
}

impl VertexShrinkableGraph for ListGraph {
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        let vertex = self.check_vertex(vertex)?;
        self.adjacency.remove(vertex.to_raw());
        for row in self.adjacency.iter_mut() {
            *row = row
                .iter()
                .filter_map(|w| w.after_removal_of(&vertex))
                .collect();
        }
        trace!(%vertex, "list: removed vertex");
        Ok(())
    }
}

impl QueryableGraph for ListGraph {
    fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    /// Opposite entries pair up into undirected edges.
    /// Every self-loop entry is reported as one directed edge.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let mut arcs: HashMap<(VertexId, VertexId), usize, RandomState> =
            HashMap::with_hasher(RandomState::new());
        for (v, row) in self.adjacency.iter().enumerate() {
            for w in row.iter() {
                *arcs.entry((VertexId(v), *w)).or_default() += 1;
            }
        }
        let mut res = vec![];
        for (&(v, w), &n) in arcs.iter() {
            if v == w {
                res.extend(std::iter::repeat(Edge::directed(v, w)).take(n));
                continue;
            }
            let back = arcs.get(&(w, v)).copied().unwrap_or(0);
            let paired = n.min(back);
            if v < w {
                res.extend(std::iter::repeat(Edge::undirected(v, w)).take(paired));
            }
            res.extend(std::iter::repeat(Edge::directed(v, w)).take(n - paired));
        }
        res.sort();
        Box::new(res.into_iter())
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.neighbors(v).iter().copied())
    }
}

impl std::fmt::Debug for ListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ListGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

/// Renders the loader's input format: one line of neighbors per vertex.
impl std::fmt::Display for ListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.adjacency.iter() {
            let mut first = true;
            for w in row.iter() {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", w)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
