use crate::{graph::*, Result};
use bimap::BiHashMap;
use tracing::debug;

/// This wraps a derived graph and how its vertices map to the graph it was copied from.
///
/// The derived graph is independently owned: changing it never touches the source.
/// In `vmap`, left values are vertices of `graph` and right values are vertices of the
/// source.
#[derive(Clone)]
pub struct MappedGraph<G> {
    pub graph: G,
    pub vmap: BiHashMap<VertexId, VertexId>,
}

impl<G> MappedGraph<G>
where
    G: GrowableGraph,
{
    /// Copies a graph into another encoding. Vertex IDs are kept as they are.
    ///
    /// Fails if the target encoding cannot hold an edge of the source,
    /// e.g. a self-loop in an incidence matrix.
    pub fn transform<S>(source: &S) -> Result<Self>
    where
        S: QueryableGraph,
    {
        Self::induced_subgraph(source, source.iter_vertices())
    }

    /// Copies the subgraph induced by `vertices`.
    ///
    /// The copied vertices are renumbered from zero in the order they are given;
    /// duplicates are ignored.
    pub fn induced_subgraph<S, I>(source: &S, vertices: I) -> Result<Self>
    where
        S: QueryableGraph,
        I: IntoIterator<Item = VertexId>,
    {
        let mut vmap = BiHashMap::new();
        for v in vertices {
            let v = source.check_vertex(v)?;
            if !vmap.contains_right(&v) {
                vmap.insert(VertexId(vmap.len()), v);
            }
        }
        let mut graph = G::with_vertices(vmap.len());
        for e in source.iter_edges() {
            if let (Some(src), Some(snk)) =
                (vmap.get_by_right(&e.source), vmap.get_by_right(&e.sink))
            {
                graph.add_edge(*src, *snk, e.direction)?;
            }
        }
        debug!(
            from = source.vertex_size(),
            to = vmap.len(),
            "copied graph"
        );
        Ok(Self { graph, vmap })
    }
}

impl<G> MappedGraph<G> {
    /// The source vertex a vertex of the derived graph was copied from.
    pub fn original(&self, v: &VertexId) -> Option<VertexId> {
        self.vmap.get_by_left(v).copied()
    }

    /// The vertex of the derived graph copied from a source vertex.
    pub fn mapped(&self, original: &VertexId) -> Option<VertexId> {
        self.vmap.get_by_right(original).copied()
    }
}

impl<G> MappedGraph<G>
where
    G: QueryableGraph,
{
    /// Edges of the derived graph in terms of source vertices, sorted.
    pub fn original_edges(&self) -> Vec<Edge> {
        let mut res: Vec<_> = self
            .graph
            .iter_edges()
            .filter_map(|e| {
                let src = self.original(&e.source)?;
                let snk = self.original(&e.sink)?;
                Some(match e.direction {
                    Direction::Directed => Edge::directed(src, snk),
                    Direction::Undirected => Edge::undirected(src, snk),
                })
            })
            .collect();
        res.sort();
        res
    }
}

impl<G> std::fmt::Debug for MappedGraph<G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.graph.debug())
    }
}

/// Two mapped graphs are equal if they cover the same source vertices
/// with the same edges, whatever their encodings.
impl<G1, G2> std::cmp::PartialEq<MappedGraph<G2>> for MappedGraph<G1>
where
    G1: QueryableGraph,
    G2: QueryableGraph,
{
    fn eq(&self, other: &MappedGraph<G2>) -> bool {
        if self.graph.vertex_size() != other.graph.vertex_size() {
            return false;
        }
        for (_, original) in self.vmap.iter() {
            if other.mapped(original).is_none() {
                return false;
            }
        }
        self.original_edges() == other.original_edges()
    }
}

impl<G> Eq for MappedGraph<G> where G: QueryableGraph {}
