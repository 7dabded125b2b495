//! One graph, three encodings.
//!
//! # Graph stores
//!
//! A graph can be stored as
//! - [ListGraph]: one out-neighbor list per vertex, a true multigraph;
//! - [MatrixGraph]: a square boolean adjacency matrix;
//! - [IncidenceGraph]: a $\|V\| \times \|E\|$ matrix of `-1`/`0`/`1`, one column per edge.
//!
//! Vertices are lightweight ID's numbered from zero.
//! Algorithm authors may feel free to copy and store them,
//! but be aware that removing a vertex renumbers every vertex after it.
//!
//! All stores share [QueryableGraph], [GrowableGraph], [EdgeShrinkableGraph] and
//! [VertexShrinkableGraph], so algorithms are written once.
//! [GraphRepr] picks the encoding at runtime.
//!
//! # Graph wrappers
//!
//! ## `MappedGraph`
//!
//! It wraps an independently owned copy of a graph, in any encoding,
//! and how its vertices are mapped from the source graph.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod grid;
pub use self::grid::*;
mod list;
pub use self::list::*;
mod matrix;
pub use self::matrix::*;
mod incidence;
pub use self::incidence::*;
mod repr;
pub use self::repr::*;
mod mapped_graph;
pub use self::mapped_graph::*;
mod graph_debug;
pub use self::graph_debug::*;

#[cfg(test)]
pub use self::tests::*;
