//! A graph kept in one of three interchangeable encodings, with the same queries and
//! mutations on each.
//!
//! - [graph]: vertex and edge ID's, the shared traits and the three stores
//!   ([ListGraph](graph::ListGraph), [MatrixGraph](graph::MatrixGraph),
//!   [IncidenceGraph](graph::IncidenceGraph)).
//! - [algorithm]: connectivity, shortest paths, spanning trees, complements and exports.
//! - [io]: the plain-text format of each store.
//!
//! # Examples
//!
//! ```rust
//! use reprgraph::{algorithm::*, graph::*, io};
//!
//! let g = io::load(GraphKind::Matrix, "0 1 0\n1 0 1\n0 1 0\n".as_bytes()).unwrap();
//! assert!(g.is_connected());
//! assert_eq!(g.shortest_path(&VertexId(0), &VertexId(2)), Some(2));
//!
//! let c = g.complement();
//! assert!(c.has_arc(&VertexId(0), &VertexId(2)));
//! assert!(!c.is_connected());
//! ```
pub mod algorithm;
pub mod graph;
pub mod io;

mod error;
pub use self::error::*;
