//! Graph algorithms
//!
//! Every algorithm is a trait with a blanket implementation over [QueryableGraph],
//! so it works on all three stores and on [GraphRepr](crate::graph::GraphRepr).
//! The exception is [Complement], which keeps the encoding of its input.
//!
//! [QueryableGraph]: crate::graph::QueryableGraph
mod connectivity;
pub use self::connectivity::*;
mod shortest_path;
pub use self::shortest_path::*;
mod spanning_tree;
pub use self::spanning_tree::*;
mod complement;
pub use self::complement::*;
mod interop;
pub use self::interop::*;
pub mod graphviz;
