//! Graphs over shared elements, their storage backends and subgraph views.
//!
//! # Iteration protocol
//!
//! Every graph hands out [ElementCursor]s: `advance` moves forward,
//! `current` returns the element advanced to, and a skip predicate may hide
//! elements. Cursors also work as ordinary iterators.
//! Ordering is backend-defined; algorithms must not depend on it.
//!
//! # Backends
//!
//! [Graph] is generic over a [Backend]. [TreeBackend] keeps ordered trees,
//! [PetgraphBackend] wraps a `petgraph` stable graph and comes in a directed and
//! an undirected flavor. [instance] picks one by [ImplementationType].
//!
//! # `SubGraph`
//!
//! A [SubGraph] enables or disables vertices and edges of the graph it borrows.
//! It never changes that graph.

mod iterator;
pub use self::iterator::*;
mod r#trait;
pub use self::r#trait::*;
mod observer;
pub use self::observer::*;
pub mod backend;
pub use self::backend::{
    Backend, DirectedPetgraphBackend, ImplementationType, PetgraphBackend, TreeBackend,
    UndirectedPetgraphBackend,
};
mod base_graph;
pub use self::base_graph::*;
mod subgraph;
pub use self::subgraph::*;
mod graph_debug;
pub use self::graph_debug::*;
