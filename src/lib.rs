//! Graph modeling with elements shared across graph instances.
//!
//! Vertices and edges are reference-counted handles carrying a process-wide
//! identity ([element::ElementUuid]) and a map from graph identity to the
//! local id the element has inside that graph.
//! One element can therefore live in several graphs at once,
//! e.g. a main graph, a copy of it and a materialized subgraph.
//!
//! Graphs ([graph::Graph]) are generic over a storage [graph::Backend].
//! Algorithms in [algorithm] and [percolation] only use the iteration protocol
//! of [graph::VertexIterable] and [graph::EdgeIterable],
//! so they run unchanged on graphs and on [graph::SubGraph] views.
//!
//! ```
//! use polygraph::element::{Edge, Registry, Vertex};
//! use polygraph::graph::{BaseGraph, TreeGraph};
//!
//! let registry = Registry::new();
//! let mut graph = TreeGraph::new(&registry);
//! let v0 = Vertex::new("v0", &registry);
//! let v1 = Vertex::new("v1", &registry);
//! let e0 = Edge::new(&v0, &v1, "e0", &registry);
//! graph.add_vertex(&v0).unwrap();
//! graph.add_vertex(&v1).unwrap();
//! graph.add_edge(&e0).unwrap();
//! assert_eq!(graph.order(), 2);
//! assert_eq!(graph.size(), 1);
//! ```

pub mod algorithm;
pub mod attribute;
pub mod element;
mod error;
pub use self::error::*;
pub mod filter;
pub mod graph;
pub mod percolation;

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
