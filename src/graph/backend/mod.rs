//! Storage engines behind [Graph](super::Graph).
//!
//! A backend stores element handles under local ids it assigns itself.
//! It knows nothing about associations, observers or registries;
//! [Graph](super::Graph) takes care of those.

use crate::element::*;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

mod tree_backed;
pub use self::tree_backed::*;
mod petgraph_backed;
pub use self::petgraph_backed::*;

/// Names the storage engine of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImplementationType {
    TreeBacked,
    PetgraphDirected,
    PetgraphUndirected,
}

impl ImplementationType {
    pub const ALL: [ImplementationType; 3] = [
        ImplementationType::TreeBacked,
        ImplementationType::PetgraphDirected,
        ImplementationType::PetgraphUndirected,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ImplementationType::TreeBacked => "tree-backed",
            ImplementationType::PetgraphDirected => "petgraph-directed",
            ImplementationType::PetgraphUndirected => "petgraph-undirected",
        }
    }
}

impl fmt::Display for ImplementationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImplementationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|x| x.name() == s)
            .ok_or_else(|| Error::UnknownType(s.to_string()))
    }
}

/// Contract every storage engine implements.
pub trait Backend: Default + 'static {
    fn implementation_type() -> ImplementationType;
    fn is_directed(&self) -> bool;

    fn add_vertex(&mut self, vertex: &Vertex) -> ElementId;
    /// Removes a vertex and returns the edges that went away with it.
    fn remove_vertex(&mut self, vertex: ElementId) -> Vec<Edge>;
    fn add_edge(&mut self, edge: &Edge, source: ElementId, target: ElementId) -> Result<ElementId>;
    fn remove_edge(&mut self, edge: ElementId) -> Option<Edge>;

    fn vertex(&self, vertex: ElementId) -> Option<Vertex>;
    fn edge(&self, edge: ElementId) -> Option<Edge>;
    fn vertex_size(&self) -> usize;
    fn edge_size(&self) -> usize;
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_>;
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn in_edges(&self, vertex: ElementId) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn out_edges(&self, vertex: ElementId) -> Box<dyn Iterator<Item = Edge> + '_>;
}

#[cfg(test)]
pub use self::tests::*;
