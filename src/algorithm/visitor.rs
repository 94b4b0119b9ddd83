use crate::element::{Edge, ElementUuid, GraphElement, Vertex};
use ahash::RandomState;
use std::collections::HashMap;
use tracing::trace;

/// Progress of a vertex during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Unknown,
    Registered,
    Visited,
}

/// Traversal status per vertex, [Status::Unknown] unless set.
#[derive(Debug, Clone)]
pub struct StatusMap(HashMap<ElementUuid, Status, RandomState>);

impl Default for StatusMap {
    fn default() -> Self {
        Self(HashMap::with_hasher(RandomState::new()))
    }
}

impl StatusMap {
    pub fn get(&self, vertex: &Vertex) -> Status {
        self.0.get(&vertex.uuid()).copied().unwrap_or_default()
    }

    pub fn set(&mut self, vertex: &Vertex, status: Status) {
        self.0.insert(vertex.uuid(), status);
    }

    pub fn count(&self, status: Status) -> usize {
        self.0.values().filter(|x| **x == status).count()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Callbacks driven by [Dfs](super::Dfs) and [Bfs](super::Bfs).
///
/// Apart from status bookkeeping every callback defaults to doing nothing.
pub trait Visitor {
    fn status_map(&self) -> &StatusMap;
    fn status_map_mut(&mut self) -> &mut StatusMap;

    fn status(&self, vertex: &Vertex) -> Status {
        self.status_map().get(vertex)
    }

    fn set_status(&mut self, vertex: &Vertex, status: Status) {
        self.status_map_mut().set(vertex, status)
    }

    /// Called once for the start vertex.
    fn initialize_vertex(&mut self, _vertex: &Vertex) {}
    fn discover_vertex(&mut self, _vertex: &Vertex) {}
    fn examine_edge(&mut self, _edge: &Edge) {}
    fn tree_edge(&mut self, _edge: &Edge) {}
    fn back_edge(&mut self, _edge: &Edge) {}
    fn forward_or_cross_edge(&mut self, _edge: &Edge) {}
    /// Called for vertices without outgoing edges.
    fn leaf_vertex(&mut self, _vertex: &Vertex) {}
    fn finish_vertex(&mut self, _vertex: &Vertex) {}
}

/// A visitor that only traces its callbacks.
#[derive(Debug, Clone, Default)]
pub struct LoggingVisitor {
    statuses: StatusMap,
}

impl LoggingVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Visitor for LoggingVisitor {
    fn status_map(&self) -> &StatusMap {
        &self.statuses
    }

    fn status_map_mut(&mut self) -> &mut StatusMap {
        &mut self.statuses
    }

    fn initialize_vertex(&mut self, vertex: &Vertex) {
        trace!(vertex = %vertex, "initialize vertex");
    }

    fn discover_vertex(&mut self, vertex: &Vertex) {
        trace!(vertex = %vertex, "discover vertex");
    }

    fn examine_edge(&mut self, edge: &Edge) {
        trace!(edge = %edge, "examine edge");
    }

    fn tree_edge(&mut self, edge: &Edge) {
        trace!(edge = %edge, "tree edge");
    }

    fn back_edge(&mut self, edge: &Edge) {
        trace!(edge = %edge, "back edge");
    }

    fn forward_or_cross_edge(&mut self, edge: &Edge) {
        trace!(edge = %edge, "forward or cross edge");
    }

    fn leaf_vertex(&mut self, vertex: &Vertex) {
        trace!(vertex = %vertex, "leaf vertex");
    }

    fn finish_vertex(&mut self, vertex: &Vertex) {
        trace!(vertex = %vertex, "finish vertex");
    }
}
