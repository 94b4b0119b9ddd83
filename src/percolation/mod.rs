//! Random degradation of graphs.
//!
//! A [Strategy] disables elements of a [SubGraph]; the base graph is never touched.
mod rng;
pub use self::rng::*;
mod random_draw;
pub use self::random_draw::*;
mod uniform_removal;
pub use self::uniform_removal::*;

use crate::element::{Edge, Vertex};
use crate::graph::{BaseGraph, SubGraph};
use crate::Result;
use std::fmt;
use tracing::debug;

/// What a strategy did to the subgraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RemoveVertex(Vertex),
    RemoveEdge(Edge),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoveVertex(v) => write!(f, "remove vertex {}", v),
            Self::RemoveEdge(e) => write!(f, "remove edge {}", e),
        }
    }
}

pub trait Strategy<G: BaseGraph + ?Sized> {
    fn apply(&mut self, subgraph: &mut SubGraph<'_, G>) -> Result<Vec<Event>>;
}

/// A view on `graph` degraded step by step.
pub struct Percolation<'a, G: ?Sized> {
    subgraph: SubGraph<'a, G>,
    events: Vec<Event>,
}

impl<'a, G: BaseGraph + ?Sized> Percolation<'a, G> {
    /// Starts with every element of `graph` enabled.
    pub fn new(graph: &'a G) -> Self {
        Self {
            subgraph: SubGraph::shadowing(graph),
            events: vec![],
        }
    }

    /// Enables everything again and forgets past events.
    pub fn reset(&mut self) {
        self.subgraph.enable_all_vertices();
        self.subgraph.enable_all_edges();
        self.events.clear();
    }

    pub fn apply<S: Strategy<G> + ?Sized>(&mut self, strategy: &mut S) -> Result<Vec<Event>> {
        let events = strategy.apply(&mut self.subgraph)?;
        debug!(events = events.len(), "percolation step");
        self.events.extend(events.iter().cloned());
        Ok(events)
    }

    pub fn subgraph(&self) -> &SubGraph<'a, G> {
        &self.subgraph
    }

    /// Everything applied since creation or the last reset.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Registry;
    use crate::graph::*;

    /// `n` disjoint edges.
    fn matching(registry: &Registry, n: usize) -> TreeGraph {
        let mut g = TreeGraph::new(registry);
        for i in 0..n {
            let s = Vertex::new(&format!("s{}", i), registry);
            let t = Vertex::new(&format!("t{}", i), registry);
            g.add_vertex(&s).unwrap();
            g.add_vertex(&t).unwrap();
            g.add_edge(&Edge::new(&s, &t, &format!("e{}", i), registry)).unwrap();
        }
        g
    }

    #[test]
    fn full_occupation_keeps_everything() {
        crate::init_test_logging();
        let registry = Registry::new();
        let g = matching(&registry, 1000);
        let mut p = Percolation::new(&g);
        let events = p.apply(&mut UniformRandomEdgeRemoval::new(1.0, 1)).unwrap();
        assert!(events.is_empty());
        assert_eq!(p.subgraph().edge_count(), 1000);
        let events = p.apply(&mut UniformRandomVertexRemoval::new(1.0, 1)).unwrap();
        assert!(events.is_empty());
        assert_eq!(p.subgraph().vertex_count(), 2000);
    }

    #[test]
    fn no_occupation_removes_edges() {
        let registry = Registry::new();
        let g = matching(&registry, 1000);
        let mut p = Percolation::new(&g);
        let mut strategy = UniformRandomEdgeRemoval::new(0.0, 2);
        let events = p.apply(&mut strategy).unwrap();
        assert_eq!(events.len(), 1000);
        assert_eq!(strategy.disabled().len(), 1000);
        assert_eq!(p.subgraph().edge_count(), 0);
        assert_eq!(p.subgraph().vertex_count(), 2000);
        assert_eq!(g.edge_count(), 1000);
    }

    #[test]
    fn no_occupation_removes_vertices() {
        let registry = Registry::new();
        let g = matching(&registry, 1000);
        let mut p = Percolation::new(&g);
        let mut strategy = UniformRandomVertexRemoval::new(0.0, 3);
        let events = p.apply(&mut strategy).unwrap();
        assert_eq!(events.len(), 2000);
        assert!(events.iter().all(|e| matches!(e, Event::RemoveVertex(_))));
        assert_eq!(p.subgraph().vertex_count(), 0);
        assert_eq!(p.subgraph().edge_count(), 0);

        p.reset();
        assert!(p.events().is_empty());
        assert_eq!(p.subgraph().vertex_count(), 2000);
        assert_eq!(p.subgraph().edge_count(), 1000);
    }

    #[test]
    fn half_occupation() {
        let registry = Registry::new();
        let g = matching(&registry, 1000);
        let mut p = Percolation::new(&g);
        let mut strategy = UniformRandomEdgeRemoval::new(0.5, 4);
        p.apply(&mut strategy).unwrap();
        let kept = p.subgraph().edge_count();
        assert!(kept < 700 && kept > 300, "kept {}", kept);
        assert_eq!(kept + strategy.disabled().len(), 1000);

        // a second round only looks at surviving edges
        let events = p.apply(&mut strategy).unwrap();
        assert_eq!(p.subgraph().edge_count() + events.len(), kept);
        assert_eq!(p.events().len(), 1000 - p.subgraph().edge_count());
    }
}
