use super::{Event, RandomNumberGenerator, Strategy};
use crate::element::{Edge, Vertex};
use crate::graph::{BaseGraph, EdgeIterable, SubGraph, VertexIterable};
use crate::Result;
use tracing::debug;

/// Keeps each visible vertex with probability `occupation`, disabling the rest.
#[derive(Debug, Clone)]
pub struct UniformRandomVertexRemoval {
    occupation: f64,
    rng: RandomNumberGenerator,
    disabled: Vec<Vertex>,
}

impl UniformRandomVertexRemoval {
    pub fn new(occupation_probability: f64, seed: u64) -> Self {
        Self {
            occupation: occupation_probability,
            rng: RandomNumberGenerator::new(seed),
            disabled: vec![],
        }
    }

    /// Vertices disabled by the latest application.
    pub fn disabled(&self) -> &[Vertex] {
        &self.disabled
    }
}

impl<G: BaseGraph + ?Sized> Strategy<G> for UniformRandomVertexRemoval {
    fn apply(&mut self, subgraph: &mut SubGraph<'_, G>) -> Result<Vec<Event>> {
        self.disabled.clear();
        let candidates: Vec<_> = subgraph.vertices().collect();
        let mut events = vec![];
        for v in candidates {
            if self.occupation > self.rng.uniform_positive() {
                continue;
            }
            subgraph.disable_vertex(&v)?;
            events.push(Event::RemoveVertex(v.clone()));
            self.disabled.push(v);
        }
        debug!(removed = events.len(), "uniform random vertex removal");
        Ok(events)
    }
}

/// Keeps each visible edge with probability `occupation`, disabling the rest.
#[derive(Debug, Clone)]
pub struct UniformRandomEdgeRemoval {
    occupation: f64,
    rng: RandomNumberGenerator,
    disabled: Vec<Edge>,
}

impl UniformRandomEdgeRemoval {
    pub fn new(occupation_probability: f64, seed: u64) -> Self {
        Self {
            occupation: occupation_probability,
            rng: RandomNumberGenerator::new(seed),
            disabled: vec![],
        }
    }

    /// Edges disabled by the latest application.
    pub fn disabled(&self) -> &[Edge] {
        &self.disabled
    }
}

impl<G: BaseGraph + ?Sized> Strategy<G> for UniformRandomEdgeRemoval {
    fn apply(&mut self, subgraph: &mut SubGraph<'_, G>) -> Result<Vec<Event>> {
        self.disabled.clear();
        let candidates: Vec<_> = subgraph.edges().collect();
        let mut events = vec![];
        for e in candidates {
            if self.occupation > self.rng.uniform_positive() {
                continue;
            }
            subgraph.disable_edge(&e)?;
            events.push(Event::RemoveEdge(e.clone()));
            self.disabled.push(e);
        }
        debug!(removed = events.len(), "uniform random edge removal");
        Ok(events)
    }
}
