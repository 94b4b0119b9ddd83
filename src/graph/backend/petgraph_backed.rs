use super::*;
use petgraph::{
    graph::{EdgeIndex, NodeIndex},
    stable_graph::StableGraph,
    visit::EdgeRef,
    Directed, Direction, EdgeType, Undirected,
};
use std::collections::BTreeSet;

/// An adjacency-list storage on top of [petgraph]'s `StableGraph`.
///
/// Removals leave the indices of the remaining elements unchanged.
/// Vacated indices are recycled by later insertions, so a local id only names
/// an element while that element is stored.
#[derive(Clone)]
pub struct PetgraphBackend<Ty: EdgeType = Directed>(StableGraph<Vertex, Edge, Ty, usize>);

pub type DirectedPetgraphBackend = PetgraphBackend<Directed>;
pub type UndirectedPetgraphBackend = PetgraphBackend<Undirected>;

impl<Ty: EdgeType> Default for PetgraphBackend<Ty> {
    fn default() -> Self {
        Self(StableGraph::with_capacity(0, 0))
    }
}

fn node(v: ElementId) -> NodeIndex<usize> {
    NodeIndex::new(v.to_raw())
}

fn edge_index(e: ElementId) -> EdgeIndex<usize> {
    EdgeIndex::new(e.to_raw())
}

impl<Ty: EdgeType> PetgraphBackend<Ty> {
    fn incident(&self, v: ElementId, dir: Direction) -> Box<dyn Iterator<Item = Edge> + '_> {
        let a = node(v);
        if !self.0.contains_node(a) {
            return Box::new(std::iter::empty());
        }
        if !Ty::is_directed() {
            return Box::new(self.0.edges(a).map(|e| e.weight().clone()));
        }
        Box::new(self.0.edges_directed(a, dir).map(|e| e.weight().clone()))
    }
}

impl<Ty: EdgeType + 'static> Backend for PetgraphBackend<Ty> {
    fn implementation_type() -> ImplementationType {
        if Ty::is_directed() {
            ImplementationType::PetgraphDirected
        } else {
            ImplementationType::PetgraphUndirected
        }
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn add_vertex(&mut self, vertex: &Vertex) -> ElementId {
        let idx = self.0.add_node(vertex.clone());
        ElementId::new(idx.index())
    }

    fn remove_vertex(&mut self, vertex: ElementId) -> Vec<Edge> {
        let a = node(vertex);
        if !self.0.contains_node(a) {
            return vec![];
        }
        let eids: BTreeSet<usize> = self
            .0
            .edges_directed(a, Direction::Outgoing)
            .chain(self.0.edges_directed(a, Direction::Incoming))
            .map(|e| e.id().index())
            .collect();
        let res = eids
            .into_iter()
            .filter_map(|e| self.0.edge_weight(EdgeIndex::new(e)).cloned())
            .collect();
        self.0.remove_node(a);
        res
    }

    fn add_edge(&mut self, edge: &Edge, source: ElementId, target: ElementId) -> Result<ElementId> {
        let (a, b) = (node(source), node(target));
        for (v, idx) in [(source, a), (target, b)] {
            if !self.0.contains_node(idx) {
                return Err(Error::Backend(format!("unknown vertex id {}", v)));
            }
        }
        let idx = self.0.add_edge(a, b, edge.clone());
        Ok(ElementId::new(idx.index()))
    }

    fn remove_edge(&mut self, edge: ElementId) -> Option<Edge> {
        self.0.remove_edge(edge_index(edge))
    }

    fn vertex(&self, vertex: ElementId) -> Option<Vertex> {
        self.0.node_weight(node(vertex)).cloned()
    }

    fn edge(&self, edge: ElementId) -> Option<Edge> {
        self.0.edge_weight(edge_index(edge)).cloned()
    }

    fn vertex_size(&self) -> usize {
        self.0.node_count()
    }

    fn edge_size(&self) -> usize {
        self.0.edge_count()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_> {
        let it = self.0.node_indices().filter_map(|x| self.0.node_weight(x).cloned());
        Box::new(it)
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self.0.edge_indices().filter_map(|x| self.0.edge_weight(x).cloned());
        Box::new(it)
    }

    fn in_edges(&self, vertex: ElementId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.incident(vertex, Direction::Incoming)
    }

    fn out_edges(&self, vertex: ElementId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.incident(vertex, Direction::Outgoing)
    }
}
