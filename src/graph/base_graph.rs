use crate::element::*;
use crate::graph::*;
use crate::{Error, Result};
use petgraph::{Directed, Undirected};
use std::rc::Rc;
use tracing::{debug, trace};

/// A graph over shared elements, stored in backend `B`.
pub struct Graph<B: Backend> {
    id: GraphId,
    registry: Registry,
    backend: B,
    observers: Vec<Rc<dyn GraphObserver>>,
}

pub type TreeGraph = Graph<TreeBackend>;
pub type DirectedGraph = Graph<PetgraphBackend<Directed>>;
pub type UndirectedGraph = Graph<PetgraphBackend<Undirected>>;

/// Creates an empty graph of the requested implementation type.
pub fn instance(implementation: ImplementationType, registry: &Registry) -> Box<dyn BaseGraph> {
    match implementation {
        ImplementationType::TreeBacked => Box::new(TreeGraph::new(registry)),
        ImplementationType::PetgraphDirected => Box::new(DirectedGraph::new(registry)),
        ImplementationType::PetgraphUndirected => Box::new(UndirectedGraph::new(registry)),
    }
}

impl<B: Backend> Graph<B> {
    pub fn new(registry: &Registry) -> Self {
        let id = registry.next_graph_id();
        debug!(graph = %id, implementation = %B::implementation_type(), "created graph");
        Self {
            id,
            registry: registry.clone(),
            backend: B::default(),
            observers: vec![],
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn debug(&self) -> GraphDebug<'_, Self> {
        GraphDebug::new(self)
    }

    fn check_registry<E: GraphElement>(&self, element: &E) -> Result<()> {
        self.registry.check_owned(element)
    }

    fn notify_vertex(&self, vertex: &Vertex, event: EventType) {
        for o in self.observers.iter() {
            o.notify_vertex(vertex, event, self.id);
        }
    }

    fn notify_edge(&self, edge: &Edge, event: EventType) {
        for o in self.observers.iter() {
            o.notify_edge(edge, event, self.id);
        }
    }
}

impl<B: Backend> Drop for Graph<B> {
    fn drop(&mut self) {
        for e in self.backend.iter_edges() {
            let _ = e.core().disassociate(self.id);
        }
        for v in self.backend.iter_vertices() {
            let _ = v.core().disassociate(self.id);
        }
    }
}

impl<B: Backend> std::fmt::Debug for Graph<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph {} ({}) {{", self.id, B::implementation_type())?;
        write!(f, "{:?}", self.debug().indent(2, 2))?;
        writeln!(f, "}}")
    }
}

impl<B: Backend> VertexIterable for Graph<B> {
    fn vertex_iterator(&self) -> VertexIterator<'_> {
        ElementCursor::new(self.backend.iter_vertices())
    }

    fn vertex_count(&self) -> usize {
        self.backend.vertex_size()
    }
}

impl<B: Backend> EdgeIterable for Graph<B> {
    fn is_directed(&self) -> bool {
        self.backend.is_directed()
    }

    fn edge_iterator(&self) -> EdgeIterator<'_> {
        ElementCursor::new(self.backend.iter_edges())
    }

    fn out_edge_iterator(&self, vertex: &Vertex) -> Result<EdgeIterator<'_>> {
        self.check_registry(vertex)?;
        let vid = vertex.id(self.id)?;
        Ok(ElementCursor::new(self.backend.out_edges(vid)))
    }

    fn in_edge_iterator(&self, vertex: &Vertex) -> Result<EdgeIterator<'_>> {
        self.check_registry(vertex)?;
        let vid = vertex.id(self.id)?;
        Ok(ElementCursor::new(self.backend.in_edges(vid)))
    }

    fn edge_count(&self) -> usize {
        self.backend.edge_size()
    }
}

impl<B: Backend> BaseGraph for Graph<B> {
    fn id(&self) -> GraphId {
        self.id
    }

    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn implementation_type(&self) -> ImplementationType {
        B::implementation_type()
    }

    fn add_vertex(&mut self, vertex: &Vertex) -> Result<ElementId> {
        self.check_registry(vertex)?;
        if vertex.associated(self.id) {
            return Err(Error::AlreadyAssociated {
                graph: self.id,
                uuid: vertex.uuid(),
            });
        }
        let vid = self.backend.add_vertex(vertex);
        if let Err(err) = vertex.core().associate(self.id, vid) {
            self.backend.remove_vertex(vid);
            return Err(err);
        }
        trace!(graph = %self.id, vertex = %vertex.uuid(), id = %vid, "added vertex");
        self.notify_vertex(vertex, EventType::Added);
        Ok(vid)
    }

    fn remove_vertex(&mut self, vertex: &Vertex) -> Result<()> {
        self.check_registry(vertex)?;
        let vid = vertex.id(self.id)?;
        let edges = self.backend.remove_vertex(vid);
        for e in edges.iter() {
            e.core().disassociate(self.id)?;
            trace!(graph = %self.id, edge = %e.uuid(), "removed incident edge");
            self.notify_edge(e, EventType::Removed);
        }
        vertex.core().disassociate(self.id)?;
        trace!(graph = %self.id, vertex = %vertex.uuid(), id = %vid, "removed vertex");
        self.notify_vertex(vertex, EventType::Removed);
        Ok(())
    }

    fn add_edge(&mut self, edge: &Edge) -> Result<ElementId> {
        self.check_registry(edge)?;
        if edge.associated(self.id) {
            return Err(Error::AlreadyAssociated {
                graph: self.id,
                uuid: edge.uuid(),
            });
        }
        let (source, target) = edge.endpoints()?;
        let endpoint = |v: &Vertex| {
            v.id(self.id).map_err(|_| Error::EndpointNotInGraph {
                graph: self.id,
                uuid: v.uuid(),
            })
        };
        let src = endpoint(&source)?;
        let tgt = endpoint(&target)?;
        let eid = self.backend.add_edge(edge, src, tgt)?;
        if let Err(err) = edge.core().associate(self.id, eid) {
            self.backend.remove_edge(eid);
            return Err(err);
        }
        trace!(graph = %self.id, edge = %edge.uuid(), id = %eid, "added edge");
        self.notify_edge(edge, EventType::Added);
        Ok(eid)
    }

    fn remove_edge(&mut self, edge: &Edge) -> Result<()> {
        self.check_registry(edge)?;
        let eid = edge.id(self.id)?;
        self.backend.remove_edge(eid);
        edge.core().disassociate(self.id)?;
        trace!(graph = %self.id, edge = %edge.uuid(), id = %eid, "removed edge");
        self.notify_edge(edge, EventType::Removed);
        Ok(())
    }

    fn vertex(&self, id: ElementId) -> Result<Vertex> {
        self.backend
            .vertex(id)
            .ok_or(Error::UnknownElementId { graph: self.id, id })
    }

    fn edge(&self, id: ElementId) -> Result<Edge> {
        self.backend
            .edge(id)
            .ok_or(Error::UnknownElementId { graph: self.id, id })
    }

    fn new_instance(&self) -> Box<dyn BaseGraph> {
        Box::new(Self::new(&self.registry))
    }

    fn add_observer(&mut self, observer: Rc<dyn GraphObserver>) {
        self.observers.push(observer);
    }

    fn remove_observer(&mut self, observer: &Rc<dyn GraphObserver>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|o| !same_observer(o, observer));
        before != self.observers.len()
    }
}
