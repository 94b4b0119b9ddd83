use super::*;
use crate::{Error, Result};
use ahash::RandomState;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicUsize, Ordering};

static GRAPH_IDS: AtomicUsize = AtomicUsize::new(0);

/// Context shared by graphs and the elements placed into them.
///
/// It hands out graph identities, unique across all registries, and keeps a reverse lookup from element
/// identity to element. Elements register themselves on construction and
/// unregister when their last handle is dropped.
///
/// Cloning a `Registry` clones the handle, not the content.
#[derive(Clone, Default)]
pub struct Registry(Rc<RegistryInner>);

#[derive(Default)]
pub(crate) struct RegistryInner {
    vertices: RefCell<HashMap<ElementUuid, Weak<VertexInner>, RandomState>>,
    edges: RefCell<HashMap<ElementUuid, Weak<EdgeInner>, RandomState>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_by_uuid(&self, uuid: &ElementUuid) -> Option<Vertex> {
        self.0
            .vertices
            .borrow()
            .get(uuid)
            .and_then(Weak::upgrade)
            .map(Vertex)
    }

    pub fn edge_by_uuid(&self, uuid: &ElementUuid) -> Option<Edge> {
        self.0
            .edges
            .borrow()
            .get(uuid)
            .and_then(Weak::upgrade)
            .map(Edge)
    }

    /// Number of live elements created in this registry.
    pub fn element_count(&self) -> usize {
        self.0.vertices.borrow().len() + self.0.edges.borrow().len()
    }

    pub fn same_as(&self, other: &Registry) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn next_graph_id(&self) -> GraphId {
        GraphId::new(GRAPH_IDS.fetch_add(1, Ordering::Relaxed))
    }

    pub(crate) fn downgrade(&self) -> Weak<RegistryInner> {
        Rc::downgrade(&self.0)
    }

    pub(crate) fn owns(&self, core: &ElementCore) -> bool {
        std::ptr::eq(core.registry().as_ptr(), Rc::as_ptr(&self.0))
    }

    /// Fails with [Error::ForeignRegistry] unless `element` was created in this registry.
    pub(crate) fn check_owned<E: GraphElement + ?Sized>(&self, element: &E) -> Result<()> {
        if self.owns(element.core()) {
            Ok(())
        } else {
            Err(Error::ForeignRegistry {
                uuid: element.uuid(),
            })
        }
    }
}

impl RegistryInner {
    pub(crate) fn register_vertex(&self, uuid: ElementUuid, vertex: Weak<VertexInner>) {
        self.vertices.borrow_mut().insert(uuid, vertex);
    }

    pub(crate) fn register_edge(&self, uuid: ElementUuid, edge: Weak<EdgeInner>) {
        self.edges.borrow_mut().insert(uuid, edge);
    }

    pub(crate) fn unregister_vertex(&self, uuid: &ElementUuid) {
        if let Ok(mut vertices) = self.vertices.try_borrow_mut() {
            vertices.remove(uuid);
        }
    }

    pub(crate) fn unregister_edge(&self, uuid: &ElementUuid) {
        if let Ok(mut edges) = self.edges.try_borrow_mut() {
            edges.remove(uuid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_uuid() {
        let registry = Registry::new();
        let v = Vertex::new("v", &registry);
        let w = Vertex::new("w", &registry);
        let e = Edge::new(&v, &w, "e", &registry);
        assert_eq!(registry.element_count(), 3);
        assert_eq!(registry.vertex_by_uuid(&v.uuid()), Some(v.clone()));
        assert_eq!(registry.edge_by_uuid(&e.uuid()), Some(e.clone()));
        assert_eq!(registry.vertex_by_uuid(&e.uuid()), None);
    }

    #[test]
    fn dropped_elements_unregister() {
        let registry = Registry::new();
        let v = Vertex::new("v", &registry);
        let uuid = v.uuid();
        drop(v);
        assert_eq!(registry.vertex_by_uuid(&uuid), None);
        assert_eq!(registry.element_count(), 0);
    }

    #[test]
    fn graph_ids_are_monotonic() {
        let registry = Registry::new();
        let a = registry.next_graph_id();
        let b = registry.next_graph_id();
        assert!(a < b);
        let other = Registry::new();
        assert!(b < other.next_graph_id());
        assert!(!registry.same_as(&other));
        assert!(registry.same_as(&registry.clone()));
    }
}
