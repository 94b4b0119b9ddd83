use super::*;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

/// A shared handle to a vertex.
///
/// Cloning the handle does not create a new vertex; use [Vertex::duplicate] for that.
/// Equality, ordering and hashing follow the element identity.
#[derive(Clone)]
pub struct Vertex(pub(crate) Rc<VertexInner>);

pub(crate) struct VertexInner {
    core: ElementCore,
}

impl Vertex {
    pub fn new(label: &str, registry: &Registry) -> Self {
        Self::with_kind(label, Box::new(PlainVertex), registry)
    }

    pub fn with_kind(label: &str, kind: Box<dyn Kind>, registry: &Registry) -> Self {
        Self::build(label.to_string(), kind, registry.downgrade())
    }

    fn build(label: String, kind: Box<dyn Kind>, registry: Weak<RegistryInner>) -> Self {
        let inner = Rc::new(VertexInner {
            core: ElementCore::new(label, kind, registry),
        });
        if let Some(registry) = inner.core.registry().upgrade() {
            registry.register_vertex(inner.core.uuid(), Rc::downgrade(&inner));
        }
        Self(inner)
    }

    /// A new vertex with the same label and kind, a fresh identity and no associations.
    pub fn duplicate(&self) -> Vertex {
        let (label, kind) = self.0.core.duplicate_parts();
        Self::build(label, kind, self.0.core.registry().clone())
    }
}

impl Drop for VertexInner {
    fn drop(&mut self) {
        if let Some(registry) = self.core.registry().upgrade() {
            registry.unregister_vertex(&self.core.uuid());
        }
    }
}

impl GraphElement for Vertex {
    fn core(&self) -> &ElementCore {
        &self.0.core
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.uuid() == other.uuid()
    }
}

impl Eq for Vertex {}

impl PartialOrd for Vertex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vertex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid().cmp(&other.uuid())
    }
}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid().hash(state)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extra = self.kind().describe();
        if extra.is_empty() {
            write!(f, "{}", self.label())
        } else {
            write!(f, "{} ({})", self.label(), extra)
        }
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({:?}, {})", self.label(), self.uuid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_is_fresh() {
        let registry = Registry::new();
        let v = Vertex::with_kind("v", Box::new(WeightedVertex::new(3.0)), &registry);
        v.core().associate(GraphId::new(7), ElementId::new(1)).unwrap();
        let w = v.duplicate();
        assert_ne!(v, w);
        assert_eq!(w.label(), "v");
        assert_eq!(w.class_name(), "WeightedVertex");
        assert!(w.graph_associations().is_empty());
        assert_eq!(v.graph_associations(), vec![GraphId::new(7)]);
        assert_eq!(registry.vertex_by_uuid(&w.uuid()), Some(w));
    }

    #[test]
    fn association_map() {
        let registry = Registry::new();
        let v = Vertex::new("v", &registry);
        let g = GraphId::new(3);
        assert!(matches!(v.id(g), Err(crate::Error::NotAssociated { .. })));
        v.core().associate(g, ElementId::new(5)).unwrap();
        assert!(v.associated(g));
        assert_eq!(v.id(g).unwrap(), ElementId::new(5));
        assert!(matches!(
            v.core().associate(g, ElementId::new(6)),
            Err(crate::Error::AlreadyAssociated { .. })
        ));
        assert_eq!(v.to_prefixed_string(g), "[3:5] v");
        assert_eq!(v.core().disassociate(g).unwrap(), ElementId::new(5));
        assert!(!v.associated(g));
        assert_eq!(v.to_prefixed_string(g), "[3:-] v");
    }

    #[test]
    fn display_includes_kind_description() {
        let registry = Registry::new();
        let v = Vertex::with_kind("hub", Box::new(WeightedVertex::new(1.5)), &registry);
        assert_eq!(v.to_string(), "hub (weight: 1.5)");
        v.set_label("core");
        assert_eq!(v.to_string(), "core (weight: 1.5)");
    }
}
