use super::*;
use crate::{Error, Result};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

/// A shared handle to an edge.
///
/// An edge refers to its source and target vertices.
/// Both have to be set before the edge can be added to a graph.
#[derive(Clone)]
pub struct Edge(pub(crate) Rc<EdgeInner>);

pub(crate) struct EdgeInner {
    core: ElementCore,
    source: RefCell<Option<Vertex>>,
    target: RefCell<Option<Vertex>>,
}

impl Edge {
    pub fn new(source: &Vertex, target: &Vertex, label: &str, registry: &Registry) -> Self {
        Self::build(
            label.to_string(),
            Box::new(PlainEdge),
            Some(source.clone()),
            Some(target.clone()),
            registry.downgrade(),
        )
    }

    /// An edge without endpoints.
    pub fn unconnected(label: &str, registry: &Registry) -> Self {
        Self::with_kind(label, Box::new(PlainEdge), registry)
    }

    /// An edge of the given kind without endpoints.
    pub fn with_kind(label: &str, kind: Box<dyn Kind>, registry: &Registry) -> Self {
        Self::build(label.to_string(), kind, None, None, registry.downgrade())
    }

    fn build(
        label: String,
        kind: Box<dyn Kind>,
        source: Option<Vertex>,
        target: Option<Vertex>,
        registry: Weak<RegistryInner>,
    ) -> Self {
        let inner = Rc::new(EdgeInner {
            core: ElementCore::new(label, kind, registry),
            source: RefCell::new(source),
            target: RefCell::new(target),
        });
        if let Some(registry) = inner.core.registry().upgrade() {
            registry.register_edge(inner.core.uuid(), Rc::downgrade(&inner));
        }
        Self(inner)
    }

    /// A new edge with the same label, kind and endpoints,
    /// a fresh identity and no associations.
    pub fn duplicate(&self) -> Edge {
        let (label, kind) = self.0.core.duplicate_parts();
        Self::build(
            label,
            kind,
            self.source_vertex(),
            self.target_vertex(),
            self.0.core.registry().clone(),
        )
    }

    pub fn source_vertex(&self) -> Option<Vertex> {
        self.0.source.borrow().clone()
    }

    pub fn target_vertex(&self) -> Option<Vertex> {
        self.0.target.borrow().clone()
    }

    /// Endpoints can only change while the edge is not part of any graph.
    pub fn set_source_vertex(&self, vertex: &Vertex) -> Result<()> {
        self.ensure_detached()?;
        *self.0.source.borrow_mut() = Some(vertex.clone());
        Ok(())
    }

    pub fn set_target_vertex(&self, vertex: &Vertex) -> Result<()> {
        self.ensure_detached()?;
        *self.0.target.borrow_mut() = Some(vertex.clone());
        Ok(())
    }

    fn ensure_detached(&self) -> Result<()> {
        match self.graph_associations().first() {
            None => Ok(()),
            Some(graph) => Err(Error::AlreadyAssociated {
                graph: *graph,
                uuid: self.uuid(),
            }),
        }
    }

    pub fn endpoints(&self) -> Result<(Vertex, Vertex)> {
        match (self.source_vertex(), self.target_vertex()) {
            (Some(source), Some(target)) => Ok((source, target)),
            _ => Err(Error::MissingEndpoint { uuid: self.uuid() }),
        }
    }

    /// The endpoint across from `vertex`, if `vertex` is an endpoint at all.
    pub fn opposite(&self, vertex: &Vertex) -> Option<Vertex> {
        let source = self.source_vertex()?;
        let target = self.target_vertex()?;
        if &source == vertex {
            Some(target)
        } else if &target == vertex {
            Some(source)
        } else {
            None
        }
    }

    /// All distinct endpoints of two edges.
    pub fn involved_vertices(e0: &Edge, e1: &Edge) -> Vec<Vertex> {
        let mut res: Vec<Vertex> = vec![];
        let candidates = [
            e0.source_vertex(),
            e0.target_vertex(),
            e1.source_vertex(),
            e1.target_vertex(),
        ];
        for v in candidates.into_iter().flatten() {
            if !res.contains(&v) {
                res.push(v);
            }
        }
        res
    }

    /// Whether two edges share at least one endpoint.
    pub fn are_meeting(e0: &Edge, e1: &Edge) -> bool {
        let ends = [e1.source_vertex(), e1.target_vertex()];
        [e0.source_vertex(), e0.target_vertex()]
            .iter()
            .flatten()
            .any(|v| ends.iter().flatten().any(|w| v == w))
    }
}

impl Drop for EdgeInner {
    fn drop(&mut self) {
        if let Some(registry) = self.core.registry().upgrade() {
            registry.unregister_edge(&self.core.uuid());
        }
    }
}

impl GraphElement for Edge {
    fn core(&self) -> &ElementCore {
        &self.0.core
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.uuid() == other.uuid()
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid().cmp(&other.uuid())
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid().hash(state)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extra = self.kind().describe();
        if extra.is_empty() {
            write!(f, "{}", self.label())
        } else {
            write!(f, "{} ({})", self.label(), extra)
        }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self.source_vertex().map(|v| v.label());
        let target = self.target_vertex().map(|v| v.label());
        write!(
            f,
            "Edge({:?}, {:?} -> {:?}, {})",
            self.label(),
            source,
            target,
            self.uuid()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let registry = Registry::new();
        let v = Vertex::new("v", &registry);
        let w = Vertex::new("w", &registry);
        let e = Edge::unconnected("e", &registry);
        assert!(matches!(e.endpoints(), Err(Error::MissingEndpoint { .. })));
        e.set_source_vertex(&v).unwrap();
        assert!(matches!(e.endpoints(), Err(Error::MissingEndpoint { .. })));
        e.set_target_vertex(&w).unwrap();
        assert_eq!(e.endpoints().unwrap(), (v.clone(), w.clone()));
        assert_eq!(e.opposite(&v), Some(w.clone()));
        assert_eq!(e.opposite(&w), Some(v.clone()));
        let x = Vertex::new("x", &registry);
        assert_eq!(e.opposite(&x), None);
    }

    #[test]
    fn endpoints_are_frozen_while_associated() {
        let registry = Registry::new();
        let v = Vertex::new("v", &registry);
        let e = Edge::new(&v, &v, "loop", &registry);
        e.core().associate(GraphId::new(0), ElementId::new(0)).unwrap();
        assert!(matches!(
            e.set_target_vertex(&Vertex::new("w", &registry)),
            Err(Error::AlreadyAssociated { .. })
        ));
    }

    #[test]
    fn duplicate_keeps_endpoints() {
        let registry = Registry::new();
        let v = Vertex::new("v", &registry);
        let w = Vertex::new("w", &registry);
        let e = Edge::with_kind("e", Box::new(WeightedEdge::new(2.0)), &registry);
        e.set_source_vertex(&v).unwrap();
        e.set_target_vertex(&w).unwrap();
        let f = e.duplicate();
        assert_ne!(e, f);
        assert_eq!(f.endpoints().unwrap(), (v, w));
        assert_eq!(f.kind().downcast_ref::<WeightedEdge>(), Some(&WeightedEdge::new(2.0)));
        assert_eq!(f.to_string(), "e (weight: 2)");
    }

    #[test]
    fn meeting_edges() {
        let registry = Registry::new();
        let a = Vertex::new("a", &registry);
        let b = Vertex::new("b", &registry);
        let c = Vertex::new("c", &registry);
        let d = Vertex::new("d", &registry);
        let ab = Edge::new(&a, &b, "ab", &registry);
        let bc = Edge::new(&b, &c, "bc", &registry);
        let cd = Edge::new(&c, &d, "cd", &registry);
        assert!(Edge::are_meeting(&ab, &bc));
        assert!(!Edge::are_meeting(&ab, &cd));
        assert_eq!(Edge::involved_vertices(&ab, &bc), vec![a, b, c]);
    }
}
