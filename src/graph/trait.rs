use crate::element::*;
use crate::graph::*;
use crate::{Error, Result};
use bimap::BiHashMap;
use std::rc::Rc;

/// Anything whose vertices can be enumerated.
pub trait VertexIterable {
    /// A fresh cursor over all vertices. Ordering is up to the implementation.
    fn vertex_iterator(&self) -> VertexIterator<'_>;

    fn vertices(&self) -> Elements<'_, Vertex> {
        self.vertex_iterator().into_iter()
    }

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}

/// Anything whose edges can be enumerated.
///
/// On undirected graphs every incident edge is both an in-edge and an out-edge.
pub trait EdgeIterable {
    fn is_directed(&self) -> bool;

    fn edge_iterator(&self) -> EdgeIterator<'_>;
    fn out_edge_iterator(&self, vertex: &Vertex) -> Result<EdgeIterator<'_>>;
    fn in_edge_iterator(&self, vertex: &Vertex) -> Result<EdgeIterator<'_>>;

    /// All edges incident to `vertex`, each reported once.
    fn edge_iterator_of(&self, vertex: &Vertex) -> Result<EdgeIterator<'_>> {
        let outs = self.out_edge_iterator(vertex)?;
        if !self.is_directed() {
            return Ok(outs);
        }
        let me = vertex.clone();
        let ins = self
            .in_edge_iterator(vertex)?
            .into_iter()
            .filter(move |e| e.source_vertex().as_ref() != Some(&me));
        Ok(ElementCursor::new(Box::new(outs.into_iter().chain(ins))))
    }

    fn edges(&self) -> Elements<'_, Edge> {
        self.edge_iterator().into_iter()
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

/// Storage-independent surface of a graph.
///
/// Vertices and edges are shared handles. A graph associates them with its
/// own [GraphId] and a local [ElementId] on insertion and drops the
/// association on removal, so one element may live in several graphs at once.
pub trait BaseGraph: VertexIterable + EdgeIterable {
    fn id(&self) -> GraphId;
    fn registry(&self) -> &Registry;
    fn implementation_type(&self) -> ImplementationType;

    fn add_vertex(&mut self, vertex: &Vertex) -> Result<ElementId>;
    /// Removes `vertex` together with all incident edges.
    fn remove_vertex(&mut self, vertex: &Vertex) -> Result<()>;
    fn add_edge(&mut self, edge: &Edge) -> Result<ElementId>;
    fn remove_edge(&mut self, edge: &Edge) -> Result<()>;

    fn vertex(&self, id: ElementId) -> Result<Vertex>;
    fn edge(&self, id: ElementId) -> Result<Edge>;

    /// An empty graph of the same implementation type in the same registry.
    fn new_instance(&self) -> Box<dyn BaseGraph>;

    fn add_observer(&mut self, observer: Rc<dyn GraphObserver>);
    fn remove_observer(&mut self, observer: &Rc<dyn GraphObserver>) -> bool;

    fn vertex_id(&self, vertex: &Vertex) -> Result<ElementId> {
        self.registry().check_owned(vertex)?;
        vertex.id(self.id())
    }

    fn edge_id(&self, edge: &Edge) -> Result<ElementId> {
        self.registry().check_owned(edge)?;
        edge.id(self.id())
    }

    fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.registry().owns(vertex.core()) && vertex.associated(self.id())
    }

    fn contains_edge(&self, edge: &Edge) -> bool {
        self.registry().owns(edge.core()) && edge.associated(self.id())
    }

    /// Number of vertices.
    fn order(&self) -> usize {
        self.vertex_count()
    }

    /// Number of edges.
    fn size(&self) -> usize {
        self.edge_count()
    }

    fn is_empty(&self) -> bool {
        self.order() == 0
    }

    fn all_vertices(&self) -> Vec<Vertex> {
        self.vertices().collect()
    }

    fn all_edges(&self) -> Vec<Edge> {
        self.edges().collect()
    }

    /// Edges leading from `source` to `target`.
    /// On undirected graphs the direction is ignored.
    fn edges_between(&self, source: &Vertex, target: &Vertex) -> Result<Vec<Edge>> {
        self.vertex_id(target)?;
        let res = self
            .out_edge_iterator(source)?
            .into_iter()
            .filter(|e| e.opposite(source).as_ref() == Some(target))
            .collect();
        Ok(res)
    }

    /// Removes all edges between `source` and `target` and reports how many there were.
    fn remove_edges(&mut self, source: &Vertex, target: &Vertex) -> Result<usize> {
        let edges = self.edges_between(source, target)?;
        for e in edges.iter() {
            self.remove_edge(e)?;
        }
        Ok(edges.len())
    }

    fn clear(&mut self) -> Result<()> {
        for e in self.all_edges() {
            self.remove_edge(&e)?;
        }
        for v in self.all_vertices() {
            self.remove_vertex(&v)?;
        }
        Ok(())
    }

    /// A new graph sharing all vertices and edges with this one.
    fn copy(&self) -> Result<Box<dyn BaseGraph>> {
        let mut res = self.new_instance();
        for v in self.vertices() {
            res.add_vertex(&v)?;
        }
        for e in self.edges() {
            res.add_edge(&e)?;
        }
        Ok(res)
    }

    /// A new graph sharing the vertices but holding duplicates of the edges.
    fn clone_edges(&self) -> Result<Box<dyn BaseGraph>> {
        let mut res = self.new_instance();
        for v in self.vertices() {
            res.add_vertex(&v)?;
        }
        for e in self.edges() {
            res.add_edge(&e.duplicate())?;
        }
        Ok(res)
    }

    /// A new graph holding duplicates of every element.
    ///
    /// The returned mapping relates each original element to its duplicate.
    fn deep_clone(&self) -> Result<(Box<dyn BaseGraph>, CloneMapping)> {
        let mut res = self.new_instance();
        let mut mapping = CloneMapping::new();
        for v in self.vertices() {
            let dup = v.duplicate();
            res.add_vertex(&dup)?;
            mapping.vertices.insert(v, dup);
        }
        for e in self.edges() {
            let (source, target) = e.endpoints()?;
            let dup = Edge::with_kind(&e.label(), e.kind().clone_kind(), self.registry());
            dup.set_source_vertex(mapping.duplicate_of(&source)?)?;
            dup.set_target_vertex(mapping.duplicate_of(&target)?)?;
            res.add_edge(&dup)?;
            mapping.edges.insert(e, dup);
        }
        Ok((res, mapping))
    }
}

/// Relates original elements (left) to their duplicates (right).
pub struct CloneMapping {
    pub vertices: BiHashMap<Vertex, Vertex>,
    pub edges: BiHashMap<Edge, Edge>,
}

impl Default for CloneMapping {
    fn default() -> Self {
        Self::new()
    }
}

impl CloneMapping {
    pub fn new() -> Self {
        Self {
            vertices: BiHashMap::new(),
            edges: BiHashMap::new(),
        }
    }

    fn duplicate_of(&self, original: &Vertex) -> Result<&Vertex> {
        self.vertices
            .get_by_left(original)
            .ok_or(Error::MissingEndpoint {
                uuid: original.uuid(),
            })
    }
}
