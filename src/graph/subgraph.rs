use crate::element::*;
use crate::filter::Filter;
use crate::graph::*;
use crate::{Error, Result};
use ahash::RandomState;
use std::collections::HashSet;

/// A view over a graph with every vertex and edge switched on or off.
///
/// Switching elements off leaves the underlying graph unchanged.
/// The view borrows the graph, so the graph cannot change underneath it and
/// the enabled elements are always a subset of the graph's elements.
///
/// An edge is visible if it is enabled and both of its endpoints are.
/// Disabling a vertex therefore hides its edges without touching their flags.
pub struct SubGraph<'a, G: ?Sized> {
    base: &'a G,
    disabled_vertices: HashSet<ElementId, RandomState>,
    disabled_edges: HashSet<ElementId, RandomState>,
}

impl<'a, G> SubGraph<'a, G>
where
    G: BaseGraph + ?Sized,
{
    /// A view showing everything until elements get disabled.
    pub fn shadowing(base: &'a G) -> Self {
        Self {
            base,
            disabled_vertices: HashSet::with_hasher(RandomState::new()),
            disabled_edges: HashSet::with_hasher(RandomState::new()),
        }
    }

    /// A view showing nothing until elements get enabled.
    pub fn selecting(base: &'a G) -> Self {
        let mut res = Self::shadowing(base);
        res.disable_all_vertices();
        res.disable_all_edges();
        res
    }

    pub fn base_graph(&self) -> &'a G {
        self.base
    }

    fn base_vertex_id(&self, vertex: &Vertex) -> Result<ElementId> {
        self.base
            .vertex_id(vertex)
            .map_err(|_| Error::NotInBaseGraph {
                uuid: vertex.uuid(),
            })
    }

    fn base_edge_id(&self, edge: &Edge) -> Result<ElementId> {
        self.base
            .edge_id(edge)
            .map_err(|_| Error::NotInBaseGraph { uuid: edge.uuid() })
    }

    pub fn enable_vertex(&mut self, vertex: &Vertex) -> Result<()> {
        let vid = self.base_vertex_id(vertex)?;
        self.disabled_vertices.remove(&vid);
        Ok(())
    }

    pub fn disable_vertex(&mut self, vertex: &Vertex) -> Result<()> {
        let vid = self.base_vertex_id(vertex)?;
        self.disabled_vertices.insert(vid);
        Ok(())
    }

    pub fn enable_edge(&mut self, edge: &Edge) -> Result<()> {
        let eid = self.base_edge_id(edge)?;
        self.disabled_edges.remove(&eid);
        Ok(())
    }

    pub fn disable_edge(&mut self, edge: &Edge) -> Result<()> {
        let eid = self.base_edge_id(edge)?;
        self.disabled_edges.insert(eid);
        Ok(())
    }

    pub fn vertex_enabled(&self, vertex: &Vertex) -> bool {
        match self.base.vertex_id(vertex) {
            Ok(vid) => !self.disabled_vertices.contains(&vid),
            Err(_) => false,
        }
    }

    /// The flag of `edge` itself, regardless of its endpoints.
    pub fn edge_enabled(&self, edge: &Edge) -> bool {
        match self.base.edge_id(edge) {
            Ok(eid) => !self.disabled_edges.contains(&eid),
            Err(_) => false,
        }
    }

    /// Whether `edge` shows up when iterating this view.
    pub fn edge_visible(&self, edge: &Edge) -> bool {
        if !self.edge_enabled(edge) {
            return false;
        }
        match edge.endpoints() {
            Ok((source, target)) => self.vertex_enabled(&source) && self.vertex_enabled(&target),
            Err(_) => false,
        }
    }

    pub fn enable_all_vertices(&mut self) {
        self.disabled_vertices.clear();
    }

    pub fn enable_all_edges(&mut self) {
        self.disabled_edges.clear();
    }

    pub fn disable_all_vertices(&mut self) {
        let graph = self.base.id();
        self.disabled_vertices = self
            .base
            .vertices()
            .filter_map(|v| v.id(graph).ok())
            .collect();
    }

    pub fn disable_all_edges(&mut self) {
        let graph = self.base.id();
        self.disabled_edges = self
            .base
            .edges()
            .filter_map(|e| e.id(graph).ok())
            .collect();
    }

    pub fn disabled_vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_> {
        let it = self
            .disabled_vertices
            .iter()
            .filter_map(|vid| self.base.vertex(*vid).ok());
        Box::new(it)
    }

    pub fn disabled_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self
            .disabled_edges
            .iter()
            .filter_map(|eid| self.base.edge(*eid).ok());
        Box::new(it)
    }

    /// Recomputes all flags: an element is disabled iff its filter matches it.
    pub fn apply_filters(&mut self, vertex_filter: &Filter<Vertex>, edge_filter: &Filter<Edge>) {
        let graph = self.base.id();
        self.disabled_vertices = self
            .base
            .vertices()
            .filter(|v| vertex_filter.evaluate(v))
            .filter_map(|v| v.id(graph).ok())
            .collect();
        self.disabled_edges = self
            .base
            .edges()
            .filter(|e| edge_filter.evaluate(e))
            .filter_map(|e| e.id(graph).ok())
            .collect();
        tracing::debug!(
            graph = %graph,
            vertex_filter = %vertex_filter,
            edge_filter = %edge_filter,
            disabled_vertices = self.disabled_vertices.len(),
            disabled_edges = self.disabled_edges.len(),
            "applied filters"
        );
    }

    /// A new graph of the base graph's implementation type holding the visible elements.
    pub fn to_base_graph(&self) -> Result<Box<dyn BaseGraph>> {
        let mut res = self.base.new_instance();
        for v in self.vertices() {
            res.add_vertex(&v)?;
        }
        for e in self.edges() {
            res.add_edge(&e)?;
        }
        Ok(res)
    }

    pub fn debug(&self) -> GraphDebug<'_, Self> {
        GraphDebug::new(self)
    }

    fn check_vertex(&self, vertex: &Vertex) -> Result<()> {
        self.base_vertex_id(vertex)?;
        if self.vertex_enabled(vertex) {
            Ok(())
        } else {
            Err(Error::ElementDisabled {
                uuid: vertex.uuid(),
            })
        }
    }
}

impl<'a, G> VertexIterable for SubGraph<'a, G>
where
    G: BaseGraph + ?Sized,
{
    fn vertex_iterator(&self) -> VertexIterator<'_> {
        self.base
            .vertex_iterator()
            .with_skip(move |v| !self.vertex_enabled(v))
    }

    fn vertex_count(&self) -> usize {
        self.base.vertex_count() - self.disabled_vertices.len()
    }
}

impl<'a, G> EdgeIterable for SubGraph<'a, G>
where
    G: BaseGraph + ?Sized,
{
    fn is_directed(&self) -> bool {
        self.base.is_directed()
    }

    fn edge_iterator(&self) -> EdgeIterator<'_> {
        self.base
            .edge_iterator()
            .with_skip(move |e| !self.edge_visible(e))
    }

    fn out_edge_iterator(&self, vertex: &Vertex) -> Result<EdgeIterator<'_>> {
        self.check_vertex(vertex)?;
        let it = self
            .base
            .out_edge_iterator(vertex)?
            .with_skip(move |e| !self.edge_visible(e));
        Ok(it)
    }

    fn in_edge_iterator(&self, vertex: &Vertex) -> Result<EdgeIterator<'_>> {
        self.check_vertex(vertex)?;
        let it = self
            .base
            .in_edge_iterator(vertex)?
            .with_skip(move |e| !self.edge_visible(e));
        Ok(it)
    }
}
