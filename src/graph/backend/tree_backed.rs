use super::*;
use std::collections::{BTreeMap, BTreeSet};

/// A directed storage with balanced computational complexity.
///
/// |                    | Complexity                                                                                   |
/// | ------------------ | -------------------------------------------------------------------------------------------- |
/// | `add_vertex`       | $O(\log \|V\|)$                                                                              |
/// | `add_edge`         | $O(\log \|V\| + \log \|E\|)$                                                                 |
/// | `remove_edge`      | $O(\log \|E\|)$                                                                              |
/// | `remove_vertex`    | $O(\log \|V\| + \|E'\|)$, where $E'$ is the set of edges connecting to the vertex to remove. |
/// | `vertex_size`      | $O(1)$                                                                                       |
/// | `iter_vertices`    | amortized $O(1)$ and $O(\log \|V\|)$ in the worst cases.                                     |
/// | `edge_size`        | $O(1)$                                                                                       |
/// | `iter_edges`       | amortized $O(1)$ and $O(\log \|E\|)$ in the worst cases.                                     |
/// | `edge`             | $O(\log \|E\|)$                                                                              |
/// | `in_edges`         | returns in $O(\log \|E\|)$. $O(\log \|E\|)$ on each call to `.next`.                          |
/// | `out_edges`        | returns in $O(\log \|E\|)$. $O(\log \|E\|)$ on each call to `.next`.                          |
#[derive(Clone, Default)]
pub struct TreeBackend {
    vid_factory: ElementIdFactory,
    eid_factory: ElementIdFactory,
    vertices: BTreeMap<ElementId, Vertex>,
    edges: BTreeMap<ElementId, (ElementId, ElementId, Edge)>,
    in_edges: BTreeSet<(ElementId, ElementId, ElementId)>,
    out_edges: BTreeSet<(ElementId, ElementId, ElementId)>,
}

impl std::fmt::Debug for TreeBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackend {{")?;
        for (vid, v) in self.vertices.iter() {
            writeln!(f, "{:?} {}:", vid, v)?;
            for e in self.out_edges(*vid) {
                writeln!(f, "  -> {} by {}", e.target_vertex().map(|x| x.label()).unwrap_or_default(), e)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl TreeBackend {
    fn adjacent<'a>(
        &'a self,
        index: &'a BTreeSet<(ElementId, ElementId, ElementId)>,
        v: ElementId,
    ) -> Box<dyn Iterator<Item = Edge> + 'a> {
        let start = (v, ElementId::MIN, ElementId::MIN);
        let end = (v.next(), ElementId::MIN, ElementId::MIN);
        let it = index
            .range(start..end)
            .filter_map(move |(_, _, eid)| self.edges.get(eid).map(|(_, _, e)| e.clone()));
        Box::new(it)
    }
}

impl Backend for TreeBackend {
    fn implementation_type() -> ImplementationType {
        ImplementationType::TreeBacked
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn add_vertex(&mut self, vertex: &Vertex) -> ElementId {
        let vid = self.vid_factory.one_more();
        self.vertices.insert(vid, vertex.clone());
        vid
    }

    fn remove_vertex(&mut self, vertex: ElementId) -> Vec<Edge> {
        if self.vertices.remove(&vertex).is_none() {
            return vec![];
        }
        let start = (vertex, ElementId::MIN, ElementId::MIN);
        let end = (vertex.next(), ElementId::MIN, ElementId::MIN);
        let ins = self.in_edges.range(start..end).map(|(_, _, e)| *e);
        let outs = self.out_edges.range(start..end).map(|(_, _, e)| *e);
        let eids: BTreeSet<_> = ins.chain(outs).collect();
        eids.into_iter()
            .filter_map(|eid| self.remove_edge(eid))
            .collect()
    }

    fn add_edge(&mut self, edge: &Edge, source: ElementId, target: ElementId) -> Result<ElementId> {
        for v in [source, target] {
            if !self.vertices.contains_key(&v) {
                return Err(Error::Backend(format!("unknown vertex id {}", v)));
            }
        }
        let eid = self.eid_factory.one_more();
        self.edges.insert(eid, (source, target, edge.clone()));
        self.in_edges.insert((target, source, eid));
        self.out_edges.insert((source, target, eid));
        Ok(eid)
    }

    fn remove_edge(&mut self, edge: ElementId) -> Option<Edge> {
        let (src, tgt, e) = self.edges.remove(&edge)?;
        self.in_edges.remove(&(tgt, src, edge));
        self.out_edges.remove(&(src, tgt, edge));
        Some(e)
    }

    fn vertex(&self, vertex: ElementId) -> Option<Vertex> {
        self.vertices.get(&vertex).cloned()
    }

    fn edge(&self, edge: ElementId) -> Option<Edge> {
        self.edges.get(&edge).map(|(_, _, e)| e.clone())
    }

    fn vertex_size(&self) -> usize {
        self.vertices.len()
    }

    fn edge_size(&self) -> usize {
        self.edges.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_> {
        Box::new(self.vertices.values().cloned())
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(self.edges.values().map(|(_, _, e)| e.clone()))
    }

    fn in_edges(&self, vertex: ElementId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.adjacent(&self.in_edges, vertex)
    }

    fn out_edges(&self, vertex: ElementId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.adjacent(&self.out_edges, vertex)
    }
}
