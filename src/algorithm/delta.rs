use crate::element::{Edge, ElementUuid, GraphElement, Vertex};
use crate::graph::{BaseGraph, EdgeIterable, VertexIterable};
use crate::{Error, Result};
use ahash::RandomState;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace};

/// One edit applied by [Delta::next_step].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaStep {
    RemoveEdge(Edge),
    RemoveVertex(Vertex),
    AddVertex(Vertex),
    AddEdge(Edge),
}

impl fmt::Display for DeltaStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoveEdge(e) => write!(f, "remove edge {}", e),
            Self::RemoveVertex(v) => write!(f, "remove vertex {}", v),
            Self::AddVertex(v) => write!(f, "add vertex {}", v),
            Self::AddEdge(e) => write!(f, "add edge {}", e),
        }
    }
}

/// Turns `source` into `target` one edit at a time.
///
/// Elements are compared by identity.
/// Edits are applied to `source` in the order
/// edge removals, vertex removals, vertex additions, edge additions,
/// so that no step ever refers to a missing endpoint.
pub struct Delta<'a, S: ?Sized, T: ?Sized> {
    source: &'a mut S,
    target: &'a T,
    remove_edges: Vec<Edge>,
    remove_vertices: Vec<Vertex>,
    add_vertices: Vec<Vertex>,
    add_edges: Vec<Edge>,
}

impl<'a, S, T> Delta<'a, S, T>
where
    S: BaseGraph + ?Sized,
    T: VertexIterable + EdgeIterable + ?Sized,
{
    pub fn new(source: &'a mut S, target: &'a T) -> Self {
        Self {
            source,
            target,
            remove_edges: vec![],
            remove_vertices: vec![],
            add_vertices: vec![],
            add_edges: vec![],
        }
    }

    /// Computes the pending edits, discarding any left from a previous run.
    pub fn run(&mut self) {
        let source_vertices = Self::uuids(self.source.vertices());
        let target_vertices = Self::uuids(self.target.vertices());
        let source_edges = Self::uuids(self.source.edges());
        let target_edges = Self::uuids(self.target.edges());

        self.remove_vertices = self
            .source
            .vertices()
            .filter(|v| !target_vertices.contains(&v.uuid()))
            .collect();
        self.add_vertices = self
            .target
            .vertices()
            .filter(|v| !source_vertices.contains(&v.uuid()))
            .collect();
        self.remove_edges = self
            .source
            .edges()
            .filter(|e| !target_edges.contains(&e.uuid()))
            .collect();
        self.add_edges = self
            .target
            .edges()
            .filter(|e| !source_edges.contains(&e.uuid()))
            .collect();
        debug!(
            remove_edges = self.remove_edges.len(),
            remove_vertices = self.remove_vertices.len(),
            add_vertices = self.add_vertices.len(),
            add_edges = self.add_edges.len(),
            "delta computed"
        );
    }

    pub fn has_next(&self) -> bool {
        self.pending() > 0
    }

    /// Number of edits not applied yet.
    pub fn pending(&self) -> usize {
        self.remove_edges.len()
            + self.remove_vertices.len()
            + self.add_vertices.len()
            + self.add_edges.len()
    }

    /// Applies the next edit to the source graph and reports it.
    pub fn next_step(&mut self) -> Result<DeltaStep> {
        let step = if let Some(e) = self.remove_edges.pop() {
            self.source.remove_edge(&e)?;
            DeltaStep::RemoveEdge(e)
        } else if let Some(v) = self.remove_vertices.pop() {
            self.source.remove_vertex(&v)?;
            DeltaStep::RemoveVertex(v)
        } else if let Some(v) = self.add_vertices.pop() {
            self.source.add_vertex(&v)?;
            DeltaStep::AddVertex(v)
        } else if let Some(e) = self.add_edges.pop() {
            self.source.add_edge(&e)?;
            DeltaStep::AddEdge(e)
        } else {
            return Err(Error::NoMoreSteps);
        };
        trace!(step = %step, "delta step");
        Ok(step)
    }

    /// Applies all pending edits.
    pub fn apply_all(&mut self) -> Result<Vec<DeltaStep>> {
        let mut res = Vec::with_capacity(self.pending());
        while self.has_next() {
            res.push(self.next_step()?);
        }
        Ok(res)
    }

    fn uuids<X, I>(items: I) -> HashSet<ElementUuid, RandomState>
    where
        X: GraphElement,
        I: Iterator<Item = X>,
    {
        items.map(|x| x.uuid()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Registry;
    use crate::graph::backend::*;
    use crate::graph::*;
    use quickcheck_macros::quickcheck;
    use std::collections::{BTreeMap, BTreeSet};

    fn labels<I: Iterator<Item = X>, X: GraphElement>(it: I) -> BTreeSet<String> {
        it.map(|x| x.label()).collect()
    }

    #[test]
    fn transforms_source_into_target() {
        crate::init_test_logging();
        for implementation in ImplementationType::ALL {
            let registry = Registry::new();
            let vs: Vec<_> = (0..5)
                .map(|i| Vertex::new(&format!("v{}", i), &registry))
                .collect();
            let edge = |s: usize, t: usize| {
                Edge::new(&vs[s], &vs[t], &format!("{}->{}", s, t), &registry)
            };

            let mut source = instance(implementation, &registry);
            for i in [0, 1, 3] {
                source.add_vertex(&vs[i]).unwrap();
            }
            source.add_edge(&edge(0, 1)).unwrap();
            source.add_edge(&edge(1, 3)).unwrap();

            let mut target = instance(implementation, &registry);
            for i in [1, 2, 3, 4] {
                target.add_vertex(&vs[i]).unwrap();
            }
            for (s, t) in [(1, 2), (1, 4), (2, 3)] {
                target.add_edge(&edge(s, t)).unwrap();
            }

            let mut delta = Delta::new(source.as_mut(), target.as_ref());
            delta.run();
            assert!(delta.has_next());
            assert_eq!(delta.pending(), 2 + 1 + 2 + 3);
            let steps = delta.apply_all().unwrap();
            assert!(!delta.has_next());
            assert!(matches!(delta.next_step(), Err(Error::NoMoreSteps)));

            assert!(matches!(steps[0], DeltaStep::RemoveEdge(_)));
            assert!(matches!(steps[2], DeltaStep::RemoveVertex(_)));
            assert!(matches!(steps[3], DeltaStep::AddVertex(_)));
            assert!(matches!(steps[7], DeltaStep::AddEdge(_)));

            let source_vertices: BTreeSet<_> = source.vertices().collect();
            let target_vertices: BTreeSet<_> = target.vertices().collect();
            assert_eq!(source_vertices, target_vertices);
            let source_edges: BTreeSet<_> = source.edges().collect();
            let target_edges: BTreeSet<_> = target.edges().collect();
            assert_eq!(source_edges, target_edges);
            assert_eq!(labels(source.edges()), labels(target.edges()));
        }
    }

    #[test]
    fn identical_graphs_have_no_steps() {
        let registry = Registry::new();
        let mut a = TreeGraph::new(&registry);
        let v = Vertex::new("v", &registry);
        a.add_vertex(&v).unwrap();
        let b = a.copy().unwrap();
        let mut delta = Delta::new(&mut a, b.as_ref());
        delta.run();
        assert!(!delta.has_next());
        assert!(matches!(delta.next_step(), Err(Error::NoMoreSteps)));
    }

    #[test]
    fn towards_subgraph() {
        let registry = Registry::new();
        let mut base = TreeGraph::new(&registry);
        let v0 = Vertex::new("v0", &registry);
        let v1 = Vertex::new("v1", &registry);
        let e = Edge::new(&v0, &v1, "e", &registry);
        base.add_vertex(&v0).unwrap();
        base.add_vertex(&v1).unwrap();
        base.add_edge(&e).unwrap();
        let mut source = base.copy().unwrap();

        let mut sub = SubGraph::shadowing(&base);
        sub.disable_vertex(&v1).unwrap();
        let mut delta = Delta::new(source.as_mut(), &sub);
        delta.run();
        let steps = delta.apply_all().unwrap();
        assert_eq!(
            steps,
            vec![DeltaStep::RemoveEdge(e.clone()), DeltaStep::RemoveVertex(v1.clone())]
        );
        assert_eq!(labels(source.vertices()), labels(sub.vertices()));
        assert_eq!(source.size(), 0);
    }

    /// Handles shared by every graph built from it, keyed by their names in [Ops].
    #[derive(Default)]
    struct Pool {
        vertices: BTreeMap<usize, Vertex>,
        edges: BTreeMap<(usize, usize, usize), Edge>,
    }

    impl Pool {
        fn build(&mut self, ops: &Ops, registry: &Registry) -> Box<dyn BaseGraph> {
            let mut g = instance(ImplementationType::TreeBacked, registry);
            let mut live_edges = BTreeMap::new();
            for op in ops.iter() {
                match op {
                    Op::AddVertex(v) => {
                        let vertex = self
                            .vertices
                            .entry(*v)
                            .or_insert_with(|| Vertex::new(&v.to_string(), registry));
                        g.add_vertex(vertex).unwrap();
                    }
                    Op::RemoveVertex(v) => g.remove_vertex(&self.vertices[v]).unwrap(),
                    Op::AddEdge((s, t, e)) => {
                        let source = self.vertices[s].clone();
                        let target = self.vertices[t].clone();
                        let edge = self
                            .edges
                            .entry((*s, *t, *e))
                            .or_insert_with(|| Edge::new(&source, &target, &e.to_string(), registry))
                            .clone();
                        g.add_edge(&edge).unwrap();
                        live_edges.insert(*e, edge);
                    }
                    Op::RemoveEdge(e) => g.remove_edge(&live_edges[e]).unwrap(),
                }
            }
            g
        }
    }

    #[quickcheck]
    fn reaches_any_target(from: Ops, to: Ops) {
        let registry = Registry::new();
        let mut pool = Pool::default();
        let mut source = pool.build(&from, &registry);
        let target = pool.build(&to, &registry);

        let mut delta = Delta::new(source.as_mut(), target.as_ref());
        delta.run();
        let pending = delta.pending();
        let steps = delta.apply_all().unwrap();
        assert_eq!(steps.len(), pending);
        assert!(!delta.has_next());

        let vertices = |g: &dyn BaseGraph| -> BTreeSet<_> { g.vertices().map(|v| v.uuid()).collect() };
        let edges = |g: &dyn BaseGraph| -> BTreeSet<_> { g.edges().map(|e| e.uuid()).collect() };
        assert_eq!(vertices(source.as_ref()), vertices(target.as_ref()));
        assert_eq!(edges(source.as_ref()), edges(target.as_ref()));
    }
}
