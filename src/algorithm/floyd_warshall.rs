use crate::element::{Edge, ElementUuid, GraphElement, Vertex, WeightedEdge};
use crate::graph::{EdgeIterable, VertexIterable};
use crate::{Error, Result};
use ahash::RandomState;
use std::collections::HashMap;
use tracing::debug;

/// All-pairs distances computed by [all_shortest_paths].
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    vertices: Vec<Vertex>,
    index: HashMap<ElementUuid, usize, RandomState>,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    fn new(vertices: Vec<Vertex>) -> Self {
        let n = vertices.len();
        let index = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.uuid(), i))
            .collect();
        let mut distances = vec![f64::INFINITY; n * n];
        for i in 0..n {
            distances[i * n + i] = 0.0;
        }
        Self {
            vertices,
            index,
            distances,
        }
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.vertices.len() + j]
    }

    fn set(&mut self, i: usize, j: usize, d: f64) {
        let n = self.vertices.len();
        self.distances[i * n + j] = d;
    }

    /// Length of the shortest path from `source` to `target`.
    ///
    /// Infinite if there is none or either vertex was not part of the graph.
    pub fn distance(&self, source: &Vertex, target: &Vertex) -> f64 {
        match (self.index.get(&source.uuid()), self.index.get(&target.uuid())) {
            (Some(i), Some(j)) => self.at(*i, *j),
            _ => f64::INFINITY,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All finite distances as `(source, target, distance)`.
    pub fn reachable(&self) -> impl Iterator<Item = (&Vertex, &Vertex, f64)> + '_ {
        let n = self.vertices.len();
        (0..n * n).filter_map(move |x| {
            let d = self.distances[x];
            d.is_finite()
                .then(|| (&self.vertices[x / n], &self.vertices[x % n], d))
        })
    }
}

/// Weight carried by a [WeightedEdge], 1 for any other kind of edge.
pub fn edge_weight(edge: &Edge) -> f64 {
    edge.kind()
        .downcast_ref::<WeightedEdge>()
        .map_or(1.0, |k| k.weight)
}

/// Floyd-Warshall over all visible vertices and edges.
///
/// Parallel edges count with their smallest weight.
/// Undirected edges can be walked both ways.
/// With `detect_negative_cycle` a cycle of negative total weight fails with
/// [Error::NegativeCycle], otherwise distances along such cycles are meaningless.
pub fn all_shortest_paths<G, F>(
    graph: &G,
    weight: F,
    detect_negative_cycle: bool,
) -> Result<DistanceMatrix>
where
    G: VertexIterable + EdgeIterable + ?Sized,
    F: Fn(&Edge) -> f64,
{
    let mut m = DistanceMatrix::new(graph.vertices().collect());
    let n = m.vertices.len();
    debug!(vertices = n, "all shortest paths");

    let directed = graph.is_directed();
    for e in graph.edges() {
        let (s, t) = e.endpoints()?;
        let (Some(&i), Some(&j)) = (m.index.get(&s.uuid()), m.index.get(&t.uuid())) else {
            continue;
        };
        let w = weight(&e);
        if w < m.at(i, j) {
            m.set(i, j, w);
        }
        if !directed && w < m.at(j, i) {
            m.set(j, i, w);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let ik = m.at(i, k);
            if ik == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let via = ik + m.at(k, j);
                if via < m.at(i, j) {
                    if detect_negative_cycle && i == j && via < 0.0 {
                        return Err(Error::NegativeCycle);
                    }
                    m.set(i, j, via);
                }
            }
        }
    }
    Ok(m)
}
