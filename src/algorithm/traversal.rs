use super::visitor::{Status, Visitor};
use crate::element::{Edge, Vertex};
use crate::graph::{EdgeIterable, VertexIterable};
use crate::{Error, Result};
use std::collections::VecDeque;
use tracing::debug;

pub(crate) trait TraversalCollection<T>: Default {
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
}

pub(crate) struct Stack<T>(Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> TraversalCollection<T> for Stack<T> {
    fn push(&mut self, value: T) {
        self.0.push(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }
}

pub(crate) struct Queue<T>(VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> TraversalCollection<T> for Queue<T> {
    fn push(&mut self, value: T) {
        self.0.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }
}

pub(crate) type EdgeSkipper<'g> = Option<Box<dyn Fn(&Edge) -> bool + 'g>>;

/// Walks everything reachable from `start` (or the first vertex).
///
/// The pending collection decides the order: a stack gives depth-first,
/// a queue breadth-first.
pub(crate) fn traverse<C, G, V>(
    graph: &G,
    skipper: &EdgeSkipper<'_>,
    visitor: &mut V,
    start: Option<&Vertex>,
) -> Result<()>
where
    C: TraversalCollection<Vertex>,
    G: VertexIterable + EdgeIterable + ?Sized,
    V: Visitor + ?Sized,
{
    let first = graph.vertices().next().ok_or(Error::EmptyGraph)?;
    let start = match start {
        Some(v) => {
            // fails for vertices outside the graph before any callback runs
            graph.out_edge_iterator(v)?;
            v.clone()
        }
        None => first,
    };
    debug!(start = %start, "start traversal");
    let directed = graph.is_directed();

    let mut pending = C::default();
    visitor.set_status(&start, Status::Registered);
    visitor.initialize_vertex(&start);
    pending.push(start);

    while let Some(vertex) = pending.pop() {
        let mut has_edges = false;
        for edge in graph.out_edge_iterator(&vertex)? {
            has_edges = true;
            if skipper.as_ref().map_or(false, |skip| skip(&edge)) {
                continue;
            }
            visitor.examine_edge(&edge);
            let target = if directed {
                edge.target_vertex()
            } else {
                edge.opposite(&vertex)
            };
            let Some(target) = target else {
                continue;
            };
            match visitor.status(&target) {
                Status::Unknown => {
                    visitor.tree_edge(&edge);
                    visitor.discover_vertex(&target);
                    visitor.set_status(&target, Status::Registered);
                    pending.push(target);
                }
                Status::Registered => visitor.back_edge(&edge),
                Status::Visited => visitor.forward_or_cross_edge(&edge),
            }
        }
        visitor.set_status(&vertex, Status::Visited);
        if !has_edges {
            visitor.leaf_vertex(&vertex);
        }
        visitor.finish_vertex(&vertex);
    }
    Ok(())
}
