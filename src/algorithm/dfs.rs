use super::traversal::{traverse, EdgeSkipper, Stack};
use super::Visitor;
use crate::element::{Edge, Vertex};
use crate::graph::{EdgeIterable, VertexIterable};
use crate::Result;

/// Depth-first traversal over anything iterable, graphs and subgraphs alike.
///
/// Only vertices reachable from the start vertex are visited.
/// On directed graphs edges are followed from source to target.
pub struct Dfs<'g, G: ?Sized> {
    graph: &'g G,
    skipper: EdgeSkipper<'g>,
}

impl<'g, G> Dfs<'g, G>
where
    G: VertexIterable + EdgeIterable + ?Sized,
{
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            skipper: None,
        }
    }

    /// Edges matching `skipper` are neither examined nor followed.
    pub fn skip_edges<F>(mut self, skipper: F) -> Self
    where
        F: Fn(&Edge) -> bool + 'g,
    {
        self.skipper = Some(Box::new(skipper));
        self
    }

    /// Starts at `start` or, without one, at the first vertex of the graph.
    pub fn run<V: Visitor + ?Sized>(&self, visitor: &mut V, start: Option<&Vertex>) -> Result<()> {
        traverse::<Stack<Vertex>, _, _>(self.graph, &self.skipper, visitor, start)
    }
}
