use super::traversal::{traverse, EdgeSkipper, Queue};
use super::Visitor;
use crate::element::{Edge, Vertex};
use crate::graph::{EdgeIterable, VertexIterable};
use crate::Result;

/// Breadth-first traversal over anything iterable, graphs and subgraphs alike.
///
/// Only vertices reachable from the start vertex are visited.
/// On directed graphs edges are followed from source to target.
pub struct Bfs<'g, G: ?Sized> {
    graph: &'g G,
    skipper: EdgeSkipper<'g>,
}

impl<'g, G> Bfs<'g, G>
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
        traverse::<Queue<Vertex>, _, _>(self.graph, &self.skipper, visitor, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::dfs::tests::diamond;
    use crate::algorithm::visitor::tests::Recorder;
    use crate::algorithm::Status;
    use crate::element::Registry;
    use crate::graph::*;
    use crate::Error;

    #[test]
    fn directed_classification() {
        crate::init_test_logging();
        let registry = Registry::new();
        let (g, vs) = diamond(&registry, Box::new(DirectedGraph::new(&registry)));
        let mut recorder = Recorder::default();
        Bfs::new(g.as_ref()).run(&mut recorder, Some(&vs[0])).unwrap();
        assert_eq!(recorder.calls("tree"), 3);
        assert_eq!(recorder.calls("back"), 1);
        assert_eq!(recorder.calls("forward_or_cross"), 0);
        assert_eq!(recorder.calls("leaf"), 1);
        assert_eq!(recorder.discovered[3], "v3");
        for v in vs.iter() {
            assert_eq!(recorder.status(v), Status::Visited);
        }
    }

    #[test]
    fn undirected_reaches_everything() {
        let registry = Registry::new();
        let (g, vs) = diamond(&registry, Box::new(UndirectedGraph::new(&registry)));
        let mut recorder = Recorder::default();
        Bfs::new(g.as_ref()).run(&mut recorder, Some(&vs[3])).unwrap();
        for v in vs.iter() {
            assert_eq!(recorder.status(v), Status::Visited);
        }
        assert_eq!(recorder.calls("tree"), 3);
    }

    #[test]
    fn empty_graph() {
        let registry = Registry::new();
        let g = TreeGraph::new(&registry);
        let mut recorder = Recorder::default();
        assert!(matches!(
            Bfs::new(&g).run(&mut recorder, None),
            Err(Error::EmptyGraph)
        ));
        let v0 = Vertex::new("v0", &registry);
        assert!(matches!(
            Bfs::new(&g).run(&mut recorder, Some(&v0)),
            Err(Error::EmptyGraph)
        ));
        assert!(recorder.calls.is_empty());
    }
}
