use crate::element::GraphElement;
use crate::graph::*;

/// Lists every vertex with its uuid, followed by its outgoing edges.
pub struct GraphDebug<'a, G>
where
    G: VertexIterable + EdgeIterable + ?Sized,
{
    graph: &'a G,
    base_indent: usize,
    step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: VertexIterable + EdgeIterable + ?Sized,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            base_indent: 0,
            step: 2,
        }
    }

    pub fn indent(mut self, base: usize, step: usize) -> Self {
        self.base_indent = base;
        self.step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let width = self.base_indent + self.step * level;
        write!(f, "{:width$}", "")
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: VertexIterable + EdgeIterable + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{} <{}>", v, v.uuid())?;
            let outs = match self.graph.out_edge_iterator(&v) {
                Ok(outs) => outs,
                Err(_) => continue,
            };
            for e in outs {
                let other = e.opposite(&v).map(|x| x.to_string()).unwrap_or_default();
                self.display_indent(f, 1)?;
                writeln!(f, "--{}-> {}", e, other)?;
            }
        }
        Ok(())
    }
}
