use super::Filter;
use crate::element::{Edge, GraphElement, Vertex};
use crate::Result;
use regex::Regex;
use std::fmt;

/// What a regex filter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// The element's display text.
    Content,
    /// The element's class name.
    Class,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Content => f.write_str("content"),
            FilterKind::Class => f.write_str("class"),
        }
    }
}

fn whole_match(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("^(?:{})$", pattern))?)
}

fn regex_filter<T>(pattern: &str, kind: FilterKind, invert: bool) -> Result<Filter<T>>
where
    T: GraphElement + 'static,
{
    let re = whole_match(pattern)?;
    let name = format!(
        "regex '{}/{}/{}'",
        pattern,
        kind,
        if invert { "inverted" } else { "not-inverted" }
    );
    let filter = Filter::new(name, move |x: &T| {
        let matched = match kind {
            FilterKind::Content => re.is_match(&x.to_string()),
            FilterKind::Class => re.is_match(&x.class_name()),
        };
        matched != invert
    });
    Ok(filter)
}

/// Matches vertices whose whole text (or class name) matches `pattern`.
/// `invert` flips the outcome.
pub fn regex_vertex_filter(pattern: &str, kind: FilterKind, invert: bool) -> Result<Filter<Vertex>> {
    regex_filter(pattern, kind, invert)
}

pub fn regex_edge_filter(pattern: &str, kind: FilterKind, invert: bool) -> Result<Filter<Edge>> {
    regex_filter(pattern, kind, invert)
}

/// Matches an edge when the edge filter matches the edge and the vertex
/// filters match its source and target.
pub fn edge_context_filter(
    source: Filter<Vertex>,
    edge: Filter<Edge>,
    target: Filter<Vertex>,
) -> Filter<Edge> {
    let name = format!("context [{}] -[{}]-> [{}]", source, edge, target);
    Filter::new(name, move |e: &Edge| {
        let (s, t) = match e.endpoints() {
            Ok(x) => x,
            Err(_) => return false,
        };
        edge.evaluate(e) && source.evaluate(&s) && target.evaluate(&t)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::*;
    use crate::Error;

    #[test]
    fn content_and_class() {
        let registry = Registry::new();
        let plain = Vertex::new("robot-arm", &registry);
        let weighted = Vertex::with_kind("robot", Box::new(WeightedVertex::new(1.0)), &registry);

        let f = regex_vertex_filter("robot.*", FilterKind::Content, false).unwrap();
        assert!(f.evaluate(&plain));
        assert!(f.evaluate(&weighted));

        let f = regex_vertex_filter("robot", FilterKind::Content, false).unwrap();
        assert!(!f.evaluate(&plain));
        assert!(!f.evaluate(&weighted));

        let f = regex_vertex_filter("Weighted.*", FilterKind::Class, false).unwrap();
        assert!(!f.evaluate(&plain));
        assert!(f.evaluate(&weighted));

        let f = regex_vertex_filter("Weighted.*", FilterKind::Class, true).unwrap();
        assert!(f.evaluate(&plain));
        assert!(!f.evaluate(&weighted));
        assert_eq!(f.name(), "regex 'Weighted.*/class/inverted'");
    }

    #[test]
    fn bad_pattern() {
        assert!(matches!(
            regex_edge_filter("(", FilterKind::Content, false),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn edge_context() {
        let registry = Registry::new();
        let a = Vertex::new("sensor", &registry);
        let b = Vertex::new("planner", &registry);
        let ab = Edge::new(&a, &b, "data", &registry);
        let ba = Edge::new(&b, &a, "data", &registry);
        let f = edge_context_filter(
            regex_vertex_filter("sensor", FilterKind::Content, false).unwrap(),
            regex_edge_filter("data", FilterKind::Content, false).unwrap(),
            Filter::deny_all(),
        );
        assert!(f.evaluate(&ab));
        assert!(!f.evaluate(&ba));
        assert!(!f.evaluate(&Edge::unconnected("data", &registry)));
    }
}
