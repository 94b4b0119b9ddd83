use std::fmt;
use uuid::Uuid;

/// ID for graph instances, which are essentially `usize`.
///
/// They are handed out by a [Registry](super::Registry) from a process-wide
/// counter and never reused, not even across registries.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct GraphId(pub usize);

impl GraphId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Local ID of a vertex or an edge inside one graph.
///
/// Vertices and edges are numbered independently.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

/// A factory to generate `ElementId` uniquely.
#[derive(Debug, Clone)]
pub struct ElementIdFactory(usize);

impl Default for ElementIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> ElementId {
        let cur = self.0;
        self.0 += 1;
        ElementId(cur)
    }
}

impl ElementId {
    pub const MIN: ElementId = ElementId(0);
    pub const MAX: ElementId = ElementId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Process-wide identity of an element.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct ElementUuid(Uuid);

impl ElementUuid {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ElementUuid {
    fn from(x: Uuid) -> Self {
        Self(x)
    }
}

impl fmt::Display for ElementUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
