use crate::element::{Edge, Vertex};

/// Cursor-style iteration over graph elements.
///
/// [ElementCursor::advance] moves to the next element and tells whether there is one;
/// [ElementCursor::current] returns the element most recently advanced to.
/// A skip predicate hides elements without the caller noticing,
/// which is how subgraphs hide disabled elements.
pub struct ElementCursor<'a, T> {
    source: Box<dyn Iterator<Item = T> + 'a>,
    current: Option<T>,
    skip: Option<Box<dyn Fn(&T) -> bool + 'a>>,
}

pub type VertexIterator<'a> = ElementCursor<'a, Vertex>;
pub type EdgeIterator<'a> = ElementCursor<'a, Edge>;

impl<'a, T: 'a> ElementCursor<'a, T> {
    pub fn new(source: Box<dyn Iterator<Item = T> + 'a>) -> Self {
        Self {
            source,
            current: None,
            skip: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(Box::new(std::iter::empty()))
    }

    /// Installs a skip predicate. It is or-ed with a previously installed one.
    pub fn set_skip<F>(&mut self, skip: F)
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.skip = Some(match self.skip.take() {
            None => Box::new(skip),
            Some(prev) => Box::new(move |x: &T| prev(x) || skip(x)),
        });
    }

    pub fn with_skip<F>(mut self, skip: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        self.set_skip(skip);
        self
    }

    pub fn advance(&mut self) -> bool {
        for x in self.source.by_ref() {
            if let Some(skip) = &self.skip {
                if skip(&x) {
                    continue;
                }
            }
            self.current = Some(x);
            return true;
        }
        self.current = None;
        false
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

/// Adapts an [ElementCursor] to [Iterator].
pub struct Elements<'a, T>(ElementCursor<'a, T>);

impl<'a, T: Clone + 'a> Iterator for Elements<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.0.advance() {
            self.0.current().cloned()
        } else {
            None
        }
    }
}

impl<'a, T: Clone + 'a> IntoIterator for ElementCursor<'a, T> {
    type Item = T;
    type IntoIter = Elements<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Elements(self)
    }
}
