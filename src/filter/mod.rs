//! Composable predicates over graph elements.
//!
//! A [Filter] matches an element if its own predicate does or if any of its
//! child filters does. [SubGraph::apply_filters](crate::graph::SubGraph::apply_filters)
//! disables whatever a filter matches.

use crate::{Error, Result};
use std::fmt;

mod regex_filter;
pub use self::regex_filter::*;

/// A named predicate with child filters, evaluated as a logical or.
pub struct Filter<T> {
    name: String,
    predicate: Box<dyn Fn(&T) -> bool>,
    children: Vec<Filter<T>>,
}

impl<T> Filter<T> {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            children: vec![],
        }
    }

    /// Matches nothing, so nothing gets filtered out.
    pub fn permit_all() -> Self {
        Self::new("permit-all", |_| false)
    }

    /// Matches everything.
    pub fn deny_all() -> Self {
        Self::new("deny-all", |_| true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The filter's own predicate, ignoring children.
    pub fn apply(&self, x: &T) -> bool {
        (self.predicate)(x)
    }

    pub fn evaluate(&self, x: &T) -> bool {
        self.apply(x) || self.children.iter().any(|c| c.evaluate(x))
    }

    /// Inserts a child at `position`, or appends it. Returns where it went.
    pub fn add(&mut self, filter: Filter<T>, position: Option<usize>) -> Result<usize> {
        match position {
            None => {
                self.children.push(filter);
                Ok(self.children.len() - 1)
            }
            Some(position) if position <= self.children.len() => {
                self.children.insert(position, filter);
                Ok(position)
            }
            Some(position) => Err(Error::FilterPosition {
                position,
                len: self.children.len(),
            }),
        }
    }

    /// Swaps the child at `position` for `filter` and hands back the old one.
    pub fn replace(&mut self, filter: Filter<T>, position: usize) -> Result<Filter<T>> {
        let len = self.children.len();
        let slot = self
            .children
            .get_mut(position)
            .ok_or(Error::FilterPosition { position, len })?;
        Ok(std::mem::replace(slot, filter))
    }

    pub fn remove_at(&mut self, position: usize) -> Result<Filter<T>> {
        if position >= self.children.len() {
            return Err(Error::FilterPosition {
                position,
                len: self.children.len(),
            });
        }
        Ok(self.children.remove(position))
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> impl Iterator<Item = &Filter<T>> + '_ {
        self.children.iter()
    }
}

impl<T> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.children.is_empty() {
            write!(f, "(")?;
            for (i, c) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", c)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter({})", self)
    }
}
