use crate::element::{Edge, GraphId, Vertex};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Added,
    Removed,
}

/// Gets told about every vertex and edge a graph adds or removes.
///
/// Notification happens after the graph finished the change.
/// Observers take `&self`; keep mutable state in a `RefCell`.
pub trait GraphObserver {
    fn notify_vertex(&self, vertex: &Vertex, event: EventType, graph: GraphId);
    fn notify_edge(&self, edge: &Edge, event: EventType, graph: GraphId);
}

pub(crate) fn same_observer(a: &Rc<dyn GraphObserver>, b: &Rc<dyn GraphObserver>) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}
