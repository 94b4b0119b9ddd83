use super::*;
use crate::{Error, Result};
use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Weak;

/// State shared by every graph element.
///
/// The association map records, per graph, the local id the element has
/// inside that graph. Only graphs modify it.
pub struct ElementCore {
    uuid: ElementUuid,
    label: RefCell<String>,
    kind: RefCell<Box<dyn Kind>>,
    associations: RefCell<BTreeMap<GraphId, ElementId>>,
    registry: Weak<RegistryInner>,
}

impl ElementCore {
    pub(crate) fn new(label: String, kind: Box<dyn Kind>, registry: Weak<RegistryInner>) -> Self {
        Self {
            uuid: ElementUuid::generate(),
            label: RefCell::new(label),
            kind: RefCell::new(kind),
            associations: RefCell::new(BTreeMap::new()),
            registry,
        }
    }

    pub(crate) fn uuid(&self) -> ElementUuid {
        self.uuid
    }

    pub(crate) fn registry(&self) -> &Weak<RegistryInner> {
        &self.registry
    }

    pub(crate) fn associate(&self, graph: GraphId, id: ElementId) -> Result<()> {
        let mut associations = self.associations.borrow_mut();
        if associations.contains_key(&graph) {
            return Err(Error::AlreadyAssociated {
                graph,
                uuid: self.uuid,
            });
        }
        associations.insert(graph, id);
        Ok(())
    }

    pub(crate) fn disassociate(&self, graph: GraphId) -> Result<ElementId> {
        self.associations
            .borrow_mut()
            .remove(&graph)
            .ok_or(Error::NotAssociated {
                graph,
                uuid: self.uuid,
            })
    }

    /// Label and kind of a fresh element copied from this one.
    pub(crate) fn duplicate_parts(&self) -> (String, Box<dyn Kind>) {
        (self.label.borrow().clone(), self.kind.borrow().clone_kind())
    }
}

impl fmt::Debug for ElementCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementCore")
            .field("uuid", &self.uuid)
            .field("label", &self.label.borrow())
            .field("kind", &self.kind.borrow())
            .field("associations", &self.associations.borrow())
            .finish()
    }
}

/// Identity and graph membership of vertices and edges.
pub trait GraphElement: fmt::Display {
    #[doc(hidden)]
    fn core(&self) -> &ElementCore;

    fn uuid(&self) -> ElementUuid {
        self.core().uuid
    }

    fn label(&self) -> String {
        self.core().label.borrow().clone()
    }

    fn set_label(&self, label: &str) {
        *self.core().label.borrow_mut() = label.to_string();
    }

    fn kind(&self) -> Ref<'_, Box<dyn Kind>> {
        self.core().kind.borrow()
    }

    fn kind_mut(&self) -> RefMut<'_, Box<dyn Kind>> {
        self.core().kind.borrow_mut()
    }

    fn set_kind(&self, kind: Box<dyn Kind>) {
        *self.core().kind.borrow_mut() = kind;
    }

    fn class_name(&self) -> String {
        self.core().kind.borrow().class_name().to_string()
    }

    fn associated(&self, graph: GraphId) -> bool {
        self.core().associations.borrow().contains_key(&graph)
    }

    /// Local id of this element inside `graph`.
    fn id(&self, graph: GraphId) -> Result<ElementId> {
        let core = self.core();
        core.associations
            .borrow()
            .get(&graph)
            .copied()
            .ok_or(Error::NotAssociated {
                graph,
                uuid: core.uuid,
            })
    }

    fn graph_associations(&self) -> Vec<GraphId> {
        self.core().associations.borrow().keys().copied().collect()
    }

    /// Renders as `[graph:id] display`, with `-` as id when unassociated.
    fn to_prefixed_string(&self, graph: GraphId) -> String {
        match self.id(graph) {
            Ok(id) => format!("[{}:{}] {}", graph, id, self),
            Err(_) => format!("[{}:-] {}", graph, self),
        }
    }
}
