use super::*;
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Prototypes of vertex and edge kinds, looked up by class name.
///
/// `TypeManager::default()` knows the built-in kinds.
pub struct TypeManager {
    vertex_types: BTreeMap<String, Box<dyn Kind>>,
    edge_types: BTreeMap<String, Box<dyn Kind>>,
}

impl Default for TypeManager {
    fn default() -> Self {
        let mut res = Self::empty();
        res.register_vertex_type(Box::new(PlainVertex));
        res.register_vertex_type(Box::new(WeightedVertex::default()));
        res.register_edge_type(Box::new(PlainEdge));
        res.register_edge_type(Box::new(WeightedEdge::default()));
        res
    }
}

impl TypeManager {
    pub fn empty() -> Self {
        Self {
            vertex_types: BTreeMap::new(),
            edge_types: BTreeMap::new(),
        }
    }

    /// Registers `prototype` under its class name, replacing an earlier one.
    pub fn register_vertex_type(&mut self, prototype: Box<dyn Kind>) {
        let name = prototype.class_name().to_string();
        tracing::debug!(name = %name, "registered vertex type");
        self.vertex_types.insert(name, prototype);
    }

    pub fn register_edge_type(&mut self, prototype: Box<dyn Kind>) {
        let name = prototype.class_name().to_string();
        tracing::debug!(name = %name, "registered edge type");
        self.edge_types.insert(name, prototype);
    }

    pub fn vertex_types(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.vertex_types.keys().map(|x| x.as_str()))
    }

    pub fn edge_types(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.edge_types.keys().map(|x| x.as_str()))
    }

    pub fn create_vertex(&self, type_name: &str, label: &str, registry: &Registry) -> Result<Vertex> {
        let prototype = self
            .vertex_types
            .get(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;
        Ok(Vertex::with_kind(label, prototype.clone_kind(), registry))
    }

    /// Creates an edge without endpoints.
    pub fn create_edge(&self, type_name: &str, label: &str, registry: &Registry) -> Result<Edge> {
        let prototype = self
            .edge_types
            .get(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;
        Ok(Edge::with_kind(label, prototype.clone_kind(), registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    #[derive(Debug, Clone)]
    struct Cluster {
        members: usize,
    }

    impl Kind for Cluster {
        fn class_name(&self) -> &str {
            "Cluster"
        }

        fn clone_kind(&self) -> Box<dyn Kind> {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn builtin_types() {
        let manager = TypeManager::default();
        assert_eq!(
            manager.vertex_types().collect::<Vec<_>>(),
            vec!["Vertex", "WeightedVertex"]
        );
        assert_eq!(
            manager.edge_types().collect::<Vec<_>>(),
            vec!["Edge", "WeightedEdge"]
        );
    }

    #[test]
    fn create_from_prototype() {
        let registry = Registry::new();
        let mut manager = TypeManager::default();
        manager.register_vertex_type(Box::new(Cluster { members: 4 }));
        let v = manager.create_vertex("Cluster", "c0", &registry).unwrap();
        assert_eq!(v.class_name(), "Cluster");
        assert_eq!(v.kind().downcast_ref::<Cluster>().unwrap().members, 4);
        v.kind_mut().downcast_mut::<Cluster>().unwrap().members = 5;
        let w = manager.create_vertex("Cluster", "c1", &registry).unwrap();
        assert_eq!(w.kind().downcast_ref::<Cluster>().unwrap().members, 4);

        let e = manager.create_edge("WeightedEdge", "e", &registry).unwrap();
        assert!(e.source_vertex().is_none());
        assert!(matches!(
            manager.create_edge("Cluster", "e", &registry),
            Err(Error::UnknownType(_))
        ));
    }
}
