use std::any::Any;
use std::fmt;

/// Capabilities of the payload carried by a vertex or an edge.
///
/// A kind decides the class name an element reports and how the element is
/// duplicated. Concrete kinds are registered by name in a
/// [TypeManager](super::TypeManager) and looked up by
/// [AttributeManager](crate::attribute::AttributeManager).
pub trait Kind: fmt::Debug {
    fn class_name(&self) -> &str;
    fn clone_kind(&self) -> Box<dyn Kind>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Free-form text appended to the label when printing an element.
    fn describe(&self) -> String {
        String::new()
    }
}

impl<'k> dyn Kind + 'k {
    pub fn downcast_ref<T: Kind + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Kind + 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }

    pub fn is<T: Kind + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl Clone for Box<dyn Kind> {
    fn clone(&self) -> Self {
        self.clone_kind()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainVertex;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainEdge;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedVertex {
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedEdge {
    pub weight: f64,
}

impl PlainVertex {
    pub const CLASS_NAME: &'static str = "Vertex";
}

impl PlainEdge {
    pub const CLASS_NAME: &'static str = "Edge";
}

impl WeightedVertex {
    pub const CLASS_NAME: &'static str = "WeightedVertex";

    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl WeightedEdge {
    pub const CLASS_NAME: &'static str = "WeightedEdge";

    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

macro_rules! impl_kind {
    ($t:ty) => {
        impl Kind for $t {
            fn class_name(&self) -> &str {
                <$t>::CLASS_NAME
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
    };
}

impl_kind!(PlainVertex);
impl_kind!(PlainEdge);

impl Kind for WeightedVertex {
    fn class_name(&self) -> &str {
        Self::CLASS_NAME
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

    fn describe(&self) -> String {
        format!("weight: {}", self.weight)
    }
}

impl Kind for WeightedEdge {
    fn class_name(&self) -> &str {
        Self::CLASS_NAME
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

    fn describe(&self) -> String {
        format!("weight: {}", self.weight)
    }
}
