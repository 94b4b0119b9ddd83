//! Named attributes of element kinds, with callbacks to turn them into text and back.
//!
//! Only kinds activated in an [AttributeManager] carry attributes.
//! Elements dispatch on their class name, so the same manager works for every
//! graph and backend the elements live in.

use crate::element::{GraphElement, Kind, WeightedEdge, WeightedVertex};
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

pub type SerializeFn = fn(&dyn Kind) -> Result<String>;
pub type DeserializeFn = fn(&mut dyn Kind, &str) -> Result<()>;
pub type PrintFn = fn(&dyn Kind) -> Result<String>;

#[derive(Clone, Copy)]
pub struct AttributeCallbacks {
    pub serialize: SerializeFn,
    pub deserialize: DeserializeFn,
    pub print: PrintFn,
}

#[derive(Default)]
pub struct AttributeManager {
    types: BTreeMap<String, BTreeMap<String, AttributeCallbacks>>,
}

impl AttributeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager knowing the `weight` of [WeightedVertex] and [WeightedEdge].
    pub fn with_builtin_attributes() -> Self {
        let mut res = Self::new();
        let weight = AttributeCallbacks {
            serialize: serialize_weight,
            deserialize: deserialize_weight,
            print: print_weight,
        };
        for type_name in [WeightedVertex::CLASS_NAME, WeightedEdge::CLASS_NAME] {
            res.types
                .entry(type_name.to_string())
                .or_default()
                .insert("weight".to_string(), weight);
        }
        res
    }

    /// Allows attributes on `type_name`. Activating twice keeps the registered attributes.
    pub fn activate_attributed_type(&mut self, type_name: &str) {
        debug!(type_name, "activate attributed type");
        self.types.entry(type_name.to_string()).or_default();
    }

    pub fn is_activated(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Registers `attribute` on an activated type, replacing earlier callbacks.
    pub fn register_attribute(
        &mut self,
        type_name: &str,
        attribute: &str,
        callbacks: AttributeCallbacks,
    ) -> Result<()> {
        let attributes = self
            .types
            .get_mut(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;
        debug!(type_name, attribute, "register attribute");
        attributes.insert(attribute.to_string(), callbacks);
        Ok(())
    }

    pub fn attribute_names(&self, type_name: &str) -> Result<Vec<String>> {
        let attributes = self
            .types
            .get(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;
        Ok(attributes.keys().cloned().collect())
    }

    pub fn callbacks(&self, type_name: &str, attribute: &str) -> Result<AttributeCallbacks> {
        let attributes = self
            .types
            .get(type_name)
            .ok_or_else(|| Error::UnknownType(type_name.to_string()))?;
        attributes
            .get(attribute)
            .copied()
            .ok_or_else(|| Error::UnknownAttribute {
                type_name: type_name.to_string(),
                attribute: attribute.to_string(),
            })
    }

    pub fn serialize<E: GraphElement + ?Sized>(&self, element: &E, attribute: &str) -> Result<String> {
        let callbacks = self.callbacks(&element.class_name(), attribute)?;
        let kind = element.kind();
        (callbacks.serialize)(&**kind)
    }

    /// Parses `text` into `attribute` of `element`.
    pub fn deserialize<E: GraphElement + ?Sized>(
        &self,
        element: &E,
        attribute: &str,
        text: &str,
    ) -> Result<()> {
        let callbacks = self.callbacks(&element.class_name(), attribute)?;
        let mut kind = element.kind_mut();
        (callbacks.deserialize)(&mut **kind, text)
    }

    pub fn print<E: GraphElement + ?Sized>(&self, element: &E, attribute: &str) -> Result<String> {
        let callbacks = self.callbacks(&element.class_name(), attribute)?;
        let kind = element.kind();
        (callbacks.print)(&**kind)
    }
}

fn weight_of(kind: &dyn Kind) -> Result<f64> {
    if let Some(k) = kind.downcast_ref::<WeightedEdge>() {
        Ok(k.weight)
    } else if let Some(k) = kind.downcast_ref::<WeightedVertex>() {
        Ok(k.weight)
    } else {
        Err(Error::KindMismatch(kind.class_name().to_string()))
    }
}

fn serialize_weight(kind: &dyn Kind) -> Result<String> {
    Ok(weight_of(kind)?.to_string())
}

fn print_weight(kind: &dyn Kind) -> Result<String> {
    Ok(format!("weight: {}", weight_of(kind)?))
}

fn deserialize_weight(kind: &mut dyn Kind, text: &str) -> Result<()> {
    let weight = text
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidAttributeValue {
            attribute: "weight".to_string(),
            value: text.to_string(),
        })?;
    let class_name = kind.class_name().to_string();
    if let Some(k) = kind.downcast_mut::<WeightedEdge>() {
        k.weight = weight;
    } else if let Some(k) = kind.downcast_mut::<WeightedVertex>() {
        k.weight = weight;
    } else {
        return Err(Error::KindMismatch(class_name));
    }
    Ok(())
}
