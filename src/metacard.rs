//! Metacard attribute metadata.
//!
//! The backend describes every searchable attribute with a declared type
//! and a multivalued flag. [`MetacardDefinitions`] caches that metadata so
//! the filter construction layer can tell a location attribute (which
//! takes a drawn geometry model) from a plain one (which takes a scalar
//! value).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attribute types the backend declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AttributeType {
    String,
    Xml,
    Date,
    Boolean,
    Location,
    Geometry,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Binary,
    Object,
}

impl AttributeType {
    /// Location-valued attributes take geometry filters instead of plain
    /// comparisons.
    pub fn is_location(self) -> bool {
        matches!(self, AttributeType::Location | AttributeType::Geometry)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    #[serde(default)]
    pub multivalued: bool,
}

impl AttributeDefinition {
    pub fn new(attribute_type: AttributeType) -> Self {
        Self {
            attribute_type,
            multivalued: false,
        }
    }

    pub fn multivalued(mut self) -> Self {
        self.multivalued = true;
        self
    }
}

/// Cache of attribute metadata keyed by attribute name, deserialized from
/// the backend's `{name: {type, multivalued}}` JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetacardDefinitions {
    attributes: HashMap<String, AttributeDefinition>,
}

impl MetacardDefinitions {
    /// Creates an empty definitions cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads definitions from the backend's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Registers or replaces one attribute definition.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        definition: AttributeDefinition,
    ) -> &mut Self {
        self.attributes.insert(name.into(), definition);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.get(name)
    }

    pub fn attribute_type(&self, name: &str) -> Option<AttributeType> {
        self.get(name).map(|definition| definition.attribute_type)
    }

    /// True when the named attribute is declared LOCATION or GEOMETRY.
    /// Unknown attributes are not locations.
    pub fn is_location_attribute(&self, name: &str) -> bool {
        self.attribute_type(name)
            .map(AttributeType::is_location)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
