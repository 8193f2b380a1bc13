//! Entity record type

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Entity construction error
#[derive(Debug, Error)]
#[error("Invalid record payload for '{entity_type}': {reason}")]
pub struct EntityError {
    entity_type: String,
    reason: String,
}

/// A business record: an entity-type tag plus attribute values.
///
/// Attributes are stored as raw JSON values; the meaning of each value
/// is defined by metadata, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity-type name (e.g. "Lead", "Account")
    entity_type: String,
    /// Attribute values keyed by field name
    attributes: Map<String, Value>,
}

impl Entity {
    /// Creates an empty entity of the given type.
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            attributes: Map::new(),
        }
    }

    /// Builds an entity from a JSON record payload.
    ///
    /// The payload must be a JSON object; each top-level key becomes an
    /// attribute.
    pub fn from_value(entity_type: impl Into<String>, value: Value) -> Result<Self, EntityError> {
        let entity_type = entity_type.into();

        let attributes = match value {
            Value::Object(map) => map,
            other => {
                return Err(EntityError {
                    entity_type,
                    reason: format!(
                        "record payload must be an object, got {}",
                        json_type_name(&other)
                    ),
                });
            }
        };

        Ok(Self {
            entity_type,
            attributes,
        })
    }

    /// Returns the entity-type name.
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Returns the value of an attribute, if set.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field)
    }

    /// Returns whether an attribute is set (a stored null counts as set).
    pub fn has(&self, field: &str) -> bool {
        self.attributes.contains_key(field)
    }

    /// Sets an attribute value.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.attributes.insert(field.into(), value);
    }

    /// Returns all attributes.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
