//! In-memory metadata store with key-path lookup

use serde_json::{Map, Value};

/// Path segment for the per-entity-type definitions root.
pub const ENTITY_DEFS: &str = "entityDefs";

/// Path segment for the per-field-type configuration root.
pub const FIELDS: &str = "fields";

/// In-memory metadata tree.
///
/// Lookups descend the tree by object keys; a miss at any depth
/// resolves to `None`, never to an error. The store is immutable once
/// setup is done and can be shared behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    root: Map<String, Value>,
}

impl MetadataStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a value by key path.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.root.get(*first)?;

        for segment in rest {
            current = current.as_object()?.get(*segment)?;
        }

        Some(current)
    }

    /// Looks up a list of strings by key path.
    ///
    /// A missing path, non-array value, or non-string element resolves
    /// to the empty list / is skipped.
    pub fn get_string_list(&self, path: &[&str]) -> Vec<String> {
        match self.get(path).and_then(Value::as_array) {
            Some(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns a named parameter of a field definition for an entity type.
    ///
    /// Equivalent to `get(["entityDefs", entity_type, "fields", field, param])`.
    pub fn entity_type_field_param(
        &self,
        entity_type: &str,
        field: &str,
        param: &str,
    ) -> Option<&Value> {
        self.get(&[ENTITY_DEFS, entity_type, FIELDS, field, param])
    }

    /// Returns the definitions object for one entity type, if present.
    pub fn entity_defs(&self, entity_type: &str) -> Option<&Value> {
        self.get(&[ENTITY_DEFS, entity_type])
    }

    /// Returns all entity-type names with definitions installed.
    pub fn entity_types(&self) -> Vec<&str> {
        self.subtree_keys(ENTITY_DEFS)
    }

    /// Returns all field-type names with configuration installed.
    pub fn field_types(&self) -> Vec<&str> {
        self.subtree_keys(FIELDS)
    }

    fn subtree_keys(&self, root: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .root
            .get(root)
            .and_then(Value::as_object)
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Installs the definitions object for one entity type.
    pub fn set_entity_defs(&mut self, entity_type: impl Into<String>, defs: Value) {
        self.set_subtree(ENTITY_DEFS, entity_type.into(), defs);
    }

    /// Installs the configuration object for one field type.
    pub fn set_field_defs(&mut self, field_type: impl Into<String>, defs: Value) {
        self.set_subtree(FIELDS, field_type.into(), defs);
    }

    fn set_subtree(&mut self, root: &str, name: String, value: Value) {
        let subtree = self
            .root
            .entry(root.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        if let Some(map) = subtree.as_object_mut() {
            map.insert(name, value);
        }
    }
}
