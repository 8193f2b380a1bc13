//! Field validation manager

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};

use crate::entity::Entity;
use crate::metadata::MetadataStore;
use crate::observability::Logger;

use super::registry::{default_validator_id, ValidatorRegistry};
use super::validator::FieldValidator;

/// Metadata parameter naming a field's declared type.
const TYPE_PARAM: &str = "type";

/// Metadata parameter naming a validator id override.
const VALIDATOR_PARAM: &str = "validator";

/// Per-field-type list of rule types that always run.
const MANDATORY_LIST_PARAM: &str = "mandatoryValidationList";

/// Dispatches field validation rules to per-field-type validators.
///
/// For each `(entity type, field)` pair the manager resolves a
/// validator once, through metadata and the registry, and caches the
/// outcome (including "no validator") for its own lifetime. The cache
/// is never evicted; metadata and the validator set are fixed at
/// startup.
///
/// `check` never errors: every unresolved lookup degrades to a pass,
/// and the only `false` results come from a validator's verdict.
pub struct FieldValidationManager {
    metadata: Arc<MetadataStore>,
    registry: Arc<ValidatorRegistry>,
    checker_cache: RwLock<HashMap<(String, String), Option<Arc<dyn FieldValidator>>>>,
}

impl FieldValidationManager {
    /// Creates a manager over a metadata store and a validator registry.
    pub fn new(metadata: Arc<MetadataStore>, registry: Arc<ValidatorRegistry>) -> Self {
        Self {
            metadata,
            registry,
            checker_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Checks one validation rule for one field of an entity.
    ///
    /// `data` is the raw input payload the entity was populated from;
    /// when absent, raw checks run against an empty object.
    ///
    /// Returns `true` when the rule holds or does not apply, `false`
    /// only on a validator's negative verdict.
    pub fn check(&self, entity: &Entity, field: &str, rule: &str, data: Option<&Value>) -> bool {
        let entity_type = entity.entity_type();

        let field_type = self
            .metadata
            .entity_type_field_param(entity_type, field, TYPE_PARAM)
            .and_then(Value::as_str)
            .unwrap_or_default();

        let null = Value::Null;
        let rule_value = self
            .metadata
            .entity_type_field_param(entity_type, field, rule)
            .unwrap_or(&null);

        // Rules outside the field type's mandatory list only run when
        // a value is configured for them.
        let mandatory = self
            .metadata
            .get_string_list(&["fields", field_type, MANDATORY_LIST_PARAM]);

        if !mandatory.iter().any(|m| m == rule)
            && (rule_value.is_null() || *rule_value == Value::Bool(false))
        {
            return true;
        }

        if !self.process_field_check(entity_type, field, field_type, rule, entity, rule_value) {
            return false;
        }

        let empty = Value::Object(Map::new());
        let data = data.unwrap_or(&empty);

        if !self.process_field_raw_check(entity_type, field, field_type, rule, data, rule_value) {
            return false;
        }

        true
    }

    /// Runs the entity-based phase of a rule check.
    fn process_field_check(
        &self,
        entity_type: &str,
        field: &str,
        field_type: &str,
        rule: &str,
        entity: &Entity,
        rule_value: &Value,
    ) -> bool {
        match self.field_type_checker(entity_type, field, field_type) {
            Some(checker) => checker.check(rule, entity, field, rule_value).unwrap_or(true),
            None => true,
        }
    }

    /// Runs the raw-data phase of a rule check.
    fn process_field_raw_check(
        &self,
        entity_type: &str,
        field: &str,
        field_type: &str,
        rule: &str,
        data: &Value,
        rule_value: &Value,
    ) -> bool {
        match self.field_type_checker(entity_type, field, field_type) {
            Some(checker) => checker
                .raw_check(rule, data, field, rule_value)
                .unwrap_or(true),
            None => true,
        }
    }

    /// Returns the cached validator for a field, resolving on first use.
    ///
    /// A cached `None` means "no validator for this field" and is kept
    /// so the resolution is never retried.
    fn field_type_checker(
        &self,
        entity_type: &str,
        field: &str,
        field_type: &str,
    ) -> Option<Arc<dyn FieldValidator>> {
        let key = (entity_type.to_string(), field.to_string());

        if let Ok(cache) = self.checker_cache.read() {
            if let Some(entry) = cache.get(&key) {
                return entry.clone();
            }
        }

        let resolved = self.resolve_checker(entity_type, field, field_type);

        match self.checker_cache.write() {
            // Re-check under the write lock; another thread may have
            // resolved the same key in between.
            Ok(mut cache) => cache.entry(key).or_insert_with(|| resolved.clone()).clone(),
            // Poisoned lock: degrade to uncached resolution.
            Err(_) => resolved,
        }
    }

    /// Resolves the validator id for a field and instantiates it.
    ///
    /// Resolution order: entity-level override, field-type default,
    /// registered convention id for the field type.
    fn resolve_checker(
        &self,
        entity_type: &str,
        field: &str,
        field_type: &str,
    ) -> Option<Arc<dyn FieldValidator>> {
        let id = self
            .metadata
            .entity_type_field_param(entity_type, field, VALIDATOR_PARAM)
            .and_then(Value::as_str)
            .or_else(|| {
                self.metadata
                    .get(&["fields", field_type, VALIDATOR_PARAM])
                    .and_then(Value::as_str)
            })
            .map(str::to_string)
            .or_else(|| {
                let conventional = default_validator_id(field_type);
                self.registry.contains(&conventional).then_some(conventional)
            });

        let id = match id {
            Some(id) => id,
            None => {
                Logger::trace(
                    "VALIDATOR_MISSING",
                    &[
                        ("entity_type", entity_type),
                        ("field", field),
                        ("field_type", field_type),
                    ],
                );
                return None;
            }
        };

        // A configured id the registry cannot create caches as "no
        // validator"; lookups degrade, they do not error.
        let validator = self.registry.create(&id);

        Logger::trace(
            if validator.is_some() {
                "VALIDATOR_RESOLVED"
            } else {
                "VALIDATOR_MISSING"
            },
            &[
                ("entity_type", entity_type),
                ("field", field),
                ("validator", id.as_str()),
            ],
        );

        validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct RejectAll;

    impl FieldValidator for RejectAll {
        fn check(&self, _rule: &str, _entity: &Entity, _field: &str, _value: &Value) -> Option<bool> {
            Some(false)
        }
    }

    fn manager_with(
        field_defs: Value,
        entity_defs: Value,
    ) -> (Arc<ValidatorRegistry>, FieldValidationManager) {
        let mut metadata = MetadataStore::new();
        metadata.set_field_defs("varchar", field_defs);
        metadata.set_entity_defs("Lead", entity_defs);

        let registry = Arc::new(ValidatorRegistry::new());
        let manager = FieldValidationManager::new(Arc::new(metadata), Arc::clone(&registry));
        (registry, manager)
    }

    #[test]
    fn test_unconfigured_optional_rule_passes() {
        let (registry, manager) = manager_with(
            json!({ "mandatoryValidationList": ["required"] }),
            json!({ "fields": { "email": { "type": "varchar" } } }),
        );
        registry
            .register("fieldValidators.varchar", || Arc::new(RejectAll))
            .unwrap();

        let entity = Entity::new("Lead");

        // "maxLength" is optional and unconfigured; the rejecting
        // validator must never be consulted.
        assert!(manager.check(&entity, "email", "maxLength", None));
    }

    #[test]
    fn test_mandatory_rule_dispatches_without_configured_value() {
        let (registry, manager) = manager_with(
            json!({ "mandatoryValidationList": ["required"] }),
            json!({ "fields": { "email": { "type": "varchar" } } }),
        );
        registry
            .register("fieldValidators.varchar", || Arc::new(RejectAll))
            .unwrap();

        let entity = Entity::new("Lead");
        assert!(!manager.check(&entity, "email", "required", None));
    }

    #[test]
    fn test_configured_false_skips_optional_rule() {
        let (registry, manager) = manager_with(
            json!({ "mandatoryValidationList": [] }),
            json!({ "fields": { "email": { "type": "varchar", "noEmptyString": false } } }),
        );
        registry
            .register("fieldValidators.varchar", || Arc::new(RejectAll))
            .unwrap();

        let entity = Entity::new("Lead");
        assert!(manager.check(&entity, "email", "noEmptyString", None));
    }

    #[test]
    fn test_no_validator_passes() {
        let (_registry, manager) = manager_with(
            json!({ "mandatoryValidationList": ["required"] }),
            json!({ "fields": { "email": { "type": "varchar" } } }),
        );

        let entity = Entity::new("Lead");
        assert!(manager.check(&entity, "email", "required", None));
    }

    #[test]
    fn test_unknown_field_passes() {
        let (_registry, manager) = manager_with(
            json!({ "mandatoryValidationList": ["required"] }),
            json!({ "fields": {} }),
        );

        let entity = Entity::new("Lead");
        assert!(manager.check(&entity, "nonexistent", "required", None));
    }

    #[test]
    fn test_entity_level_validator_override() {
        struct Marker;
        impl FieldValidator for Marker {
            fn check(&self, rule: &str, _e: &Entity, _f: &str, _v: &Value) -> Option<bool> {
                (rule == "required").then_some(false)
            }
        }

        let (registry, manager) = manager_with(
            json!({ "mandatoryValidationList": ["required"] }),
            json!({ "fields": { "email": { "type": "varchar", "validator": "custom.leadEmail" } } }),
        );
        registry.register("custom.leadEmail", || Arc::new(Marker)).unwrap();
        // The convention validator for varchar would pass; the
        // override must win.
        registry
            .register("fieldValidators.varchar", || {
                struct Pass;
                impl FieldValidator for Pass {
                    fn check(&self, _r: &str, _e: &Entity, _f: &str, _v: &Value) -> Option<bool> {
                        Some(true)
                    }
                }
                Arc::new(Pass)
            })
            .unwrap();

        let entity = Entity::new("Lead");
        assert!(!manager.check(&entity, "email", "required", None));
    }

    #[test]
    fn test_configured_but_unregistered_validator_passes() {
        let (_registry, manager) = manager_with(
            json!({ "mandatoryValidationList": ["required"], "validator": "not.registered" }),
            json!({ "fields": { "email": { "type": "varchar" } } }),
        );

        let entity = Entity::new("Lead");
        assert!(manager.check(&entity, "email", "required", None));
    }
}
