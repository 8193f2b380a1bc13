//! Validator registry
//!
//! Maps validator ids to factory functions. This replaces runtime
//! class probing and container-driven construction: everything a
//! deployment can validate with is registered here at startup.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use super::validator::FieldValidator;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry errors
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    #[error("Validator already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Factory function producing a validator instance.
pub type ValidatorFactory = Box<dyn Fn() -> Arc<dyn FieldValidator> + Send + Sync>;

/// Returns the default-convention validator id for a field type.
///
/// A field type with neither an entity-level nor a field-type-level
/// `validator` configured falls back to this id if it is registered.
pub fn default_validator_id(field_type: &str) -> String {
    format!("fieldValidators.{}", field_type)
}

/// Registry of validator factories keyed by id.
#[derive(Default)]
pub struct ValidatorRegistry {
    factories: RwLock<HashMap<String, ValidatorFactory>>,
}

impl ValidatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under an id.
    ///
    /// Duplicate registration is an error: a deployment's validator
    /// set is fixed, re-binding an id is a wiring bug.
    pub fn register<F>(&self, id: impl Into<String>, factory: F) -> RegistryResult<()>
    where
        F: Fn() -> Arc<dyn FieldValidator> + Send + Sync + 'static,
    {
        let id = id.into();

        let mut factories = self
            .factories
            .write()
            .map_err(|_| RegistryError::Internal("Lock poisoned".into()))?;

        if factories.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }

        factories.insert(id, Box::new(factory));
        Ok(())
    }

    /// Registers a validator instance shared by every resolution.
    pub fn register_instance(
        &self,
        id: impl Into<String>,
        validator: Arc<dyn FieldValidator>,
    ) -> RegistryResult<()> {
        self.register(id, move || Arc::clone(&validator))
    }

    /// Returns whether an id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.factories
            .read()
            .map(|factories| factories.contains_key(id))
            .unwrap_or(false)
    }

    /// Invokes the factory for an id.
    ///
    /// Unknown ids resolve to `None`; callers treat that as "no
    /// validator" rather than an error.
    pub fn create(&self, id: &str) -> Option<Arc<dyn FieldValidator>> {
        let factories = self.factories.read().ok()?;
        factories.get(id).map(|factory| factory())
    }

    /// Returns the number of registered ids.
    pub fn len(&self) -> usize {
        self.factories.read().map(|f| f.len()).unwrap_or(0)
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use serde_json::Value;

    struct AlwaysPass;

    impl FieldValidator for AlwaysPass {
        fn check(&self, _rule: &str, _entity: &Entity, _field: &str, _value: &Value) -> Option<bool> {
            Some(true)
        }
    }

    #[test]
    fn test_register_and_create() {
        let registry = ValidatorRegistry::new();
        registry
            .register("fieldValidators.varchar", || Arc::new(AlwaysPass))
            .unwrap();

        assert!(registry.contains("fieldValidators.varchar"));
        assert!(registry.create("fieldValidators.varchar").is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        let registry = ValidatorRegistry::new();
        assert!(!registry.contains("fieldValidators.enum"));
        assert!(registry.create("fieldValidators.enum").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let registry = ValidatorRegistry::new();
        registry.register("v", || Arc::new(AlwaysPass)).unwrap();

        let result = registry.register("v", || Arc::new(AlwaysPass));
        assert!(matches!(result, Err(RegistryError::AlreadyRegistered(id)) if id == "v"));
    }

    #[test]
    fn test_register_instance_shares_one_validator() {
        let registry = ValidatorRegistry::new();
        let instance: Arc<dyn FieldValidator> = Arc::new(AlwaysPass);
        registry
            .register_instance("v", Arc::clone(&instance))
            .unwrap();

        let a = registry.create("v").unwrap();
        let b = registry.create("v").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_default_validator_id_convention() {
        assert_eq!(default_validator_id("varchar"), "fieldValidators.varchar");
        assert_eq!(default_validator_id("enum"), "fieldValidators.enum");
    }
}
