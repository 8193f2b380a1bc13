//! Field validation subsystem
//!
//! The manager answers one question: does a field's current value
//! satisfy a validation rule? Rule logic lives in pluggable
//! [`FieldValidator`] implementations resolved from metadata through a
//! registry and cached per (entity type, field) pair.
//!
//! # Design
//!
//! - Unresolved lookups (no field type, no validator, no rule handler)
//!   degrade to "pass", never to an error
//! - Rules outside a field type's mandatory list are skipped when
//!   unconfigured
//! - Validator instances are resolved once per (entity type, field)
//!   and reused for the manager's lifetime

mod manager;
mod registry;
mod validator;

pub use manager::FieldValidationManager;
pub use registry::{default_validator_id, RegistryError, RegistryResult, ValidatorFactory, ValidatorRegistry};
pub use validator::FieldValidator;
