//! fieldcheck - metadata-driven field validation for business entities
//!
//! Given an entity, a field name, and a validation rule type, the
//! [`validation::FieldValidationManager`] decides whether the field's
//! current value satisfies the rule. Rule logic lives in pluggable
//! validators resolved from metadata and cached per
//! (entity type, field) pair.

pub mod cli;
pub mod entity;
pub mod metadata;
pub mod observability;
pub mod validation;
