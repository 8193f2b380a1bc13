//! Metadata subsystem
//!
//! Metadata is a JSON tree with two well-known roots:
//!
//! - `fields.<fieldType>` — per-field-type configuration
//!   (`mandatoryValidationList`, `validator`)
//! - `entityDefs.<entityType>.fields.<field>` — per-field definitions
//!   (`type`, per-rule values, `validator` override)
//!
//! The store holds the tree in memory and answers key-path lookups;
//! the loader populates it from a metadata directory at startup.

mod errors;
mod loader;
mod store;

pub use errors::{MetadataError, MetadataResult};
pub use loader::MetadataLoader;
pub use store::MetadataStore;
