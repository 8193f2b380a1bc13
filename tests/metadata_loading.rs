//! Metadata loading tests
//!
//! End-to-end: write a metadata directory, load it, validate entities
//! against it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;

use fieldcheck::entity::Entity;
use fieldcheck::metadata::MetadataLoader;
use fieldcheck::validation::{
    default_validator_id, FieldValidationManager, FieldValidator, ValidatorRegistry,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn write_file(root: &Path, subdir: &str, name: &str, content: &str) {
    let dir = root.join(subdir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn write_lead_metadata(root: &Path) {
    write_file(
        root,
        "fields",
        "varchar.json",
        r#"{ "mandatoryValidationList": ["required"] }"#,
    );
    write_file(
        root,
        "entityDefs",
        "Lead.json",
        r#"{
            "fields": {
                "email": { "type": "varchar", "required": true },
                "phoneNumber": { "type": "varchar" }
            }
        }"#,
    );
}

struct RequiredValidator;

impl FieldValidator for RequiredValidator {
    fn check(&self, rule: &str, entity: &Entity, field: &str, _rule_value: &Value) -> Option<bool> {
        match rule {
            "required" => Some(matches!(
                entity.get(field),
                Some(Value::String(s)) if !s.is_empty()
            )),
            _ => None,
        }
    }
}

// =============================================================================
// Loader Behavior
// =============================================================================

#[test]
fn test_loaded_metadata_drives_validation() {
    let tmp = TempDir::new().unwrap();
    write_lead_metadata(tmp.path());

    let store = MetadataLoader::new(tmp.path()).load().unwrap();

    let registry = Arc::new(ValidatorRegistry::new());
    registry
        .register(default_validator_id("varchar"), || Arc::new(RequiredValidator))
        .unwrap();

    let manager = FieldValidationManager::new(Arc::new(store), registry);

    let mut entity = Entity::new("Lead");
    entity.set("email", json!("alice@example.com"));
    assert!(manager.check(&entity, "email", "required", None));

    let entity = Entity::new("Lead");
    assert!(!manager.check(&entity, "email", "required", None));
}

#[test]
fn test_empty_metadata_directory_loads() {
    let tmp = TempDir::new().unwrap();
    let store = MetadataLoader::new(tmp.path()).load().unwrap();

    assert!(store.entity_types().is_empty());

    // With no metadata at all, every check degrades to pass.
    let manager =
        FieldValidationManager::new(Arc::new(store), Arc::new(ValidatorRegistry::new()));
    let entity = Entity::new("Lead");
    assert!(manager.check(&entity, "email", "required", None));
}

#[test]
fn test_malformed_file_aborts_load() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "entityDefs", "Lead.json", "{ broken");

    let result = MetadataLoader::new(tmp.path()).load();
    assert!(result.is_err());

    let message = result.unwrap_err().to_string();
    assert!(message.contains("Lead.json"));
}

#[test]
fn test_non_object_definition_aborts_load() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "fields", "varchar.json", "\"just a string\"");

    let result = MetadataLoader::new(tmp.path()).load();
    assert!(result.is_err());
}

#[test]
fn test_non_json_files_ignored() {
    let tmp = TempDir::new().unwrap();
    write_lead_metadata(tmp.path());
    write_file(tmp.path(), "entityDefs", "notes.txt", "not metadata");

    let store = MetadataLoader::new(tmp.path()).load().unwrap();
    assert_eq!(store.entity_types(), vec!["Lead"]);
}

#[test]
fn test_file_stem_names_entity_type() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "entityDefs", "Account.json", r#"{ "fields": {} }"#);
    write_file(tmp.path(), "entityDefs", "Contact.json", r#"{ "fields": {} }"#);

    let store = MetadataLoader::new(tmp.path()).load().unwrap();
    assert_eq!(store.entity_types(), vec!["Account", "Contact"]);
}
