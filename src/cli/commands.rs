//! CLI command implementations

use std::path::Path;

use serde_json::Value;

use crate::metadata::{MetadataError, MetadataLoader, MetadataStore};
use crate::observability::Logger;

use super::errors::{CliError, CliResult};

/// Dispatches a parsed command.
pub fn run_command(command: super::Command) -> CliResult<()> {
    match command {
        super::Command::Lint { metadata } => lint(&metadata),
        super::Command::Show {
            metadata,
            entity_type,
        } => show(&metadata, &entity_type),
    }
}

/// Loads a metadata directory and reports structural defects.
///
/// Exits non-zero (via error return) when any defect is found. Each
/// defect is logged as its own event line.
pub fn lint(metadata_dir: &Path) -> CliResult<()> {
    let store = load_store(metadata_dir)?;
    let defects = lint_store(&store);

    for defect in &defects {
        let message = defect.to_string();
        Logger::error("METADATA_DEFECT", &[("defect", message.as_str())]);
    }

    if !defects.is_empty() {
        return Err(CliError::metadata_invalid(format!(
            "{} defect(s) found in {}",
            defects.len(),
            metadata_dir.display()
        )));
    }

    let entity_types = store.entity_types().len().to_string();
    let field_types = store.field_types().len().to_string();
    Logger::info(
        "METADATA_OK",
        &[
            ("entity_types", entity_types.as_str()),
            ("field_types", field_types.as_str()),
        ],
    );

    Ok(())
}

/// Prints the field definitions for one entity type as pretty JSON.
pub fn show(metadata_dir: &Path, entity_type: &str) -> CliResult<()> {
    let store = load_store(metadata_dir)?;

    let defs = store
        .entity_defs(entity_type)
        .ok_or_else(|| CliError::unknown_entity_type(entity_type))?;

    let rendered = serde_json::to_string_pretty(defs)
        .map_err(|e| CliError::io_error(format!("Failed to render definitions: {}", e)))?;

    println!("{}", rendered);
    Ok(())
}

fn load_store(metadata_dir: &Path) -> CliResult<MetadataStore> {
    MetadataLoader::new(metadata_dir)
        .load()
        .map_err(|e| CliError::metadata_load(e.to_string()))
}

/// Collects structural defects in a loaded store.
///
/// Checked per entity type: `fields` must be an object, every field
/// must declare a string `type`, validator ids must be strings.
/// Checked per field type: `mandatoryValidationList` must be an array
/// of strings, validator ids must be strings.
pub fn lint_store(store: &MetadataStore) -> Vec<MetadataError> {
    let mut defects = Vec::new();

    for entity_type in store.entity_types() {
        let fields = store.get(&["entityDefs", entity_type, "fields"]);

        let fields = match fields.and_then(Value::as_object) {
            Some(fields) => fields,
            None => {
                defects.push(MetadataError::invalid_definition(
                    entity_type,
                    "missing 'fields' object",
                ));
                continue;
            }
        };

        for (field, def) in fields {
            let name = format!("{}.{}", entity_type, field);

            let def = match def.as_object() {
                Some(def) => def,
                None => {
                    defects.push(MetadataError::invalid_definition(
                        name,
                        "definition must be an object",
                    ));
                    continue;
                }
            };

            match def.get("type") {
                Some(Value::String(_)) => {}
                Some(_) => defects.push(MetadataError::invalid_definition(
                    &name,
                    "'type' must be a string",
                )),
                None => defects.push(MetadataError::invalid_definition(&name, "missing 'type'")),
            }

            if let Some(validator) = def.get("validator") {
                if !validator.is_string() {
                    defects.push(MetadataError::invalid_definition(
                        &name,
                        "'validator' must be a string",
                    ));
                }
            }
        }
    }

    for field_type in store.field_types() {
        let name = format!("fields.{}", field_type);

        if let Some(list) = store.get(&["fields", field_type, "mandatoryValidationList"]) {
            match list.as_array() {
                Some(items) => {
                    if items.iter().any(|item| !item.is_string()) {
                        defects.push(MetadataError::invalid_definition(
                            &name,
                            "'mandatoryValidationList' entries must be strings",
                        ));
                    }
                }
                None => defects.push(MetadataError::invalid_definition(
                    &name,
                    "'mandatoryValidationList' must be an array",
                )),
            }
        }

        if let Some(validator) = store.get(&["fields", field_type, "validator"]) {
            if !validator.is_string() {
                defects.push(MetadataError::invalid_definition(
                    &name,
                    "'validator' must be a string",
                ));
            }
        }
    }

    defects
}
