//! Metadata loader for reading definition files from disk at startup
//!
//! Layout:
//! - `<dir>/entityDefs/<EntityType>.json` — one file per entity type
//! - `<dir>/fields/<fieldType>.json` — one file per field type
//!
//! The file stem names the entity type / field type. Either
//! subdirectory may be absent; non-JSON files are skipped; malformed
//! files abort the load with an error naming the offending path.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::{MetadataError, MetadataResult};
use super::store::MetadataStore;

/// Loads a metadata directory into a [`MetadataStore`].
pub struct MetadataLoader {
    dir: PathBuf,
}

impl MetadataLoader {
    /// Creates a loader for the given metadata directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the metadata directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reads both subdirectories and returns the populated store.
    pub fn load(&self) -> MetadataResult<MetadataStore> {
        let mut store = MetadataStore::new();

        for (name, value) in self.read_definitions("entityDefs")? {
            store.set_entity_defs(name, value);
        }

        for (name, value) in self.read_definitions("fields")? {
            store.set_field_defs(name, value);
        }

        Ok(store)
    }

    /// Reads all definition files from one subdirectory.
    fn read_definitions(&self, subdir: &str) -> MetadataResult<Vec<(String, Value)>> {
        let dir = self.dir.join(subdir);

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|e| MetadataError::io(&dir, e))?;

        let mut definitions = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| MetadataError::io(&dir, e))?;
            let path = entry.path();

            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            let name = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };

            definitions.push((name, read_definition_file(&path)?));
        }

        // Directory iteration order is platform-dependent.
        definitions.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(definitions)
    }
}

/// Reads and parses a single definition file.
fn read_definition_file(path: &Path) -> MetadataResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| MetadataError::io(path, e))?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| MetadataError::malformed(path, format!("Invalid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(MetadataError::malformed(
            path,
            "definition root must be an object",
        ));
    }

    Ok(value)
}
