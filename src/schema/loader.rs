//! Schema loader for reading entity schemas from disk at startup
//!
//! - Every `*.json` file in the schema directory is one schema file
//! - A file maps entity types to their ordered columns
//! - An entity type may be defined only once across all files
//! - Files are read in file-name order

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::errors::{SchemaError, SchemaResult};
use super::types::TableSchema;
use crate::observability::Event;
use crate::predicates::PredicateRegistry;

/// Schema loader that reads schema files and holds the in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct SchemaLoader {
    /// Directory containing schema files
    schema_dir: PathBuf,
    /// Loaded tables indexed by entity type, in load order
    tables: IndexMap<String, TableSchema>,
}

impl SchemaLoader {
    /// Creates a new schema loader for the given schema directory.
    pub fn new(schema_dir: &Path) -> Self {
        Self {
            schema_dir: schema_dir.to_path_buf(),
            tables: IndexMap::new(),
        }
    }

    /// Loads all schema files from the schema directory.
    pub fn load_all(&mut self) -> SchemaResult<()> {
        if !self.schema_dir.is_dir() {
            return Err(SchemaError::DirMissing(self.schema_dir.clone()));
        }

        let entries = fs::read_dir(&self.schema_dir)
            .map_err(|e| SchemaError::io(&self.schema_dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| SchemaError::io(&self.schema_dir, e))?.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.load_file(path)?;
        }

        tracing::info!(
            event = %Event::SchemasLoaded,
            dir = %self.schema_dir.display(),
            files = paths.len(),
            entities = self.tables.len(),
            "schemas loaded"
        );
        Ok(())
    }

    /// Loads a single schema file, returning the number of entity types it defined.
    pub fn load_file(&mut self, path: &Path) -> SchemaResult<usize> {
        let content = fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
        let tables: IndexMap<String, TableSchema> = serde_json::from_str(&content)
            .map_err(|e| SchemaError::malformed(path.display().to_string(), e.to_string()))?;

        let count = tables.len();
        for (entity_type, table) in tables {
            self.register(entity_type, table)?;
        }
        Ok(count)
    }

    /// Registers a table directly (for testing or programmatic creation).
    pub fn register(
        &mut self,
        entity_type: impl Into<String>,
        table: TableSchema,
    ) -> SchemaResult<()> {
        let entity_type = entity_type.into();
        if self.tables.contains_key(&entity_type) {
            return Err(SchemaError::DuplicateEntity(entity_type));
        }
        self.tables.insert(entity_type, table);
        Ok(())
    }

    /// Gets the columns declared for an entity type.
    pub fn get(&self, entity_type: &str) -> Option<&TableSchema> {
        self.tables.get(entity_type)
    }

    pub fn entity_exists(&self, entity_type: &str) -> bool {
        self.tables.contains_key(entity_type)
    }

    /// Returns entity type names in load order.
    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn entity_count(&self) -> usize {
        self.tables.len()
    }

    /// Checks that every rule named in any column is registered.
    ///
    /// Run once at startup so rule-name typos surface before the first
    /// record is validated.
    pub fn verify_rules(&self, registry: &PredicateRegistry) -> SchemaResult<()> {
        for (entity_type, table) in &self.tables {
            for (column, spec) in table {
                let Some(rules) = &spec.validations else {
                    continue;
                };
                if let Some(rule) = rules.keys().find(|rule| !registry.contains(rule)) {
                    return Err(SchemaError::UnknownRule {
                        attribute: format!("{}.{}", entity_type, column),
                        rule: rule.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
