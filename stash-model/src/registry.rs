//! Registry of the record types a store accepts.

use crate::error::ValidationError;
use crate::schema::RecordSchema;
use std::collections::HashMap;

/// The set of schemas a store was configured with.
///
/// Schemas are write-once: registering a type that already exists is an
/// error, so a schema can never change underneath live records. The
/// registry is built at startup and handed to the store.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, RecordSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema after checking its internal consistency.
    pub fn register(&mut self, schema: RecordSchema) -> Result<(), ValidationError> {
        schema.check()?;
        if self.schemas.contains_key(&schema.record_type) {
            return Err(ValidationError::AlreadyRegistered(schema.record_type));
        }
        self.schemas.insert(schema.record_type.clone(), schema);
        Ok(())
    }

    /// Looks up the schema for a record type.
    #[must_use]
    pub fn get(&self, record_type: &str) -> Option<&RecordSchema> {
        self.schemas.get(record_type)
    }

    /// Like [`SchemaRegistry::get`], but unknown types are an error.
    pub fn require(&self, record_type: &str) -> Result<&RecordSchema, ValidationError> {
        self.schemas
            .get(record_type)
            .ok_or_else(|| ValidationError::UnknownRecordType(record_type.to_string()))
    }

    /// Registered record type names.
    pub fn record_types(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True when no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
