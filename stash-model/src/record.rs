//! Record instances.

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use stash_types::{RecordId, epoch_millis};
use std::collections::BTreeMap;

/// One instance of a user-defined typed entity.
///
/// Records are plain values: the copy a caller holds never aliases stored
/// state, and mutating it changes nothing until an explicit save. `id` is
/// fixed at creation. `version` belongs to the store — it is 0 until the
/// record is first persisted, then advances on every successful save.
///
/// An optional field that is unset is absent from `fields` entirely, which
/// is distinct from holding an empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub record_type: String,
    #[serde(default)]
    pub version: u64,
    pub fields: BTreeMap<String, FieldValue>,
    /// When the record was first persisted (epoch milliseconds).
    pub created_at: i64,
    /// When the record was last persisted (epoch milliseconds).
    pub modified_at: i64,
}

impl Record {
    /// Creates an unsaved record of the given type with a fresh id.
    #[must_use]
    pub fn new(record_type: impl Into<String>) -> Self {
        let now = epoch_millis();
        Self {
            id: RecordId::new(),
            record_type: record_type.into(),
            version: 0,
            fields: BTreeMap::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Builder-style field assignment.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Sets or replaces a field value.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Removes a field, returning its previous value.
    pub fn unset(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Reads a field value.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Reads a text field.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_str)
    }

    /// Reads a numeric field.
    #[must_use]
    pub fn get_number(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(FieldValue::as_number)
    }

    /// Reads a boolean field.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.field(name).and_then(FieldValue::as_bool)
    }
}
