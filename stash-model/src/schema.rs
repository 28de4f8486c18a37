//! Schema definitions for record types.

use crate::error::ValidationError;
use crate::record::Record;
use crate::value::{FieldType, FieldValue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Declares one field of a record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
    /// Required fields must be present on every saved record.
    pub required: bool,
    /// Filled in at save time when the field is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldValue>,
    /// Allowed values. Only meaningful when the type is Enum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_options: Option<Vec<String>>,
}

impl FieldDef {
    fn simple(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            default: None,
            enum_options: None,
        }
    }

    /// Shorthand for an optional text field.
    pub fn text(name: &str) -> Self {
        Self::simple(name, FieldType::Text)
    }

    /// Shorthand for an optional numeric field.
    pub fn number(name: &str) -> Self {
        Self::simple(name, FieldType::Number)
    }

    /// Shorthand for an optional boolean field.
    pub fn bool(name: &str) -> Self {
        Self::simple(name, FieldType::Bool)
    }

    /// Shorthand for an optional date field (epoch milliseconds).
    pub fn date(name: &str) -> Self {
        Self::simple(name, FieldType::Date)
    }

    /// Shorthand for an optional string-list field.
    pub fn list(name: &str) -> Self {
        Self::simple(name, FieldType::List)
    }

    /// Shorthand for an optional enum field with fixed options.
    pub fn enumeration(name: &str, options: Vec<String>) -> Self {
        Self {
            name: name.into(),
            field_type: FieldType::Enum,
            required: false,
            default: None,
            enum_options: Some(options),
        }
    }

    /// Marks the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches a default applied when the field is absent at save time.
    #[must_use]
    pub fn with_default(mut self, value: FieldValue) -> Self {
        self.default = Some(value);
        self
    }
}

/// Static definition of a record type: its name and ordered field list.
///
/// Immutable once registered with a [`SchemaRegistry`] — every record of the
/// type validates against the same definition for the life of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub record_type: String,
    pub fields: Vec<FieldDef>,
}

impl RecordSchema {
    /// Creates a schema for the given record type.
    pub fn new(record_type: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            record_type: record_type.into(),
            fields,
        }
    }

    /// Looks up a field definition by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks the schema's internal consistency. Run once at registration.
    pub fn check(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::new();
        for def in &self.fields {
            if !seen.insert(def.name.as_str()) {
                return Err(ValidationError::DuplicateField {
                    record_type: self.record_type.clone(),
                    field: def.name.clone(),
                });
            }

            match (def.field_type, &def.enum_options) {
                (FieldType::Enum, None) => {
                    return Err(ValidationError::MissingEnumOptions {
                        record_type: self.record_type.clone(),
                        field: def.name.clone(),
                    });
                }
                (FieldType::Enum, Some(options)) if options.is_empty() => {
                    return Err(ValidationError::MissingEnumOptions {
                        record_type: self.record_type.clone(),
                        field: def.name.clone(),
                    });
                }
                (_, Some(_)) if def.field_type != FieldType::Enum => {
                    return Err(ValidationError::OptionsOnNonEnum {
                        record_type: self.record_type.clone(),
                        field: def.name.clone(),
                    });
                }
                _ => {}
            }

            if let Some(default) = &def.default {
                self.check_value(def, default, true)?;
            }
        }
        Ok(())
    }

    /// Validates a record's fields against this schema.
    pub fn validate(&self, record: &Record) -> Result<(), ValidationError> {
        if record.record_type != self.record_type {
            return Err(ValidationError::RecordTypeMismatch {
                expected: self.record_type.clone(),
                actual: record.record_type.clone(),
            });
        }

        for (name, value) in &record.fields {
            let Some(def) = self.field(name) else {
                return Err(ValidationError::UnknownField {
                    record_type: self.record_type.clone(),
                    field: name.clone(),
                });
            };
            self.check_value(def, value, false)?;
        }

        for def in &self.fields {
            if def.required && !record.fields.contains_key(&def.name) {
                return Err(ValidationError::MissingRequiredField {
                    record_type: self.record_type.clone(),
                    field: def.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Fills declared defaults into fields absent on the record.
    ///
    /// Set fields are left alone; a field the caller explicitly set to an
    /// empty value is not "absent".
    pub fn apply_defaults(&self, record: &mut Record) {
        for def in &self.fields {
            if let Some(default) = &def.default {
                if !record.fields.contains_key(&def.name) {
                    record.fields.insert(def.name.clone(), default.clone());
                }
            }
        }
    }

    fn check_value(
        &self,
        def: &FieldDef,
        value: &FieldValue,
        is_default: bool,
    ) -> Result<(), ValidationError> {
        if value.field_type() != def.field_type {
            return if is_default {
                Err(ValidationError::DefaultTypeMismatch {
                    record_type: self.record_type.clone(),
                    field: def.name.clone(),
                    declared: def.field_type,
                    actual: value.field_type(),
                })
            } else {
                Err(ValidationError::TypeMismatch {
                    record_type: self.record_type.clone(),
                    field: def.name.clone(),
                    declared: def.field_type,
                    actual: value.field_type(),
                })
            };
        }

        if let (FieldValue::Enum(option), Some(options)) = (value, &def.enum_options) {
            if !options.contains(option) {
                return if is_default {
                    Err(ValidationError::DefaultNotAnOption {
                        record_type: self.record_type.clone(),
                        field: def.name.clone(),
                        value: option.clone(),
                    })
                } else {
                    Err(ValidationError::NotAnOption {
                        record_type: self.record_type.clone(),
                        field: def.name.clone(),
                        value: option.clone(),
                    })
                };
            }
        }
        Ok(())
    }
}
