//! Validation errors for schemas and records.

use crate::value::FieldType;
use thiserror::Error;

/// Errors raised when a schema or record fails validation.
///
/// These are caller mistakes: they are surfaced immediately and never
/// retried, and a save that hits one leaves the store untouched.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("record type already registered: {0}")]
    AlreadyRegistered(String),

    #[error("unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("duplicate field in schema {record_type}: {field}")]
    DuplicateField { record_type: String, field: String },

    #[error("enum field {field} on {record_type} declares no options")]
    MissingEnumOptions { record_type: String, field: String },

    #[error("options declared on non-enum field {field} on {record_type}")]
    OptionsOnNonEnum { record_type: String, field: String },

    #[error(
        "default for field {field} on {record_type} has type {actual}, field is declared {declared}"
    )]
    DefaultTypeMismatch {
        record_type: String,
        field: String,
        declared: FieldType,
        actual: FieldType,
    },

    #[error("default for enum field {field} on {record_type} is not a declared option: {value}")]
    DefaultNotAnOption {
        record_type: String,
        field: String,
        value: String,
    },

    #[error("field {field} is not declared on record type {record_type}")]
    UnknownField { record_type: String, field: String },

    #[error("required field {field} is missing on record type {record_type}")]
    MissingRequiredField { record_type: String, field: String },

    #[error("field {field} on {record_type} has type {actual}, field is declared {declared}")]
    TypeMismatch {
        record_type: String,
        field: String,
        declared: FieldType,
        actual: FieldType,
    },

    #[error("value for enum field {field} on {record_type} is not a declared option: {value}")]
    NotAnOption {
        record_type: String,
        field: String,
        value: String,
    },

    #[error("record type mismatch: record is {actual}, schema is {expected}")]
    RecordTypeMismatch { expected: String, actual: String },
}
