//! Type errors raised when checking a predicate against a schema.

use stash_model::FieldType;
use thiserror::Error;

/// Errors raised when a predicate fails its schema check.
///
/// These are caller mistakes: the query executor raises them before any
/// record is evaluated, and they are never retried.
#[derive(Debug, Error)]
pub enum PredicateTypeError {
    #[error("predicate references undeclared field {field} on {record_type}")]
    UnknownField { record_type: String, field: String },

    #[error("operand for {field} has type {actual}, field is declared {declared}")]
    OperandTypeMismatch {
        field: String,
        declared: FieldType,
        actual: FieldType,
    },

    #[error("{op} is not supported on {declared} field {field}")]
    UnsupportedOp {
        op: &'static str,
        field: String,
        declared: FieldType,
    },
}
