//! Schema type-checking of predicates.
//!
//! The check runs once per query, before any record is evaluated, so a
//! predicate that references an undeclared field or compares a field
//! against an incompatible literal fails fast instead of filtering
//! everything out.

use crate::error::PredicateTypeError;
use crate::expr::{CompareOp, Predicate};
use stash_model::{FieldDef, FieldType, FieldValue, RecordSchema};

/// Checks `predicate` against `schema`.
pub fn check(predicate: &Predicate, schema: &RecordSchema) -> Result<(), PredicateTypeError> {
    match predicate {
        Predicate::And(children) | Predicate::Or(children) => {
            children.iter().try_for_each(|child| check(child, schema))
        }
        Predicate::Not(inner) => check(inner, schema),
        Predicate::IsUnset { field } => {
            require_field(schema, field)?;
            Ok(())
        }
        Predicate::Compare { field, op } => {
            let def = require_field(schema, field)?;
            check_compare(def, op)
        }
    }
}

fn require_field<'a>(
    schema: &'a RecordSchema,
    field: &str,
) -> Result<&'a FieldDef, PredicateTypeError> {
    schema
        .field(field)
        .ok_or_else(|| PredicateTypeError::UnknownField {
            record_type: schema.record_type.clone(),
            field: field.to_string(),
        })
}

fn check_compare(def: &FieldDef, op: &CompareOp) -> Result<(), PredicateTypeError> {
    match op {
        CompareOp::Eq(operand) | CompareOp::Ne(operand) => require_operand_type(def, operand),

        CompareOp::Lt(operand)
        | CompareOp::Le(operand)
        | CompareOp::Gt(operand)
        | CompareOp::Ge(operand) => {
            require_orderable(def, op)?;
            require_operand_type(def, operand)
        }

        CompareOp::Between(low, high) => {
            require_orderable(def, op)?;
            require_operand_type(def, low)?;
            require_operand_type(def, high)
        }

        CompareOp::Contains(operand) | CompareOp::NotContains(operand) => {
            if !matches!(def.field_type, FieldType::Text | FieldType::List) {
                return Err(unsupported(def, op));
            }
            // The needle is a scalar string for both text and list fields.
            if operand.field_type() != FieldType::Text {
                return Err(PredicateTypeError::OperandTypeMismatch {
                    field: def.name.clone(),
                    declared: FieldType::Text,
                    actual: operand.field_type(),
                });
            }
            Ok(())
        }

        CompareOp::BeginsWith(_) => {
            if def.field_type != FieldType::Text {
                return Err(unsupported(def, op));
            }
            Ok(())
        }
    }
}

fn require_orderable(def: &FieldDef, op: &CompareOp) -> Result<(), PredicateTypeError> {
    if matches!(def.field_type, FieldType::Number | FieldType::Date) {
        Ok(())
    } else {
        Err(unsupported(def, op))
    }
}

fn require_operand_type(def: &FieldDef, operand: &FieldValue) -> Result<(), PredicateTypeError> {
    if operand.field_type() == def.field_type {
        Ok(())
    } else {
        Err(PredicateTypeError::OperandTypeMismatch {
            field: def.name.clone(),
            declared: def.field_type,
            actual: operand.field_type(),
        })
    }
}

fn unsupported(def: &FieldDef, op: &CompareOp) -> PredicateTypeError {
    PredicateTypeError::UnsupportedOp {
        op: op.name(),
        field: def.name.clone(),
        declared: def.field_type,
    }
}
