//! Pure evaluation of predicates against records.

use crate::expr::{CompareOp, Predicate};
use stash_model::{FieldValue, Record};
use std::cmp::Ordering;

/// Evaluates `predicate` against `record`. Pure; no side effects.
///
/// Every comparison against an absent field is false — including
/// `not_contains` and `ne` — so filters never match records that lack the
/// field. Only [`Predicate::IsUnset`] observes absence as true.
/// `and`/`or` short-circuit at the first decisive child.
#[must_use]
pub fn evaluate(predicate: &Predicate, record: &Record) -> bool {
    match predicate {
        Predicate::And(children) => children.iter().all(|p| evaluate(p, record)),
        Predicate::Or(children) => children.iter().any(|p| evaluate(p, record)),
        Predicate::Not(inner) => !evaluate(inner, record),
        Predicate::IsUnset { field } => record.field(field).is_none(),
        Predicate::Compare { field, op } => match record.field(field) {
            Some(value) => compare(value, op),
            None => false,
        },
    }
}

fn compare(value: &FieldValue, op: &CompareOp) -> bool {
    match op {
        CompareOp::Eq(rhs) => value == rhs,
        CompareOp::Ne(rhs) => value != rhs,
        CompareOp::Lt(rhs) => matches!(ordering(value, rhs), Some(Ordering::Less)),
        CompareOp::Le(rhs) => {
            matches!(ordering(value, rhs), Some(Ordering::Less | Ordering::Equal))
        }
        CompareOp::Gt(rhs) => matches!(ordering(value, rhs), Some(Ordering::Greater)),
        CompareOp::Ge(rhs) => {
            matches!(
                ordering(value, rhs),
                Some(Ordering::Greater | Ordering::Equal)
            )
        }
        CompareOp::Contains(rhs) => contains(value, rhs),
        CompareOp::NotContains(rhs) => !contains(value, rhs),
        CompareOp::BeginsWith(prefix) => match value {
            FieldValue::Text(s) => s.starts_with(prefix.as_str()),
            _ => false,
        },
        CompareOp::Between(low, high) => {
            matches!(ordering(value, low), Some(Ordering::Greater | Ordering::Equal))
                && matches!(ordering(value, high), Some(Ordering::Less | Ordering::Equal))
        }
    }
}

/// Order between two values of the same orderable type. Mixed or
/// non-orderable types have no order, which makes the comparison false.
fn ordering(lhs: &FieldValue, rhs: &FieldValue) -> Option<Ordering> {
    match (lhs, rhs) {
        (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b),
        (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn contains(value: &FieldValue, needle: &FieldValue) -> bool {
    match (value, needle) {
        (FieldValue::Text(s), FieldValue::Text(n)) => s.contains(n.as_str()),
        (FieldValue::List(items), FieldValue::Text(n)) => items.iter().any(|item| item == n),
        _ => false,
    }
}
