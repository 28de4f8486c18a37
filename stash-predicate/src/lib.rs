//! Composable filter predicates over records.
//!
//! Predicates are built programmatically (there is no textual query
//! language), type-checked once against a [`RecordSchema`], and then
//! evaluated as pure functions over records. The query executor runs the
//! check before touching any record, so a malformed predicate fails fast
//! with a [`PredicateTypeError`] instead of silently matching nothing.
//!
//! # Example
//!
//! ```
//! use stash_model::FieldValue;
//! use stash_predicate::field;
//!
//! let high_priority_open = field("priority")
//!     .eq(FieldValue::enumeration("high"))
//!     .and(field("done").eq(FieldValue::boolean(false)));
//! ```
//!
//! [`RecordSchema`]: stash_model::RecordSchema

mod check;
mod error;
mod eval;
mod expr;

pub use check::check;
pub use error::PredicateTypeError;
pub use eval::evaluate;
pub use expr::{CompareOp, FieldRef, Predicate, field};
