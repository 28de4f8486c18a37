//! Record model for StashKit.
//!
//! Defines the types every other subsystem depends on:
//! - [`Record`] — one instance of a user-defined typed entity
//! - [`RecordSchema`] / [`FieldDef`] — the declared field set for a record type
//! - [`FieldValue`] / [`FieldType`] — the closed set of supported field types
//! - [`SchemaRegistry`] — the write-once set of schemas a store accepts
//! - [`ValidationError`] — schema and record validation failures
//!
//! Records are plain values. The copy a caller holds never aliases stored
//! state; nothing changes in the store until an explicit save.

mod error;
mod record;
mod registry;
mod schema;
mod value;

pub use error::ValidationError;
pub use record::Record;
pub use registry::SchemaRegistry;
pub use schema::{FieldDef, RecordSchema};
pub use value::{FieldType, FieldValue};
