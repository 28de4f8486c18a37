//! Embedded SQLite-backed record store for StashKit.
//!
//! Provides durable storage for schema-validated records plus the mutation
//! outbox a sync collaborator drains.
//!
//! # Architecture
//!
//! - Records are stored per type, keyed by id, with the field map as a JSON
//!   blob; full scans return insertion order
//! - Every committed save/delete appends exactly one outbox mutation in the
//!   same transaction — a failure leaves both tables untouched
//! - Queries type-check their predicate against the schema first, then
//!   filter a consistent snapshot of the scan
//! - All mutating operations share one mutual-exclusion domain (a single
//!   mutex over the connection); readers only ever observe committed state
//!
//! The outbox is the sole hook for synchronization: an external collaborator
//! peeks the oldest unacknowledged mutation and acknowledges up to a
//! sequence number. It never reads record storage directly.

mod error;
mod outbox;
mod query;
mod store;

pub use error::{StoreError, StoreResult};
pub use query::QueryResults;
pub use store::Store;
