//! Core type definitions for StashKit.
//!
//! This crate defines the fundamental, schema-agnostic types used throughout
//! the store:
//! - Record identifiers (UUID v7)
//! - Outbox sequence numbers
//! - Pending mutations (the unit a sync collaborator drains)
//!
//! Everything schema-aware (field types, validation, records themselves)
//! lives in `stash-model`; this crate stays dependency-light so every other
//! crate can build on it.

mod ids;
mod mutation;
mod sequence;

pub use ids::RecordId;
pub use mutation::{Mutation, MutationKind};
pub use sequence::SequenceNumber;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as milliseconds since the Unix epoch.
#[must_use]
pub fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before Unix epoch")
        .as_millis() as i64
}
