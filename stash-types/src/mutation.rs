//! Pending local mutations awaiting acknowledgment.
//!
//! Every committed save or delete appends exactly one mutation to the
//! store's outbox. A sync collaborator drains the outbox by peeking the
//! oldest entry, pushing it upstream, and acknowledging up to its sequence
//! number; it never inspects record storage directly.

use crate::{RecordId, SequenceNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of local change a mutation describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    /// Stable string form, used for on-disk storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Parses the stable string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One pending local change, recorded when a save or delete commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    /// Position in the outbox. Strictly increasing, never reused.
    pub seq: SequenceNumber,

    /// The record type the change applies to.
    pub record_type: String,

    /// The record the change applies to.
    pub record_id: RecordId,

    /// What happened: create, update, or delete.
    pub kind: MutationKind,

    /// Serialized record state after the mutation. For deletes this holds
    /// the last state persisted before removal, so an upstream resolver
    /// still sees what was dropped.
    pub snapshot: Option<String>,

    /// When the mutation was enqueued (epoch milliseconds).
    pub enqueued_at: i64,
}
