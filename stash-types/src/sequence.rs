//! Sequence numbers ordering outbox mutations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strictly increasing identifier assigned to each outbox mutation at
/// enqueue time.
///
/// Sequence numbers are never reused, even after acknowledged entries have
/// been removed from the outbox. A sync collaborator acknowledges "up to"
/// one of these to drain everything at or below it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SequenceNumber(u64);

impl SequenceNumber {
    /// Creates a sequence number from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The sequence number immediately after this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
