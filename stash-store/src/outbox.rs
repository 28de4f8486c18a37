//! Append-only log of pending local mutations.
//!
//! Sequence numbers come from SQLite's AUTOINCREMENT, so they strictly
//! increase and are never reused even after acknowledged rows have been
//! deleted. Appends happen inside the save/delete transaction; the drain
//! side (`peek`/`acknowledge`) runs under the store's connection lock.

use crate::error::{StoreError, StoreResult};
use rusqlite::{Connection, OptionalExtension, Row, params};
use stash_types::{Mutation, MutationKind, RecordId, SequenceNumber};

const MUTATION_COLUMNS: &str = "seq, record_type, record_id, kind, snapshot, enqueued_at";

/// Appends one mutation, returning its assigned sequence number.
///
/// `conn` may be a transaction; the caller decides the commit boundary.
pub(crate) fn append(
    conn: &Connection,
    record_type: &str,
    record_id: &RecordId,
    kind: MutationKind,
    snapshot: Option<&str>,
    enqueued_at: i64,
) -> StoreResult<SequenceNumber> {
    conn.execute(
        "INSERT INTO outbox (record_type, record_id, kind, snapshot, enqueued_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record_type,
            record_id.to_string(),
            kind.as_str(),
            snapshot,
            enqueued_at
        ],
    )?;
    Ok(SequenceNumber::new(conn.last_insert_rowid() as u64))
}

/// The oldest unacknowledged mutation, if any. Does not consume it.
pub(crate) fn peek_oldest(conn: &Connection) -> StoreResult<Option<Mutation>> {
    let row = conn
        .query_row(
            &format!("SELECT {MUTATION_COLUMNS} FROM outbox ORDER BY seq ASC LIMIT 1"),
            [],
            decode_row,
        )
        .optional()?;
    row.map(finish_decode).transpose()
}

/// Removes every entry with sequence ≤ `seq`. Returns how many were
/// removed; acknowledging the same sequence twice removes nothing new.
pub(crate) fn acknowledge_up_to(conn: &Connection, seq: SequenceNumber) -> StoreResult<usize> {
    let removed = conn.execute(
        "DELETE FROM outbox WHERE seq <= ?1",
        params![seq.value() as i64],
    )?;
    Ok(removed)
}

/// All pending mutations in sequence order.
pub(crate) fn load_pending(conn: &Connection) -> StoreResult<Vec<Mutation>> {
    let mut stmt =
        conn.prepare(&format!("SELECT {MUTATION_COLUMNS} FROM outbox ORDER BY seq ASC"))?;
    let rows = stmt.query_map([], decode_row)?;

    let mut mutations = Vec::new();
    for row in rows {
        mutations.push(finish_decode(row?)?);
    }
    Ok(mutations)
}

/// Number of pending mutations.
pub(crate) fn pending_count(conn: &Connection) -> StoreResult<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM outbox", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Raw column tuple pulled inside the rusqlite row callback; the fallible
/// parsing that needs our own error type happens in `finish_decode`.
type RawMutation = (i64, String, String, String, Option<String>, i64);

fn decode_row(row: &Row<'_>) -> rusqlite::Result<RawMutation> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn finish_decode(raw: RawMutation) -> StoreResult<Mutation> {
    let (seq, record_type, record_id, kind, snapshot, enqueued_at) = raw;
    let record_id = record_id
        .parse()
        .map_err(|e| StoreError::Corrupt(format!("invalid record id in outbox: {e}")))?;
    let kind = MutationKind::parse(&kind)
        .ok_or_else(|| StoreError::Corrupt(format!("unknown mutation kind in outbox: {kind}")))?;

    Ok(Mutation {
        seq: SequenceNumber::new(seq as u64),
        record_type,
        record_id,
        kind,
        snapshot,
        enqueued_at,
    })
}
