//! The store handle: schema-checked CRUD over a SQLite database.

use crate::error::{StoreError, StoreResult};
use crate::outbox;
use crate::query::QueryResults;
use rusqlite::{Connection, OptionalExtension, params};
use stash_model::{FieldValue, Record, RecordSchema, SchemaRegistry};
use stash_predicate::Predicate;
use stash_types::{Mutation, MutationKind, RecordId, SequenceNumber, epoch_millis};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Handle to one embedded record store.
///
/// Constructed once at startup with the application's schema set and passed
/// to callers explicitly — there is no global instance. All mutating
/// operations run under a single mutex over the underlying connection, and
/// each save/delete commits its record row and outbox entry in one
/// transaction, so no reader ever observes a half-applied write.
pub struct Store {
    conn: Arc<Mutex<Connection>>,
    schemas: SchemaRegistry,
}

impl Store {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: impl AsRef<Path>, schemas: SchemaRegistry) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn, schemas)
    }

    /// Opens an in-memory store. Used by tests and ephemeral previews.
    pub fn open_in_memory(schemas: SchemaRegistry) -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, schemas)
    }

    fn with_connection(conn: Connection, schemas: SchemaRegistry) -> StoreResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
            schemas,
        };
        store.init_tables()?;
        Ok(store)
    }

    fn init_tables(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS records (
                record_type TEXT NOT NULL,
                id TEXT NOT NULL,
                version INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                modified_at INTEGER NOT NULL,
                fields TEXT NOT NULL,
                PRIMARY KEY (record_type, id)
            );

            CREATE TABLE IF NOT EXISTS outbox (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                record_type TEXT NOT NULL,
                record_id TEXT NOT NULL,
                kind TEXT NOT NULL,
                snapshot TEXT,
                enqueued_at INTEGER NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Registers an additional schema. Startup-time only — the handle must
    /// not have been shared yet, hence `&mut self`.
    pub fn register_schema(&mut self, schema: RecordSchema) -> StoreResult<()> {
        self.schemas.register(schema)?;
        Ok(())
    }

    /// The schemas this store was configured with.
    #[must_use]
    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    // ── CRUD ─────────────────────────────────────────────────────

    /// Persists a record and enqueues the matching outbox mutation.
    ///
    /// New ids insert at version 1; existing ids are overwritten at the
    /// stored version + 1 (last-writer-wins — the caller's version is never
    /// compared for rejection). Declared defaults fill absent fields before
    /// validation. Returns the record exactly as persisted.
    pub fn save(&self, record: Record) -> StoreResult<Record> {
        let schema = self.schemas.require(&record.record_type)?;
        let mut record = record;
        schema.apply_defaults(&mut record);
        schema.validate(&record)?;

        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        let existing: Option<(i64, i64)> = tx
            .query_row(
                "SELECT version, created_at FROM records WHERE record_type = ?1 AND id = ?2",
                params![record.record_type, record.id.to_string()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let now = epoch_millis();
        record.modified_at = now;
        let kind = match existing {
            Some((version, created_at)) => {
                record.version = version as u64 + 1;
                record.created_at = created_at;
                MutationKind::Update
            }
            None => {
                record.version = 1;
                record.created_at = now;
                MutationKind::Create
            }
        };

        let fields_json = serde_json::to_string(&record.fields)?;
        // The upsert keeps the existing rowid, so scan order stays stable
        // across updates.
        tx.execute(
            "INSERT INTO records (record_type, id, version, created_at, modified_at, fields)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(record_type, id) DO UPDATE SET
                 version = excluded.version,
                 modified_at = excluded.modified_at,
                 fields = excluded.fields",
            params![
                record.record_type,
                record.id.to_string(),
                record.version as i64,
                record.created_at,
                record.modified_at,
                fields_json
            ],
        )?;

        let snapshot = serde_json::to_string(&record)?;
        let seq = outbox::append(
            &tx,
            &record.record_type,
            &record.id,
            kind,
            Some(&snapshot),
            now,
        )?;
        tx.commit()?;

        debug!(
            record_type = %record.record_type,
            id = %record.id,
            version = record.version,
            seq = %seq,
            kind = %kind,
            "record saved"
        );
        Ok(record)
    }

    /// Removes a record, enqueuing a delete mutation that carries the last
    /// persisted state so an upstream resolver still sees what was dropped.
    pub fn delete(&self, record_type: &str, id: &RecordId) -> StoreResult<()> {
        self.schemas.require(record_type)?;

        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        let row: Option<(i64, i64, i64, String)> = tx
            .query_row(
                "SELECT version, created_at, modified_at, fields
                 FROM records WHERE record_type = ?1 AND id = ?2",
                params![record_type, id.to_string()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()?;

        let Some((version, created_at, modified_at, fields_json)) = row else {
            return Err(StoreError::NotFound {
                record_type: record_type.to_string(),
                id: id.to_string(),
            });
        };

        let last = decode_record(
            record_type,
            *id,
            version as u64,
            created_at,
            modified_at,
            &fields_json,
        )?;
        let snapshot = serde_json::to_string(&last)?;

        tx.execute(
            "DELETE FROM records WHERE record_type = ?1 AND id = ?2",
            params![record_type, id.to_string()],
        )?;
        let seq = outbox::append(
            &tx,
            record_type,
            id,
            MutationKind::Delete,
            Some(&snapshot),
            epoch_millis(),
        )?;
        tx.commit()?;

        debug!(record_type, id = %id, seq = %seq, "record deleted");
        Ok(())
    }

    /// Direct lookup by id. No predicate evaluation.
    pub fn get(&self, record_type: &str, id: &RecordId) -> StoreResult<Option<Record>> {
        self.schemas.require(record_type)?;

        let conn = self.conn.lock().unwrap();
        let row: Option<(i64, i64, i64, String)> = conn
            .query_row(
                "SELECT version, created_at, modified_at, fields
                 FROM records WHERE record_type = ?1 AND id = ?2",
                params![record_type, id.to_string()],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .optional()?;

        match row {
            Some((version, created_at, modified_at, fields_json)) => Ok(Some(decode_record(
                record_type,
                *id,
                version as u64,
                created_at,
                modified_at,
                &fields_json,
            )?)),
            None => Ok(None),
        }
    }

    /// Full scan of one record type in insertion order.
    pub fn scan(&self, record_type: &str) -> StoreResult<Vec<Record>> {
        self.schemas.require(record_type)?;

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, version, created_at, modified_at, fields
             FROM records WHERE record_type = ?1 ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![record_type], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id_str, version, created_at, modified_at, fields_json) = row?;
            let id: RecordId = id_str
                .parse()
                .map_err(|e| StoreError::Corrupt(format!("invalid record id {id_str}: {e}")))?;
            records.push(decode_record(
                record_type,
                id,
                version as u64,
                created_at,
                modified_at,
                &fields_json,
            )?);
        }
        Ok(records)
    }

    /// Runs a predicate-filtered query over one record type.
    ///
    /// The predicate is type-checked against the schema before any record is
    /// touched, then a consistent snapshot of the scan is filtered lazily,
    /// preserving insertion order. With no predicate this is the full scan.
    pub fn query(
        &self,
        record_type: &str,
        predicate: Option<Predicate>,
    ) -> StoreResult<QueryResults> {
        let schema = self.schemas.require(record_type)?;
        if let Some(p) = &predicate {
            stash_predicate::check(p, schema)?;
        }
        let records = self.scan(record_type)?;
        Ok(QueryResults::new(records, predicate))
    }

    // ── Outbox (sync collaborator surface) ───────────────────────

    /// The oldest mutation not yet acknowledged, without consuming it.
    pub fn peek_oldest_unacknowledged(&self) -> StoreResult<Option<Mutation>> {
        let conn = self.conn.lock().unwrap();
        outbox::peek_oldest(&conn)
    }

    /// Drops every outbox entry with sequence ≤ `seq`. Idempotent; returns
    /// the number of entries removed.
    pub fn acknowledge_up_to(&self, seq: SequenceNumber) -> StoreResult<usize> {
        let conn = self.conn.lock().unwrap();
        let removed = outbox::acknowledge_up_to(&conn, seq)?;
        if removed > 0 {
            debug!(%seq, removed, "outbox acknowledged");
        }
        Ok(removed)
    }

    /// All pending mutations in sequence order.
    pub fn pending_mutations(&self) -> StoreResult<Vec<Mutation>> {
        let conn = self.conn.lock().unwrap();
        outbox::load_pending(&conn)
    }

    /// Number of pending mutations.
    pub fn pending_count(&self) -> StoreResult<usize> {
        let conn = self.conn.lock().unwrap();
        outbox::pending_count(&conn)
    }
}

fn decode_record(
    record_type: &str,
    id: RecordId,
    version: u64,
    created_at: i64,
    modified_at: i64,
    fields_json: &str,
) -> StoreResult<Record> {
    let fields: BTreeMap<String, FieldValue> = serde_json::from_str(fields_json).map_err(|e| {
        StoreError::Corrupt(format!("undecodable field map for {record_type}/{id}: {e}"))
    })?;
    Ok(Record {
        id,
        record_type: record_type.to_string(),
        version,
        fields,
        created_at,
        modified_at,
    })
}
