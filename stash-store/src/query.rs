//! Lazy query result sequences.

use stash_model::Record;
use stash_predicate::{Predicate, evaluate};

/// One-shot iterator over the records matching a query.
///
/// Holds the snapshot taken under the store lock; filtering happens lazily
/// as the caller advances, preserving scan (insertion) order. Nothing is
/// cached across calls — re-running the query re-scans current state.
#[derive(Debug)]
pub struct QueryResults {
    records: std::vec::IntoIter<Record>,
    predicate: Option<Predicate>,
}

impl QueryResults {
    pub(crate) fn new(records: Vec<Record>, predicate: Option<Predicate>) -> Self {
        Self {
            records: records.into_iter(),
            predicate,
        }
    }
}

impl Iterator for QueryResults {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        for record in self.records.by_ref() {
            match &self.predicate {
                Some(p) if !evaluate(p, &record) => continue,
                _ => return Some(record),
            }
        }
        None
    }
}
