// src/store.rs
use std::collections::HashSet;

use crate::data::ConjugationRecord;

/// In-memory accumulation of records across a batch, unique by id.
/// First-seen record wins; order of first appearance is kept.
#[derive(Debug, Default)]
pub struct RecordSet {
    seen: HashSet<String>,
    records: Vec<ConjugationRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a record with the same id was already present.
    pub fn insert(&mut self, rec: ConjugationRecord) -> bool {
        if self.seen.contains(&rec.id) {
            return false;
        }
        self.seen.insert(rec.id.clone());
        self.records.push(rec);
        true
    }

    /// Insert many; returns how many were new.
    pub fn extend<I: IntoIterator<Item = ConjugationRecord>>(&mut self, recs: I) -> usize {
        let mut added = 0;
        for rec in recs {
            if self.insert(rec) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ConjugationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ConjugationRecord> {
        self.records
    }
}
