//! Validated, immutable content store.

use std::collections::{BTreeMap, HashSet};

use crate::record::{AuxiliaryContentRecord, ContentRecord};

/// Ordered records plus keyed auxiliary records.
///
/// Built once at startup and handed to the builder. There are no mutation
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    records: Vec<ContentRecord>,
    auxiliary: BTreeMap<String, AuxiliaryContentRecord>,
}

/// Errors raised while assembling a content store.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Duplicate auxiliary key: {0}")]
    DuplicateKey(String),

    #[error("Record at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Auxiliary record at position {0} has an empty key")]
    EmptyKey(usize),
}

impl ContentStore {
    /// Build a store, rejecting empty or repeated ids and keys.
    pub fn new(
        records: Vec<ContentRecord>,
        auxiliary: Vec<AuxiliaryContentRecord>,
    ) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for (index, record) in records.iter().enumerate() {
            if record.id.is_empty() {
                return Err(ContentError::EmptyId(index));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(ContentError::DuplicateId(record.id.clone()));
            }
        }

        let mut map = BTreeMap::new();
        for (index, entry) in auxiliary.into_iter().enumerate() {
            if entry.key.is_empty() {
                return Err(ContentError::EmptyKey(index));
            }
            if map.contains_key(&entry.key) {
                return Err(ContentError::DuplicateKey(entry.key));
            }
            map.insert(entry.key.clone(), entry);
        }

        Ok(Self {
            records,
            auxiliary: map,
        })
    }

    /// Records in render order.
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    /// Auxiliary records by key, iterated in key order.
    pub fn auxiliary(&self) -> &BTreeMap<String, AuxiliaryContentRecord> {
        &self.auxiliary
    }

    pub fn record(&self, id: &str) -> Option<&ContentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn auxiliary_record(&self, key: &str) -> Option<&AuxiliaryContentRecord> {
        self.auxiliary.get(key)
    }
}
