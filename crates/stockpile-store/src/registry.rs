//! Medium registration and record preparation
//!
//! A medium is a typed carrier for one ledger record. The registry maps each
//! medium type to a capacity resolver, hands fresh records to new media, and
//! answers record-level questions without loading a full ledger.

use std::collections::BTreeMap;
use std::fmt;

use stockpile_core::{Capacity, MediumTypeId};

use crate::record::{self, Record, StorageKind};

/// Capacity resolver registered per medium type
///
/// Receives the whole medium, so a resolver may read the attached record
/// when capacity depends on it.
pub type CapacityFn = Box<dyn Fn(&Medium) -> Capacity + Send + Sync>;

/// A typed carrier that may hold a ledger record
#[derive(Debug, Clone, PartialEq)]
pub struct Medium {
    /// Medium type, the registry lookup key
    pub type_id: MediumTypeId,
    /// Attached ledger record, absent until prepared
    pub record: Option<Record>,
}

impl Medium {
    /// Create an unprepared medium
    pub fn new(type_id: MediumTypeId) -> Self {
        Self {
            type_id,
            record: None,
        }
    }

    /// Attach an already-built record
    #[must_use]
    pub fn with_record(mut self, rec: Record) -> Self {
        self.record = Some(rec);
        self
    }
}

/// Registry mapping medium types to capacity resolvers
#[derive(Default)]
pub struct MediumRegistry {
    capacities: BTreeMap<MediumTypeId, CapacityFn>,
}

impl MediumRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            capacities: BTreeMap::new(),
        }
    }

    /// Register a capacity resolver for a medium type
    ///
    /// Returns `false` and keeps the existing resolver when the type is
    /// already registered.
    pub fn register(&mut self, type_id: MediumTypeId, capacity: CapacityFn) -> bool {
        if self.capacities.contains_key(&type_id) {
            tracing::debug!(%type_id, "medium type already registered");
            return false;
        }
        self.capacities.insert(type_id, capacity);
        true
    }

    /// Check whether a medium type has a resolver
    pub fn is_registered(&self, type_id: MediumTypeId) -> bool {
        self.capacities.contains_key(&type_id)
    }

    /// Resolve a medium's capacity
    ///
    /// An unregistered medium type resolves to a bounded capacity of zero,
    /// which admits nothing.
    pub fn capacity_of(&self, medium: &Medium) -> Capacity {
        match self.capacities.get(&medium.type_id) {
            Some(capacity) => capacity(medium),
            None => Capacity::bounded(0),
        }
    }

    /// Install a fresh record on a medium
    ///
    /// Intended for newly created media; an already-attached record is
    /// replaced.
    pub fn prepare(&self, medium: &mut Medium, kind: StorageKind) {
        medium.record = Some(record::fresh_record(kind));
    }

    /// Build the reduced share record of a medium
    ///
    /// `None` for an unprepared medium.
    pub fn share_record_of(&self, medium: &Medium, kind: StorageKind) -> Option<Record> {
        medium
            .record
            .as_ref()
            .map(|rec| record::share_record(rec, kind))
    }

    /// Read a medium's stored total
    ///
    /// Zero for an unprepared medium.
    pub fn stored_of(&self, medium: &Medium) -> i64 {
        medium.record.as_ref().map_or(0, record::stored_of)
    }
}

impl fmt::Debug for MediumRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediumRegistry")
            .field("registered", &self.capacities.keys().collect::<Vec<_>>())
            .finish()
    }
}
