//! Capacity-bounded, mergeable quantity ledger
//!
//! A [`Ledger`] holds a flat list of resource entries plus a running stored
//! total, gated by a [`Capacity`]. Inserts merge into an existing entry when
//! one matches, accept partially when space runs short, and reject outright
//! when no space remains. Extracts clamp to what the matched entry holds and
//! drop the entry when it reaches exactly zero.
//!
//! The stored total is authoritative: it is persisted verbatim, loaded
//! verbatim, and never recomputed from the entry list. Under normal
//! operation it equals the entry sum; a drifted record keeps its drift.
//! Totals and entry counts saturate at the `i64` bounds.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use stockpile_core::{Capacity, CompareFlags};

use crate::kind::ResourceKind;
use crate::record::{self, Record, RecordError, KEY_PROTOCOL, KEY_STORED};

/// Callback invoked after every committed mutation
///
/// Fires at most once per `insert` or `extract` call, only when the call
/// changed the ledger. Simulated calls and zero-quantity outcomes never
/// fire it.
pub type ChangeCallback = Arc<dyn Fn() + Send + Sync>;

/// Capacity-bounded collection of mergeable resource entries
pub struct Ledger<K: ResourceKind> {
    entries: Vec<K::Stack>,
    stored: i64,
    capacity: Capacity,
    on_change: Option<ChangeCallback>,
}

impl<K: ResourceKind> Ledger<K> {
    /// Create an empty ledger with the given capacity
    pub fn new(capacity: Capacity) -> Self {
        Self {
            entries: Vec::new(),
            stored: 0,
            capacity,
            on_change: None,
        }
    }

    /// Attach a change callback
    #[must_use]
    pub fn with_on_change(mut self, on_change: ChangeCallback) -> Self {
        self.on_change = Some(on_change);
        self
    }

    /// Load a ledger from its persisted record
    ///
    /// The record must carry this kind's entry list and a stored total.
    /// Entries that do not resolve are dropped silently; the stored total is
    /// read verbatim and kept even when the surviving entries sum to
    /// something else.
    pub fn from_record(rec: &Record, capacity: Capacity) -> record::Result<Self> {
        let key = K::KIND.entry_list_key();
        let list = rec.get(key).ok_or(RecordError::MissingField(key))?;
        let list = list.as_array().ok_or(RecordError::InvalidField(key))?;
        if rec.get(KEY_STORED).is_none() {
            return Err(RecordError::MissingField(KEY_STORED));
        }
        let stored = record::stored_of(rec);

        let mut entries = Vec::with_capacity(list.len());
        let mut dropped = 0usize;
        for entry in list {
            match K::decode_entry(entry) {
                Some(stack) => entries.push(stack),
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            tracing::debug!(
                dropped,
                kept = entries.len(),
                kind = %K::KIND,
                "dropped unresolvable entries while loading ledger record"
            );
        }

        Ok(Self {
            entries,
            stored,
            capacity,
            on_change: None,
        })
    }

    /// Render the ledger into its persisted record
    pub fn to_record(&self) -> Record {
        let entries: Vec<Value> = self.entries.iter().map(K::encode_entry).collect();
        let mut rec = serde_json::Map::new();
        rec.insert(K::KIND.entry_list_key().to_owned(), Value::Array(entries));
        rec.insert(KEY_STORED.to_owned(), Value::from(self.stored));
        rec.insert(KEY_PROTOCOL.to_owned(), Value::from(record::PROTOCOL));
        Value::Object(rec)
    }

    /// Insert a quantity of a resource
    ///
    /// The quantity merges into the first entry with the same identity, or
    /// becomes a new entry. When the capacity bound cuts the insert short,
    /// the accepted part commits and the remainder comes back as a stack;
    /// with no space at all the full quantity comes back untouched. `None`
    /// means everything was accepted.
    ///
    /// With `simulate` set, the outcome is computed without committing.
    pub fn insert(&mut self, stack: &K::Stack, amount: i64, simulate: bool) -> Option<K::Stack> {
        let merged = self.entries.iter().position(|entry| K::merge_eq(entry, stack));

        if !self.capacity.is_unbounded()
            && self.stored.saturating_add(amount) > self.capacity.value()
        {
            let space = self.capacity.value().saturating_sub(self.stored);
            if space <= 0 {
                return Some(K::with_count(stack, amount));
            }
            if !simulate {
                match merged {
                    Some(index) => K::add_count(&mut self.entries[index], space),
                    None => self.entries.push(K::with_count(stack, space)),
                }
                self.stored += space;
                self.notify_changed();
            }
            return Some(match merged {
                Some(index) => K::with_count(&self.entries[index], amount - space),
                None => K::with_count(stack, amount - space),
            });
        }

        if !simulate && amount > 0 {
            match merged {
                Some(index) => K::add_count(&mut self.entries[index], amount),
                None => self.entries.push(K::with_count(stack, amount)),
            }
            self.stored = self.stored.saturating_add(amount);
            self.notify_changed();
        }
        None
    }

    /// Extract a quantity of a resource
    ///
    /// The first entry matching `wanted` under `flags` serves the request,
    /// clamped to what it holds. An entry drained to exactly zero is
    /// removed. `None` means nothing matched.
    ///
    /// With `simulate` set, the outcome is computed without committing.
    pub fn extract(
        &mut self,
        wanted: &K::Stack,
        amount: i64,
        flags: CompareFlags,
        simulate: bool,
    ) -> Option<K::Stack> {
        let index = self
            .entries
            .iter()
            .position(|entry| K::extract_eq(entry, wanted, flags))?;

        let entry_count = K::count(&self.entries[index]);
        let removed_count = amount.min(entry_count);
        let removed = K::with_count(&self.entries[index], removed_count);

        if !simulate && removed_count > 0 {
            if entry_count - removed_count == 0 {
                self.entries.remove(index);
            } else {
                K::add_count(&mut self.entries[index], -removed_count);
            }
            self.stored = self.stored.saturating_sub(removed_count);
            self.notify_changed();
        }
        Some(removed)
    }

    /// Current entries, in insertion order
    pub fn entries(&self) -> &[K::Stack] {
        &self.entries
    }

    /// Stored total as tracked, not recomputed
    pub fn stored(&self) -> i64 {
        self.stored
    }

    /// Capacity bound
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Whether the stored total sits exactly at the capacity value
    ///
    /// Raw comparison: an unbounded ledger is never full in practice, and a
    /// beyond-full drifted ledger reads as not full.
    pub fn is_full(&self) -> bool {
        self.stored == self.capacity.value()
    }

    fn notify_changed(&self) {
        if let Some(on_change) = &self.on_change {
            on_change();
        }
    }
}

impl<K: ResourceKind> fmt::Debug for Ledger<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("entries", &self.entries)
            .field("stored", &self.stored)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
