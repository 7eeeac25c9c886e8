//! Thread-safe ledger handle
//!
//! One lock per ledger instance: each operation holds the lock for its full
//! duration, so the merge scan, the capacity gate, and the commit of a call
//! are atomic with respect to every other handle on the same ledger.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use stockpile_core::{Capacity, CompareFlags};

use crate::kind::ResourceKind;
use crate::ledger::Ledger;
use crate::record::{self, Record};

/// Cloneable handle sharing one lock-guarded [`Ledger`]
pub struct SharedLedger<K: ResourceKind> {
    inner: Arc<Mutex<Ledger<K>>>,
}

impl<K: ResourceKind> SharedLedger<K> {
    /// Wrap a ledger
    pub fn new(ledger: Ledger<K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Load a shared ledger from its persisted record
    pub fn from_record(rec: &Record, capacity: Capacity) -> record::Result<Self> {
        Ok(Self::new(Ledger::from_record(rec, capacity)?))
    }

    /// Insert under the lock; see [`Ledger::insert`]
    pub fn insert(&self, stack: &K::Stack, amount: i64, simulate: bool) -> Option<K::Stack> {
        self.inner.lock().insert(stack, amount, simulate)
    }

    /// Extract under the lock; see [`Ledger::extract`]
    pub fn extract(
        &self,
        wanted: &K::Stack,
        amount: i64,
        flags: CompareFlags,
        simulate: bool,
    ) -> Option<K::Stack> {
        self.inner.lock().extract(wanted, amount, flags, simulate)
    }

    /// Copied snapshot of the current entries
    ///
    /// Later mutations do not show through the snapshot.
    pub fn entries(&self) -> Vec<K::Stack> {
        self.inner.lock().entries().to_vec()
    }

    /// Stored total
    pub fn stored(&self) -> i64 {
        self.inner.lock().stored()
    }

    /// Capacity bound
    pub fn capacity(&self) -> Capacity {
        self.inner.lock().capacity()
    }

    /// Whether the stored total sits exactly at the capacity value
    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }

    /// Render the persisted record under the lock
    pub fn to_record(&self) -> Record {
        self.inner.lock().to_record()
    }
}

impl<K: ResourceKind> Clone for SharedLedger<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: ResourceKind> fmt::Debug for SharedLedger<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLedger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::thread;

    use stockpile_core::{ItemStack, ItemTypeId, VariantId};

    use super::*;
    use crate::kind::ItemKind;

    fn stack(item: u32) -> ItemStack {
        ItemStack::new(ItemTypeId::new(item), 0, VariantId::new(0))
    }

    #[test]
    fn test_clones_share_state() {
        let ledger = SharedLedger::new(Ledger::<ItemKind>::new(Capacity::bounded(10)));
        let other = ledger.clone();
        other.insert(&stack(1), 3, false);
        assert_eq!(ledger.stored(), 3);
        assert_eq!(ledger.entries(), other.entries());
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let ledger = SharedLedger::new(Ledger::<ItemKind>::new(Capacity::bounded(10)));
        ledger.insert(&stack(1), 3, false);
        let snapshot = ledger.entries();
        ledger.insert(&stack(1), 4, false);
        assert_eq!(snapshot[0].count, 3);
        assert_eq!(ledger.entries()[0].count, 7);
    }

    #[test]
    fn test_concurrent_inserts_respect_capacity() {
        let ledger = SharedLedger::new(Ledger::<ItemKind>::new(Capacity::bounded(500)));
        let rejected = AtomicI64::new(0);

        thread::scope(|scope| {
            for _ in 0..8 {
                let handle = ledger.clone();
                let rejected = &rejected;
                scope.spawn(move || {
                    for _ in 0..100 {
                        if let Some(leftover) = handle.insert(&stack(1), 1, false) {
                            rejected.fetch_add(leftover.count, Ordering::Relaxed);
                        }
                    }
                });
            }
        });

        assert_eq!(ledger.stored(), 500);
        assert_eq!(rejected.load(Ordering::Relaxed), 300);
        let entries = ledger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].count, 500);
        assert!(ledger.is_full());
    }

    #[test]
    fn test_concurrent_mixed_operations_keep_totals_consistent() {
        let ledger = SharedLedger::new(Ledger::<ItemKind>::new(Capacity::UNBOUNDED));

        thread::scope(|scope| {
            for worker in 0..4u32 {
                let handle = ledger.clone();
                scope.spawn(move || {
                    for round in 0..50 {
                        handle.insert(&stack(worker), 4, false);
                        if round % 2 == 0 {
                            handle.extract(&stack(worker), 1, CompareFlags::default(), false);
                        }
                    }
                });
            }
        });

        let entries = ledger.entries();
        let sum: i64 = entries.iter().map(|entry| entry.count).sum();
        assert_eq!(ledger.stored(), sum);
        assert_eq!(ledger.stored(), 4 * (200 - 25));
        assert_eq!(entries.len(), 4);
    }
}
