//! # Stockpile Store - capacity-bounded quantity ledgers
//!
//! **Purpose**: Hold counted resources in mergeable entries under a capacity
//! bound, persist them as self-describing records, and resolve medium
//! capacities through a registry.
//!
//! ## Core Concepts
//!
//! - **Ledger**: a flat entry list plus an authoritative stored total, gated
//!   by a [`Capacity`](stockpile_core::Capacity). One generic algorithm
//!   serves both resource families; [`ItemLedger`] and [`FluidLedger`] are
//!   its two instantiations.
//! - **Records**: every ledger loads from and renders into a structured
//!   record with a fixed field layout, plus a reduced share form carrying
//!   only the stored total.
//! - **Media**: typed carriers for records. The [`MediumRegistry`] resolves
//!   their capacities and prepares fresh records.
//! - **Sharing**: [`SharedLedger`] puts one lock around a ledger so handles
//!   on many threads mutate it safely.
//!
//! ## Usage
//!
//! ```
//! use stockpile_core::{Capacity, ItemStack, ItemTypeId, VariantId};
//! use stockpile_store::ItemLedger;
//!
//! let mut ledger = ItemLedger::new(Capacity::bounded(64));
//! let ore = ItemStack::new(ItemTypeId::new(7), 0, VariantId::new(0));
//!
//! assert!(ledger.insert(&ore, 40, false).is_none());
//! let leftover = ledger.insert(&ore, 40, false);
//! assert_eq!(leftover.map(|stack| stack.count), Some(16));
//! assert!(ledger.is_full());
//! ```

#![forbid(unsafe_code)]

/// Kind abstraction binding resource stacks to the ledger algorithm
pub mod kind;

/// The capacity-bounded, mergeable quantity ledger
pub mod ledger;

/// Persisted record layout and codec helpers
pub mod record;

/// Medium registration and record preparation
pub mod registry;

/// Thread-safe ledger handle
pub mod shared;

pub use kind::{FluidKind, ItemKind, ResourceKind};
pub use ledger::{ChangeCallback, Ledger};
pub use record::{Record, RecordError, StorageKind};
pub use registry::{CapacityFn, Medium, MediumRegistry};
pub use shared::SharedLedger;

/// Ledger over discrete resources
pub type ItemLedger = Ledger<ItemKind>;

/// Ledger over continuous resources
pub type FluidLedger = Ledger<FluidKind>;
