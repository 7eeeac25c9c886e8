//! # Stockpile Core - foundation types for quantity ledgers
//!
//! **Purpose**: Define the resource-entry types, identifier newtypes, and
//! comparison semantics shared by every ledger kind.
//!
//! This crate carries pure data and the two equality predicates of the
//! domain; it knows nothing about ledgers, persisted records, or media.
//!
//! ## Core Concepts
//!
//! - **Resource entries**: an identity plus a non-negative count. The
//!   discrete kind ([`ItemStack`]) identifies resources by a numeric type id,
//!   a variant id, and an optional extra-data blob; the continuous kind
//!   ([`FluidStack`]) identifies resources by name.
//! - **Merge equality**: identity match ignoring count, used to decide
//!   whether an inserted quantity combines with an existing entry.
//! - **Extraction equality**: caller-configurable match via [`CompareFlags`],
//!   used to decide whether an entry satisfies an extract request.
//! - **Capacity**: a signed bound with an unbounded sentinel ([`Capacity`]).
//!
//! ## What's NOT in this crate
//!
//! - The ledger algorithm and persisted-record codec (`stockpile-store`)
//! - Medium registration and capacity resolution (`stockpile-store`)

#![forbid(unsafe_code)]

/// Storage capacity bound with an unbounded sentinel
pub mod capacity;

/// Comparison flag set for extraction equality
pub mod flags;

/// Continuous resource entries and their native record form
pub mod fluid;

/// Identifier newtypes for resources and media
pub mod ids;

/// Discrete resource entries
pub mod item;

pub use capacity::Capacity;
pub use flags::CompareFlags;
pub use fluid::FluidStack;
pub use ids::{FluidId, ItemTypeId, MediumTypeId, VariantId};
pub use item::ItemStack;
