//! Kind abstraction binding resource stacks to the ledger algorithm
//!
//! The ledger is generic over a [`ResourceKind`]: a type-level marker that
//! teaches it how to count, copy, compare, and persist one family of
//! stacks. Two kinds exist, [`ItemKind`] for discrete resources and
//! [`FluidKind`] for continuous ones, and nothing else needs to know which
//! is which.

use serde_json::Value;

use stockpile_core::{CompareFlags, FluidStack, ItemStack, ItemTypeId, VariantId};

use crate::record::StorageKind;

/// Field holding a discrete entry's resource type
pub const KEY_TYPE: &str = "Type";

/// Field holding a discrete entry's quantity
pub const KEY_QUANTITY: &str = "Quantity";

/// Field holding a discrete entry's variant discriminator
pub const KEY_DAMAGE: &str = "Damage";

/// Field holding a discrete entry's extra-data blob
pub const KEY_NBT: &str = "NBT";

/// Field holding a discrete entry's capability blob
pub const KEY_CAPS: &str = "Caps";

/// Operations a stack family provides to the ledger
///
/// Decoding is lenient by contract: [`ResourceKind::decode_entry`] answers
/// `None` for any entry that does not resolve to a usable stack, and the
/// ledger drops such entries without failing the load.
pub trait ResourceKind {
    /// Stack type this kind manages
    type Stack: Clone + std::fmt::Debug;

    /// Record kind the ledger persists under
    const KIND: StorageKind;

    /// Quantity carried by a stack
    fn count(stack: &Self::Stack) -> i64;

    /// Copy of a stack with a different quantity
    fn with_count(stack: &Self::Stack, count: i64) -> Self::Stack;

    /// Adjust a stack's quantity in place, saturating at the `i64` bounds
    fn add_count(stack: &mut Self::Stack, delta: i64);

    /// Merge equality, quantity ignored
    fn merge_eq(a: &Self::Stack, b: &Self::Stack) -> bool;

    /// Flag-directed extraction match
    fn extract_eq(entry: &Self::Stack, wanted: &Self::Stack, flags: CompareFlags) -> bool;

    /// Encode a stack into its entry record form
    fn encode_entry(stack: &Self::Stack) -> Value;

    /// Decode a stack from its entry record form, `None` if unresolvable
    fn decode_entry(entry: &Value) -> Option<Self::Stack>;
}

/// Discrete resources persisted under the `Items` list
///
/// Entry records use the keys `Type`, `Quantity`, and `Damage`, plus `NBT`
/// and `Caps` when the corresponding blobs are present.
#[derive(Debug, Clone, Copy)]
pub struct ItemKind;

impl ResourceKind for ItemKind {
    type Stack = ItemStack;

    const KIND: StorageKind = StorageKind::Items;

    fn count(stack: &ItemStack) -> i64 {
        stack.count
    }

    fn with_count(stack: &ItemStack, count: i64) -> ItemStack {
        stack.with_count(count)
    }

    fn add_count(stack: &mut ItemStack, delta: i64) {
        stack.count = stack.count.saturating_add(delta);
    }

    fn merge_eq(a: &ItemStack, b: &ItemStack) -> bool {
        a.merge_eq(b)
    }

    fn extract_eq(entry: &ItemStack, wanted: &ItemStack, flags: CompareFlags) -> bool {
        entry.matches(wanted, flags)
    }

    fn encode_entry(stack: &ItemStack) -> Value {
        let mut entry = serde_json::Map::new();
        entry.insert(KEY_TYPE.to_owned(), Value::from(stack.item.value()));
        entry.insert(KEY_QUANTITY.to_owned(), Value::from(stack.count));
        entry.insert(KEY_DAMAGE.to_owned(), Value::from(stack.variant.value()));
        if let Some(data) = &stack.data {
            entry.insert(KEY_NBT.to_owned(), data.clone());
        }
        if let Some(caps) = &stack.caps {
            entry.insert(KEY_CAPS.to_owned(), caps.clone());
        }
        Value::Object(entry)
    }

    /// Decode a discrete entry
    ///
    /// `Type` must be an integer within the id range. A missing `Quantity`
    /// reads as zero and a missing `Damage` as variant zero, but a negative
    /// quantity or an ill-typed present field makes the entry unresolvable.
    fn decode_entry(entry: &Value) -> Option<ItemStack> {
        let entry = entry.as_object()?;
        let item = u32::try_from(entry.get(KEY_TYPE)?.as_i64()?).ok()?;
        let count = match entry.get(KEY_QUANTITY) {
            Some(value) => value.as_i64()?,
            None => 0,
        };
        if count < 0 {
            return None;
        }
        let variant = match entry.get(KEY_DAMAGE) {
            Some(value) => u32::try_from(value.as_i64()?).ok()?,
            None => 0,
        };
        let mut stack = ItemStack::new(ItemTypeId::new(item), count, VariantId::new(variant));
        stack.data = entry.get(KEY_NBT).cloned();
        stack.caps = entry.get(KEY_CAPS).cloned();
        Some(stack)
    }
}

/// Continuous resources persisted under the `Fluids` list
///
/// Entry records are the native [`FluidStack`] form, embedded verbatim.
#[derive(Debug, Clone, Copy)]
pub struct FluidKind;

impl ResourceKind for FluidKind {
    type Stack = FluidStack;

    const KIND: StorageKind = StorageKind::Fluids;

    fn count(stack: &FluidStack) -> i64 {
        stack.amount
    }

    fn with_count(stack: &FluidStack, count: i64) -> FluidStack {
        stack.with_amount(count)
    }

    fn add_count(stack: &mut FluidStack, delta: i64) {
        stack.amount = stack.amount.saturating_add(delta);
    }

    fn merge_eq(a: &FluidStack, b: &FluidStack) -> bool {
        a.merge_eq(b)
    }

    fn extract_eq(entry: &FluidStack, wanted: &FluidStack, flags: CompareFlags) -> bool {
        entry.matches(wanted, flags)
    }

    fn encode_entry(stack: &FluidStack) -> Value {
        stack.to_record()
    }

    fn decode_entry(entry: &Value) -> Option<FluidStack> {
        FluidStack::from_record(entry)
    }
}
