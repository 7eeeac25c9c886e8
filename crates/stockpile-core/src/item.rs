//! Discrete resource entries
//!
//! An [`ItemStack`] pairs a resource identity with a count. Identity is the
//! item type, the variant discriminator, and the optional extra-data blob.
//! The capability blob rides along for persistence but never participates in
//! any comparison.

use serde_json::Value;

use crate::flags::CompareFlags;
use crate::ids::{ItemTypeId, VariantId};

/// A counted quantity of one discrete resource
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    /// Resource type
    pub item: ItemTypeId,
    /// Stored quantity
    pub count: i64,
    /// Sub-type discriminator
    pub variant: VariantId,
    /// Extra-data blob, part of the merge identity
    pub data: Option<Value>,
    /// Capability blob, persisted but never compared
    pub caps: Option<Value>,
}

impl ItemStack {
    /// Create a new stack with no extra data and no capabilities
    pub fn new(item: ItemTypeId, count: i64, variant: VariantId) -> Self {
        Self {
            item,
            count,
            variant,
            data: None,
            caps: None,
        }
    }

    /// Attach an extra-data blob
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach a capability blob
    #[must_use]
    pub fn with_caps(mut self, caps: Value) -> Self {
        self.caps = Some(caps);
        self
    }

    /// Copy of this stack with a different count
    #[must_use]
    pub fn with_count(&self, count: i64) -> Self {
        let mut copy = self.clone();
        copy.count = count;
        copy
    }

    /// Merge equality: same item, variant, and extra data
    ///
    /// Counts and capability blobs are ignored. Two mergeable stacks combine
    /// into one ledger entry.
    pub fn merge_eq(&self, other: &ItemStack) -> bool {
        self.item == other.item && self.variant == other.variant && self.data == other.data
    }

    /// Flag-directed match against a reference stack
    ///
    /// The item type is always compared; variant, data, and count join the
    /// comparison only when the corresponding flag is set.
    pub fn matches(&self, other: &ItemStack, flags: CompareFlags) -> bool {
        if self.item != other.item {
            return false;
        }
        if flags.contains(CompareFlags::VARIANT) && self.variant != other.variant {
            return false;
        }
        if flags.contains(CompareFlags::DATA) && self.data != other.data {
            return false;
        }
        if flags.contains(CompareFlags::QUANTITY) && self.count != other.count {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_stack() -> ItemStack {
        ItemStack::new(ItemTypeId::new(1), 32, VariantId::new(0))
    }

    #[test]
    fn test_merge_eq_ignores_count() {
        let a = create_test_stack();
        let b = a.with_count(7);
        assert!(a.merge_eq(&b));
    }

    #[test]
    fn test_merge_eq_ignores_caps() {
        let a = create_test_stack();
        let b = create_test_stack().with_caps(json!({"energy": 100}));
        assert!(a.merge_eq(&b));
    }

    #[test]
    fn test_merge_eq_respects_variant_and_data() {
        let a = create_test_stack();
        let other_variant = ItemStack::new(ItemTypeId::new(1), 32, VariantId::new(5));
        assert!(!a.merge_eq(&other_variant));

        let with_data = create_test_stack().with_data(json!({"label": "x"}));
        assert!(!a.merge_eq(&with_data));
        assert!(with_data.merge_eq(&with_data.clone()));
    }

    #[test]
    fn test_matches_item_always_compared() {
        let a = create_test_stack();
        let other_item = ItemStack::new(ItemTypeId::new(2), 32, VariantId::new(0));
        assert!(!a.matches(&other_item, CompareFlags::empty()));
        assert!(a.matches(&a.with_count(1), CompareFlags::empty()));
    }

    #[test]
    fn test_matches_variant_flag() {
        let a = create_test_stack();
        let other_variant = ItemStack::new(ItemTypeId::new(1), 32, VariantId::new(9));
        assert!(a.matches(&other_variant, CompareFlags::empty()));
        assert!(!a.matches(&other_variant, CompareFlags::VARIANT));
    }

    #[test]
    fn test_matches_data_flag() {
        let a = create_test_stack();
        let with_data = create_test_stack().with_data(json!({"label": "x"}));
        assert!(a.matches(&with_data, CompareFlags::empty()));
        assert!(!a.matches(&with_data, CompareFlags::DATA));
    }

    #[test]
    fn test_matches_quantity_flag() {
        let a = create_test_stack();
        let fewer = a.with_count(1);
        assert!(a.matches(&fewer, CompareFlags::VARIANT | CompareFlags::DATA));
        assert!(!a.matches(&fewer, CompareFlags::QUANTITY));
        assert!(a.matches(&a.clone(), CompareFlags::QUANTITY));
    }

    #[test]
    fn test_matches_caps_never_compared() {
        let a = create_test_stack();
        let with_caps = create_test_stack().with_caps(json!({"tank": 4}));
        let all = CompareFlags::VARIANT | CompareFlags::DATA | CompareFlags::QUANTITY;
        assert!(a.matches(&with_caps, all));
    }

    #[test]
    fn test_with_count_copies() {
        let a = create_test_stack().with_data(json!({"label": "x"}));
        let b = a.with_count(5);
        assert_eq!(b.count, 5);
        assert_eq!(b.item, a.item);
        assert_eq!(b.data, a.data);
        assert_eq!(a.count, 32);
    }
}
