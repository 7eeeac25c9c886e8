//! Continuous resource entries and their native record form
//!
//! A [`FluidStack`] pairs a named resource with an amount. Unlike discrete
//! entries, a fluid carries its own record codec: the entry form with keys
//! `Fluid`, `Amount`, and `Tag` is written and read here, and the store
//! crate embeds those records verbatim in its persisted lists.

use serde_json::Value;

use crate::flags::CompareFlags;
use crate::ids::FluidId;

const KEY_FLUID: &str = "Fluid";
const KEY_AMOUNT: &str = "Amount";
const KEY_TAG: &str = "Tag";

/// A counted quantity of one continuous resource
#[derive(Debug, Clone, PartialEq)]
pub struct FluidStack {
    /// Resource name
    pub fluid: FluidId,
    /// Stored quantity
    pub amount: i64,
    /// Extra-data blob, part of the merge identity
    pub data: Option<Value>,
}

impl FluidStack {
    /// Create a new stack with no extra data
    pub fn new(fluid: FluidId, amount: i64) -> Self {
        Self {
            fluid,
            amount,
            data: None,
        }
    }

    /// Attach an extra-data blob
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Copy of this stack with a different amount
    #[must_use]
    pub fn with_amount(&self, amount: i64) -> Self {
        let mut copy = self.clone();
        copy.amount = amount;
        copy
    }

    /// Merge equality: same fluid and extra data
    ///
    /// Amounts are ignored. Two mergeable stacks combine into one ledger
    /// entry.
    pub fn merge_eq(&self, other: &FluidStack) -> bool {
        self.fluid == other.fluid && self.data == other.data
    }

    /// Flag-directed match against a reference stack
    ///
    /// The fluid name is always compared; data and amount join the
    /// comparison only when the corresponding flag is set. The variant flag
    /// has no effect on continuous resources.
    pub fn matches(&self, other: &FluidStack, flags: CompareFlags) -> bool {
        if self.fluid != other.fluid {
            return false;
        }
        if flags.contains(CompareFlags::DATA) && self.data != other.data {
            return false;
        }
        if flags.contains(CompareFlags::QUANTITY) && self.amount != other.amount {
            return false;
        }
        true
    }

    /// Encode into the native entry record form
    ///
    /// The `Tag` key is written only when extra data is present.
    pub fn to_record(&self) -> Value {
        let mut entry = serde_json::Map::new();
        entry.insert(KEY_FLUID.to_owned(), Value::from(self.fluid.as_str()));
        entry.insert(KEY_AMOUNT.to_owned(), Value::from(self.amount));
        if let Some(data) = &self.data {
            entry.insert(KEY_TAG.to_owned(), data.clone());
        }
        Value::Object(entry)
    }

    /// Decode from the native entry record form
    ///
    /// Returns `None` when the record does not describe a resolvable fluid:
    /// missing or empty name, ill-typed fields, or a negative amount. A
    /// missing amount reads as zero.
    pub fn from_record(record: &Value) -> Option<FluidStack> {
        let entry = record.as_object()?;
        let name = entry.get(KEY_FLUID)?.as_str()?;
        if name.is_empty() {
            return None;
        }
        let amount = match entry.get(KEY_AMOUNT) {
            Some(value) => value.as_i64()?,
            None => 0,
        };
        if amount < 0 {
            return None;
        }
        Some(FluidStack {
            fluid: FluidId::new(name),
            amount,
            data: entry.get(KEY_TAG).cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_stack() -> FluidStack {
        FluidStack::new(FluidId::new("water"), 1000)
    }

    #[test]
    fn test_merge_eq_ignores_amount() {
        let a = create_test_stack();
        let b = a.with_amount(1);
        assert!(a.merge_eq(&b));
    }

    #[test]
    fn test_merge_eq_respects_data() {
        let a = create_test_stack();
        let tagged = create_test_stack().with_data(json!({"purity": 3}));
        assert!(!a.merge_eq(&tagged));
        assert!(tagged.merge_eq(&tagged.clone()));
    }

    #[test]
    fn test_matches_fluid_always_compared() {
        let a = create_test_stack();
        let lava = FluidStack::new(FluidId::new("lava"), 1000);
        assert!(!a.matches(&lava, CompareFlags::empty()));
        assert!(a.matches(&a.with_amount(1), CompareFlags::empty()));
    }

    #[test]
    fn test_matches_variant_flag_is_inert() {
        let a = create_test_stack();
        let b = a.with_amount(5).with_data(json!({"purity": 3}));
        assert!(a.matches(&b, CompareFlags::VARIANT));
        assert!(!a.matches(&b, CompareFlags::DATA));
        assert!(!a.matches(&b, CompareFlags::QUANTITY));
    }

    #[test]
    fn test_record_roundtrip() {
        let a = create_test_stack().with_data(json!({"purity": 3}));
        let record = a.to_record();
        assert_eq!(record["Fluid"], "water");
        assert_eq!(record["Amount"], 1000);
        let back = FluidStack::from_record(&record).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_tag_key_omitted_without_data() {
        let record = create_test_stack().to_record();
        assert!(record.get("Tag").is_none());
    }

    #[test]
    fn test_from_record_rejects_unresolvable() {
        assert!(FluidStack::from_record(&json!(null)).is_none());
        assert!(FluidStack::from_record(&json!({})).is_none());
        assert!(FluidStack::from_record(&json!({"Fluid": ""})).is_none());
        assert!(FluidStack::from_record(&json!({"Fluid": 7})).is_none());
        assert!(FluidStack::from_record(&json!({"Fluid": "water", "Amount": "lots"})).is_none());
        assert!(FluidStack::from_record(&json!({"Fluid": "water", "Amount": -1})).is_none());
    }

    #[test]
    fn test_from_record_missing_amount_reads_zero() {
        let stack = FluidStack::from_record(&json!({"Fluid": "water"})).unwrap();
        assert_eq!(stack.amount, 0);
        assert_eq!(stack.fluid.as_str(), "water");
    }
}
