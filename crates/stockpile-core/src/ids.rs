//! Identifier newtypes for resources and media
//!
//! Discrete resources are identified by a numeric type id plus a variant id;
//! continuous resources are identified by name. Media carry a numeric type id
//! used to look up their capacity at registration time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a discrete resource type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ItemTypeId(u32);

impl ItemTypeId {
    /// Create a new item type id
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemTypeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Sub-type discriminator of a discrete resource
///
/// Two entries with the same [`ItemTypeId`] but different variants are
/// distinct resources for merge purposes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct VariantId(u32);

impl VariantId {
    /// Create a new variant id
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for VariantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "variant-{}", self.0)
    }
}

/// Name identifier of a continuous resource
///
/// Resolution is by exact name match; an empty name never resolves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FluidId(String);

impl FluidId {
    /// Create a new fluid id from a name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FluidId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for FluidId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl fmt::Display for FluidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier of a medium type
///
/// Registered once per type with a capacity resolver; see the medium
/// registry in the store crate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MediumTypeId(u32);

impl MediumTypeId {
    /// Create a new medium type id
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for MediumTypeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MediumTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "medium-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_id_roundtrip() {
        let id = ItemTypeId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(ItemTypeId::from(42), id);
    }

    #[test]
    fn test_display_prefixes() {
        assert_eq!(ItemTypeId::new(7).to_string(), "item-7");
        assert_eq!(VariantId::new(3).to_string(), "variant-3");
        assert_eq!(MediumTypeId::new(1).to_string(), "medium-1");
        assert_eq!(FluidId::new("water").to_string(), "water");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ItemTypeId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let back: ItemTypeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_fluid_id_from_str() {
        let id = FluidId::from("lava");
        assert_eq!(id.as_str(), "lava");
        assert_eq!(FluidId::from(String::from("lava")), id);
    }

    #[test]
    fn test_ids_are_ordered() {
        assert!(MediumTypeId::new(1) < MediumTypeId::new(2));
        assert!(ItemTypeId::new(10) > ItemTypeId::new(9));
    }
}
