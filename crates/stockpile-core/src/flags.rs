//! Comparison flag set for extraction equality
//!
//! Extraction matches an entry against a reference stack under a
//! caller-chosen set of fields. Merge equality never consults these flags;
//! it always compares the full identity.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Bit set selecting which fields participate in an extraction match
///
/// The primary resource identity (item type or fluid name) is always
/// compared regardless of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompareFlags(u32);

impl CompareFlags {
    /// Compare the variant discriminator
    pub const VARIANT: CompareFlags = CompareFlags(1);

    /// Compare the attached extra-data blob
    pub const DATA: CompareFlags = CompareFlags(1 << 1);

    /// Compare the stored quantity
    pub const QUANTITY: CompareFlags = CompareFlags(1 << 2);

    /// Empty flag set: only the primary identity is compared
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Get the raw bit value
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Check whether every bit of `other` is set in `self`
    pub const fn contains(&self, other: CompareFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for CompareFlags {
    /// Variant and data comparison, the identity-exact default
    fn default() -> Self {
        Self(Self::VARIANT.0 | Self::DATA.0)
    }
}

impl BitOr for CompareFlags {
    type Output = CompareFlags;

    fn bitor(self, rhs: CompareFlags) -> CompareFlags {
        CompareFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for CompareFlags {
    fn bitor_assign(&mut self, rhs: CompareFlags) {
        self.0 |= rhs.0;
    }
}
