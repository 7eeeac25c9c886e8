//! Storage capacity bound with an unbounded sentinel
//!
//! Capacity is a signed count. The single value `-1` means unbounded; every
//! other value is taken literally, so a bounded capacity of zero (or any
//! value below `-1`) admits nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum total quantity a ledger may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capacity(i64);

impl Capacity {
    /// The unbounded sentinel
    pub const UNBOUNDED: Capacity = Capacity(-1);

    /// Create a bounded capacity
    ///
    /// The value is taken as-is; only `-1` is special. Passing `-1` here
    /// yields [`Capacity::UNBOUNDED`].
    pub const fn bounded(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw capacity value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Check whether this capacity admits any total
    ///
    /// True only for the exact sentinel value `-1`. Values below `-1` are
    /// bounded capacities that no non-negative total can fit under.
    pub const fn is_unbounded(&self) -> bool {
        self.0 == -1
    }
}

impl From<i64> for Capacity {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "unbounded")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
