//! Persisted record layout and codec helpers
//!
//! A ledger persists as a single structured record with a fixed field
//! layout: a protocol marker, one entry list keyed by storage kind, and an
//! authoritative stored total.
//!
//! The record layout provides:
//! - One entry-list key per kind (`Items` or `Fluids`), never both
//! - A `Stored` total that is read back verbatim, never recomputed
//! - A `Protocol` marker written for forward compatibility and ignored on
//!   read

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured record form used for persistence and sharing
pub type Record = Value;

/// Protocol marker written into every fresh and shared record
pub const PROTOCOL: i64 = 1;

/// Field holding the protocol marker
pub const KEY_PROTOCOL: &str = "Protocol";

/// Field holding the discrete entry list
pub const KEY_ITEMS: &str = "Items";

/// Field holding the continuous entry list
pub const KEY_FLUIDS: &str = "Fluids";

/// Field holding the authoritative stored total
pub const KEY_STORED: &str = "Stored";

/// Unified error type for record operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A required field is absent
    #[error("Missing record field: {0}")]
    MissingField(&'static str),

    /// A required field has the wrong shape
    #[error("Invalid record field: {0}")]
    InvalidField(&'static str),

    /// The byte form could not be parsed into a record
    #[error("Malformed record: {0}")]
    Malformed(String),

    /// The record could not be rendered into bytes
    #[error("Failed to serialize record: {0}")]
    Serialize(String),
}

/// Standard Result type for record operations
pub type Result<T> = std::result::Result<T, RecordError>;

/// Which of the two ledger kinds a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
    /// Discrete resources, persisted under the `Items` key
    Items,
    /// Continuous resources, persisted under the `Fluids` key
    Fluids,
}

impl StorageKind {
    /// The record field holding this kind's entry list
    pub const fn entry_list_key(&self) -> &'static str {
        match self {
            StorageKind::Items => KEY_ITEMS,
            StorageKind::Fluids => KEY_FLUIDS,
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Items => write!(f, "items"),
            StorageKind::Fluids => write!(f, "fluids"),
        }
    }
}

/// Create an empty record for a kind
///
/// The record carries an empty entry list, a zero stored total, and the
/// protocol marker. Every medium gets one of these at preparation time.
pub fn fresh_record(kind: StorageKind) -> Record {
    let mut record = serde_json::Map::new();
    record.insert(kind.entry_list_key().to_owned(), Value::Array(Vec::new()));
    record.insert(KEY_STORED.to_owned(), Value::from(0));
    record.insert(KEY_PROTOCOL.to_owned(), Value::from(PROTOCOL));
    Value::Object(record)
}

/// Check whether a record carries the fields a ledger needs
///
/// Presence of the kind's entry list and the stored total is enough; the
/// protocol marker is not required.
pub fn is_valid(record: &Record, kind: StorageKind) -> bool {
    record.get(kind.entry_list_key()).is_some() && record.get(KEY_STORED).is_some()
}

/// Read the stored total out of a record
///
/// A missing or ill-typed total reads as zero. The value is never
/// reconciled against the entry list.
pub fn stored_of(record: &Record) -> i64 {
    record.get(KEY_STORED).and_then(Value::as_i64).unwrap_or(0)
}

/// Build the reduced record shared with observers
///
/// Only the stored total travels: the entry list is replaced by an empty
/// one, and the protocol marker is rewritten.
pub fn share_record(record: &Record, kind: StorageKind) -> Record {
    let mut shared = serde_json::Map::new();
    shared.insert(KEY_STORED.to_owned(), Value::from(stored_of(record)));
    shared.insert(kind.entry_list_key().to_owned(), Value::Array(Vec::new()));
    shared.insert(KEY_PROTOCOL.to_owned(), Value::from(PROTOCOL));
    Value::Object(shared)
}

/// Serialize a record to bytes
pub fn to_bytes(record: &Record) -> Result<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| RecordError::Serialize(e.to_string()))
}

/// Deserialize a record from bytes
pub fn from_bytes(bytes: &[u8]) -> Result<Record> {
    serde_json::from_slice(bytes).map_err(|e| RecordError::Malformed(e.to_string()))
}
