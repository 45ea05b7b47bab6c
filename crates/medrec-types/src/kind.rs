use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// The four record kinds stored on the ledger.
///
/// Each kind owns a disjoint slice of the key namespace through its
/// [`key_prefix`](Self::key_prefix), so records of different kinds can never
/// alias the same ledger slot even when callers reuse identifier strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Asset,
    Patient,
    Doctor,
    Prescription,
}

impl RecordKind {
    /// Display name, as carried in error payloads ("Asset asset1 does not exist").
    pub const fn name(&self) -> &'static str {
        match self {
            RecordKind::Asset => "Asset",
            RecordKind::Patient => "Patient",
            RecordKind::Doctor => "Doctor",
            RecordKind::Prescription => "Prescription",
        }
    }

    /// Key-namespace tag prepended to every identifier of this kind.
    ///
    /// The trailing `:` cannot appear in another kind's prefix as a proper
    /// prefix, so prefix scans over one kind never leak into another.
    pub const fn key_prefix(&self) -> &'static str {
        match self {
            RecordKind::Asset => "asset:",
            RecordKind::Patient => "patient:",
            RecordKind::Doctor => "doctor:",
            RecordKind::Prescription => "prescription:",
        }
    }

    /// Composite state key for a caller-supplied identifier.
    pub fn state_key(&self, id: &str) -> String {
        format!("{}{id}", self.key_prefix())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value type stored on the ledger under a caller-supplied identifier.
///
/// Implementations must serialize deterministically: the derived serde
/// encoding emits fields in declaration order, and every record struct in
/// this crate declares its fields in alphabetical order of their serialized
/// names. Identical field values therefore always produce identical bytes.
///
/// The identifier is part of the record and immutable: no operation changes
/// a record's key after creation.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The kind this value type belongs to.
    const KIND: RecordKind;

    /// The caller-supplied identifier (without the kind prefix).
    fn id(&self) -> &str;

    /// Full composite key under which this record is stored.
    fn state_key(&self) -> String {
        Self::KIND.state_key(self.id())
    }
}
