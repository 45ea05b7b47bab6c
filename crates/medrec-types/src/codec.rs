//! Canonical JSON codec for ledger values.
//!
//! The ledger model requires that identical field values always produce
//! identical bytes, because multiple nodes must compute byte-equal writes for
//! the same operation. Record structs declare their fields in alphabetical
//! order of their serialized names, and `serde_json` emits struct fields in
//! declaration order, so the encoded form is sorted-key JSON with no
//! formatting variance.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CodecError;

/// Encode a value to its canonical JSON bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(value).map_err(CodecError::Encode)
}

/// Decode a value from canonical JSON bytes.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Decode)
}
