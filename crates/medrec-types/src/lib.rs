//! Foundation types for the medrec record ledger.
//!
//! This crate defines the record kinds stored on the ledger, the composite
//! state-key scheme that keeps those kinds in disjoint key namespaces, and
//! the canonical JSON codec every data path encodes through. Every other
//! medrec crate depends on `medrec-types`.
//!
//! # Key Types
//!
//! - [`RecordKind`] — the four kinds with their key-prefix namespaces
//! - [`Record`] — trait tying a value type to its kind and identifier
//! - [`Asset`], [`Patient`], [`Doctor`], [`Prescription`] — the record values
//! - [`codec`] — deterministic, sorted-field JSON encode/decode

pub mod asset;
pub mod codec;
pub mod doctor;
pub mod error;
pub mod kind;
pub mod patient;
pub mod prescription;

pub use asset::Asset;
pub use codec::{decode, encode};
pub use doctor::Doctor;
pub use error::CodecError;
pub use kind::{Record, RecordKind};
pub use patient::Patient;
pub use prescription::Prescription;
