//! Sorted key-value ledger storage for medrec.
//!
//! This crate defines the contract the record repository consumes from its
//! externally provided ledger: durable point get/put/delete plus a lexically
//! ordered range scan. Consensus, transaction ordering, and conflict
//! detection live behind this boundary and are not modeled here.
//!
//! # Storage Backends
//!
//! All backends implement the [`LedgerStore`] trait:
//!
//! - [`MemoryLedgerStore`] — `BTreeMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Absence is a valid answer, never an error: `get` on a missing key
//!    returns `Ok(None)`.
//! 2. Range scans traverse lexically ascending, start inclusive / end
//!    exclusive; empty bounds mean unbounded on that side.
//! 3. The store never interprets values — it is a pure byte-slot store.
//! 4. All backend errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryLedgerStore;
pub use traits::LedgerStore;
