//! The record repository: the lifecycle contract over the ledger store.
//!
//! One generic [`Repository`] enforces the same existence-gated lifecycle for
//! every record kind: a key is created only while absent, and read, updated,
//! or deleted only while present. Each key independently cycles
//! Absent → Present → Absent; create is the only Absent→Present transition,
//! delete the only Present→Absent one, and any key may be recreated after
//! deletion.
//!
//! The repository is stateless: all state lives in the injected
//! [`LedgerStore`](medrec_store::LedgerStore), and each operation runs within
//! whatever transaction context the caller's ledger provides. There is no
//! internal locking, retry, or timeout.
//!
//! Only the Asset kind has mutation operations (`update`, `transfer`); the
//! other kinds are create/read/delete only. This asymmetry is deliberate,
//! documented behavior.

pub mod error;
pub mod repository;

pub use error::{RepoError, RepoResult};
pub use repository::Repository;
