//! Named-operation registry for the medrec repositories.
//!
//! An external invocation router delivers operations by name with string
//! arguments. This crate replaces annotation-style dispatch with an explicit
//! table built at startup: each [`Operation`] pairs a name with its declared
//! side-effect class ([`Effect`]) and a handler closing over the shared
//! repositories.
//!
//! [`Registry::invoke`] is also the observability boundary: the same
//! structured fields carried in a returned error (operation, kind, key) are
//! logged there exactly once, never inside repository operations.

pub mod context;
pub mod error;
pub mod operations;
pub mod registry;

pub use context::RepositoryContext;
pub use error::{RegistryError, RegistryResult};
pub use registry::{Effect, Handler, Operation, Registry};
