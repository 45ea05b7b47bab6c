use medrec_repo::RepoError;
use thiserror::Error;

/// Errors from registry dispatch.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No operation registered under this name.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The operation received the wrong number of arguments.
    #[error("{operation} expects {expected} argument(s), got {actual}")]
    BadArity {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An argument failed to parse (e.g. a non-integer size).
    #[error("{operation}: invalid argument {argument}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        argument: &'static str,
        reason: String,
    },

    /// The underlying repository operation failed.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// A result value failed to serialize.
    #[error("result serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for registry dispatch.
pub type RegistryResult<T> = Result<T, RegistryError>;
