use medrec_store::StoreError;
use medrec_types::CodecError;
use thiserror::Error;

/// Errors from repository operations.
///
/// Every precondition violation carries the record kind name and the
/// offending identifier, so callers (and the logging boundary) can report
/// them without re-deriving context.
#[derive(Debug, Error)]
pub enum RepoError {
    /// A key required to be absent is present.
    #[error("{kind} {key} already exists")]
    AlreadyExists { kind: &'static str, key: String },

    /// A key required to exist does not.
    #[error("{kind} {key} does not exist")]
    NotFound { kind: &'static str, key: String },

    /// Stored bytes at the key failed to decode as the expected kind.
    ///
    /// With kind-prefixed keys this only fires on out-of-band writes to the
    /// ledger, but it is classified rather than leaking a raw codec error.
    #[error("corrupt {kind} record at {key}: {source}")]
    CorruptRecord {
        kind: &'static str,
        key: String,
        #[source]
        source: CodecError,
    },

    /// A record value failed to encode.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The ledger store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RepoError {
    /// The record kind involved, if this is a record-level error.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            RepoError::AlreadyExists { kind, .. }
            | RepoError::NotFound { kind, .. }
            | RepoError::CorruptRecord { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// The offending identifier, if this is a record-level error.
    pub fn key(&self) -> Option<&str> {
        match self {
            RepoError::AlreadyExists { key, .. }
            | RepoError::NotFound { key, .. }
            | RepoError::CorruptRecord { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Result alias for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;
