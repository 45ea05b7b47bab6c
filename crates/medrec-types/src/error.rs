use thiserror::Error;

/// Errors produced by the canonical codec.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}
