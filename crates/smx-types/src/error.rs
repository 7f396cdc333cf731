use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("layer duration must be non-zero")]
    ZeroLayerDuration,

    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    InvalidDate { input: String },
}
