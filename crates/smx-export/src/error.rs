use thiserror::Error;

/// Errors from rendering rewards.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("layer {layer_id} has no representable start time")]
    TimestampOutOfRange { layer_id: i64 },

    #[error("unknown csv format {0:?}: expected generic or tokentax")]
    UnknownFormat(String),
}

/// Result alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
