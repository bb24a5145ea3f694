use std::io;

use thiserror::Error;

/// Library-wide error type for shelfsort operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog file could not be opened.
    #[error("Failed to open catalog '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Catalog bytes are not valid JSON or do not match the product shape.
    #[error("Failed to decode product catalog: {0}")]
    Decode(#[from] serde_json::Error),

    /// Requested sort criterion is absent from the registry.
    #[error("Sorting strategy '{0}' is not registered")]
    StrategyNotFound(String),

    /// Underlying I/O failure while writing a report.
    #[error(transparent)]
    Io(#[from] io::Error),
}
