use serde::Serialize;
use thiserror::Error;

/// Convenience result type used across the crate.
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Error type returned by loading, reporting and session functions.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Underlying I/O error (e.g. dataset file not found, closed terminal).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The city catalog file could not be decoded.
    #[error("catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// The input does not have the shape every trip dataset must have.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A statistic that does not tolerate an absent column was asked for one.
    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// Severity classification used for observer callbacks and for deciding how far an error
/// propagates through the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LoadSeverity {
    /// The data itself is unusable; the run stops.
    Error,
    /// Infrastructure failure (typically I/O); only the current iteration is abandoned.
    Critical,
}

impl ExplorerError {
    /// Classify this error.
    pub fn severity(&self) -> LoadSeverity {
        match self {
            ExplorerError::Io(_) => LoadSeverity::Critical,
            ExplorerError::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(_) => LoadSeverity::Critical,
                _ => LoadSeverity::Error,
            },
            ExplorerError::Catalog(_)
            | ExplorerError::SchemaMismatch { .. }
            | ExplorerError::MissingColumn { .. }
            | ExplorerError::ParseError { .. } => LoadSeverity::Error,
        }
    }
}
