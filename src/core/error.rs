//! Error types for SLA Sentinel.

use thiserror::Error;

/// Result type alias for SLA Sentinel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while processing SLA batches.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors (fatal to the file being processed)
    #[error("Unsupported content type: {0}")]
    UnsupportedFormat(String),

    #[error("JSON parse error: {0}")]
    ParseJson(String),

    #[error("CSV parse error: {0}")]
    ParseCsv(String),

    // Per-record errors (never fatal to the batch under the default policy)
    #[error("Missing required field `{field}` on row {row}")]
    MissingField { row: usize, field: &'static str },

    // Analysis collaborator errors (caught per record)
    #[error("Analysis service unavailable: {0}")]
    AnalysisUnavailable(String),

    #[error("Analysis request timed out")]
    AnalysisTimeout,

    #[error("Malformed analysis response: {0}")]
    MalformedAnalysis(String),

    // Generic errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseJson(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::ParseCsv(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::AnalysisTimeout
        } else {
            Error::AnalysisUnavailable(err.to_string())
        }
    }
}
