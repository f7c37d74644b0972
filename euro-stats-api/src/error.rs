use thiserror::Error;

/// Failures that abort a run. Nothing is extracted once one of these is hit.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("document is not valid UTF-8 markup: {0}")]
    Parse(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single record was dropped by an extractor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("field '{0}' is empty")]
    EmptyField(&'static str),
    #[error("expected {expected} cells in row, found {found}")]
    ColumnCount { expected: usize, found: usize },
}
