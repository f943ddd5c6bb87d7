//! Error types for loading the population dataset.
//!
//! Two families matter to callers: the resource could not be fetched, or
//! its contents are not a table we can read. Rows that fail validation are
//! not errors at all; the parser drops them and only counts them.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {source}")]
    Parse {
        #[from]
        source: csv::Error,
    },

    #[error("CSV line {line} has {found} fields, header has {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("input is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[from]
        source: std::string::FromUtf8Error,
    },

    #[error("CSV header is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("CSV input is empty (no header row)")]
    EmptyInput,
}

impl DataError {
    /// The resource was unreachable or unreadable.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            DataError::Client(_)
                | DataError::Fetch { .. }
                | DataError::HttpStatus { .. }
                | DataError::Io { .. }
        )
    }

    /// The resource was read but is not a table we can interpret.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            DataError::Parse { .. }
                | DataError::RaggedRow { .. }
                | DataError::InvalidUtf8 { .. }
                | DataError::MissingColumn { .. }
                | DataError::EmptyInput
        )
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
