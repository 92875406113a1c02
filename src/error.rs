//! Error taxonomy for a dictionary update run.
//!
//! Unit-level errors ([`UnitError`]) are caught at the unit boundary and turned
//! into a failed row in the run report. Run-level errors ([`StoreError`])
//! terminate the process.

use std::path::PathBuf;

use thiserror::Error;

/// Failure scoped to a single source unit. Never aborts the run.
#[derive(Debug, Error)]
pub enum UnitError {
    /// Required per-unit configuration is missing (e.g. no candidate paths).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// One or both language files were not found after exhausting the candidate paths.
    #[error("missing language files ({}) in paths {paths:?}", missing_list(.missing))]
    MissingLanguageFiles {
        missing: Vec<String>,
        paths: Vec<String>,
    },

    /// Network or archive failure while retrieving the repository snapshot.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Any other failure during extraction or parsing.
    #[error("{0}")]
    Extraction(String),
}

fn missing_list(missing: &[String]) -> String {
    missing.join(", ")
}

impl UnitError {
    /// Short label used in the report's status column.
    pub fn kind(&self) -> &'static str {
        match self {
            UnitError::Configuration(_) => "ConfigurationError",
            UnitError::MissingLanguageFiles { .. } => "MissingLanguageFiles",
            UnitError::Fetch(_) => "FetchError",
            UnitError::Extraction(_) => "ExtractionError",
        }
    }
}

impl From<anyhow::Error> for UnitError {
    fn from(err: anyhow::Error) -> Self {
        UnitError::Extraction(format!("{:#}", err))
    }
}

impl From<rusqlite::Error> for UnitError {
    fn from(err: rusqlite::Error) -> Self {
        UnitError::Extraction(format!("store write failed: {}", err))
    }
}

/// The persistent store could not be opened or created.
#[derive(Debug, Error)]
#[error("store unavailable at {path}: {source}")]
pub struct StoreError {
    pub path: PathBuf,
    #[source]
    pub source: rusqlite::Error,
}
