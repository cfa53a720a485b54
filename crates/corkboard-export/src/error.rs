use std::path::PathBuf;

use thiserror::Error;

/// Export pipeline errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A record broke a dataset rule; the run halts on the first one.
    #[error("{record} {title:?} failed validation: {field}: {problem}")]
    Validation {
        record: &'static str,
        title: String,
        field: &'static str,
        problem: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;
