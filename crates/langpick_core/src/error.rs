//! Error types for option loading.
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an option set from an external source.
///
/// Filtering and picker transitions are total and never produce these.
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Failed to read option file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid option file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Option file {0} contains no usable options")]
    EmptyOptionSet(PathBuf),
}
