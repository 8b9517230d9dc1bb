use std::path::PathBuf;
use thiserror::Error;

/// Result type for usage loading operations
pub type UsageResult<T> = Result<T, UsageError>;

/// Errors that abort loading a usage file.
///
/// None of these leave a partially loaded usage map behind: callers get either
/// the complete map or one of these.
#[derive(Debug, Error)]
pub enum UsageError {
    /// Usage file path was given but could not be read
    #[error("Error reading usage file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Usage file is not valid YAML or does not have the expected shape
    #[error("Error parsing usage file: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Declared version is malformed or outside the supported range
    #[error("Invalid usage file version {found:?}. Supported versions are {min} ≤ x ≤ {max}")]
    UnsupportedVersion {
        found: String,
        min: &'static str,
        max: &'static str,
    },
}
