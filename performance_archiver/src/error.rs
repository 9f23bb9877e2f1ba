//!
//! The performance archiver error.
//!

use std::path::PathBuf;

///
/// The performance archiver error.
///
/// A failed comparison is not an error, see `Outcome::Failed`.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The archive file cannot be read or written.
    #[error("Archive file {path:?} access: {error}")]
    Io {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the archive file.
        path: PathBuf,
    },
    /// The archive file exists but cannot be parsed.
    #[error("Archive file {path:?} parsing: {error}")]
    Format {
        /// The underlying YAML parsing error.
        error: serde_yaml::Error,
        /// The path to the archive file.
        path: PathBuf,
    },
    /// The archive cannot be serialized.
    #[error("Archive serialization: {0}")]
    Serialization(String),
    /// The caller supplied invalid run data.
    #[error("Invalid run data: {0}")]
    Configuration(String),
}
