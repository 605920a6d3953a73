//! Exporter error types.

use std::path::PathBuf;

use lc_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The output directory (or one of its ancestors) could not be created.
    #[error("Failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A content file could not be written or moved into place.
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An existing content file could not be read for comparison.
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A collection could not be serialized.
    #[error("Failed to encode {name}")]
    Encode {
        name: String,
        source: serde_json::Error,
    },

    /// The catalog failed its integrity check; nothing was written.
    #[error(transparent)]
    Integrity(#[from] CoreError),
}
