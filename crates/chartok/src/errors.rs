//! # Error Types

use std::path::PathBuf;

/// Errors from chartok operations.
#[derive(Debug, thiserror::Error)]
pub enum ChartokError {
    /// The non-linguistic symbol file could not be resolved.
    #[error("symbol file not found: {}", path.display())]
    SymbolFileNotFound {
        /// The path which failed to resolve.
        path: PathBuf,
    },

    /// The non-linguistic symbol file is not valid UTF-8.
    #[error("incorrect encoding detected in {}", path.display())]
    SymbolFileDecoding {
        /// The offending file.
        path: PathBuf,

        /// The underlying decode error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The encoder options are unusable.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// No encoder is registered under the requested name.
    #[error("unknown encoder: {0}")]
    UnknownEncoder(String),

    /// A path could not be shell-expanded.
    #[error("path expansion failed: {0}")]
    PathExpansion(String),

    /// Options (de)serialization error.
    #[error(transparent)]
    Config(#[from] serde_json::Error),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for chartok operations.
pub type CTResult<T> = core::result::Result<T, ChartokError>;
