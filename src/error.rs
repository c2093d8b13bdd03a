//! Unified error type for placegen.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing placeholder assets.
#[derive(Debug, Error)]
pub enum PlaceholderError {
    /// Writing an asset to disk failed.
    #[error("Asset persistence failed for {}: {source}", .path.display())]
    Persist {
        /// The path that was being written.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: PersistCause,
    },

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The draw-operation log could not be written.
    #[error("Failed to write draw-op log: {0}")]
    OpsLog(String),

    /// Some assets could not be written; the rest were.
    #[error("{failed} of {total} placeholder assets could not be written")]
    Incomplete {
        /// Number of failed assets.
        failed: usize,
        /// Number of assets attempted.
        total: usize,
    },
}

/// Underlying cause of [`PlaceholderError::Persist`].
#[derive(Debug, Error)]
pub enum PersistCause {
    /// The output directory could not be created.
    #[error("cannot create directory: {0}")]
    CreateDir(#[source] std::io::Error),

    /// The file could not be opened or flushed.
    #[error("cannot write file: {0}")]
    Write(#[source] std::io::Error),

    /// The encoder rejected the canvas.
    #[error("cannot encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// The file extension does not map to a supported encoding.
    #[error("unsupported image format '{0}' (expected jpg, jpeg, png or webp)")]
    UnsupportedFormat(String),

    /// The encoding cannot store the image's alpha channel.
    #[error("format '{0}' cannot store an alpha channel")]
    NoAlpha(&'static str),
}
