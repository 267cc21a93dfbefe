use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the export module.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Output file cannot be created or truncated.
    #[error("failed to open output file: {}", path.display())]
    Create {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the stream failed.
    #[error("failed to write output stream: {0}")]
    Write(#[from] std::io::Error),
}
