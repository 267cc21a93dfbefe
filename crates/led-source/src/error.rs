use std::path::PathBuf;

use led_core::error::CoreError;
use thiserror::Error;

/// Failure inside a GIF container.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Raw frame decoding failed.
    #[error(transparent)]
    Gif(#[from] gif::DecodingError),

    /// Canvas compositing failed.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// A frame extends past the logical screen.
    #[error("frame {index} bounds larger than image bounds")]
    FrameOutOfBounds {
        /// Zero-based frame index.
        index: usize,
    },

    /// Decoded pixel data does not match the frame size.
    #[error(transparent)]
    Buffer(#[from] CoreError),
}

/// Errors originating from the source module, tagged with the input path.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Input file missing or unreadable.
    #[error("failed to open input file: {}", path.display())]
    Open {
        /// Input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed container.
    #[error("failed to decode GIF: {}", path.display())]
    Decode {
        /// Input path.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: DecodeError,
    },
}
