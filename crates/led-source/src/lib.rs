//! Frame sources for gif2led.
//!
//! Decodes GIF containers into [`led_core::FrameBuffer`]s, either as the raw
//! sub-frames stored in the file or composited onto the full canvas.

pub mod decoder;
pub mod error;

pub use decoder::{CoalescedSource, GifSource, decode_all};
pub use error::{DecodeError, SourceError};
