//! Shared types for gif2led.
//!
//! This crate contains the frame representation, the layout configuration,
//! alpha premultiplication and the traits connecting decoders, samplers and
//! writers across the gif2led workspace.

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use color::{Rgb, premultiply};
pub use config::{Layout, LayoutConfig};
pub use error::CoreError;
pub use frame::{Bounds, FrameBuffer};
pub use traits::{FrameSource, PixelSink, Sampler};
