//! Pixel sampling engine for gif2led.
//!
//! Turns decoded frames into the ordered per-LED RGB sequence.

pub mod circular;
pub mod rectangular;

use led_core::config::{Layout, LayoutConfig};
use led_core::error::CoreError;
use led_core::traits::Sampler;

pub use circular::CircularSampler;
pub use rectangular::RectangularSampler;

/// Construit le sampler correspondant à la configuration.
///
/// # Errors
/// Returns [`CoreError::Config`] if the circular layout has no LEDs.
///
/// # Example
/// ```
/// use led_core::config::LayoutConfig;
/// let sampler = led_sampler::for_layout(&LayoutConfig::default()).unwrap();
/// assert_eq!(sampler.name(), "rectangular");
/// ```
pub fn for_layout(config: &LayoutConfig) -> Result<Box<dyn Sampler>, CoreError> {
    match config.layout {
        Layout::Rectangular => Ok(Box::new(RectangularSampler)),
        Layout::Circular => Ok(Box::new(CircularSampler::new(
            config.num_leds,
            config.led_offset,
        )?)),
    }
}
