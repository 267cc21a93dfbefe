use std::io;

use crate::color::Rgb;
use crate::frame::FrameBuffer;

/// Fournit les frames décodées, dans l'ordre du conteneur.
///
/// Implémenté par : `GifSource`.
///
/// # Example
/// ```
/// use led_core::traits::FrameSource;
/// use led_core::frame::FrameBuffer;
///
/// struct OneFrame(Option<FrameBuffer>);
/// impl FrameSource for OneFrame {
///     type Error = std::convert::Infallible;
///     fn next_frame(&mut self) -> Result<Option<FrameBuffer>, Self::Error> { Ok(self.0.take()) }
///     fn native_size(&self) -> (u32, u32) { (1, 1) }
/// }
/// ```
pub trait FrameSource {
    /// Decoder error type.
    type Error;

    /// Retourne la prochaine frame, ou `None` quand le conteneur est épuisé.
    ///
    /// # Errors
    /// Returns the decoder's error if the container is malformed.
    fn next_frame(&mut self) -> Result<Option<FrameBuffer>, Self::Error>;

    /// Dimensions du canevas logique.
    fn native_size(&self) -> (u32, u32);
}

/// Reçoit les triplets RGB dans l'ordre d'émission.
///
/// # Example
/// ```
/// use led_core::traits::PixelSink;
/// use led_core::color::Rgb;
/// let mut out: Vec<Rgb> = Vec::new();
/// out.push_pixel(Rgb::new(1, 2, 3)).unwrap();
/// assert_eq!(out.len(), 1);
/// ```
pub trait PixelSink {
    /// Append one pixel.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the pixel cannot be written.
    fn push_pixel(&mut self, px: Rgb) -> io::Result<()>;
}

impl PixelSink for Vec<Rgb> {
    #[inline(always)]
    fn push_pixel(&mut self, px: Rgb) -> io::Result<()> {
        self.push(px);
        Ok(())
    }
}

/// Transforme une frame en séquence ordonnée de triplets RGB, un par LED.
///
/// CONTRAT : émet chaque pixel immédiatement dans `sink`, sans bufferiser la frame.
///
/// # Example
/// ```
/// use led_core::traits::{PixelSink, Sampler};
/// use led_core::frame::FrameBuffer;
/// use led_core::color::Rgb;
///
/// struct FirstPixel;
/// impl Sampler for FirstPixel {
///     fn sample(&self, frame: &FrameBuffer, sink: &mut dyn PixelSink) -> std::io::Result<()> {
///         let (r, g, b, _) = frame.pixel(0, 0);
///         sink.push_pixel(Rgb::new(r, g, b))
///     }
///     fn pixels_per_frame(&self, _frame: &FrameBuffer) -> usize { 1 }
///     fn name(&self) -> &'static str { "first" }
/// }
/// ```
pub trait Sampler: Send + Sync {
    /// Échantillonne `frame` et écrit le résultat dans `sink`.
    ///
    /// # Errors
    /// Propagates the sink's I/O error.
    fn sample(&self, frame: &FrameBuffer, sink: &mut dyn PixelSink) -> io::Result<()>;

    /// Nombre de triplets émis pour cette frame.
    fn pixels_per_frame(&self, frame: &FrameBuffer) -> usize;

    /// Nom lisible pour les logs.
    fn name(&self) -> &'static str;
}
