use std::io;

use led_core::color::premultiply;
use led_core::frame::FrameBuffer;
use led_core::traits::{PixelSink, Sampler};

/// Balayage raster : y externe, x interne, origine en haut à gauche.
///
/// Le domaine parcouru commence toujours à (0, 0), même si la frame est
/// placée plus loin sur le canevas : les colonnes et lignes sous `left`/`top`
/// tombent hors de la frame et sortent en noir.
///
/// # Example
/// ```
/// use led_core::frame::FrameBuffer;
/// use led_core::traits::Sampler;
/// use led_core::color::Rgb;
/// use led_sampler::RectangularSampler;
///
/// let frame = FrameBuffer::filled(2, 2, (255, 0, 0, 255));
/// let mut out: Vec<Rgb> = Vec::new();
/// RectangularSampler.sample(&frame, &mut out).unwrap();
/// assert_eq!(out, vec![Rgb::new(255, 0, 0); 4]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RectangularSampler;

impl Sampler for RectangularSampler {
    fn sample(&self, frame: &FrameBuffer, sink: &mut dyn PixelSink) -> io::Result<()> {
        let bounds = frame.bounds();
        for y in 0..bounds.max_y {
            for x in 0..bounds.max_x {
                let (r, g, b, a) = frame.color16(x, y);
                sink.push_pixel(premultiply(r, g, b, a))?;
            }
        }
        Ok(())
    }

    fn pixels_per_frame(&self, frame: &FrameBuffer) -> usize {
        let bounds = frame.bounds();
        (bounds.max_x * bounds.max_y) as usize
    }

    fn name(&self) -> &'static str {
        "rectangular"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use led_core::color::Rgb;

    fn run(frame: &FrameBuffer) -> Vec<Rgb> {
        let mut out = Vec::new();
        RectangularSampler.sample(frame, &mut out).unwrap();
        out
    }

    #[test]
    fn opaque_red_2x2() {
        let out = run(&FrameBuffer::filled(2, 2, (255, 0, 0, 255)));
        let bytes: Vec<u8> = out.iter().flat_map(|px| px.to_bytes()).collect();
        assert_eq!(bytes, [0xFF, 0x00, 0x00].repeat(4));
    }

    #[test]
    fn count_is_width_times_height() {
        let frame = FrameBuffer::filled(7, 3, (1, 2, 3, 255));
        assert_eq!(run(&frame).len(), 21);
        assert_eq!(RectangularSampler.pixels_per_frame(&frame), 21);
    }

    #[test]
    fn row_major_order() {
        let mut frame = FrameBuffer::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                frame.set_pixel(x, y, ((y * 3 + x) as u8, 0, 0, 255));
            }
        }
        let reds: Vec<u8> = run(&frame).iter().map(|px| px.r).collect();
        assert_eq!(reds, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn transparent_pixels_are_black() {
        let out = run(&FrameBuffer::filled(3, 3, (200, 100, 50, 0)));
        assert!(out.iter().all(|&px| px == Rgb::BLACK));
    }

    #[test]
    fn offset_frame_scans_from_origin() {
        // 2×2 frame placed at (1, 1): the scan covers [0, 3) × [0, 3).
        let frame = FrameBuffer::from_rgba(1, 1, 2, 2, [9, 9, 9, 255].repeat(4)).unwrap();
        let out = run(&frame);
        assert_eq!(out.len(), 9);
        let lit: Vec<bool> = out.iter().map(|&px| px != Rgb::BLACK).collect();
        assert_eq!(
            lit,
            [false, false, false, false, true, true, false, true, true]
        );
        assert_eq!(RectangularSampler.pixels_per_frame(&frame), 9);
    }

    #[test]
    fn empty_frame_emits_nothing() {
        assert!(run(&FrameBuffer::new(0, 0)).is_empty());
    }
}
