use std::f64::consts::PI;
use std::io;

use led_core::color::premultiply;
use led_core::error::CoreError;
use led_core::frame::{Bounds, FrameBuffer};
use led_core::traits::{PixelSink, Sampler};

/// Nombre de rayons par frame, un par degré.
pub const RAYS: u32 = 360;

/// Échantillonnage en anneau pour les installations LED circulaires.
///
/// Pour chaque degré `i ∈ [0, 360)`, un rayon part du centre géométrique de
/// la frame et porte `num_leds` échantillons régulièrement espacés jusqu'au
/// rayon `min(center_x, center_y)`. `led_offset` repousse le premier
/// échantillon vers l'extérieur de `led_offset` pas LED et resserre le pas
/// restant pour que le dernier échantillon reste sous le rayon.
///
/// # Example
/// ```
/// use led_core::frame::FrameBuffer;
/// use led_core::traits::Sampler;
/// use led_core::color::Rgb;
/// use led_sampler::CircularSampler;
///
/// let sampler = CircularSampler::new(1, 0).unwrap();
/// let frame = FrameBuffer::filled(10, 10, (255, 255, 255, 255));
/// let mut out: Vec<Rgb> = Vec::new();
/// sampler.sample(&frame, &mut out).unwrap();
/// assert_eq!(out.len(), 360);
/// assert!(out.iter().all(|&px| px == Rgb::new(255, 255, 255)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct CircularSampler {
    num_leds: u32,
    led_offset: u32,
}

impl CircularSampler {
    /// # Errors
    /// Returns [`CoreError::Config`] if `num_leds` is 0.
    pub fn new(num_leds: u32, led_offset: u32) -> Result<Self, CoreError> {
        if num_leds == 0 {
            return Err(CoreError::Config(
                "circular sampling requires at least one LED".into(),
            ));
        }
        if led_offset > num_leds {
            log::debug!(
                "led_offset {led_offset} > num_leds {num_leds}: the ring is sampled inward from beyond the radius"
            );
        }
        Ok(Self {
            num_leds,
            led_offset,
        })
    }

    /// Coordonnées entières échantillonnées pour une frame de domaine `bounds`,
    /// rayon par rayon puis LED par LED.
    ///
    /// # Example
    /// ```
    /// use led_core::frame::FrameBuffer;
    /// use led_sampler::CircularSampler;
    ///
    /// let sampler = CircularSampler::new(4, 0).unwrap();
    /// let bounds = FrameBuffer::new(16, 16).bounds();
    /// let first: Vec<_> = sampler.ring_points(bounds).take(4).collect();
    /// assert_eq!(first, vec![(8, 8), (10, 8), (12, 8), (14, 8)]);
    /// ```
    pub fn ring_points(&self, bounds: Bounds) -> impl Iterator<Item = (i64, i64)> + use<> {
        let geometry = RingGeometry::new(bounds, self.num_leds, self.led_offset);
        let num_leds = self.num_leds;
        (0..RAYS).flat_map(move |deg| {
            let ray = geometry.ray(deg);
            (0..num_leds).scan(ray.start, move |pos, _| {
                let point = (pos.0 as i64, pos.1 as i64);
                pos.0 += ray.step.0;
                pos.1 += ray.step.1;
                Some(point)
            })
        })
    }
}

/// Centre et rayon d'une frame, calculés une fois par frame.
#[derive(Clone, Copy, Debug)]
struct RingGeometry {
    center: (f64, f64),
    radius: f64,
    num_leds: f64,
    led_offset: f64,
    offset_ratio: f64,
}

/// Point de départ et pas d'un rayon.
#[derive(Clone, Copy, Debug)]
struct Ray {
    start: (f64, f64),
    step: (f64, f64),
}

impl RingGeometry {
    fn new(bounds: Bounds, num_leds: u32, led_offset: u32) -> Self {
        // Integer halving before the float conversion: odd sizes round down.
        let center_x = ((bounds.max_x - bounds.min_x) / 2) as f64;
        let center_y = ((bounds.max_y - bounds.min_y) / 2) as f64;
        let remaining = i64::from(num_leds) - i64::from(led_offset);
        Self {
            center: (center_x, center_y),
            radius: center_x.min(center_y),
            num_leds: f64::from(num_leds),
            led_offset: f64::from(led_offset),
            offset_ratio: remaining as f64 / f64::from(num_leds),
        }
    }

    fn ray(&self, deg: u32) -> Ray {
        let theta = f64::from(deg) / 180.0 * PI;
        let dx = self.radius * theta.cos() / self.num_leds;
        let dy = self.radius * theta.sin() / self.num_leds;
        // Start offset uses the unscaled step.
        let start = (
            self.center.0 + dx * self.led_offset,
            self.center.1 + dy * self.led_offset,
        );
        Ray {
            start,
            step: (dx * self.offset_ratio, dy * self.offset_ratio),
        }
    }
}

impl Sampler for CircularSampler {
    fn sample(&self, frame: &FrameBuffer, sink: &mut dyn PixelSink) -> io::Result<()> {
        for (x, y) in self.ring_points(frame.bounds()) {
            let (r, g, b, a) = frame.color16(x, y);
            sink.push_pixel(premultiply(r, g, b, a))?;
        }
        Ok(())
    }

    fn pixels_per_frame(&self, _frame: &FrameBuffer) -> usize {
        RAYS as usize * self.num_leds as usize
    }

    fn name(&self) -> &'static str {
        "circular"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use led_core::color::Rgb;

    fn bounds(w: u32, h: u32) -> Bounds {
        FrameBuffer::new(w, h).bounds()
    }

    #[test]
    fn zero_leds_rejected() {
        assert!(matches!(
            CircularSampler::new(0, 0),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn count_is_360_per_led() {
        for n in [1u32, 3, 16] {
            let sampler = CircularSampler::new(n, 0).unwrap();
            let frame = FrameBuffer::filled(9, 5, (1, 1, 1, 255));
            let mut out: Vec<Rgb> = Vec::new();
            sampler.sample(&frame, &mut out).unwrap();
            assert_eq!(out.len(), 360 * n as usize);
            assert_eq!(sampler.pixels_per_frame(&frame), out.len());
        }
    }

    #[test]
    fn zero_offset_starts_at_center() {
        let sampler = CircularSampler::new(5, 0).unwrap();
        let points: Vec<_> = sampler.ring_points(bounds(21, 13)).collect();
        // center = (21 / 2, 13 / 2) = (10, 6)
        for ray in points.chunks(5) {
            assert_eq!(ray[0], (10, 6));
        }
    }

    #[test]
    fn full_offset_collapses_each_ray() {
        let sampler = CircularSampler::new(4, 4).unwrap();
        let points: Vec<_> = sampler.ring_points(bounds(40, 40)).collect();
        assert_eq!(points.len(), 360 * 4);
        for ray in points.chunks(4) {
            assert!(ray.iter().all(|&p| p == ray[0]), "{ray:?}");
        }
        // Ray 0 points east at the full radius.
        assert_eq!(points[0], (40, 20));
    }

    #[test]
    fn cardinal_rays() {
        let sampler = CircularSampler::new(2, 0).unwrap();
        let points: Vec<_> = sampler.ring_points(bounds(20, 20)).collect();
        // radius 10, step 5
        assert_eq!(&points[0..2], &[(10, 10), (15, 10)]);
        // 90°: cos is ~6e-17, truncation keeps x at 10
        assert_eq!(&points[180..182], &[(10, 10), (10, 15)]);
        // 180°: x = 10 - 5 = 5
        assert_eq!(&points[360..362], &[(10, 10), (5, 10)]);
    }

    #[test]
    fn offset_shifts_start_and_shrinks_step() {
        // radius 10, 4 LEDs → raw step 2.5; offset 2 → start at +5, step 2.5 * 0.5
        let sampler = CircularSampler::new(4, 2).unwrap();
        let east: Vec<_> = sampler.ring_points(bounds(20, 20)).take(4).collect();
        assert_eq!(east, vec![(15, 10), (16, 10), (17, 10), (18, 10)]);
    }

    #[test]
    fn radius_uses_smaller_half() {
        let sampler = CircularSampler::new(1, 1).unwrap();
        let points: Vec<_> = sampler.ring_points(bounds(30, 10)).collect();
        // radius = min(15, 5) = 5
        assert_eq!(points[0], (20, 5));
        assert_eq!(points[90], (15, 10));
        assert_eq!(points[180], (10, 5));
    }

    #[test]
    fn odd_size_center_rounds_down() {
        let sampler = CircularSampler::new(1, 0).unwrap();
        let points: Vec<_> = sampler.ring_points(bounds(11, 7)).collect();
        assert!(points.iter().all(|&p| p == (5, 3)));
    }

    #[test]
    fn center_ignores_frame_origin() {
        // 10×10 sub-frame at (20, 20): center is (5, 5), outside the frame.
        let sampler = CircularSampler::new(1, 0).unwrap();
        let frame = FrameBuffer::from_rgba(20, 20, 10, 10, [255; 400].to_vec()).unwrap();
        let mut out: Vec<Rgb> = Vec::new();
        sampler.sample(&frame, &mut out).unwrap();
        assert!(out.iter().all(|&px| px == Rgb::BLACK));
    }

    #[test]
    fn offset_beyond_leds_samples_out_of_frame() {
        let sampler = CircularSampler::new(2, 6).unwrap();
        let frame = FrameBuffer::filled(8, 8, (255, 255, 255, 255));
        let mut out: Vec<Rgb> = Vec::new();
        sampler.sample(&frame, &mut out).unwrap();
        // start at 3 radii from center: always outside an 8×8 frame
        assert_eq!(out.len(), 720);
        assert!(out.iter().all(|&px| px == Rgb::BLACK));
    }

    #[test]
    fn rays_in_angle_order() {
        // Only the east half of the frame is lit.
        let mut frame = FrameBuffer::new(20, 20);
        for y in 0..20 {
            for x in 12..20 {
                frame.set_pixel(x, y, (0, 0, 255, 255));
            }
        }
        let sampler = CircularSampler::new(2, 1).unwrap();
        let mut out: Vec<Rgb> = Vec::new();
        sampler.sample(&frame, &mut out).unwrap();
        // ray 0 (east) lit, ray 180 (west) dark
        assert_eq!(out[0], Rgb::new(0, 0, 255));
        assert_eq!(out[360], Rgb::BLACK);
    }
}
