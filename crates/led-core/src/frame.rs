use crate::color::expand16;
use crate::error::CoreError;

/// Domaine d'une frame : `[min_x, max_x) × [min_y, max_y)`, coordonnées absolues.
///
/// # Example
/// ```
/// use led_core::frame::Bounds;
/// let b = Bounds { min_x: 2, min_y: 0, max_x: 10, max_y: 4 };
/// assert!(b.contains(2, 0));
/// assert!(!b.contains(10, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Inclusive left edge.
    pub min_x: i64,
    /// Inclusive top edge.
    pub min_y: i64,
    /// Exclusive right edge.
    pub max_x: i64,
    /// Exclusive bottom edge.
    pub max_y: i64,
}

impl Bounds {
    #[inline(always)]
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
}

/// Frame décodée. Immuable une fois produite par la source.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel, pour la zone
/// `width × height` placée en `(left, top)` sur le canevas logique.
///
/// # Example
/// ```
/// use led_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Horizontal placement on the logical screen.
    pub left: u32,
    /// Vertical placement on the logical screen.
    pub top: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer transparent aux dimensions données, placé en (0, 0).
    ///
    /// # Example
    /// ```
    /// use led_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            left: 0,
            top: 0,
            width,
            height,
        }
    }

    /// Wrap raw RGBA bytes for a frame placed at `(left, top)`.
    ///
    /// # Errors
    /// Returns [`CoreError::BufferSize`] if `data.len() != width * height * 4`.
    pub fn from_rgba(
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> Result<Self, CoreError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CoreError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            left,
            top,
            width,
            height,
        })
    }

    /// Remplit toute la frame avec une couleur RGBA.
    ///
    /// # Example
    /// ```
    /// use led_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, (255, 0, 0, 255));
    /// assert_eq!(fb.pixel(1, 1), (255, 0, 0, 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: (u8, u8, u8, u8)) -> Self {
        let mut fb = Self::new(width, height);
        for px in fb.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[rgba.0, rgba.1, rgba.2, rgba.3]);
        }
        fb
    }

    /// Domaine absolu de la frame.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: i64::from(self.left),
            min_y: i64::from(self.top),
            max_x: i64::from(self.left) + i64::from(self.width),
            max_y: i64::from(self.top) + i64::from(self.height),
        }
    }

    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        let lx = (x - i64::from(self.left)) as usize;
        let ly = (y - i64::from(self.top)) as usize;
        Some((ly * self.width as usize + lx) * 4)
    }

    /// Accès au pixel absolu (x, y) → (r, g, b, a).
    ///
    /// Hors du domaine : `(0, 0, 0, 0)`, transparent.
    ///
    /// # Example
    /// ```
    /// use led_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(4, 4, (9, 9, 9, 255));
    /// assert_eq!(fb.pixel(-1, 0), (0, 0, 0, 0));
    /// assert_eq!(fb.pixel(4, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: i64, y: i64) -> (u8, u8, u8, u8) {
        match self.index(x, y) {
            Some(idx) if idx + 3 < self.data.len() => (
                self.data[idx],
                self.data[idx + 1],
                self.data[idx + 2],
                self.data[idx + 3],
            ),
            _ => (0, 0, 0, 0),
        }
    }

    /// Couleur 16 bits par canal au point absolu (x, y), alpha compris.
    ///
    /// Chaque canal 8 bits est répliqué sur les deux octets (`c * 257`).
    #[inline(always)]
    #[must_use]
    pub fn color16(&self, x: i64, y: i64) -> (u32, u32, u32, u32) {
        let (r, g, b, a) = self.pixel(x, y);
        expand16(r, g, b, a)
    }

    /// Écrit un pixel en coordonnées absolues. Ignoré hors du domaine.
    pub fn set_pixel(&mut self, x: i64, y: i64, rgba: (u8, u8, u8, u8)) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + 4].copy_from_slice(&[rgba.0, rgba.1, rgba.2, rgba.3]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_follow_placement() {
        let fb = FrameBuffer::from_rgba(3, 2, 4, 5, vec![0; 4 * 5 * 4]).unwrap();
        assert_eq!(
            fb.bounds(),
            Bounds {
                min_x: 3,
                min_y: 2,
                max_x: 7,
                max_y: 7
            }
        );
    }

    #[test]
    fn from_rgba_rejects_bad_length() {
        let err = FrameBuffer::from_rgba(0, 0, 2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::BufferSize {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn lookup_uses_absolute_coordinates() {
        let mut fb = FrameBuffer::from_rgba(10, 20, 2, 2, vec![0; 16]).unwrap();
        fb.set_pixel(11, 21, (1, 2, 3, 4));
        assert_eq!(fb.pixel(11, 21), (1, 2, 3, 4));
        assert_eq!(fb.pixel(1, 1), (0, 0, 0, 0));
        assert_eq!(fb.pixel(0, 0), (0, 0, 0, 0));
    }

    #[test]
    fn out_of_domain_is_transparent() {
        let fb = FrameBuffer::filled(3, 3, (255, 255, 255, 255));
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i64::MAX, i64::MIN)] {
            assert_eq!(fb.color16(x, y), (0, 0, 0, 0), "({x}, {y})");
        }
        assert_eq!(fb.color16(2, 2), (65535, 65535, 65535, 65535));
    }

    #[test]
    fn set_pixel_out_of_domain_is_noop() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel(5, 5, (1, 1, 1, 1));
        assert!(fb.data.iter().all(|&b| b == 0));
    }
}
