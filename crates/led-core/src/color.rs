/// Triplet RGB 8 bits, alpha déjà appliqué. Unité de sortie du flux LED.
///
/// # Example
/// ```
/// use led_core::color::Rgb;
/// let px = Rgb::new(255, 0, 0);
/// assert_eq!(px.to_bytes(), [0xFF, 0x00, 0x00]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Pure black, also the value of any transparent or out-of-frame sample.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[inline(always)]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Wire order: r, g, b.
    #[inline(always)]
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Prémultiplie chaque canal par alpha puis tronque aux 8 bits de poids faible.
///
/// `c' = c * a / 255` en arithmétique entière (division tronquée), puis
/// `c' as u8`. Les entrées sont au plus 16 bits (domaine 0..=65535), le
/// produit tient donc dans un `u32`. La troncature finale jette les bits de
/// poids fort : pour un pixel 8 bits opaque étendu en 16 bits
/// (`c * 257`, `a = 65535`) on retrouve exactement la valeur 8 bits d'origine.
///
/// # Example
/// ```
/// use led_core::color::{premultiply, Rgb};
/// assert_eq!(premultiply(0x1234, 0, 0xFF, 255), Rgb::new(0x34, 0, 0xFF));
/// assert_eq!(premultiply(65535, 65535, 65535, 0), Rgb::BLACK);
/// ```
#[inline(always)]
#[must_use]
pub fn premultiply(r: u32, g: u32, b: u32, a: u32) -> Rgb {
    debug_assert!(
        r <= 0xFFFF && g <= 0xFFFF && b <= 0xFFFF && a <= 0xFFFF,
        "channel out of 16-bit range"
    );
    Rgb {
        r: (r * a / 255) as u8,
        g: (g * a / 255) as u8,
        b: (b * a / 255) as u8,
    }
}

/// Étend une couleur RGBA 8 bits en 16 bits par canal (`c * 257`).
#[inline(always)]
#[must_use]
pub fn expand16(r: u8, g: u8, b: u8, a: u8) -> (u32, u32, u32, u32) {
    (
        u32::from(r) * 257,
        u32::from(g) * 257,
        u32::from(b) * 257,
        u32::from(a) * 257,
    )
}
