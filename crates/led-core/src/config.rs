use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CoreError;

/// Disposition physique des LEDs.
///
/// # Example
/// ```
/// use led_core::config::Layout;
/// assert!(matches!(Layout::default(), Layout::Rectangular));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Balayage raster de la frame complète.
    #[default]
    Rectangular,
    /// Anneau : 360 rayons depuis le centre, `num_leds` échantillons par rayon.
    Circular,
}

/// Configuration de sortie, figée au démarrage et partagée en lecture seule
/// par toutes les conversions.
///
/// # Example
/// ```
/// use led_core::config::{Layout, LayoutConfig};
/// let config = LayoutConfig { layout: Layout::Circular, num_leds: 32, ..Default::default() };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Sampling strategy.
    pub layout: Layout,
    /// LEDs per ray. Must be > 0 when `layout` is `Circular`.
    pub num_leds: u32,
    /// Décalage de l'anneau vers l'extérieur, en unités d'espacement LED.
    /// Only used by the circular layout.
    pub led_offset: u32,
    /// Composite every frame onto the full logical screen before sampling.
    pub coalesce: bool,
}

impl LayoutConfig {
    #[must_use]
    pub fn is_circular(&self) -> bool {
        self.layout == Layout::Circular
    }

    /// Check the invariants that must hold before any sampling begins.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if the layout is circular and `num_leds` is 0.
    ///
    /// # Example
    /// ```
    /// use led_core::config::{Layout, LayoutConfig};
    /// let config = LayoutConfig { layout: Layout::Circular, ..Default::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_circular() && self.num_leds == 0 {
            return Err(CoreError::Config(
                "must specify --num-leds higher than 0 when using --circular".into(),
            ));
        }
        if !self.is_circular() && (self.num_leds != 0 || self.led_offset != 0) {
            log::debug!("num_leds/led_offset ignorés hors du mode circulaire");
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    layout: Option<LayoutSection>,
}

/// Layout section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct LayoutSection {
    circular: Option<bool>,
    num_leds: Option<u32>,
    led_offset: Option<u32>,
    coalesce: Option<bool>,
}

/// Parse TOML text and merge it over the defaults. No validation.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema.
///
/// # Example
/// ```
/// use led_core::config::parse_config;
/// let config = parse_config("[layout]\ncircular = true\nnum_leds = 24\n").unwrap();
/// assert!(config.is_circular());
/// assert_eq!(config.num_leds, 24);
/// ```
pub fn parse_config(content: &str) -> Result<LayoutConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = LayoutConfig::default();
    if let Some(l) = file.layout {
        if let Some(v) = l.circular {
            config.layout = if v {
                Layout::Circular
            } else {
                Layout::Rectangular
            };
        }
        if let Some(v) = l.num_leds {
            config.num_leds = v;
        }
        if let Some(v) = l.led_offset {
            config.led_offset = v;
        }
        if let Some(v) = l.coalesce {
            config.coalesce = v;
        }
    }
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use led_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("gif2led.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<LayoutConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))
}
