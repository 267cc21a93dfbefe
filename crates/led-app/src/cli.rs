use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use led_core::config::{Layout, LayoutConfig, load_config};

/// gif2led — Convertit des GIF animés en flux RGB brut pour matrices et anneaux de LEDs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichiers GIF d'entrée. Chaque sortie est écrite dans `<fichier>.bin`.
    pub files: Vec<PathBuf>,

    /// Pack pixels in higher-res and circular way.
    #[arg(long, default_value_t = false)]
    pub circular: bool,

    /// Number of LEDs per ray (only required when using --circular). Default: 0.
    #[arg(long)]
    pub num_leds: Option<u32>,

    /// LED offset (only used when using --circular). Default: 0.
    #[arg(long)]
    pub led_offset: Option<u32>,

    /// Composer chaque frame sur le canevas complet avant échantillonnage.
    #[arg(long, default_value_t = false)]
    pub coalesce: bool,

    /// Fichier de configuration TOML (section `[layout]`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Nombre de threads de conversion. Défaut : un par cœur.
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Config file (if any) overlaid with the command-line flags. Not validated.
    ///
    /// # Errors
    /// Returns an error if `--config` points to an unreadable or invalid file.
    pub fn resolve_config(&self) -> Result<LayoutConfig> {
        let mut config = match self.config.as_deref() {
            Some(path) => load_config(path)?,
            None => LayoutConfig::default(),
        };

        if self.circular {
            config.layout = Layout::Circular;
        }
        if let Some(n) = self.num_leds {
            config.num_leds = n;
        }
        if let Some(offset) = self.led_offset {
            config.led_offset = offset;
        }
        if self.coalesce {
            config.coalesce = true;
        }
        Ok(config)
    }
}
