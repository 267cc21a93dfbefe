use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use led_core::config::LayoutConfig;
use led_core::traits::Sampler;
use led_export::{StreamWriter, create_output, output_path_for};
use rayon::prelude::*;

/// Résultat d'une conversion réussie.
#[derive(Debug)]
pub struct FileReport {
    /// Output path (`input + ".bin"`).
    pub output: PathBuf,
    /// Frames sampled.
    pub frames: usize,
    /// Bytes written.
    pub bytes: u64,
}

/// Bilan d'un lot.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files converted.
    pub converted: usize,
    /// Files abandoned after an open, decode or write failure.
    pub failed: usize,
}

/// Convertit un fichier : décodage complet, puis création de la sortie, puis
/// échantillonnage frame par frame directement dans le flux.
///
/// La sortie n'est créée qu'une fois le GIF entièrement décodé. La taille du
/// flux est connue dès ce moment : `3 * pixels_per_frame` octets par frame.
///
/// # Errors
/// Returns an error if the input cannot be opened or decoded, if the output
/// cannot be created or written, or if the sampler emitted a different number
/// of pixels than it announced.
pub fn convert_file(
    input: &Path,
    config: &LayoutConfig,
    sampler: &dyn Sampler,
) -> Result<FileReport> {
    let frames = led_source::decode_all(input, config.coalesce)?;
    let expected: u64 = frames
        .iter()
        .map(|frame| 3 * sampler.pixels_per_frame(frame) as u64)
        .sum();
    log::debug!(
        "{}: {} frame(s), {expected} octets attendus",
        input.display(),
        frames.len()
    );

    let output = output_path_for(input);
    let mut writer = StreamWriter::new(create_output(&output)?);

    for (idx, frame) in frames.iter().enumerate() {
        sampler
            .sample(frame, &mut writer)
            .with_context(|| format!("failed to write frame {idx} to {}", output.display()))?;
    }
    let bytes = writer.bytes_written();
    writer
        .finish()
        .with_context(|| format!("failed to flush {}", output.display()))?;
    anyhow::ensure!(
        bytes == expected,
        "{}: {bytes} bytes written, expected {expected} from {} sampler",
        output.display(),
        sampler.name()
    );

    Ok(FileReport {
        output,
        frames: frames.len(),
        bytes,
    })
}

/// Point d'entrée du traitement par lots : une tâche par fichier, en parallèle.
///
/// Chaque tâche possède sa paire entrée/sortie ; seule la configuration est
/// partagée, en lecture seule. Un échec est journalisé et n'affecte pas les
/// autres fichiers.
///
/// # Errors
/// Returns an error if the configuration is invalid (no file is touched) or if
/// the worker pool cannot be built.
pub fn run_batch(
    files: &[PathBuf],
    config: &LayoutConfig,
    jobs: Option<usize>,
) -> Result<BatchSummary> {
    config.validate()?;
    let sampler = led_sampler::for_layout(config)?;
    let sampler: &dyn Sampler = sampler.as_ref();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()
        .context("Impossible de créer le pool de conversion")?;

    log::info!(
        "Conversion de {} fichier(s), mode {}",
        files.len(),
        sampler.name()
    );

    let results: Vec<bool> = pool.install(|| {
        files
            .par_iter()
            .map(|input| match convert_file(input, config, sampler) {
                Ok(report) => {
                    log::info!(
                        "{} → {} ({} frames, {} octets)",
                        input.display(),
                        report.output.display(),
                        report.frames,
                        report.bytes
                    );
                    true
                }
                Err(e) => {
                    log::error!("{e:#}");
                    false
                }
            })
            .collect()
    });

    let converted = results.iter().filter(|ok| **ok).count();
    Ok(BatchSummary {
        converted,
        failed: results.len() - converted,
    })
}
