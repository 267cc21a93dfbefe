use anyhow::Result;
use clap::Parser;

pub mod batch;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre et valider la config avant de toucher au moindre fichier
    let config = cli.resolve_config()?;
    if let Err(e) = config.validate() {
        println!("{e}");
        return Ok(());
    }

    // 4. Une conversion par fichier, en parallèle
    let summary = batch::run_batch(&cli.files, &config, cli.jobs)?;
    log::info!(
        "Terminé : {} converti(s), {} échec(s)",
        summary.converted,
        summary.failed
    );
    Ok(())
}
