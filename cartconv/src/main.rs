//! Point d'entrée CLI pour cartconv

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::Commands;

/// Conversion de coordonnées BMN (Autriche) ⇄ WGS84
#[derive(Parser)]
#[command(name = "cartconv")]
#[command(author, version)]
#[command(about = "Convertir des coordonnées Bundesmeldenetz (BMN) ⇄ WGS84, en ligne de commande ou via un service REST")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Sous-commande (défaut: serve)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Some(Commands::Serve { config, binding }) => {
            cli::cmd_serve(&config, binding).await?;
        }
        Some(Commands::ToWgs84 { coord, rel_height }) => {
            cli::cmd_to_wgs84(&coord, rel_height)?;
        }
        Some(Commands::ToBmn {
            lat,
            long,
            height,
            meridian,
        }) => {
            cli::cmd_to_bmn(lat, long, height, meridian)?;
        }
        Some(Commands::Batch {
            input,
            output,
            direction,
        }) => {
            info!(input = %input.display(), direction = ?direction, "Conversion par lot");
            cli::cmd_batch(&input, output.as_deref(), direction)?;
        }
        None => {
            // Commande par défaut: serve
            cli::cmd_serve(Path::new(cli::DEFAULT_CONFIG), None).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    // Les logs vont sur stderr pour ne pas polluer la sortie des conversions
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
