//! Définition et implémentation des commandes CLI
//!
//! - `serve`: service REST (commande par défaut)
//! - `to-wgs84` / `to-bmn`: conversion d'une coordonnée
//! - `batch`: conversion d'un fichier, une coordonnée par ligne

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bmn::{BmnCoord, GeodeticPoint, Meridian, Wgs84};
use clap::Subcommand;
use tracing::{info, warn};

use cartconv::batch::{self, Direction};
use cartconv::Config;

/// Fichier de configuration par défaut
pub const DEFAULT_CONFIG: &str = "config.json";

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST service
    Serve {
        /// Location of the JSON configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Listen address, overrides the configuration (e.g. :1111, 127.0.0.1:8080)
        #[arg(short, long)]
        binding: Option<String>,
    },

    /// Convert a BMN coordinate to WGS84 latitude / longitude
    ToWgs84 {
        /// BMN coordinate, e.g. "M31 450000 350000"
        coord: String,

        /// Relative height in meters
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        rel_height: f64,
    },

    /// Convert a WGS84 latitude / longitude to a BMN coordinate
    ToBmn {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        long: f64,

        /// Ellipsoidal height in meters
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        height: f64,

        /// Meridian stripe (M28, M31, M34); derived from the longitude if omitted
        #[arg(long)]
        meridian: Option<String>,
    },

    /// Convert a file, one coordinate per line
    Batch {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Conversion direction
        #[arg(short, long, value_enum, default_value_t = Direction::ToWgs84)]
        direction: Direction,
    },
}

/// Exécute la commande serve
pub async fn cmd_serve(config_path: &Path, binding: Option<String>) -> Result<()> {
    let mut config = Config::load(config_path)?;
    config.apply_env();
    if let Some(binding) = binding {
        config.binding = binding;
    }

    let addr = config.bind_addr();
    info!(
        addr = %addr,
        api_root = %config.api_prefix(),
        doc_root = %config.doc_root,
        "Starting service"
    );

    let app = cartconv::api::router(&config);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tokio::select! {
        r = axum::serve(listener, app) => { r.context("Server error")?; },
        _ = tokio::signal::ctrl_c() => { info!("Shutdown signal received"); }
    }

    Ok(())
}

/// Exécute la commande to-wgs84
pub fn cmd_to_wgs84(coord: &str, rel_height: f64) -> Result<()> {
    let mut coord = BmnCoord::parse(coord).context("Invalid BMN coordinate")?;
    coord.rel_height = rel_height;

    let p = bmn::to_geodetic(&coord)?;
    println!("{:.9} {:.9} {:.3}", p.lat, p.long, p.height);
    Ok(())
}

/// Exécute la commande to-bmn
pub fn cmd_to_bmn(lat: f64, long: f64, height: f64, meridian: Option<String>) -> Result<()> {
    let meridian = meridian
        .as_deref()
        .map(str::parse::<Meridian>)
        .transpose()?;

    let p = GeodeticPoint::<Wgs84>::new(lat, long, height);
    let coord = bmn::to_grid(&p, meridian)?;
    println!("{}", coord);
    Ok(())
}

/// Exécute la commande batch
pub fn cmd_batch(input: &Path, output: Option<&Path>, direction: Direction) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let start = std::time::Instant::now();
    let report = batch::convert_lines(&content, direction);

    for (line, error) in &report.failures {
        warn!(line = *line, error = %error, "Line skipped");
    }

    match output {
        Some(path) => std::fs::write(path, report.output())
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => print!("{}", report.output()),
    }

    info!(
        input = %input.display(),
        lines = report.total(),
        converted = report.converted.len(),
        failed = report.failures.len(),
        skipped = report.skipped,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Batch finished"
    );

    Ok(())
}
