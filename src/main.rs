// src/main.rs
//! Geotag - read and write EXIF GPS tags with best-known-location lookup

use clap::{Parser, Subcommand};
use geotag::config::GeotagConfig;
use geotag::exif::gps;
use geotag::location::simulated::SimulatedRegistry;
use geotag::{
    ExifStore, FixCriteria, GeoCoordinate, GeoError, LocationFinder, LocationSample, Result,
    SelectionResult, TagStore,
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "geotag", version, about = "EXIF GPS geotagging toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the GPS position stored in a sidecar file
    Read {
        /// JSON sidecar file holding the EXIF tags
        sidecar: PathBuf,
    },
    /// Write a GPS position into a sidecar file
    Tag {
        /// JSON sidecar file holding the EXIF tags
        sidecar: PathBuf,
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Geotag a sidecar from the best known location, requesting a
    /// one-shot fix when nothing cached is fresh enough
    Locate {
        /// JSON sidecar file holding the EXIF tags
        sidecar: PathBuf,
        /// Override the configured fix timeout
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Read { sidecar } => read(&sidecar),
        Command::Tag { sidecar, lat, lon } => tag(&sidecar, lat, lon),
        Command::Locate { sidecar, timeout_ms } => locate(&sidecar, timeout_ms).await,
    }
}

fn read(sidecar: &Path) -> Result<()> {
    let store = TagStore::load(sidecar)?;

    match gps::read_location(&store)? {
        Some(coordinate) => println!("{}", coordinate),
        None => println!("No GPS tags in {}", sidecar.display()),
    }

    Ok(())
}

fn tag(sidecar: &Path, lat: f64, lon: f64) -> Result<()> {
    let coordinate = GeoCoordinate::new(lat, lon)?;

    let mut store = TagStore::load(sidecar)?;
    gps::apply_location(&mut store, coordinate);
    store.save()?;

    println!("Tagged {} with {}", sidecar.display(), coordinate);
    Ok(())
}

async fn locate(sidecar: &Path, timeout_ms: Option<u64>) -> Result<()> {
    let config = GeotagConfig::load().unwrap_or_default();
    let mut store = TagStore::load(sidecar)?;

    if let Some(coordinate) = gps::read_location(&store)? {
        println!("Already tagged: {}", coordinate);
        return Ok(());
    }

    let finder = LocationFinder::new(demo_registry()?);

    let sample = match finder.last_best_location(config.min_distance_meters, config.min_time_millis)
    {
        SelectionResult::Known(sample) => {
            println!(
                "Using cached fix from '{}' ({}m, {}ms old)",
                sample.provider, sample.accuracy_meters, sample.age_millis
            );
            sample
        }
        SelectionResult::NeedsFreshFix => {
            println!("No usable cached fix, requesting a one-shot update...");

            let fix = finder.request_single_fix(&FixCriteria::default())?;
            let timeout = Duration::from_millis(timeout_ms.unwrap_or(config.fix_timeout_ms));

            tokio::task::spawn_blocking(move || fix.wait(timeout))
                .await
                .map_err(|e| GeoError::Other(format!("fix wait task failed: {}", e)))??
        }
    };

    gps::apply_location(&mut store, sample.coordinate);
    store.save()?;

    println!("Tagged {} with {}", sidecar.display(), sample.coordinate);
    Ok(())
}

/// Scripted registry standing in for a platform location stack: a stale
/// cached GPS fix, a network provider that never fixed, and a one-shot
/// update that arrives after a short delay.
fn demo_registry() -> Result<SimulatedRegistry> {
    let oslo = GeoCoordinate::new(59.913868, 10.752245)?;

    Ok(SimulatedRegistry::new()
        .with_provider("gps", Some(LocationSample::new("gps", oslo, 8.0, 300_000)))
        .with_provider("network", None)
        .with_single_update(
            LocationSample::new("gps", oslo, 5.0, 0),
            Duration::from_millis(1_500),
        ))
}
