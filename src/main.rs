//! SOC Prediction Pipeline - Main Entry Point
//!
//! Collects nine soil and climate measurements from the command line,
//! runs them through the fitted scaler and regression model, and prints
//! the estimate with a gauge and recommendations.

use anyhow::{bail, Context, Result};
use clap::Parser;
use soc_prediction_pipeline::{
    config::{AppConfig, LoggingConfig},
    features::FeatureVector,
    models::inference::InferencePipeline,
    render,
    types::measurement::{SiteMeasurement, FIELD_RANGES},
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Predict soil organic carbon and erosion risk for one site
#[derive(Parser)]
#[command(name = "soc-predict")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Mean annual temperature (°C)
    #[arg(long, default_value_t = FIELD_RANGES[0].default, allow_negative_numbers = true)]
    mat: f64,

    /// Mean annual precipitation (mm)
    #[arg(long, default_value_t = FIELD_RANGES[1].default)]
    map: f64,

    /// Elevation (m)
    #[arg(long, default_value_t = FIELD_RANGES[2].default)]
    elevation: f64,

    /// Latitude (decimal degrees)
    #[arg(long, default_value_t = FIELD_RANGES[3].default, allow_negative_numbers = true)]
    latitude: f64,

    /// Longitude (decimal degrees)
    #[arg(long, default_value_t = FIELD_RANGES[4].default, allow_negative_numbers = true)]
    longitude: f64,

    /// Slope (%)
    #[arg(long, default_value_t = FIELD_RANGES[5].default)]
    slope: f64,

    /// Soil sand content (%)
    #[arg(long, default_value_t = FIELD_RANGES[6].default)]
    sand: f64,

    /// Soil silt content (%)
    #[arg(long, default_value_t = FIELD_RANGES[7].default)]
    silt: f64,

    /// Soil clay content (%)
    #[arg(long, default_value_t = FIELD_RANGES[8].default)]
    clay: f64,

    /// Path to a configuration file (defaults to config/config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

impl Cli {
    fn measurement(&self) -> SiteMeasurement {
        SiteMeasurement {
            mat: self.mat,
            map: self.map,
            elevation: self.elevation,
            latitude: self.latitude,
            longitude: self.longitude,
            slope: self.slope,
            soil_sand: self.sand,
            soil_silt: self.silt,
            soil_clay: self.clay,
        }
    }
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(
        format!("soc_prediction_pipeline={}", logging.level)
            .parse()
            .context("Invalid log level")?,
    );

    if logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_path(path)?,
        None if Path::new("config/config.toml").exists() => AppConfig::load()?,
        None => AppConfig::default(),
    };

    init_logging(&config.logging)?;

    let measurement = cli.measurement();
    measurement
        .validate()
        .context("Input rejected by the collector")?;

    // Both artifacts load once here and stay immutable for the rest of
    // the process.
    let pipeline = InferencePipeline::load(&config.artifacts)?;

    let features = FeatureVector::from_measurement(&measurement);
    let prediction = pipeline.predict(&features);
    let report = prediction.to_report();

    info!(
        report_id = %report.report_id,
        estimate = report.estimate,
        band = ?report.band,
        "Prediction complete"
    );

    match cli.format.as_str() {
        "text" => print!("{}", render::render_report(&report)),
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        other => bail!("Unknown output format '{}', expected text or json", other),
    }

    Ok(())
}
