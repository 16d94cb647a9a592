//! Demo Artifact Generator
//!
//! Writes a well-formed scaler/model artifact pair to disk so the
//! predictor can run without the offline training pipeline. The values
//! are plausible for temperate survey data but carry no scientific
//! weight; real deployments replace them with the trained export.

use anyhow::{Context, Result};
use soc_prediction_pipeline::features::FEATURE_NAMES;
use soc_prediction_pipeline::models::{regressor::SocRegressor, scaler::StandardScaler};
use std::fs;
use std::path::Path;
use tracing::info;

fn canonical_names() -> Vec<String> {
    FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
}

fn demo_scaler() -> StandardScaler {
    StandardScaler {
        feature_names: canonical_names(),
        mean: vec![15.0, 1200.0, 500.0, 0.0, 0.0, 10.0, 40.0, 30.0, 30.0],
        scale: vec![10.0, 800.0, 600.0, 30.0, 60.0, 8.0, 15.0, 10.0, 10.0],
    }
}

fn demo_model() -> SocRegressor {
    SocRegressor {
        feature_names: canonical_names(),
        coefficients: vec![-0.35, 0.55, 0.15, 0.1, 0.0, -0.25, -0.3, 0.1, 0.2],
        intercept: 2.4,
    }
}

fn write_json<T: serde::Serialize>(path: &str, artifact: &T) -> Result<()> {
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(artifact)?;
    fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;

    info!(path = %path.display(), "Artifact written");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("make_demo_artifacts=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let scaler_path = args
        .get(1)
        .map(|s| s.as_str())
        .unwrap_or("artifacts/soc_scaler.json");
    let model_path = args
        .get(2)
        .map(|s| s.as_str())
        .unwrap_or("artifacts/soc_model.json");

    info!(scaler = %scaler_path, model = %model_path, "Writing demo artifacts");

    write_json(scaler_path, &demo_scaler())?;
    write_json(model_path, &demo_model())?;

    info!("Done. Run soc-predict to get a prediction against these artifacts.");
    Ok(())
}
