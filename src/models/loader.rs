//! Artifact loading for the fitted scaler and regression model

use crate::features::{FEATURE_COUNT, FEATURE_NAMES};
use crate::models::regressor::SocRegressor;
use crate::models::scaler::StandardScaler;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Failure loading a serialized artifact.
///
/// Every variant aborts the prediction request; none is retryable.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found at {path}: train the model first and export its artifacts")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact at {path} is not a valid {kind} artifact")]
    Corrupt {
        path: PathBuf,
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact at {path} was fitted for {actual} features, expected {expected}")]
    ShapeMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

/// Load and validate the fitted scaler artifact.
pub fn load_scaler<P: AsRef<Path>>(path: P) -> Result<StandardScaler, ArtifactError> {
    let path = path.as_ref();
    let scaler: StandardScaler = read_artifact(path, "scaler")?;

    check_arity(path, scaler.mean.len())?;
    check_arity(path, scaler.scale.len())?;
    check_feature_names(path, &scaler.feature_names);

    info!(path = %path.display(), "Scaler artifact loaded");
    Ok(scaler.sanitized())
}

/// Load and validate the fitted regression model artifact.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<SocRegressor, ArtifactError> {
    let path = path.as_ref();
    let model: SocRegressor = read_artifact(path, "regression model")?;

    check_arity(path, model.coefficients.len())?;
    check_feature_names(path, &model.feature_names);

    info!(path = %path.display(), "Regression model artifact loaded");
    Ok(model)
}

fn read_artifact<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<T, ArtifactError> {
    let contents = fs::read_to_string(path).map_err(|source| ArtifactError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ArtifactError::Corrupt {
        path: path.to_path_buf(),
        kind,
        source,
    })
}

fn check_arity(path: &Path, actual: usize) -> Result<(), ArtifactError> {
    if actual == FEATURE_COUNT {
        Ok(())
    } else {
        Err(ArtifactError::ShapeMismatch {
            path: path.to_path_buf(),
            expected: FEATURE_COUNT,
            actual,
        })
    }
}

// Order is load-bearing but unchecked beyond this warning: the artifact
// records the names it was fitted with, and a mismatch means the export
// and this binary disagree about the canonical column order.
fn check_feature_names(path: &Path, names: &[String]) {
    if names.len() == FEATURE_COUNT && names.iter().zip(FEATURE_NAMES.iter()).all(|(a, b)| a == b) {
        return;
    }
    warn!(
        path = %path.display(),
        artifact_names = ?names,
        "Artifact feature names differ from the canonical order"
    );
}
