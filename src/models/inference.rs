//! Inference pipeline for SOC prediction

use crate::config::ArtifactsConfig;
use crate::features::FeatureVector;
use crate::models::loader::{self, ArtifactError};
use crate::models::regressor::SocRegressor;
use crate::models::scaler::StandardScaler;
use crate::types::report::{RiskBand, SocReport};
use tracing::{debug, info};

/// Result of one prediction request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted soil organic carbon (%), unclamped
    pub estimate: f64,
    /// Erosion risk classification
    pub band: RiskBand,
}

impl Prediction {
    /// Convert the prediction into a timestamped report.
    pub fn to_report(self) -> SocReport {
        SocReport::new(self.estimate, self.band)
    }
}

/// Owns the fitted scaler and regression model for the process lifetime.
///
/// Both artifacts are read from disk exactly once, at construction; the
/// pipeline is read-only afterwards and each prediction runs against the
/// same loaded pair.
#[derive(Debug)]
pub struct InferencePipeline {
    scaler: StandardScaler,
    model: SocRegressor,
}

impl InferencePipeline {
    /// Load both artifacts from the configured paths.
    ///
    /// Fails without partial construction if either artifact is missing,
    /// unreadable, or fitted for a different feature count.
    pub fn load(artifacts: &ArtifactsConfig) -> Result<Self, ArtifactError> {
        let scaler = loader::load_scaler(&artifacts.scaler_path)?;
        let model = loader::load_model(&artifacts.model_path)?;

        info!(
            scaler = %artifacts.scaler_path.display(),
            model = %artifacts.model_path.display(),
            "Inference pipeline initialized"
        );

        Ok(Self { scaler, model })
    }

    /// Build a pipeline from already-loaded artifacts.
    pub fn from_parts(scaler: StandardScaler, model: SocRegressor) -> Self {
        Self { scaler, model }
    }

    /// Run one prediction: scale, predict, classify.
    ///
    /// Deterministic for identical inputs and artifacts. Out-of-range
    /// inputs are not rejected here; they compute through the linear
    /// transform and model like any other value.
    pub fn predict(&self, features: &FeatureVector) -> Prediction {
        let normalized = self.scaler.transform(features);
        let estimate = self.model.predict(&normalized);
        let band = RiskBand::from_estimate(estimate);

        debug!(estimate = estimate, band = ?band, "Prediction complete");

        Prediction { estimate, band }
    }
}
