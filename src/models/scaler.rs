//! Standard scaling transform fitted by the offline training pipeline

use crate::features::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

/// Per-feature linear normalization, immutable after load.
///
/// `mean` and `scale` are the statistics baked in at fit time; the vectors
/// are index-aligned with [`crate::features::FEATURE_NAMES`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Feature names recorded at fit time, for operator inspection
    pub feature_names: Vec<String>,
    /// Per-feature mean
    pub mean: Vec<f64>,
    /// Per-feature standard deviation
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Replace non-positive scale entries with 1.0.
    ///
    /// A zero-variance feature has no usable standard deviation; dividing
    /// by 1.0 leaves the centered value unchanged, matching the convention
    /// of the training-side scaler.
    pub fn sanitized(mut self) -> Self {
        for entry in &mut self.scale {
            if *entry <= 0.0 {
                *entry = 1.0;
            }
        }
        self
    }

    /// Apply the transform: `(value - mean_i) / scale_i` per feature.
    pub fn transform(&self, raw: &FeatureVector) -> [f64; FEATURE_COUNT] {
        debug_assert_eq!(self.mean.len(), FEATURE_COUNT);
        debug_assert_eq!(self.scale.len(), FEATURE_COUNT);

        let mut normalized = [0.0; FEATURE_COUNT];
        for (i, value) in raw.as_slice().iter().enumerate() {
            normalized[i] = (value - self.mean[i]) / self.scale[i];
        }
        normalized
    }
}
