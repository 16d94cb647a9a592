//! Regression model fitted by the offline training pipeline

use crate::features::FEATURE_COUNT;
use serde::{Deserialize, Serialize};

/// Linear regression over normalized features, immutable after load.
///
/// Coefficients are index-aligned with [`crate::features::FEATURE_NAMES`].
/// The prediction is unclamped; the fitted domain is roughly 0–5 % SOC but
/// nothing here bounds the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocRegressor {
    /// Feature names recorded at fit time, for operator inspection
    pub feature_names: Vec<String>,
    /// Per-feature coefficients on the normalized scale
    pub coefficients: Vec<f64>,
    /// Intercept term
    pub intercept: f64,
}

impl SocRegressor {
    /// Predict the SOC percentage for one normalized feature vector.
    pub fn predict(&self, normalized: &[f64; FEATURE_COUNT]) -> f64 {
        debug_assert_eq!(self.coefficients.len(), FEATURE_COUNT);

        self.coefficients
            .iter()
            .zip(normalized.iter())
            .map(|(coefficient, value)| coefficient * value)
            .sum::<f64>()
            + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FEATURE_NAMES;

    fn regressor(coefficients: [f64; FEATURE_COUNT], intercept: f64) -> SocRegressor {
        SocRegressor {
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            coefficients: coefficients.to_vec(),
            intercept,
        }
    }

    #[test]
    fn test_predict_is_dot_product_plus_intercept() {
        let model = regressor([0.5, -0.25, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 2.0);

        let normalized = [1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        // 0.5*1.0 - 0.25*2.0 + 2.0 = 2.0
        assert!((model.predict(&normalized) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_predict_is_unclamped() {
        let model = regressor([-3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 0.5);

        let normalized = [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        assert!((model.predict(&normalized) - (-5.5)).abs() < 1e-12);
    }
}
