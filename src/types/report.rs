//! Prediction report data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SOC percentage below which a site is considered at high erosion risk.
pub const SOC_RISK_THRESHOLD: f64 = 2.0;

/// Erosion risk classification derived from the SOC estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    High,
    Low,
}

impl RiskBand {
    /// Classify an estimate against [`SOC_RISK_THRESHOLD`].
    ///
    /// The band is a half-open interval: estimates at or above the
    /// threshold are `Low`, everything below is `High`.
    pub fn from_estimate(estimate: f64) -> Self {
        if estimate < SOC_RISK_THRESHOLD {
            RiskBand::High
        } else {
            RiskBand::Low
        }
    }
}

/// Report produced for one prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocReport {
    /// Unique report identifier
    pub report_id: String,

    /// Report generation timestamp
    pub timestamp: DateTime<Utc>,

    /// Predicted soil organic carbon (%)
    pub estimate: f64,

    /// Erosion risk classification
    pub band: RiskBand,
}

impl SocReport {
    /// Create a new report for an estimate and its classification.
    pub fn new(estimate: f64, band: RiskBand) -> Self {
        Self {
            report_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            estimate,
            band,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_threshold_boundary() {
        assert_eq!(RiskBand::from_estimate(2.0), RiskBand::Low);
        assert_eq!(RiskBand::from_estimate(1.999999), RiskBand::High);
        assert_eq!(RiskBand::from_estimate(0.0), RiskBand::High);
        assert_eq!(RiskBand::from_estimate(4.8), RiskBand::Low);
    }

    #[test]
    fn test_report_serialization() {
        let report = SocReport::new(2.3, RiskBand::from_estimate(2.3));

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: SocReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report.report_id, deserialized.report_id);
        assert_eq!(report.estimate, deserialized.estimate);
        assert_eq!(report.band, deserialized.band);
        assert!(json.contains("\"low\""));
    }
}
