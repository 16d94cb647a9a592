//! Site measurement data structures for soil organic carbon prediction

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single set of soil and climate measurements for one site.
///
/// Field aliases match the column names used by the offline training
/// pipeline, so exported survey rows deserialize directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeasurement {
    /// Mean annual temperature (°C)
    #[serde(alias = "MAT")]
    pub mat: f64,

    /// Mean annual precipitation (mm)
    #[serde(alias = "MAP")]
    pub map: f64,

    /// Elevation above sea level (m)
    #[serde(alias = "Elevation")]
    pub elevation: f64,

    /// Latitude in decimal degrees
    #[serde(alias = "Latitude")]
    pub latitude: f64,

    /// Longitude in decimal degrees
    #[serde(alias = "Longitude")]
    pub longitude: f64,

    /// Slope gradient (%)
    #[serde(alias = "Slope")]
    pub slope: f64,

    /// Sand content of the topsoil (%)
    #[serde(alias = "Soil_sand")]
    pub soil_sand: f64,

    /// Silt content of the topsoil (%)
    #[serde(alias = "Soil_silt")]
    pub soil_silt: f64,

    /// Clay content of the topsoil (%)
    #[serde(alias = "Soil_clay")]
    pub soil_clay: f64,
}

/// Permitted range and default for one input field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRange {
    pub name: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Input ranges enforced by the collector, in canonical field order.
pub const FIELD_RANGES: [FieldRange; 9] = [
    FieldRange { name: "MAT", unit: "°C", min: -50.0, max: 50.0, default: 20.0 },
    FieldRange { name: "MAP", unit: "mm", min: 0.0, max: 5000.0, default: 1000.0 },
    FieldRange { name: "Elevation", unit: "m", min: 0.0, max: 9000.0, default: 100.0 },
    FieldRange { name: "Latitude", unit: "°", min: -90.0, max: 90.0, default: 0.0 },
    FieldRange { name: "Longitude", unit: "°", min: -180.0, max: 180.0, default: 0.0 },
    FieldRange { name: "Slope", unit: "%", min: 0.0, max: 90.0, default: 5.0 },
    FieldRange { name: "Soil_sand", unit: "%", min: 0.0, max: 100.0, default: 40.0 },
    FieldRange { name: "Soil_silt", unit: "%", min: 0.0, max: 100.0, default: 30.0 },
    FieldRange { name: "Soil_clay", unit: "%", min: 0.0, max: 100.0, default: 30.0 },
];

/// One or more fields outside their permitted ranges.
#[derive(Debug, Error)]
#[error("measurement outside permitted ranges: {}", .violations.join("; "))]
pub struct RangeViolations {
    pub violations: Vec<String>,
}

impl SiteMeasurement {
    /// Check every field against [`FIELD_RANGES`].
    ///
    /// Range enforcement belongs to the input collector; the inference
    /// pipeline itself computes through whatever values it is handed.
    pub fn validate(&self) -> Result<(), RangeViolations> {
        let values = self.field_values();
        let violations: Vec<String> = FIELD_RANGES
            .iter()
            .zip(values.iter())
            .filter(|(range, value)| **value < range.min || **value > range.max)
            .map(|(range, value)| {
                format!(
                    "{} = {} (permitted {}..{} {})",
                    range.name, value, range.min, range.max, range.unit
                )
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(RangeViolations { violations })
        }
    }

    /// Field values in canonical order, matching [`FIELD_RANGES`].
    pub fn field_values(&self) -> [f64; 9] {
        [
            self.mat,
            self.map,
            self.elevation,
            self.latitude,
            self.longitude,
            self.slope,
            self.soil_sand,
            self.soil_silt,
            self.soil_clay,
        ]
    }
}

impl Default for SiteMeasurement {
    fn default() -> Self {
        Self {
            mat: FIELD_RANGES[0].default,
            map: FIELD_RANGES[1].default,
            elevation: FIELD_RANGES[2].default,
            latitude: FIELD_RANGES[3].default,
            longitude: FIELD_RANGES[4].default,
            slope: FIELD_RANGES[5].default,
            soil_sand: FIELD_RANGES[6].default,
            soil_silt: FIELD_RANGES[7].default,
            soil_clay: FIELD_RANGES[8].default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range() {
        let measurement = SiteMeasurement::default();
        assert!(measurement.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_fields() {
        let measurement = SiteMeasurement {
            mat: 60.0,       // above 50
            slope: -1.0,     // below 0
            ..SiteMeasurement::default()
        };

        let err = measurement.validate().unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert!(err.violations[0].contains("MAT"));
        assert!(err.violations[1].contains("Slope"));
    }

    #[test]
    fn test_deserialize_training_column_names() {
        let json = r#"{
            "MAT": 20.0, "MAP": 1000.0, "Elevation": 100.0,
            "Latitude": 0.0, "Longitude": 0.0, "Slope": 5.0,
            "Soil_sand": 40.0, "Soil_silt": 30.0, "Soil_clay": 30.0
        }"#;

        let measurement: SiteMeasurement = serde_json::from_str(json).unwrap();
        assert_eq!(measurement.mat, 20.0);
        assert_eq!(measurement.soil_clay, 30.0);
    }
}
