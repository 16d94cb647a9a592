//! Type definitions for the SOC prediction pipeline

pub mod measurement;
pub mod report;

pub use measurement::SiteMeasurement;
pub use report::{RiskBand, SocReport};
