//! Soil Organic Carbon Prediction Pipeline Library
//!
//! Feeds soil and climate measurements through a pre-fitted scaling
//! transform and regression model to estimate soil organic carbon, then
//! classifies the estimate into an erosion risk band.

pub mod config;
pub mod features;
pub mod models;
pub mod render;
pub mod types;

pub use config::AppConfig;
pub use features::FeatureVector;
pub use models::inference::{InferencePipeline, Prediction};
pub use models::loader::ArtifactError;
pub use types::{measurement::SiteMeasurement, report::RiskBand, report::SocReport};
