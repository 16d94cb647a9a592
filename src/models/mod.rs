//! Fitted model artifacts and inference components

pub mod inference;
pub mod loader;
pub mod regressor;
pub mod scaler;

pub use inference::InferencePipeline;
pub use loader::ArtifactError;
pub use regressor::SocRegressor;
pub use scaler::StandardScaler;
