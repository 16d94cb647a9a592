//! Configuration management for the SOC prediction pipeline

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub artifacts: ArtifactsConfig,
    pub logging: LoggingConfig,
}

/// Locations of the serialized artifacts produced by the offline
/// training pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Path to the fitted scaler artifact
    #[serde(default = "default_scaler_path")]
    pub scaler_path: PathBuf,
    /// Path to the fitted regression model artifact
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
}

fn default_scaler_path() -> PathBuf {
    PathBuf::from("artifacts/soc_scaler.json")
}

fn default_model_path() -> PathBuf {
    PathBuf::from("artifacts/soc_model.json")
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from the default file location.
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactsConfig {
                scaler_path: default_scaler_path(),
                model_path: default_model_path(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.artifacts.scaler_path,
            PathBuf::from("artifacts/soc_scaler.json")
        );
        assert_eq!(
            config.artifacts.model_path,
            PathBuf::from("artifacts/soc_model.json")
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
[artifacts]
scaler_path = "fitted/scaler.json"
model_path = "fitted/model.json"

[logging]
level = "debug"
format = "json"
"#
        )
        .unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.artifacts.scaler_path, PathBuf::from("fitted/scaler.json"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_missing_config_file_errors() {
        assert!(AppConfig::load_from_path("does/not/exist.toml").is_err());
    }
}
