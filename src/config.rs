//! Configuration management for the fraud detector

use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::DetectorError;
use crate::rules::RuleSet;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Rule table thresholds
    #[serde(default)]
    pub rules: RuleSet,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file.
    ///
    /// A file that is missing or fails to parse is a startup error; the
    /// caller treats it as fatal for the session.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DetectorError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
