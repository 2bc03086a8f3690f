//! Load and validate the health-check configuration.
//!
//! Without a configuration file the built-in defaults apply; a TOML file only
//! overrides the keys it sets. The environment is never consulted.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod health;
pub mod telemetry;

pub use health::{
    parse_health_section, HealthSection, PathKind, RawHealthSection, RequiredPath,
    DEFAULT_OUTPUT_DIR, DEFAULT_README, DEFAULT_REQUIRED_DIRS, DEFAULT_REQUIRED_FILES,
};

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthConfig {
    pub health: HealthSection,
    /// File the configuration was read from; `None` for built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawHealthConfig {
    health: Option<RawHealthSection>,
}

impl HealthConfig {
    /// Load the given file, or fall back to the built-in defaults.
    pub fn resolve(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) => {
                telemetry::log_source(&path);
                Self::load_from_path(path)
            }
            None => {
                telemetry::log_defaults();
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "repo_health::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = ::config::Config::builder().add_source(
            ::config::File::from(path.clone()).format(::config::FileFormat::Toml),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "repo_health::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawHealthConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "repo_health::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let health = parse_health_section(raw.health, &path).map_err(|err| {
            error!(
                target: "repo_health::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        let config = Self {
            health,
            source_path: Some(path),
        };
        telemetry::log_loaded(&config);
        Ok(config)
    }
}
