use std::path::Path;

use tracing::{debug, info};

use super::HealthConfig;

pub fn log_source(path: &Path) {
    info!(
        target: "repo_health::config",
        path = %path.display(),
        "Using configuration file"
    );
}

pub fn log_defaults() {
    debug!(
        target: "repo_health::config",
        "No configuration file given; using built-in required paths"
    );
}

pub fn log_loaded(config: &HealthConfig) {
    let path = config
        .source_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    info!(
        target: "repo_health::config",
        path = %path,
        required = config.health.required.len(),
        output_dir = %config.health.output_dir.display(),
        readme = %config.health.readme.display(),
        "Configuration file loaded successfully"
    );
}
