//! Telemetry initialization and health-run log helpers.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::health::HealthResult;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Emit the outcome of an inspection as a single structured event.
pub fn emit_health_result(result: &HealthResult) {
    if result.is_pass() {
        info!(
            target: "repo_health::inspect",
            status = result.status().as_str(),
            "All required paths are present"
        );
    } else {
        warn!(
            target: "repo_health::inspect",
            status = result.status().as_str(),
            missing_files = ?result.missing_files(),
            missing_dirs = ?result.missing_dirs(),
            "Required paths are missing"
        );
    }
}
