//! CLI entrypoint module structure.
use anyhow::{Context, Result};
use serde_json::json;

use crate::{
    config::HealthConfig,
    health::{run_health_check, HealthRun},
};

pub mod args;
pub mod exit;
pub mod profile;

pub use args::HealthArgs;
pub use exit::{RunExit, CHECK_FAILED_CODE, CHECK_FAILED_MESSAGE, FATAL_ERROR_CODE};
pub use profile::{resolve_root, RunProfile};

/// Load configuration for the profile and run the health check.
pub fn execute(profile: &RunProfile) -> Result<HealthRun> {
    let config = HealthConfig::resolve(profile.config_path.clone())
        .context("failed to load health configuration")?;
    run_health_check(&profile.root, &config).with_context(|| {
        format!(
            "health check aborted in {}",
            profile.root.to_string_lossy()
        )
    })
}

/// Format a JSON summary of a finished run for stdout.
pub fn format_summary(run: &HealthRun) -> Result<String> {
    let payload = json!({
        "status": run.result.status().as_str(),
        "missing_files": run.result.missing_files(),
        "missing_dirs": run.result.missing_dirs(),
        "json_report": run.reports.json.to_string_lossy(),
        "markdown_report": run.reports.markdown.to_string_lossy(),
        "badge": run.badge.as_str()
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
