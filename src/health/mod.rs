//! Health check pipeline: inspect, report, badge.
use std::path::Path;

use crate::{config::HealthConfig, lib::errors::HealthError, lib::telemetry};

pub mod badge;
pub mod inspector;
pub mod reporter;
pub mod result;

pub use badge::{apply_badge, badge_line, update_badge, BadgeOutcome};
pub use inspector::inspect;
pub use reporter::{render_json, render_markdown, write_reports, ReportPaths};
pub use result::{HealthResult, HealthStatus};

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthRun {
    pub result: HealthResult,
    pub reports: ReportPaths,
    pub badge: BadgeOutcome,
}

/// Run the three steps in order against `root`. Stops at the first fatal error.
pub fn run_health_check(root: &Path, config: &HealthConfig) -> Result<HealthRun, HealthError> {
    let section = &config.health;

    let result = inspect(root, &section.required)?;
    telemetry::emit_health_result(&result);

    let reports = write_reports(&root.join(&section.output_dir), &result)?;
    let badge = update_badge(&root.join(&section.readme), result.status())?;

    Ok(HealthRun {
        result,
        reports,
        badge,
    })
}
