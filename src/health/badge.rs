//! Status badge kept on the first line of the README.
//!
//! The first line is only claimed when it already starts with one of the badge
//! prefixes; otherwise a new badge is inserted above the existing content.
use std::path::Path;

use tracing::{debug, info};

use crate::{
    health::HealthStatus,
    lib::{errors::HealthError, fs},
};

pub const PASS_PREFIX: &str = "✅ Repo Health:";
pub const FAIL_PREFIX: &str = "❌ Repo Health:";

/// What `update_badge` did to the README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeOutcome {
    /// README does not exist; nothing was written.
    Skipped,
    /// An existing badge line was replaced.
    Replaced,
    /// A badge line and a blank line were prepended.
    Inserted,
}

impl BadgeOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BadgeOutcome::Skipped => "skipped",
            BadgeOutcome::Replaced => "replaced",
            BadgeOutcome::Inserted => "inserted",
        }
    }
}

pub fn badge_line(status: HealthStatus) -> String {
    match status {
        HealthStatus::Pass => format!("{PASS_PREFIX} PASS"),
        HealthStatus::Fail => format!("{FAIL_PREFIX} FAIL"),
    }
}

fn is_badge_line(line: &str) -> bool {
    line.starts_with(PASS_PREFIX) || line.starts_with(FAIL_PREFIX)
}

/// Return the README text with the badge for `status` applied, plus what changed.
pub fn apply_badge(text: &str, status: HealthStatus) -> (String, BadgeOutcome) {
    let badge = badge_line(status);
    let (first_line, rest) = match text.find('\n') {
        Some(index) => text.split_at(index),
        None => (text, ""),
    };

    if is_badge_line(first_line) {
        let line_ending = if first_line.ends_with('\r') { "\r" } else { "" };
        return (
            format!("{badge}{line_ending}{rest}"),
            BadgeOutcome::Replaced,
        );
    }

    (format!("{badge}\n\n{text}"), BadgeOutcome::Inserted)
}

/// Insert or replace the badge in `readme`. A missing README is left missing.
///
/// The file is rewritten through its existing path, so a symlinked README
/// updates the link target and the link itself is kept.
pub fn update_badge(readme: &Path, status: HealthStatus) -> Result<BadgeOutcome, HealthError> {
    let Some(text) = fs::read_optional(readme)? else {
        debug!(
            target: "repo_health::badge",
            path = %readme.display(),
            "README not found; skipping badge update"
        );
        return Ok(BadgeOutcome::Skipped);
    };

    let (updated, outcome) = apply_badge(&text, status);
    fs::overwrite_in_place(readme, updated.as_bytes())?;

    info!(
        target: "repo_health::badge",
        path = %readme.display(),
        status = status.as_str(),
        outcome = outcome.as_str(),
        "Updated README badge"
    );
    Ok(outcome)
}
