//! Outcome of one inspection.
use std::fmt;

use serde::Serialize;

/// Overall health verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Pass,
    Fail,
}

impl HealthStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Pass => "PASS",
            HealthStatus::Fail => "FAIL",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of checking the required paths. `status` is `Pass` exactly when
/// both missing lists are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResult {
    status: HealthStatus,
    missing_files: Vec<String>,
    missing_dirs: Vec<String>,
}

impl HealthResult {
    pub fn new(missing_files: Vec<String>, missing_dirs: Vec<String>) -> Self {
        let status = if missing_files.is_empty() && missing_dirs.is_empty() {
            HealthStatus::Pass
        } else {
            HealthStatus::Fail
        };
        Self {
            status,
            missing_files,
            missing_dirs,
        }
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn missing_files(&self) -> &[String] {
        &self.missing_files
    }

    pub fn missing_dirs(&self) -> &[String] {
        &self.missing_dirs
    }

    pub fn is_pass(&self) -> bool {
        self.status == HealthStatus::Pass
    }
}
