//! Existence checks for the configured required paths.
use std::path::Path;

use tracing::{debug, warn};

use crate::{
    config::{PathKind, RequiredPath},
    health::HealthResult,
    lib::errors::HealthError,
};

/// Check every required path relative to `root`.
///
/// Missing entries are collected in configuration order. Only I/O failures
/// other than "not found" (for example permission denied on a parent
/// directory) are returned as errors.
pub fn inspect(root: &Path, required: &[RequiredPath]) -> Result<HealthResult, HealthError> {
    let mut missing_files = Vec::new();
    let mut missing_dirs = Vec::new();

    for entry in required {
        let path = root.join(&entry.path);
        let exists = path.try_exists().map_err(|source| HealthError::Inspect {
            path: path.clone(),
            source,
        })?;

        if exists {
            debug!(
                target: "repo_health::inspect",
                path = %entry.path,
                "Required path present"
            );
            continue;
        }

        warn!(
            target: "repo_health::inspect",
            path = %entry.path,
            kind = ?entry.kind,
            "Required path missing"
        );
        match entry.kind {
            PathKind::File => missing_files.push(entry.path.clone()),
            PathKind::Directory => missing_dirs.push(entry.path.clone()),
        }
    }

    Ok(HealthResult::new(missing_files, missing_dirs))
}
