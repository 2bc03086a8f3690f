//! RunProfile and root directory resolution.
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunProfile {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
}

/// Ensure the root exists and is a directory. The path is kept as given so
/// report paths stay relative when the root is `.`.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let metadata = std::fs::metadata(root)
        .with_context(|| format!("failed to access repository root {}", root.display()))?;
    if !metadata.is_dir() {
        bail!("repository root {} is not a directory", root.display());
    }
    Ok(root.to_path_buf())
}
