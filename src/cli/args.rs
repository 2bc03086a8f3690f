//! CLI argument definitions and `RunProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_root, RunProfile};

/// Command-line arguments. Running without any reproduces the built-in check
/// of the current directory.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "repo-health",
    author,
    version,
    about = "Check required repository files, write health reports, and update the README badge",
    long_about = None
)]
pub struct HealthArgs {
    /// Repository root to inspect and write reports into.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,
    /// Path to a TOML file overriding the required paths.
    #[arg(long = "config", value_name = "FILE")]
    pub config_override: Option<PathBuf>,
}

impl HealthArgs {
    /// Build a `RunProfile` from CLI args.
    pub fn into_profile(self) -> Result<RunProfile> {
        let root = resolve_root(&self.root)?;
        Ok(RunProfile {
            root,
            config_path: self.config_override,
        })
    }
}
