use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths::is_nonempty_relative};

pub const DEFAULT_REQUIRED_FILES: [&str; 3] = ["README.md", "LICENSE", ".gitignore"];
pub const DEFAULT_REQUIRED_DIRS: [&str; 2] = ["tests", ".github/workflows"];
pub const DEFAULT_OUTPUT_DIR: &str = "health";
pub const DEFAULT_README: &str = "README.md";

/// Whether a required entry is expected to be a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
}

/// One required path, relative to the inspected root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredPath {
    pub path: String,
    pub kind: PathKind,
}

impl RequiredPath {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: PathKind::File,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: PathKind::Directory,
        }
    }
}

/// Validated health settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthSection {
    /// Ordered required entries; files first, then directories.
    pub required: Vec<RequiredPath>,
    pub output_dir: PathBuf,
    pub readme: PathBuf,
}

impl Default for HealthSection {
    fn default() -> Self {
        let required = DEFAULT_REQUIRED_FILES
            .iter()
            .map(|path| RequiredPath::file(*path))
            .chain(
                DEFAULT_REQUIRED_DIRS
                    .iter()
                    .map(|path| RequiredPath::directory(*path)),
            )
            .collect();

        Self {
            required,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            readme: PathBuf::from(DEFAULT_README),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawHealthSection {
    pub required_files: Option<Vec<String>>,
    pub required_dirs: Option<Vec<String>>,
    pub output_dir: Option<PathBuf>,
    pub readme: Option<PathBuf>,
}

pub fn parse_health_section(
    raw: Option<RawHealthSection>,
    path: &Path,
) -> Result<HealthSection, ConfigError> {
    let raw = raw.unwrap_or_default();

    let files = match raw.required_files {
        Some(entries) => entries,
        None => DEFAULT_REQUIRED_FILES.map(String::from).to_vec(),
    };
    let dirs = match raw.required_dirs {
        Some(entries) => entries,
        None => DEFAULT_REQUIRED_DIRS.map(String::from).to_vec(),
    };
    validate_entries(&files, "health.required_files", path)?;
    validate_entries(&dirs, "health.required_dirs", path)?;

    let output_dir = raw
        .output_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    validate_relative(&output_dir, "health.output_dir", path)?;

    let readme = raw.readme.unwrap_or_else(|| PathBuf::from(DEFAULT_README));
    validate_relative(&readme, "health.readme", path)?;

    let required = files
        .into_iter()
        .map(RequiredPath::file)
        .chain(dirs.into_iter().map(RequiredPath::directory))
        .collect();

    Ok(HealthSection {
        required,
        output_dir,
        readme,
    })
}

fn validate_entries(entries: &[String], field: &'static str, path: &Path) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !is_nonempty_relative(Path::new(entry)) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field,
                message: format!("`{entry}` must be a non-empty relative path inside the repository"),
            });
        }
        if !seen.insert(entry.as_str()) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field,
                message: format!("`{entry}` is listed more than once"),
            });
        }
    }
    Ok(())
}

fn validate_relative(value: &Path, field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if is_nonempty_relative(value) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: "Use a non-empty path relative to the repository root".into(),
    })
}
