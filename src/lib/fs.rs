//! File helpers for report and README writes.
//!
//! Reports go through a temp file in the destination directory followed by a
//! rename, so a reader never observes a half-written report. The README is
//! rewritten in place so symlinks, hard links and ownership survive.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::lib::errors::HealthError;

/// Unix permission bits applied to files that did not exist before the write.
#[cfg(unix)]
const NEW_FILE_PERMISSIONS: u32 = 0o644;

/// File content written to a temp file but not yet renamed into place.
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    destination: PathBuf,
}

impl StagedFile {
    /// Final path the staged content is committed to.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Rename the temp file over the destination.
    pub fn commit(self) -> Result<PathBuf, HealthError> {
        let Self { temp, destination } = self;
        temp.persist(&destination)
            .map_err(|err| HealthError::Write {
                path: destination.clone(),
                source: err.error,
            })?;
        Ok(destination)
    }
}

/// Create a directory and its parents. Succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> Result<(), HealthError> {
    fs::create_dir_all(path).map_err(|source| HealthError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `contents` to a temp file next to `destination` without touching the destination.
///
/// Permissions of an existing destination are carried over to the staged file.
pub fn stage_file(destination: &Path, contents: &[u8]) -> Result<StagedFile, HealthError> {
    let to_write_error = |source: io::Error| HealthError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let mut temp = NamedTempFile::new_in(parent_dir(destination)).map_err(to_write_error)?;
    temp.write_all(contents).map_err(to_write_error)?;
    temp.as_file().sync_all().map_err(to_write_error)?;
    apply_permissions(temp.path(), destination).map_err(to_write_error)?;

    Ok(StagedFile {
        temp,
        destination: destination.to_path_buf(),
    })
}

/// Truncate and rewrite an existing file through its current path.
///
/// Symlinks are followed, so the link target receives the content. The file
/// is never created.
pub fn overwrite_in_place(path: &Path, contents: &[u8]) -> Result<(), HealthError> {
    let to_write_error = |source: io::Error| HealthError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(to_write_error)?;
    file.write_all(contents).map_err(to_write_error)?;
    file.sync_all().map_err(to_write_error)
}

/// Read a UTF-8 file, returning `None` when it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>, HealthError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(HealthError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn apply_permissions(temp: &Path, destination: &Path) -> io::Result<()> {
    match fs::metadata(destination) {
        Ok(metadata) => fs::set_permissions(temp, metadata.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => default_permissions(temp),
        Err(err) => Err(err),
    }
}

#[cfg(unix)]
fn default_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(NEW_FILE_PERMISSIONS))
}

#[cfg(not(unix))]
fn default_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
