//! Shared helpers reused across modules (e.g., path validation).

use std::path::{Component, Path};

/// Returns true if the path is non-empty, relative, and stays inside its base
/// (no `..` components).
pub fn is_nonempty_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path.is_relative()
        && !path
            .components()
            .any(|component| matches!(component, Component::ParentDir | Component::Prefix(_)))
}
