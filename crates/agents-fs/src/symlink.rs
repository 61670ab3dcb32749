//! Symlink placement for tool entry points

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Point `link` at `target`, replacing whatever currently sits at `link`.
///
/// Files and existing links are removed first. A non-empty directory at
/// `link` is an error.
pub fn setup(target: &Path, link: &Path) -> Result<()> {
    if let Ok(meta) = fs::symlink_metadata(link) {
        let removed = if meta.is_dir() {
            fs::remove_dir(link)
        } else {
            fs::remove_file(link)
        };
        removed.map_err(|e| Error::io(link, e))?;
        tracing::debug!(link = %link.display(), "removed existing entry");
    }

    create(target, link).map_err(|e| Error::io(link, e))?;
    tracing::debug!(link = %link.display(), target = %target.display(), "created symlink");
    Ok(())
}

/// Whether `path` is itself a symbolic link.
pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

#[cfg(unix)]
fn create(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create(target: &Path, link: &Path) -> std::io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}
