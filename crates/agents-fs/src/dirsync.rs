//! One-way directory mirroring
//!
//! [`sync`] makes a destination tree match a source tree: destination-only
//! files are removed, directories left empty are pruned, then every source
//! file is copied over. The first I/O error aborts and nothing is rolled back.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{Error, Result};

/// Mirror `source` onto `destination`.
///
/// When `destination` is not an existing directory the prune steps are
/// skipped and this is a plain recursive copy.
pub fn sync(source: &Path, destination: &Path) -> Result<()> {
    let meta = fs::metadata(source).map_err(|e| Error::io(source, e))?;
    if !meta.is_dir() {
        return Err(Error::NotADirectory {
            path: source.to_path_buf(),
        });
    }

    if destination.is_dir() {
        delete_extra_files(source, destination)?;
        delete_empty_dirs(destination)?;
    }

    copy_tree(source, destination)
}

/// Copy one file, carrying the source permission mode onto a newly created
/// destination. An existing destination is truncated and overwritten.
pub fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    let mut input = File::open(source).map_err(|e| Error::io(source, e))?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        let meta = input.metadata().map_err(|e| Error::io(source, e))?;
        options.mode(meta.permissions().mode());
    }

    let mut output = options
        .open(destination)
        .map_err(|e| Error::io(destination, e))?;
    io::copy(&mut input, &mut output).map_err(|e| Error::io(destination, e))?;

    tracing::debug!(
        from = %source.display(),
        to = %destination.display(),
        "copied file"
    );
    Ok(())
}

/// Remove every non-directory entry under `destination` that has no
/// counterpart under `source`.
fn delete_extra_files(source: &Path, destination: &Path) -> Result<()> {
    let mut stale = Vec::new();
    for entry in WalkDir::new(destination).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(destination, e))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let rel = relative(destination, entry.path());
        match fs::metadata(source.join(&rel)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => stale.push(entry.into_path()),
            _ => {}
        }
    }

    for path in stale {
        fs::remove_file(&path).map_err(|e| Error::io(&path, e))?;
        tracing::debug!(path = %path.display(), "removed stale file");
    }
    Ok(())
}

/// Remove empty directories below `destination` in a single pre-order pass.
///
/// Directories are checked parent before child, so a parent is only removed
/// if it was already empty when visited: a nested chain of empty directories
/// loses one level per run. The root itself is kept; unreadable directories
/// are skipped.
fn delete_empty_dirs(destination: &Path) -> Result<()> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(destination)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(destination, e))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    for dir in dirs {
        let mut listing = match fs::read_dir(&dir) {
            Ok(listing) => listing,
            Err(_) => continue,
        };
        if listing.next().is_none() {
            fs::remove_dir(&dir).map_err(|e| Error::io(&dir, e))?;
            tracing::debug!(path = %dir.display(), "removed empty directory");
        }
    }
    Ok(())
}

fn copy_tree(source: &Path, destination: &Path) -> Result<()> {
    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(source, e))?;
        let target = destination.join(relative(source, entry.path()));

        if entry.file_type().is_dir() {
            create_dir(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(path).map_err(|e| Error::io(path, e))
}

fn relative(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

fn walk_error(root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    match err.into_io_error() {
        Some(source) => Error::io(path, source),
        None => Error::Io {
            path,
            source: io::Error::other("filesystem loop detected"),
        },
    }
}
