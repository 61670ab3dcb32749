//! SHA-256 content digests for files and directory trees
//!
//! A [`Digest`] is either 64 lowercase hex characters or the literal
//! [`Digest::NOT_EXISTS`] sentinel. Digesting never fails: anything that cannot
//! be read collapses into the sentinel.

use sha2::{Digest as _, Sha256};
use std::fmt;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Sentinel string for paths that do not exist or cannot be read.
const NOT_EXISTS: &str = "NOT_EXISTS";

/// Opaque content fingerprint of a file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    /// The literal sentinel value for absent paths.
    pub const NOT_EXISTS: &'static str = NOT_EXISTS;

    /// The digest reported for a path that does not exist.
    pub fn missing() -> Self {
        Self(NOT_EXISTS.to_string())
    }

    /// Whether this is the `NOT_EXISTS` sentinel.
    pub fn is_missing(&self) -> bool {
        self.0 == NOT_EXISTS
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Digest {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Compute the digest of a file or directory.
///
/// - missing path: `NOT_EXISTS`
/// - file: SHA-256 of its bytes
/// - directory: SHA-256 over the sorted `(relative path, file digest)` pairs
pub fn digest(path: &Path) -> Digest {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => directory_digest(path),
        Ok(_) => file_digest(path),
        Err(_) => Digest::missing(),
    }
}

/// Compute the SHA-256 digest of a single file's bytes.
pub fn file_digest(path: &Path) -> Digest {
    match hash_file(path) {
        Ok(hex) => Digest(hex),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "file not digestible");
            Digest::missing()
        }
    }
}

/// Compute the digest of a directory tree.
///
/// Directories are not entries themselves, so an empty subdirectory does not
/// contribute. A traversal error stops collection but the entries gathered so
/// far are still folded in.
pub fn directory_digest(root: &Path) -> Digest {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        _ => return Digest::missing(),
    }

    let mut entries: Vec<(String, Digest)> = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "directory walk stopped early");
                break;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .into_owned();
        entries.push((rel, file_digest(entry.path())));
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut hasher = Sha256::new();
    for (rel, file_hash) in &entries {
        hasher.update(rel.as_bytes());
        hasher.update(file_hash.as_str().as_bytes());
    }
    Digest(format!("{:x}", hasher.finalize()))
}

fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}
