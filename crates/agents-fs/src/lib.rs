//! Filesystem primitives for agents-sync
//!
//! Content digests, one-way tree mirroring, symlink placement and plain
//! document I/O. Everything here is synchronous and single-threaded.

pub mod checksum;
pub mod config;
pub mod dirsync;
pub mod error;
pub mod io;
pub mod symlink;

pub use checksum::{Digest, digest};
pub use config::ConfigStore;
pub use dirsync::{copy_file, sync};
pub use error::{Error, Result};
