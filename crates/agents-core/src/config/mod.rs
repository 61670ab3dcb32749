//! Sync configuration: the optional project manifest and the resolved
//! path layout derived from it.

mod layout;
mod manifest;

pub use layout::{SyncLayout, ToolLink, default_home_dir, default_source_dir};
pub use manifest::{MANIFEST_FILE, Manifest};
