//! Optional per-project manifest (`agents-sync.toml`)
//!
//! Lives at the root of the source directory and overrides the defaults of
//! the sync layout. Every field is optional.

use agents_fs::ConfigStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Result;
use crate::permissions::PERMISSIONS_KEY;

/// File name of the manifest inside the source directory
pub const MANIFEST_FILE: &str = "agents-sync.toml";

fn default_central_dir() -> PathBuf {
    PathBuf::from(".connect0459").join("coding-agents")
}

fn default_settings_key() -> String {
    PERMISSIONS_KEY.to_string()
}

/// Parsed `agents-sync.toml`
///
/// ```
/// use agents_core::config::Manifest;
///
/// let manifest = Manifest::parse(r#"
/// central_dir = ".agents/central"
/// settings_key = "permissions"
/// "#).unwrap();
/// assert_eq!(manifest.central_dir, std::path::PathBuf::from(".agents/central"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Central directory, relative to the home directory
    #[serde(default = "default_central_dir")]
    pub central_dir: PathBuf,

    /// Top-level key merged from `claude/settings.json`
    #[serde(default = "default_settings_key")]
    pub settings_key: String,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            central_dir: default_central_dir(),
            settings_key: default_settings_key(),
        }
    }
}

impl Manifest {
    /// Parse a manifest from TOML content.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `agents-sync.toml` from `source_dir`, falling back to defaults
    /// when the file does not exist. Invalid TOML is an error.
    pub fn load(source_dir: &Path) -> Result<Self> {
        let path = source_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let manifest: Self = ConfigStore::new().load(&path)?;
        tracing::debug!(path = %path.display(), ?manifest, "loaded manifest");
        Ok(manifest)
    }
}
