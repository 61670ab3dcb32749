//! Concrete paths for one sync run

use std::path::{Path, PathBuf};

use super::manifest::Manifest;
use crate::{Error, Result};

/// A tool entry point that is symlinked to the central AGENTS.md
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLink {
    /// Display name in the change report
    pub label: &'static str,
    /// Where the symlink is placed
    pub path: PathBuf,
}

impl ToolLink {
    /// File name of the link, for messages.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Every path a sync run reads or writes.
///
/// Source side (`<source>/`): `AGENTS.md`, `agent-docs/`, optional
/// `claude/settings.json`. Target side (`<home>/`): the central directory,
/// `.claude/` and `.github/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncLayout {
    pub source_dir: PathBuf,
    pub home_dir: PathBuf,
    pub central_dir: PathBuf,
    pub claude_dir: PathBuf,
    pub github_dir: PathBuf,
    /// Top-level settings key merged into the Claude settings
    pub settings_key: String,
}

impl SyncLayout {
    /// Layout with default central directory and settings key.
    pub fn new(source_dir: impl Into<PathBuf>, home_dir: impl Into<PathBuf>) -> Self {
        Self::with_manifest(source_dir, home_dir, &Manifest::default())
    }

    pub fn with_manifest(
        source_dir: impl Into<PathBuf>,
        home_dir: impl Into<PathBuf>,
        manifest: &Manifest,
    ) -> Self {
        let home_dir = home_dir.into();
        Self {
            source_dir: source_dir.into(),
            central_dir: home_dir.join(&manifest.central_dir),
            claude_dir: home_dir.join(".claude"),
            github_dir: home_dir.join(".github"),
            settings_key: manifest.settings_key.clone(),
            home_dir,
        }
    }

    /// Layout for `source_dir`, honouring its `agents-sync.toml` if present.
    pub fn resolve(source_dir: impl Into<PathBuf>, home_dir: impl Into<PathBuf>) -> Result<Self> {
        let source_dir = source_dir.into();
        let manifest = Manifest::load(&source_dir)?;
        Ok(Self::with_manifest(source_dir, home_dir, &manifest))
    }

    pub fn source_agents_md(&self) -> PathBuf {
        self.source_dir.join("AGENTS.md")
    }

    pub fn source_agent_docs(&self) -> PathBuf {
        self.source_dir.join("agent-docs")
    }

    pub fn source_settings(&self) -> PathBuf {
        self.source_dir.join("claude").join("settings.json")
    }

    pub fn central_agents_md(&self) -> PathBuf {
        self.central_dir.join("AGENTS.md")
    }

    pub fn central_agent_docs(&self) -> PathBuf {
        self.central_dir.join("agent-docs")
    }

    pub fn claude_settings(&self) -> PathBuf {
        self.claude_dir.join("settings.json")
    }

    /// Tool symlinks in report order.
    pub fn links(&self) -> [ToolLink; 2] {
        [
            ToolLink {
                label: "Claude",
                path: self.claude_dir.join("CLAUDE.md"),
            },
            ToolLink {
                label: "GitHub Copilot",
                path: self.github_dir.join("copilot-instructions.md"),
            },
        ]
    }
}

/// Source directory derived from the running executable: two levels above
/// it, so a binary at `<source>/bin/agents-sync` syncs `<source>`.
pub fn default_source_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::Executable)?;
    let exe = dunce::canonicalize(&exe).unwrap_or(exe);
    Ok(grandparent(&exe))
}

/// The current user's home directory.
pub fn default_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(Error::HomeNotFound)
}

fn grandparent(path: &Path) -> PathBuf {
    path.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
