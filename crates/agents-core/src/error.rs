//! Error types for agents-core

use std::fmt;

/// Result type for agents-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// A named stage of a sync run, used to label failures and progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Create the central, Claude and GitHub directories
    PrepareDirs,
    /// Copy AGENTS.md to the central location
    CopyInstructions,
    /// Mirror agent-docs/ to the central location
    SyncDocs,
    /// Merge the settings key into the Claude settings file
    MergeSettings,
    /// Point tool entry files at the central AGENTS.md
    Links,
}

impl Step {
    /// Progress line shown before the step runs, if any.
    pub fn progress(&self) -> Option<&'static str> {
        match self {
            Self::PrepareDirs => None,
            Self::CopyInstructions => Some("Syncing AGENTS.md to central location"),
            Self::SyncDocs => Some("Syncing agent-docs directory to central location"),
            Self::MergeSettings => Some("Syncing permissions from settings.json"),
            Self::Links => Some("Setting up symlinks..."),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self {
            Self::PrepareDirs => "prepare target directories",
            Self::CopyInstructions => "copy AGENTS.md",
            Self::SyncDocs => "sync agent-docs",
            Self::MergeSettings => "merge permissions",
            Self::Links => "set up symlinks",
        };
        f.write_str(action)
    }
}

/// Errors that can occur in agents-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A sync stage failed; nothing already applied is rolled back
    #[error("failed to {step}: {source}")]
    Step {
        step: Step,
        #[source]
        source: Box<Error>,
    },

    /// Creating one of the tool symlinks failed
    #[error("failed to setup symlink for {name}: {source}")]
    Link {
        name: String,
        #[source]
        source: agents_fs::Error,
    },

    /// No home directory could be determined
    #[error("failed to get home directory")]
    HomeNotFound,

    /// The default source directory could not be derived
    #[error("failed to get executable path: {0}")]
    Executable(#[source] std::io::Error),

    /// Filesystem error from agents-fs
    #[error(transparent)]
    Fs(#[from] agents_fs::Error),
}

impl Error {
    /// Label `source` with the step it interrupted.
    pub fn at(step: Step, source: impl Into<Error>) -> Self {
        Self::Step {
            step,
            source: Box::new(source.into()),
        }
    }

    /// The failed step, if this error carries one.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Step { step, .. } => Some(*step),
            Self::Link { .. } => Some(Step::Links),
            _ => None,
        }
    }
}
