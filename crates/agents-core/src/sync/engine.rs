//! SyncEngine implementation
//!
//! Applies the project-local agent configuration to the central location and
//! the tool directories, then reports what changed.

use std::path::{Path, PathBuf};

use agents_fs::{Digest, checksum, dirsync, io, symlink};

use crate::config::{SyncLayout, ToolLink};
use crate::error::Step;
use crate::permissions::FieldMerge;
use crate::{Error, Result};

use super::report::ChangeReport;

/// Receives progress notifications during [`SyncEngine::run`].
pub trait SyncObserver {
    /// Called before `step` starts.
    fn step(&mut self, _step: Step) {}

    /// Called after `link` has been pointed at `target`.
    fn linked(&mut self, _link: &ToolLink, _target: &Path) {}
}

/// Observer that ignores all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SyncObserver for NoopObserver {}

/// Result of a completed sync run
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub report: ChangeReport,
    /// Whether a source settings file existed and was merged
    pub settings_merged: bool,
}

/// A tracked item: report label and the path whose digest is compared.
struct Tracked {
    label: &'static str,
    path: PathBuf,
}

/// Engine for one sync run over a [`SyncLayout`]
///
/// The run is strictly sequential: snapshot, copy instructions, mirror docs,
/// merge settings, link tools, snapshot again. The first failure aborts and
/// leaves already-applied changes in place.
pub struct SyncEngine {
    layout: SyncLayout,
    merge: FieldMerge,
}

impl SyncEngine {
    pub fn new(layout: SyncLayout) -> Self {
        let merge = FieldMerge::new(layout.settings_key.clone());
        Self { layout, merge }
    }

    pub fn layout(&self) -> &SyncLayout {
        &self.layout
    }

    /// Run the sync without progress notifications.
    pub fn sync(&self) -> Result<SyncOutcome> {
        self.run(&mut NoopObserver)
    }

    /// Run the sync, reporting progress to `observer`.
    pub fn run(&self, observer: &mut dyn SyncObserver) -> Result<SyncOutcome> {
        let layout = &self.layout;
        let settings_merged = layout.source_settings().exists();
        let tracked = self.tracked(settings_merged);

        let before = snapshot(&tracked);

        observer.step(Step::PrepareDirs);
        for dir in [
            layout.central_agent_docs(),
            layout.claude_dir.clone(),
            layout.github_dir.clone(),
        ] {
            io::ensure_dir(&dir).map_err(|e| Error::at(Step::PrepareDirs, e))?;
        }

        observer.step(Step::CopyInstructions);
        tracing::info!(step = %Step::CopyInstructions, "running step");
        dirsync::copy_file(&layout.source_agents_md(), &layout.central_agents_md())
            .map_err(|e| Error::at(Step::CopyInstructions, e))?;

        observer.step(Step::SyncDocs);
        tracing::info!(step = %Step::SyncDocs, "running step");
        dirsync::sync(&layout.source_agent_docs(), &layout.central_agent_docs())
            .map_err(|e| Error::at(Step::SyncDocs, e))?;

        if settings_merged {
            observer.step(Step::MergeSettings);
            tracing::info!(step = %Step::MergeSettings, key = %self.merge.key(), "running step");
            self.merge
                .merge(&layout.source_settings(), &layout.claude_settings())
                .map_err(|e| Error::at(Step::MergeSettings, e))?;
        } else {
            tracing::debug!(
                path = %layout.source_settings().display(),
                "no source settings, skipping merge"
            );
        }

        observer.step(Step::Links);
        tracing::info!(step = %Step::Links, "running step");
        let target = layout.central_agents_md();
        let links = layout.links();
        for link in &links {
            symlink::setup(&target, &link.path).map_err(|source| Error::Link {
                name: link.file_name(),
                source,
            })?;
            observer.linked(link, &target);
        }

        let after = snapshot(&tracked);

        let mut report = ChangeReport::new();
        for ((item, before), after) in tracked.iter().zip(before).zip(after) {
            tracing::debug!(
                item = item.label,
                before = before.as_str(),
                after = after.as_str(),
                "digest comparison"
            );
            report.push_item(item.label, before, after);
        }
        for link in &links {
            report.push_link(link.label, symlink::is_symlink(&link.path));
        }

        tracing::info!(changed = report.has_changes(), "sync complete");
        Ok(SyncOutcome {
            report,
            settings_merged,
        })
    }

    fn tracked(&self, with_settings: bool) -> Vec<Tracked> {
        let mut tracked = vec![
            Tracked {
                label: "AGENTS.md",
                path: self.layout.central_agents_md(),
            },
            Tracked {
                label: "agent-docs/",
                path: self.layout.central_agent_docs(),
            },
        ];
        if with_settings {
            tracked.push(Tracked {
                label: "settings.json",
                path: self.layout.claude_settings(),
            });
        }
        tracked
    }
}

fn snapshot(tracked: &[Tracked]) -> Vec<Digest> {
    tracked.iter().map(|t| checksum::digest(&t.path)).collect()
}
