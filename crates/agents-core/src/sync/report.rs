//! Change detection report for a sync run
//!
//! Pairs before/after digests of each tracked item and folds them, together
//! with the state of the tool symlinks, into a single "did anything change"
//! answer.

use agents_fs::Digest;
use std::fmt;

/// What kind of entry a report row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Synced content (files, directories, settings)
    Docs,
    /// A tool entry point symlink
    Symlink,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Docs => "docs",
            Self::Symlink => "symlink",
        })
    }
}

/// Before/after digests of one tracked item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub label: String,
    pub kind: ItemKind,
    pub before: Digest,
    pub after: Digest,
}

impl ChangeRecord {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Whether a tool symlink is in place after the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub label: String,
    pub active: bool,
}

/// One rendered line of the report, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub kind: ItemKind,
    pub label: String,
    pub changed: bool,
}

/// Report of what a sync run altered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeReport {
    items: Vec<ChangeRecord>,
    links: Vec<LinkRecord>,
}

impl ChangeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a content item. Items render in insertion order.
    pub fn push_item(&mut self, label: impl Into<String>, before: Digest, after: Digest) {
        self.items.push(ChangeRecord {
            label: label.into(),
            kind: ItemKind::Docs,
            before,
            after,
        });
    }

    /// Track a tool symlink. Links render after all items, in insertion order.
    pub fn push_link(&mut self, label: impl Into<String>, active: bool) {
        self.links.push(LinkRecord {
            label: label.into(),
            active,
        });
    }

    pub fn items(&self) -> &[ChangeRecord] {
        &self.items
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// True if any item changed or any link is active.
    pub fn has_changes(&self) -> bool {
        self.items.iter().any(ChangeRecord::changed) || self.links.iter().any(|l| l.active)
    }

    /// Rows in display order: every item, then each active link.
    pub fn rows(&self) -> Vec<ReportRow> {
        let items = self.items.iter().map(|item| ReportRow {
            kind: item.kind,
            label: item.label.clone(),
            changed: item.changed(),
        });
        let links = self.links.iter().filter(|l| l.active).map(|link| ReportRow {
            kind: ItemKind::Symlink,
            label: link.label.clone(),
            changed: true,
        });
        items.chain(links).collect()
    }
}
