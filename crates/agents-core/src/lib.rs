//! Sync orchestration for agents-sync
//!
//! This crate sits between the filesystem primitives and the CLI:
//!
//! - **Settings merge**: copy one top-level key between JSON settings files
//! - **Configuration**: optional `agents-sync.toml` manifest and the resolved path layout
//! - **SyncEngine**: apply the source state and build a change report
//!
//! ```text
//!            agents-cli
//!                |
//!           agents-core
//!                |
//!            agents-fs
//! ```

pub mod config;
pub mod error;
pub mod permissions;
pub mod sync;

pub use config::{Manifest, SyncLayout, ToolLink};
pub use error::{Error, Result, Step};
pub use permissions::{FieldMerge, merge_permissions};
pub use sync::{
    ChangeRecord, ChangeReport, ItemKind, LinkRecord, NoopObserver, ReportRow, SyncEngine,
    SyncObserver, SyncOutcome,
};
