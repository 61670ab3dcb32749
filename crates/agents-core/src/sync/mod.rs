//! Sync run orchestration
//!
//! - **engine**: apply the source state and collect before/after digests
//! - **report**: classify tracked items as changed or unchanged

mod engine;
mod report;

pub use engine::{NoopObserver, SyncEngine, SyncObserver, SyncOutcome};
pub use report::{ChangeRecord, ChangeReport, ItemKind, LinkRecord, ReportRow};
