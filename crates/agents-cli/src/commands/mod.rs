//! Command implementations for agents-cli

pub mod sync;

pub use sync::run_sync;
