//! Shared test utilities for the agents-sync workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for temporary directory fixtures
//! - [`project`]: source/home fixtures shaped like a real sync run

pub mod project;
pub mod tree;

pub use project::TestProject;
pub use tree::TestTree;
