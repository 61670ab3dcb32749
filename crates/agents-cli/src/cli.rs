//! CLI argument parsing using clap derive

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Sync AGENTS.md, agent-docs and tool settings to the central location
#[derive(Parser, Debug)]
#[command(name = "agents-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory holding AGENTS.md and agent-docs/
    ///
    /// Defaults to two levels above the executable.
    #[arg(long, env = "AGENTS_SYNC_SOURCE", value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Home directory the central location and tool links live under
    #[arg(long, env = "AGENTS_SYNC_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    Always,
    Never,
}
