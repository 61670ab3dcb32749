//! The sync command: apply the source state and print the change report

use std::path::Path;

use agents_core::{Step, SyncEngine, SyncLayout, SyncObserver, ToolLink};

use crate::error::Result;
use crate::output::{Palette, render_report};

/// Prints step and link progress as the engine runs.
struct ProgressPrinter<'a> {
    palette: &'a Palette,
}

impl SyncObserver for ProgressPrinter<'_> {
    fn step(&mut self, step: Step) {
        if step == Step::Links {
            println!();
        }
        if let Some(message) = step.progress() {
            println!("{}", self.palette.cyan(message));
        }
    }

    fn linked(&mut self, link: &ToolLink, target: &Path) {
        println!("  {} -> {}", link.path.display(), target.display());
    }
}

/// Run the sync command
///
/// Resolves the layout (honouring `agents-sync.toml` in the source
/// directory), runs the engine and prints the change report.
pub fn run_sync(source_dir: &Path, home_dir: &Path, palette: &Palette) -> Result<()> {
    let layout = SyncLayout::resolve(source_dir, home_dir)?;

    println!("{}", palette.bold("Coding agents configuration sync tool"));
    println!("{}  {}", palette.dim("Source:"), layout.source_dir.display());
    println!("{} {}", palette.dim("Central:"), layout.central_dir.display());
    println!("{}  {}", palette.dim("Claude:"), layout.claude_dir.display());
    println!();

    let engine = SyncEngine::new(layout);
    let outcome = engine.run(&mut ProgressPrinter { palette })?;
    println!();

    print!("{}", render_report(&outcome.report, palette));
    Ok(())
}
