//! agents-sync CLI
//!
//! Syncs AGENTS.md, agent-docs/ and Claude settings from a source checkout
//! to the central location and links each tool's entry file to it.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;

use agents_core::config::{default_home_dir, default_source_dir};
use cli::{Cli, ColorChoice};
use error::Result;
use output::Palette;

fn main() {
    let cli = Cli::parse();
    let palette = palette_for(cli.color);

    if let Err(e) = run(cli, &palette) {
        eprintln!("{}", palette.red(&e.to_string()));
        std::process::exit(1);
    }
}

fn palette_for(choice: ColorChoice) -> Palette {
    let enabled = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
    };
    // colored consults its own detection on every write; pin it to our choice.
    colored::control::set_override(enabled);
    Palette::new(enabled)
}

fn run(cli: Cli, palette: &Palette) -> Result<()> {
    logging::init(cli.verbose)?;

    let source_dir = match cli.source {
        Some(dir) => dir,
        None => default_source_dir()?,
    };
    let home_dir = match cli.home {
        Some(dir) => dir,
        None => default_home_dir()?,
    };
    tracing::debug!(
        source = %source_dir.display(),
        home = %home_dir.display(),
        "resolved directories"
    );

    commands::run_sync(&source_dir, &home_dir, palette)
}
