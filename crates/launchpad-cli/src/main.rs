//! Launchpad CLI Application
//!
//! Command-line interface for deployment page validation and site rollout.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, SiteCommands};
use launchpad_core::ProcessorBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog,
        no_color,
        command,
    } = Args::parse();

    let processor = ProcessorBuilder::new()
        .with_database_path(database_file)
        .with_catalog_path(catalog)
        .build()
        .context("Failed to initialize launchpad")?;

    let cli = Cli::new(processor, TerminalRenderer::new(!no_color));

    info!("Launchpad started");

    match command {
        Some(Page { command }) => cli.handle_page_command(command),
        Some(Site { command }) => cli.handle_site_command(command),
        Some(Steps) => cli.show_steps(),
        None => cli.handle_site_command(SiteCommands::List),
    }
}
