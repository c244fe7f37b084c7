use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PageCommands, SiteCommands};

/// Validate deployment pages and track site rollout
///
/// Launchpad checks the deployment page of a site before it is saved:
/// step order, installation details and testing notes. Once every
/// deployment step is completed the site is marked deployed and may go live.
#[derive(Parser)]
#[command(version, about, name = "launchpad")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/launchpad/launchpad.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// JSON file with a custom step catalog. Defaults to the standard
    /// four-step deployment
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Launchpad CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Process deployment page documents
    #[command(alias = "p")]
    Page {
        #[command(subcommand)]
        command: PageCommands,
    },
    /// Manage sites
    #[command(alias = "s")]
    Site {
        #[command(subcommand)]
        command: SiteCommands,
    },
    /// Show the configured deployment steps
    Steps,
}
