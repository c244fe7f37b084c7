//! Subcommand definitions and their handlers.
//!
//! Page commands read a page document as JSON from a file (or `-` for
//! stdin) and print the processed document as JSON, so they can sit in a
//! pipeline in front of whatever persists the page. Site commands work on
//! the SQLite site registry and render markdown.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use launchpad_core::{
    mark_site_live,
    processor::{CHECKLIST_SECTION, DEPLOYMENT_PAGE, TESTING_SECTION},
    validator::{fields::NOTES_FIELD, validate_notes_field, STEPS_FIELD},
    ChecklistReport, Database, DeploymentPageProcessor, OperationStatus, PageDocument, SiteStatus,
    Sites,
};
use log::{debug, warn};

use crate::renderer::TerminalRenderer;

/// Page document input
#[derive(Args)]
pub struct PageInputArgs {
    /// Page document JSON file, or `-` to read from stdin
    pub file: PathBuf,
}

/// Validate an updated page and update its site
#[derive(Args)]
pub struct UpdatePageArgs {
    /// Page document JSON file, or `-` to read from stdin
    pub file: PathBuf,
    /// ID of the site the page belongs to
    #[arg(long)]
    pub site: u64,
}

#[derive(Subcommand)]
pub enum PageCommands {
    /// Seed a new deployment page with the default checklist
    #[command(alias = "c")]
    Create(PageInputArgs),
    /// Validate an edited deployment page and record its progress
    #[command(alias = "u")]
    Update(UpdatePageArgs),
    /// Show the checklist of a deployment page
    #[command(alias = "r")]
    Report(PageInputArgs),
}

/// Register a new site
#[derive(Args)]
pub struct AddSiteArgs {
    /// Name of the site
    pub name: String,
    /// Starting status of the site
    #[arg(long, default_value = "Created")]
    pub status: SiteStatus,
}

/// Identify a site
#[derive(Args)]
pub struct SiteIdArgs {
    /// Unique identifier of the site
    pub id: u64,
}

#[derive(Subcommand)]
pub enum SiteCommands {
    /// Register a new site
    #[command(alias = "a")]
    Add(AddSiteArgs),
    /// Show details of a site
    #[command(alias = "s")]
    Show(SiteIdArgs),
    /// List all sites
    #[command(aliases = ["l", "ls"])]
    List,
    /// Mark a fully deployed site as live
    GoLive(SiteIdArgs),
}

/// Command handler holding the processor and the output renderer.
pub struct Cli {
    processor: DeploymentPageProcessor<Database>,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(processor: DeploymentPageProcessor<Database>, renderer: TerminalRenderer) -> Self {
        Self {
            processor,
            renderer,
        }
    }

    pub fn handle_page_command(self, command: PageCommands) -> Result<()> {
        match command {
            PageCommands::Create(args) => self.create_page(&args.file),
            PageCommands::Update(args) => self.update_page(&args.file, args.site),
            PageCommands::Report(args) => self.report_page(&args.file),
        }
    }

    pub fn handle_site_command(self, command: SiteCommands) -> Result<()> {
        match command {
            SiteCommands::Add(args) => self.add_site(&args.name, args.status),
            SiteCommands::Show(args) => self.show_site(args.id),
            SiteCommands::List => self.list_sites(),
            SiteCommands::GoLive(args) => self.go_live(args.id),
        }
    }

    fn create_page(&self, file: &Path) -> Result<()> {
        let page = read_page(file)?;
        let page = self.processor.on_create(page);
        print_json(&page)
    }

    fn update_page(&self, file: &Path, site_id: u64) -> Result<()> {
        let page = read_page(file)?;
        let outcome = self
            .processor
            .on_update(page, site_id)
            .context("Deployment page rejected")?;

        if let Some(warning) = &outcome.warning {
            eprintln!("Warning: {warning}");
        }
        if outcome.site_deployed {
            debug!("Site {site_id} marked deployed");
        }
        print_json(&outcome.document)
    }

    fn report_page(&self, file: &Path) -> Result<()> {
        let page = read_page(file)?;
        let validator = self.processor.validator();

        let raw_steps = page.field_value(CHECKLIST_SECTION, STEPS_FIELD);
        let steps = validator
            .validate_all(&validator.normalize_or_default(raw_steps))
            .context("Invalid deployment checklist")?;

        let notes = match page
            .section(TESTING_SECTION)
            .and_then(|s| s.field(NOTES_FIELD))
        {
            Some(field) => validate_notes_field(field).context("Invalid testing notes")?,
            None => Vec::new(),
        };

        let report = ChecklistReport::new(steps).with_notes(notes);
        self.renderer.render(&report.to_string())
    }

    fn add_site(mut self, name: &str, status: SiteStatus) -> Result<()> {
        let site = self
            .processor
            .registry_mut()
            .create_site(name, status)
            .context("Failed to create site")?;
        self.renderer.render(&site.to_string())
    }

    fn show_site(&self, id: u64) -> Result<()> {
        let site = self
            .processor
            .registry()
            .get_site(id)
            .context("Failed to get site")?
            .with_context(|| format!("Site with ID {id} not found"))?;
        self.renderer.render(&site.to_string())
    }

    fn list_sites(&self) -> Result<()> {
        let sites = self
            .processor
            .registry()
            .list_sites()
            .context("Failed to list sites")?;
        self.renderer.render(&Sites(sites).to_string())
    }

    fn go_live(&self, id: u64) -> Result<()> {
        let site = mark_site_live(self.processor.registry(), id)
            .with_context(|| format!("Site {id} cannot go live"))?;
        let status =
            OperationStatus::success(format!("Site {} ({}) is now live", site.id, site.name));
        self.renderer.render(&status.to_string())
    }

    pub fn show_steps(&self) -> Result<()> {
        let catalog = self.processor.validator().catalog();
        let mut markdown = String::from("# Deployment steps\n\n");
        for (position, step) in catalog.steps().iter().enumerate() {
            markdown.push_str(&format!("{}. {step}", position + 1));
        }
        self.renderer.render(&markdown)
    }
}

/// Reads a page document from a file, or from stdin when the path is `-`.
fn read_page(file: &Path) -> Result<PageDocument> {
    let contents = if file == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read page from stdin")?;
        buffer
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("Failed to read page file {}", file.display()))?
    };

    let page: PageDocument =
        serde_json::from_str(&contents).context("Page document is not valid JSON")?;
    if page.page_name != DEPLOYMENT_PAGE {
        warn!("Page '{}' is not a deployment page; passing it through", page.page_name);
    }
    Ok(page)
}

fn print_json(page: &PageDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(page).context("Failed to serialize page")?;
    println!("{json}");
    Ok(())
}
