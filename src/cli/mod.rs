//! Command-line interface for richfield.
//!
//! Each invocation builds a catalog from the configured seed resources and
//! runs one operation against it. Nothing is saved between invocations.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::ResolvedConfig;
use crate::library::{
    Catalog, CatalogError, Category, ResourceRecord, SearchField, MSG_REMOVED,
};

/// richfield - library resource catalog
#[derive(Parser, Debug)]
#[command(name = "richfield")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (searched for in .richfield/config.yaml if not given)
    #[arg(long, global = true, env = "RICHFIELD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a resource and show the resulting report
    Add {
        /// Resource title
        #[arg(long)]
        title: String,

        /// Author's name
        #[arg(long)]
        author: String,

        /// Catalog number
        #[arg(long)]
        isbn: String,

        /// Resource type: Book (B), Journal (J) or Digital (D)
        #[arg(long = "type")]
        kind: String,
    },

    /// Remove the first resource with the given ISBN
    Remove {
        /// ISBN of the resource to remove
        isbn: String,
    },

    /// Search by title, author or ISBN (exact match)
    Search {
        /// Field to search: title (T), author (A) or isbn (I)
        #[arg(short, long, default_value = "title")]
        by: SearchField,

        /// Search query
        query: String,

        /// Output matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print all resources grouped by type
    Report {
        /// Output report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command, writing to stdout
    pub fn execute(self, config: &ResolvedConfig) -> Result<()> {
        eprintln!("Welcome to the {}!", config.library_name);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.command.run(config, &mut out)
    }
}

impl Commands {
    /// Run the command against a catalog seeded from `config`
    pub fn run(self, config: &ResolvedConfig, out: &mut dyn Write) -> Result<()> {
        let mut catalog = config.build_catalog();
        tracing::debug!(seeded = catalog.len(), "Catalog ready");

        match self {
            Commands::Add {
                title,
                author,
                isbn,
                kind,
            } => add_resource(&mut catalog, title, author, isbn, &kind, out),
            Commands::Remove { isbn } => remove_resource(&mut catalog, &isbn, out),
            Commands::Search { by, query, json } => search_resources(&catalog, &query, by, json, out),
            Commands::Report { json } => print_report(&catalog, json, out),
            Commands::Config => show_config(config, out),
        }
    }
}

/// Add a resource, then print the report so the addition is visible
fn add_resource(
    catalog: &mut Catalog,
    title: String,
    author: String,
    isbn: String,
    kind: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let category: Category = kind.parse()?;

    catalog.add(ResourceRecord::new(title, author, isbn, category));
    writeln!(out, "{}", category.added_message())?;

    print_report(catalog, false, out)
}

/// Remove a resource by ISBN
fn remove_resource(catalog: &mut Catalog, isbn: &str, out: &mut dyn Write) -> Result<()> {
    match catalog.remove_by_identifier(isbn) {
        Ok(_) => writeln!(out, "{}", MSG_REMOVED)?,
        Err(e @ CatalogError::NotFound { .. }) => writeln!(out, "{}", e)?,
        Err(e) => return Err(e.into()),
    }
    writeln!(out, "\n{} resource(s) remaining", catalog.len())?;

    Ok(())
}

/// Search the catalog
fn search_resources(
    catalog: &Catalog,
    query: &str,
    field: SearchField,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    if json {
        let matches = catalog.search(query, field);
        let rendered =
            serde_json::to_string_pretty(&matches).context("Failed to serialize search results")?;
        writeln!(out, "{}", rendered)?;
        return Ok(());
    }

    match catalog.find(query, field) {
        Ok(matches) => {
            for record in matches {
                writeln!(out, "Resource found:")?;
                writeln!(out, "{}", record)?;
                writeln!(out)?;
            }
        }
        Err(e) if e.is_not_found() => writeln!(out, "{}", e)?,
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Print the catalog grouped by resource type
fn print_report(catalog: &Catalog, json: bool, out: &mut dyn Write) -> Result<()> {
    let report = catalog.generate_report();

    if json {
        let rendered =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        writeln!(out, "{}", rendered)?;
        return Ok(());
    }

    writeln!(out, "\nCatalog Report:")?;
    write!(out, "{}", report)?;

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config(config: &ResolvedConfig, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Library: {}", config.library_name)?;
    writeln!(
        out,
        "Config file: {}",
        config
            .config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    )?;
    writeln!(out, "Log level: {}", config.log_level)?;
    writeln!(out, "Seed resources: {}", config.resources.len())?;
    for record in &config.resources {
        writeln!(out, "  {}", record)?;
    }

    Ok(())
}
