//! Sheet Gallery CLI
//!
//! Thin wrapper around sheetgallery-core for headless use.
//!
//! ## Usage
//!
//! ```bash
//! # List the images that would appear in the gallery
//! sheetgallery list
//!
//! # List every parsed row, including ones without an image, as JSON
//! sheetgallery list --all --json
//!
//! # Render a static gallery page
//! sheetgallery render --theme console --out gallery.html
//!
//! # Check that a sheet loads
//! sheetgallery check --source ./sheet.csv
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sheetgallery_core::html::render_page;
use sheetgallery_core::{logging, GalleryConfig, GalleryState, SheetLoader, SheetSource, Theme};

/// Sheet Gallery - image gallery over a published spreadsheet
#[derive(Parser)]
#[command(name = "sheetgallery")]
#[command(version)]
#[command(about = "Sheet Gallery - image gallery over a published spreadsheet")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value_t = 15)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// Sheet CSV URL or local file (default: the published gallery sheet)
    #[arg(short, long)]
    source: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List gallery images in sheet order
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Include rows without an image URL
        #[arg(long)]
        all: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render a static HTML gallery
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Theme: console, database, archive, grid
        #[arg(short, long, default_value = "grid")]
        theme: String,

        /// Page title (defaults to the theme's title)
        #[arg(long)]
        title: Option<String>,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Fetch and parse the sheet, reporting counts
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn build_loader(source: &SourceArgs, timeout_secs: u64) -> Result<SheetLoader> {
    let mut config = GalleryConfig::default().with_timeout(Duration::from_secs(timeout_secs));
    if let Some(ref arg) = source.source {
        config = config.with_source(SheetSource::from_arg(arg)?);
    }
    Ok(SheetLoader::new(config)?)
}

/// Load into a fresh gallery state; CLI callers want the error, not an empty page.
async fn load_gallery(loader: &SheetLoader) -> Result<GalleryState> {
    let records = loader
        .load()
        .await
        .with_context(|| format!("Failed to load sheet from {}", loader.source()))?;

    let mut state = GalleryState::new();
    state.finish_load(records);
    Ok(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    match cli.command {
        Commands::List { source, all, json } => {
            let loader = build_loader(&source, cli.timeout_secs)?;
            let state = load_gallery(&loader).await?;

            if all {
                if json {
                    println!("{}", serde_json::to_string_pretty(state.records())?);
                } else {
                    for (position, record) in state.records().iter().enumerate() {
                        let marker = if record.is_displayable() { ' ' } else { '-' };
                        println!("{}{:>4}  {}  {}", marker, position, record.id, record.image_url);
                    }
                }
            } else {
                let tiles = state.tiles();
                if json {
                    println!("{}", serde_json::to_string_pretty(&tiles)?);
                } else {
                    for tile in tiles {
                        println!("{:>5}  {}  {}", tile.position, tile.id, tile.image_url);
                    }
                }
            }
        }

        Commands::Render {
            source,
            theme,
            title,
            out,
        } => {
            let theme: Theme = theme.parse()?;
            let loader = build_loader(&source, cli.timeout_secs)?;
            let state = load_gallery(&loader).await?;

            let page = render_page(&state, theme, title.as_deref());
            std::fs::write(&out, page)
                .with_context(|| format!("Failed to write {}", out.display()))?;

            println!("Rendered {} images to {}", state.tiles().len(), out.display());
        }

        Commands::Check { source } => {
            let loader = build_loader(&source, cli.timeout_secs)?;
            let state = load_gallery(&loader).await?;

            println!("Source: {}", loader.source());
            println!("  Records: {}", state.records().len());
            println!("  Images:  {}", state.tiles().len());
        }
    }

    Ok(())
}
