#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use sheetgallery_core::{logging, GalleryConfig, SheetSource, Theme};

/// Global gallery configuration, set from command line
static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Get the gallery configuration (set from command line or default)
pub fn get_config() -> GalleryConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Sheet Gallery - image gallery over a published spreadsheet
#[derive(Parser, Debug)]
#[command(name = "sheetgallery-desktop")]
#[command(about = "Sheet Gallery - image gallery over a published spreadsheet")]
struct Args {
    /// Sheet CSV URL or local file (default: the published gallery sheet)
    #[arg(short, long)]
    source: Option<String>,

    /// Theme: console, database, archive, grid
    #[arg(short, long, default_value = "grid")]
    theme: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Desktop defaults to info so the fetch shows up without flags
    logging::init(args.verbose.max(1));

    let theme: Theme = args.theme.parse()?;
    let mut config = GalleryConfig::default()
        .with_theme(theme)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(ref source) = args.source {
        config = config.with_source(SheetSource::from_arg(source)?);
    }

    tracing::info!("Starting with theme '{}' and source {}", config.theme, config.source);

    let title = format!("{} - Sheet Gallery", config.theme.title());

    // Store configuration globally
    let _ = CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
