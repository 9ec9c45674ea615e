//! Sheet Gallery Core Library
//!
//! Loads a published spreadsheet of `{id, image_url}` rows and models the
//! gallery that displays them.
//!
//! ## Overview
//!
//! A spreadsheet published as CSV is the only data source. Each data row
//! becomes an [`ArchiveImage`]; rows without an image URL are kept in the
//! parsed list but never shown. The gallery itself is a small state
//! container ([`GalleryState`]) that the desktop app and the CLI drive.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sheetgallery_core::{GalleryConfig, GalleryState, SheetLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = SheetLoader::new(GalleryConfig::default())?;
//!
//!     let mut state = GalleryState::new();
//!     state.apply(loader.load().await);
//!
//!     for tile in state.tiles() {
//!         println!("{}: {}", tile.id, tile.image_url);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod boot;
pub mod config;
pub mod error;
pub mod gallery;
pub mod html;
pub mod loader;
pub mod logging;
pub mod parse;
pub mod source;
pub mod theme;
pub mod types;

// Re-exports
pub use boot::{BootPhase, BootSchedule, BOOT_LINES};
pub use config::GalleryConfig;
pub use error::{GalleryError, GalleryResult};
pub use gallery::GalleryState;
pub use loader::SheetLoader;
pub use parse::parse_records;
pub use source::{SheetSource, DEFAULT_SHEET_CSV_URL};
pub use theme::Theme;
pub use types::{ArchiveImage, Tile};
