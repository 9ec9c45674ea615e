//! Gallery context provider.
//!
//! The page owns one [`GalleryState`] signal; components read it through
//! `use_gallery` and mutate it through the explicit setters on the state.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut gallery = use_gallery();
//! gallery.write().select(position);
//! ```

use dioxus::prelude::*;
use sheetgallery_core::{GalleryConfig, GalleryState, Theme};

/// Get the configuration chosen on the command line.
pub fn get_config() -> GalleryConfig {
    crate::get_config()
}

/// Hook to access the gallery state from context.
pub fn use_gallery() -> Signal<GalleryState> {
    use_context::<Signal<GalleryState>>()
}

/// Hook to access the active theme.
pub fn use_theme() -> Theme {
    use_context::<Theme>()
}
