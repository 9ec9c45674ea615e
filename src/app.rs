use dioxus::prelude::*;
use sheetgallery_core::{GalleryState, SheetLoader};

use crate::context::get_config;
use crate::pages::GalleryPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the gallery state and the theme, and starts the
/// one-and-only sheet load.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);
    let theme = config.theme;
    let mut gallery: Signal<GalleryState> = use_signal(GalleryState::new);

    // Provide gallery state and theme to all child components
    use_context_provider(|| gallery);
    use_context_provider(|| theme);

    // Load the sheet on mount; a failure settles into an empty gallery
    use_effect(move || {
        let config = config.clone();
        spawn(async move {
            match SheetLoader::new(config) {
                Ok(loader) => {
                    let result = loader.load().await;
                    gallery.write().apply(result);
                }
                Err(e) => {
                    tracing::error!("Failed to create sheet loader: {}", e);
                    gallery.write().fail_load();
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        GalleryPage {}
    }
}
