//! Gallery page - the only page.
//!
//! Themes with a boot intro show it first; the sheet keeps loading
//! underneath, so the grid is usually ready by the time the intro ends.

use dioxus::prelude::*;
use sheetgallery_core::Theme;

use crate::components::{BootScreen, GalleryGrid, Lightbox};
use crate::context::{use_gallery, use_theme};

/// Gallery page component.
#[component]
pub fn GalleryPage() -> Element {
    let theme = use_theme();
    let mut gallery = use_gallery();
    let mut booted = use_signal(move || !theme.has_boot_sequence());

    if !booted() {
        return rsx! {
            div { class: "{theme.css_class()}",
                CrtOverlay { theme }
                BootScreen { on_finished: move |_| booted.set(true) }
            }
        };
    }

    let state = gallery.read();
    let tiles = state.tiles();
    let count = tiles.len();
    let loading = state.is_loading();
    let show_hint = theme.shows_empty_hint() && state.is_empty_after_load();
    let selected = state
        .selected()
        .map(|record| (record.image_url.clone(), theme.lightbox_caption(&record.id)));
    drop(state);

    rsx! {
        div { class: "{theme.css_class()} gallery-page",
            CrtOverlay { theme }

            header { class: "gallery-header",
                div { class: "gallery-header__titles",
                    h1 { class: "gallery-header__title", "{theme.title()}" }
                    if !theme.subtitle().is_empty() {
                        p { class: "gallery-header__subtitle", "{theme.subtitle()}" }
                    }
                }
                if !loading {
                    span { class: "gallery-header__count", "{count}" }
                }
            }

            main { class: "gallery-main",
                if loading {
                    div { class: "gallery-loading",
                        div { class: "loading-spinner" }
                        "{theme.loading_text()}"
                    }
                } else {
                    GalleryGrid {
                        tiles,
                        on_select: move |position| {
                            gallery.write().select(position);
                        },
                    }
                    if show_hint {
                        p { class: "gallery-empty", "{theme.empty_hint()}" }
                    }
                }
            }

            if theme == Theme::Console {
                footer { class: "gallery-footer",
                    "Done4.co // Curated by @GoodBye World 2026"
                }
            }

            if let Some((image_url, caption)) = selected {
                Lightbox {
                    image_url,
                    caption,
                    on_close: move |_| gallery.write().dismiss(),
                }
            }
        }
    }
}

/// Scanlines and vignette for the console theme.
#[component]
fn CrtOverlay(theme: Theme) -> Element {
    if theme != Theme::Console {
        return rsx! {};
    }

    rsx! {
        div { class: "crt-scanlines" }
        div { class: "crt-vignette" }
    }
}
