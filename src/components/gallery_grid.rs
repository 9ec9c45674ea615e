//! Gallery Grid Component
//!
//! Displays one tile per displayable record, in sheet order.

use dioxus::prelude::*;
use sheetgallery_core::Tile;

use crate::context::use_theme;

/// Tile grid
///
/// # Examples
///
/// ```rust
/// rsx! {
///     GalleryGrid {
///         tiles: gallery.read().tiles(),
///         on_select: move |position| { gallery.write().select(position); },
///     }
/// }
/// ```
#[component]
pub fn GalleryGrid(
    /// Tiles to display
    tiles: Vec<Tile>,
    /// Click handler (receives the tile's row position)
    on_select: EventHandler<usize>,
) -> Element {
    let theme = use_theme();

    rsx! {
        div { class: "gallery-grid",
            for (i, tile) in tiles.into_iter().enumerate() {
                {
                    let position = tile.position;
                    let label = theme.tile_label(&tile.id);
                    // Stagger the pop-in like a deck being dealt
                    let delay = format!("animation-delay: {}ms;", i.min(40) * 50);
                    rsx! {
                        div {
                            key: "{position}",
                            class: "tile",
                            style: "{delay}",
                            onclick: move |_| on_select.call(position),

                            div { class: "tile__frame",
                                img {
                                    class: "tile__img",
                                    src: "{tile.image_url}",
                                    alt: "{tile.id}",
                                }
                                div { class: "tile__sheen" }
                            }

                            div { class: "tile__label", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
