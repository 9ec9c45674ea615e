//! Lightbox Component
//!
//! Full-screen overlay for one image. Clicking the backdrop, the close
//! button or pressing Escape dismisses it.

use dioxus::prelude::*;

#[component]
pub fn Lightbox(
    /// Image to show enlarged
    image_url: String,
    /// Footer caption
    caption: String,
    /// Callback when the lightbox is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            on_close.call(());
        }
    };

    rsx! {
        div {
            class: "lightbox-overlay",
            tabindex: "0",
            onclick: move |_| on_close.call(()),
            onkeydown: on_keydown,
            onmounted: move |evt| async move {
                // Take focus so Escape reaches us
                let _ = evt.set_focus(true).await;
            },

            div {
                class: "lightbox",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "lightbox__close lightbox__close--floating",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }

                div { class: "lightbox__image",
                    img { src: "{image_url}", alt: "{caption}" }
                }

                div { class: "lightbox__bar",
                    span { class: "lightbox__caption", "{caption}" }
                    button {
                        class: "lightbox__close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
            }
        }
    }
}
