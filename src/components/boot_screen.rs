//! Boot Screen Component
//!
//! Console-theme intro: blank screen, boot log, logo card. Calls
//! `on_finished` once the schedule reaches the gallery.

use std::time::Duration;

use dioxus::prelude::*;
use sheetgallery_core::{BootPhase, BootSchedule};

#[component]
pub fn BootScreen(
    /// Called once when the intro is over
    on_finished: EventHandler<()>,
) -> Element {
    let schedule = use_hook(BootSchedule::new);
    let mut elapsed = use_signal(|| Duration::ZERO);

    // Sleep from one screen change to the next
    let timeline = schedule.clone();
    use_effect(move || {
        let schedule = timeline.clone();
        spawn(async move {
            let mut at = Duration::ZERO;
            while let Some(next) = schedule.next_change(at) {
                tokio::time::sleep(next - at).await;
                at = next;
                elapsed.set(at);
            }
            tracing::debug!("Boot intro finished after {:?}", at);
            on_finished.call(());
        });
    });

    let now = elapsed();
    let phase = schedule.phase_at(now);
    let lines = schedule.lines_at(now);

    match phase {
        BootPhase::Off | BootPhase::Os => rsx! {
            div { class: "boot boot--off" }
        },
        BootPhase::Bios => rsx! {
            div { class: "boot boot--bios crt",
                div { class: "boot__vendor", "DONE4 Entertainment" }
                for (i, line) in lines.iter().enumerate() {
                    div { key: "{i}", class: "boot__line", "{line}" }
                }
                div { class: "boot__cursor", "_" }
            }
        },
        BootPhase::Logo => rsx! {
            div { class: "boot boot--logo",
                div { class: "boot__logo",
                    h1 { class: "boot__logo-title", "DONE4" }
                    p { class: "boot__logo-subtitle", "ENTERTAINMENT" }
                }
            }
        },
    }
}
