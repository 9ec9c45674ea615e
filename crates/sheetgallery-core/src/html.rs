//! Static HTML rendering of a loaded gallery.
//!
//! Produces one self-contained document. The lightbox needs no script: each
//! tile links to `#view-<position>` and the matching overlay is shown via
//! the CSS `:target` selector. Linking back to `#` dismisses it.

use std::fmt::{self, Write};

use crate::gallery::GalleryState;
use crate::theme::Theme;

const BASE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { min-height: 100vh; font-family: monospace; }
.gallery-header { padding: 1rem 2rem; }
.gallery-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem; padding: 2rem; }
.tile { display: block; text-decoration: none; color: inherit; }
.tile img { width: 100%; aspect-ratio: 1; object-fit: cover; display: block; }
.tile figcaption { padding: 0.5rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.empty-hint { padding: 4rem 2rem; text-align: center; opacity: 0.7; }
.lightbox { display: none; position: fixed; inset: 0; z-index: 100; align-items: center; justify-content: center; }
.lightbox:target { display: flex; }
.lightbox__backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.95); }
.lightbox__frame { position: relative; max-width: 95vw; max-height: 85vh; display: flex; flex-direction: column; }
.lightbox__frame img { max-width: 95vw; max-height: 75vh; object-fit: contain; }
.lightbox__bar { display: flex; justify-content: space-between; padding: 0.75rem 1rem; }
.lightbox__close { color: inherit; text-decoration: none; font-size: 1.5rem; }
"#;

fn theme_css(theme: Theme) -> &'static str {
    match theme {
        Theme::Console => {
            "body { background: #0a0a0a; color: #a8a8a8; } .gallery-header, .lightbox__bar { background: #111; color: #fff; border-bottom: 2px solid rgba(255,255,255,0.2); } .tile { border: 2px solid #4b5563; background: #000; } .tile:hover { border-color: #f97316; } .tile figcaption { background: #1a1a1a; color: #fff; letter-spacing: 0.1em; }"
        }
        Theme::Database => {
            "body { background: #fafafa; color: #111; font-family: 'Helvetica Neue', sans-serif; } .tile { border: 1px solid #e5e5e5; } .tile figcaption { font-size: 0.75rem; color: #666; } .lightbox__bar { background: #fff; }"
        }
        Theme::Archive => {
            "body { background: #050303; color: #b91c1c; font-family: Georgia, serif; } .tile { border: 1px solid #3f0d0d; filter: grayscale(0.6) contrast(1.2); } .tile:hover { filter: none; } .lightbox__bar { background: #0b0505; }"
        }
        Theme::Grid => {
            "body { background: #111; color: #eee; font-family: sans-serif; } .lightbox__bar { background: #111; }"
        }
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the gallery as a standalone HTML page.
pub fn render_page(state: &GalleryState, theme: Theme, title: Option<&str>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_page(&mut out, state, theme, title.unwrap_or(theme.title()));
    out
}

fn write_page(out: &mut String, state: &GalleryState, theme: Theme, title: &str) -> fmt::Result {
    let tiles = state.tiles();
    let title = escape(title);

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    writeln!(out, "<title>{}</title>", title)?;
    writeln!(out, "<style>{}{}</style>", BASE_CSS, theme_css(theme))?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body class=\"{}\">", theme.css_class())?;

    writeln!(out, "<header class=\"gallery-header\">")?;
    writeln!(out, "<h1>{}</h1>", title)?;
    if !theme.subtitle().is_empty() {
        writeln!(out, "<p>{}</p>", escape(theme.subtitle()))?;
    }
    writeln!(out, "</header>")?;

    writeln!(out, "<main class=\"gallery-grid\">")?;
    for tile in &tiles {
        let label = escape(&theme.tile_label(&tile.id));
        writeln!(
            out,
            "<a class=\"tile\" href=\"#view-{pos}\"><figure><img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\"><figcaption>{label}</figcaption></figure></a>",
            pos = tile.position,
            src = escape(&tile.image_url),
            alt = escape(&tile.id),
            label = label,
        )?;
    }
    writeln!(out, "</main>")?;

    if theme.shows_empty_hint() && state.is_empty_after_load() {
        writeln!(out, "<p class=\"empty-hint\">{}</p>", escape(theme.empty_hint()))?;
    }

    for tile in &tiles {
        writeln!(
            out,
            "<div class=\"lightbox\" id=\"view-{pos}\"><a class=\"lightbox__backdrop\" href=\"#\"></a><div class=\"lightbox__frame\"><img src=\"{src}\" alt=\"{alt}\"><div class=\"lightbox__bar\"><span>{caption}</span><a class=\"lightbox__close\" href=\"#\">&times;</a></div></div></div>",
            pos = tile.position,
            src = escape(&tile.image_url),
            alt = escape(&tile.id),
            caption = escape(&theme.lightbox_caption(&tile.id)),
        )?;
    }

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_records;

    fn state_from(csv: &str) -> GalleryState {
        let mut state = GalleryState::new();
        state.apply(parse_records(csv));
        state
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_one_tile_per_displayable_row() {
        let state = state_from("id,image_url\n001,http://x/a.png\n002,\n003,http://x/c.png");
        let html = render_page(&state, Theme::Grid, None);

        assert_eq!(html.matches("class=\"tile\"").count(), 2);
        assert_eq!(html.matches("class=\"lightbox\"").count(), 2);
        assert!(html.contains("href=\"#view-0\""));
        assert!(html.contains("href=\"#view-2\""));
        assert!(!html.contains("#view-1"));

        let first = html.find("<figcaption>001</figcaption>").unwrap();
        let third = html.find("<figcaption>003</figcaption>").unwrap();
        assert!(first < third);
    }

    #[test]
    fn test_values_are_escaped() {
        let state = state_from("id,image_url\n<b>,\"http://x/a.png?a=1&b=\"\"2\"\"\"\n");
        let html = render_page(&state, Theme::Grid, Some("A & B"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<figcaption>&lt;b&gt;</figcaption>"));
        assert!(html.contains("src=\"http://x/a.png?a=1&amp;b=&quot;2&quot;\""));
    }

    #[test]
    fn test_archive_empty_hint() {
        let state = state_from("id,image_url\n001,\n");
        let archive = render_page(&state, Theme::Archive, None);
        assert!(archive.contains("No images found."));

        let grid = render_page(&state, Theme::Grid, None);
        assert!(!grid.contains("No images found."));
    }

    #[test]
    fn test_theme_labels_used() {
        let state = state_from("id,image_url\n001,http://x/a.png\n");
        let html = render_page(&state, Theme::Console, None);
        assert!(html.contains("SLUS-001"));
        assert!(html.contains("VIEWING: 001"));
        assert!(html.contains("class=\"theme-console\""));
    }

    #[test]
    fn test_render_is_deterministic() {
        let csv = "id,image_url\n1,http://x/1.png\n2,http://x/2.png\n";
        assert_eq!(
            render_page(&state_from(csv), Theme::Database, None),
            render_page(&state_from(csv), Theme::Database, None)
        );
    }
}
