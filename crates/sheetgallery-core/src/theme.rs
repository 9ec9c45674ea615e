//! Presentation themes.
//!
//! Every theme renders the same records the same way; only chrome and
//! labels change.

use std::fmt;
use std::str::FromStr;

use crate::error::GalleryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Theme {
    /// Retro console with a boot intro
    Console,
    /// Minimalist record listing
    Database,
    /// Horror "archive" with an empty-state hint
    Archive,
    /// Plain image grid
    #[default]
    Grid,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Console, Theme::Database, Theme::Archive, Theme::Grid];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Console => "console",
            Theme::Database => "database",
            Theme::Archive => "archive",
            Theme::Grid => "grid",
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        match self {
            Theme::Console => "MEMORY CARD",
            Theme::Database => "Image Database",
            Theme::Archive => "The Archive",
            Theme::Grid => "Gallery",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Theme::Console => "DONE4_ARCHIVE",
            Theme::Database => "records",
            Theme::Archive => "recovered exhibits",
            Theme::Grid => "",
        }
    }

    /// Caption under a grid tile.
    pub fn tile_label(&self, id: &str) -> String {
        match self {
            Theme::Console => format!("SLUS-{}", id),
            Theme::Database => format!("#{}", id),
            Theme::Archive => format!("EXHIBIT #{}", id),
            Theme::Grid => id.to_string(),
        }
    }

    /// Caption in the lightbox footer.
    pub fn lightbox_caption(&self, id: &str) -> String {
        match self {
            Theme::Console => format!("VIEWING: {}", id),
            _ => self.tile_label(id),
        }
    }

    pub fn loading_text(&self) -> &'static str {
        match self {
            Theme::Console => "READING MEMORY CARD...",
            Theme::Database => "Querying...",
            Theme::Archive => "Unsealing the archive...",
            Theme::Grid => "Loading...",
        }
    }

    pub fn empty_hint(&self) -> &'static str {
        "No images found."
    }

    pub fn has_boot_sequence(&self) -> bool {
        matches!(self, Theme::Console)
    }

    pub fn shows_empty_hint(&self) -> bool {
        matches!(self, Theme::Archive)
    }

    /// Root CSS class; styles are keyed off this.
    pub fn css_class(&self) -> String {
        format!("theme-{}", self.name())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or_else(|| {
                GalleryError::InvalidTheme(format!(
                    "'{}'. Must be one of: console, database, archive, grid",
                    s
                ))
            })
    }
}
