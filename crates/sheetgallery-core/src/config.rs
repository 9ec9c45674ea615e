//! Runtime configuration shared by the desktop app and the CLI.

use std::time::Duration;

use crate::source::SheetSource;
use crate::theme::Theme;

/// Default HTTP timeout for the sheet request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings for one gallery session.
///
/// Built from command-line arguments; nothing is read from or written to
/// disk.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub source: SheetSource,
    pub theme: Theme,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl GalleryConfig {
    pub fn with_source(mut self, source: SheetSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            source: SheetSource::default(),
            theme: Theme::default(),
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: format!("sheetgallery/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert!(config.source.is_remote());
        assert_eq!(config.theme, Theme::Grid);
        assert_eq!(config.request_timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("sheetgallery/"));
    }

    #[test]
    fn test_builders() {
        let config = GalleryConfig::default()
            .with_theme(Theme::Console)
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.theme, Theme::Console);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }
}
