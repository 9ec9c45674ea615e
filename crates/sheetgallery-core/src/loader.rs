//! Sheet loader: one retrieval, then parse.
//!
//! ## Failure policy
//!
//! [`SheetLoader::load`] reports every failure to the caller. The gallery
//! page does not distinguish causes, so [`SheetLoader::load_or_empty`] logs
//! the error and hands back an empty list instead. Nothing is retried.

use reqwest::Client;

use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::parse::parse_records;
use crate::source::{csv_export_url_on, SheetSource, GOOGLE_SHEETS_HOST};
use crate::types::ArchiveImage;

/// Fetches and parses a published sheet.
#[derive(Debug, Clone)]
pub struct SheetLoader {
    client: Client,
    source: SheetSource,
    /// HTML publish links under this host are fetched as CSV instead
    export_host: String,
}

impl SheetLoader {
    /// Create a loader for the configured source.
    pub fn new(config: GalleryConfig) -> GalleryResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            client,
            source: config.source,
            export_host: GOOGLE_SHEETS_HOST.to_string(),
        })
    }

    /// Rewrite HTML publish links served from `host` rather than Google Sheets.
    pub fn with_export_host(mut self, host: impl Into<String>) -> Self {
        self.export_host = host.into();
        self
    }

    pub fn source(&self) -> &SheetSource {
        &self.source
    }

    /// Retrieve the raw sheet text.
    pub async fn fetch_text(&self) -> GalleryResult<String> {
        match &self.source {
            SheetSource::Url(url) => self.fetch_url(url).await,
            SheetSource::File(path) => {
                tracing::info!("Reading sheet from {}", path.display());
                let text = tokio::fs::read_to_string(path).await?;
                tracing::debug!("Read {} bytes", text.len());
                Ok(text)
            }
        }
    }

    async fn fetch_url(&self, url: &str) -> GalleryResult<String> {
        let url = match csv_export_url_on(url, &self.export_host) {
            Some(csv_url) => {
                tracing::warn!("Sheet URL points at an HTML export, fetching CSV instead: {}", csv_url);
                csv_url
            }
            None => url.to_string(),
        };

        tracing::info!("Fetching sheet from {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let text = response.text().await?;
        tracing::debug!("Fetched {} bytes", text.len());
        Ok(text)
    }

    /// Fetch and parse the sheet into records, in row order.
    pub async fn load(&self) -> GalleryResult<Vec<ArchiveImage>> {
        let text = self.fetch_text().await?;
        let records = parse_records(&text)?;
        tracing::info!("Loaded {} records from {}", records.len(), self.source);
        Ok(records)
    }

    /// Fetch and parse, falling back to an empty list on any failure.
    pub async fn load_or_empty(&self) -> Vec<ArchiveImage> {
        match self.load().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Failed to load sheet from {}: {}", self.source, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn loader_for(source: SheetSource) -> SheetLoader {
        SheetLoader::new(GalleryConfig::default().with_source(source)).unwrap()
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "id,image_url\n001,http://x/a.png\n002,\n").unwrap();

        let loader = loader_for(SheetSource::File(file.path().to_path_buf()));
        let records = loader.load().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "001");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let loader = loader_for(SheetSource::File("/nonexistent/sheet.csv".into()));
        assert!(matches!(loader.load().await, Err(GalleryError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_or_empty_swallows_errors() {
        let loader = loader_for(SheetSource::File("/nonexistent/sheet.csv".into()));
        assert!(loader.load_or_empty().await.is_empty());
    }
}
