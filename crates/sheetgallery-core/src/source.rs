//! Where sheet text comes from.

use std::fmt;
use std::path::PathBuf;

use crate::error::{GalleryError, GalleryResult};

/// Published CSV export of the gallery sheet.
pub const DEFAULT_SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTiUD07fPcFA9zPES-HKKCs-BC8GZ223iKxzr2bJeLX_YX6cS5YpKD8Y97oPv-NZpCxZUrsXdo8pWyV/pub?gid=0&single=true&output=csv";

/// Host prefix whose HTML publish links get rewritten to CSV.
pub const GOOGLE_SHEETS_HOST: &str = "docs.google.com/spreadsheets";

/// A sheet source: a remote CSV export or a local CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSource {
    Url(String),
    File(PathBuf),
}

impl SheetSource {
    /// Interpret a command-line argument.
    ///
    /// `http://` and `https://` prefixes select a URL, anything else is a path.
    pub fn from_arg(arg: &str) -> GalleryResult<Self> {
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(GalleryError::InvalidSource("empty source".to_string()));
        }

        let lower = arg.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(SheetSource::Url(arg.to_string()))
        } else {
            Ok(SheetSource::File(PathBuf::from(arg)))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, SheetSource::Url(_))
    }
}

impl Default for SheetSource {
    fn default() -> Self {
        SheetSource::Url(DEFAULT_SHEET_CSV_URL.to_string())
    }
}

impl fmt::Display for SheetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSource::Url(url) => write!(f, "{}", url),
            SheetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Rewrite a Google Sheets HTML publish link to its CSV export.
///
/// Returns `None` when the URL is not an HTML export and should be fetched
/// verbatim.
pub fn csv_export_url(url: &str) -> Option<String> {
    csv_export_url_on(url, GOOGLE_SHEETS_HOST)
}

/// Same as [`csv_export_url`], for publish links served from `host`.
pub fn csv_export_url_on(url: &str, host: &str) -> Option<String> {
    if !url.contains(host) {
        return None;
    }

    let has_pubhtml = url.contains("/pubhtml");
    let has_html_output = url.contains("output=html");
    if !has_pubhtml && !has_html_output {
        return None;
    }

    let mut rewritten = url.replacen("/pubhtml", "/pub", 1);
    if has_html_output {
        rewritten = rewritten.replacen("output=html", "output=csv", 1);
    } else if !rewritten.contains("output=") {
        let sep = if rewritten.contains('?') { '&' } else { '?' };
        rewritten.push(sep);
        rewritten.push_str("output=csv");
    }

    Some(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arg_url() {
        let src = SheetSource::from_arg("https://example.com/sheet.csv").unwrap();
        assert_eq!(src, SheetSource::Url("https://example.com/sheet.csv".to_string()));
        assert!(src.is_remote());
    }

    #[test]
    fn test_from_arg_path() {
        let src = SheetSource::from_arg("./sheet.csv").unwrap();
        assert_eq!(src, SheetSource::File(PathBuf::from("./sheet.csv")));
        assert!(!src.is_remote());
    }

    #[test]
    fn test_from_arg_empty() {
        assert!(matches!(
            SheetSource::from_arg("  "),
            Err(GalleryError::InvalidSource(_))
        ));
    }

    #[test]
    fn test_default_is_csv_export() {
        assert!(DEFAULT_SHEET_CSV_URL.ends_with("output=csv"));
        assert!(csv_export_url(DEFAULT_SHEET_CSV_URL).is_none());
    }

    #[test]
    fn test_html_output_rewritten() {
        let url = "https://docs.google.com/spreadsheets/d/e/KEY/pub?gid=0&single=true&output=html";
        assert_eq!(
            csv_export_url(url).unwrap(),
            "https://docs.google.com/spreadsheets/d/e/KEY/pub?gid=0&single=true&output=csv"
        );
    }

    #[test]
    fn test_pubhtml_rewritten() {
        let url = "https://docs.google.com/spreadsheets/d/e/KEY/pubhtml";
        assert_eq!(
            csv_export_url(url).unwrap(),
            "https://docs.google.com/spreadsheets/d/e/KEY/pub?output=csv"
        );

        let url = "https://docs.google.com/spreadsheets/d/e/KEY/pubhtml?gid=0";
        assert_eq!(
            csv_export_url(url).unwrap(),
            "https://docs.google.com/spreadsheets/d/e/KEY/pub?gid=0&output=csv"
        );
    }

    #[test]
    fn test_custom_host() {
        let url = "http://127.0.0.1:8080/sheet/pubhtml?gid=0";
        assert!(csv_export_url(url).is_none());
        assert_eq!(
            csv_export_url_on(url, "127.0.0.1:8080/sheet").unwrap(),
            "http://127.0.0.1:8080/sheet/pub?gid=0&output=csv"
        );
    }

    #[test]
    fn test_other_hosts_untouched() {
        assert!(csv_export_url("https://example.com/pubhtml?output=html").is_none());
    }
}
