//! Error types for Sheet Gallery

use thiserror::Error;

/// Main error type for loading and presenting a sheet
#[derive(Error, Debug)]
pub enum GalleryError {
    /// The HTTP request could not be completed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The body could not be read as header-delimited CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Reading a local sheet file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown theme name
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Source argument could not be turned into a URL or path
    #[error("Invalid source: {0}")]
    InvalidSource(String),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::HttpStatus {
            status: 404,
            url: "http://example.com/sheet".to_string(),
        };
        assert_eq!(format!("{}", err), "HTTP 404 from http://example.com/sheet");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GalleryError = io_err.into();
        assert!(matches!(err, GalleryError::Io(_)));
    }
}
