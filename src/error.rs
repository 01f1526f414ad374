//! Error types for sitemap construction, rendering and output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Coarse classification of a [`SitemapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The builder was set up with bad values (base URL, date format, missing stylesheet).
    Configuration,
    /// An entry value was rejected (priority range, frequency token).
    InvalidArgument,
    /// Writing the sitemap to a file or stream failed.
    Io,
    /// The XSL transform could not be performed.
    Transform,
}

/// Errors that can occur while building or emitting a sitemap.
#[derive(Error, Debug)]
pub enum SitemapError {
    /// The base URL does not start with `http://host` or `https://host`.
    #[error("Bad base URL: {0:?} must start with http://host or https://host")]
    InvalidBaseUrl(String),

    /// A transform was requested but no stylesheet was set.
    #[error("No XSL stylesheet configured; call set_stylesheet before applying a transform")]
    MissingStylesheet,

    /// The strftime pattern used for `<lastmod>` is malformed.
    #[error("Invalid date format: {0:?}")]
    InvalidDateFormat(String),

    /// Priority outside `[0.0, 1.0]` or not a number.
    #[error("Invalid priority {0}: must be between 0.0 and 1.0")]
    InvalidPriority(f64),

    /// Change frequency is not one of the sitemaps.org tokens.
    #[error("Unknown change frequency: {0:?}")]
    InvalidFrequency(String),

    /// The configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The output file could not be created or written.
    #[error("Cannot write sitemap to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The XSLT engine rejected the stylesheet or the document.
    #[error("XSL transform failed: {0}")]
    Transform(String),
}

impl SitemapError {
    /// Which part of the error taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SitemapError::InvalidBaseUrl(_)
            | SitemapError::MissingStylesheet
            | SitemapError::InvalidDateFormat(_)
            | SitemapError::Config(_) => ErrorKind::Configuration,
            SitemapError::InvalidPriority(_) | SitemapError::InvalidFrequency(_) => {
                ErrorKind::InvalidArgument
            }
            SitemapError::Write { .. } | SitemapError::Io(_) => ErrorKind::Io,
            SitemapError::Transform(_) => ErrorKind::Transform,
        }
    }
}

impl From<toml::de::Error> for SitemapError {
    fn from(err: toml::de::Error) -> Self {
        SitemapError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SitemapError::InvalidBaseUrl("not-a-url".to_string()).to_string(),
            "Bad base URL: \"not-a-url\" must start with http://host or https://host"
        );

        assert_eq!(
            SitemapError::InvalidPriority(1.5).to_string(),
            "Invalid priority 1.5: must be between 0.0 and 1.0"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(SitemapError::MissingStylesheet.kind(), ErrorKind::Configuration);
        assert_eq!(
            SitemapError::InvalidFrequency("lal".to_string()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(SitemapError::Transform("boom".to_string()).kind(), ErrorKind::Transform);

        let write = SitemapError::Write {
            path: PathBuf::from("/nope/sitemap.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(write.kind(), ErrorKind::Io);
        assert!(write.to_string().contains("/nope/sitemap.xml"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let sitemap_error: SitemapError = io_error.into();

        match sitemap_error {
            SitemapError::Io(_) => (),
            _ => panic!("Expected Io variant"),
        }
    }
}
