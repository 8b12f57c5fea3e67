//! Error types for the mkdeck library.

use crate::model::LayoutKind;
use std::io;
use thiserror::Error;

/// Result type alias for mkdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, writing or reading a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// The presentation template has no layout of the requested kind.
    #[error("Layout unavailable: {0}")]
    LayoutUnavailable(LayoutKind),

    /// The chosen layout lacks a placeholder the builder needs to populate.
    #[error("Placeholder missing: layout '{layout}' has no {placeholder} placeholder")]
    PlaceholderMissing {
        /// Name of the layout that was searched
        layout: String,
        /// Role of the missing placeholder
        placeholder: String,
    },

    /// Writing the package or the output file failed.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a PowerPoint presentation.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Invalid or malformed data in the package.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),
}

impl Error {
    pub(crate) fn placeholder_missing(layout: &str, placeholder: impl Into<String>) -> Self {
        Error::PlaceholderMissing {
            layout: layout.to_string(),
            placeholder: placeholder.into(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::LayoutUnavailable(LayoutKind::TitleAndContent);
        assert_eq!(err.to_string(), "Layout unavailable: Title and Content");

        let err = Error::placeholder_missing("Title Only", "body");
        assert_eq!(
            err.to_string(),
            "Placeholder missing: layout 'Title Only' has no body placeholder"
        );

        let err = Error::SerializationFailed("disk full".to_string());
        assert_eq!(err.to_string(), "Serialization failed: disk full");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
