//! Error types for deck generation
//!
//! Error codes follow the pattern `E<category><number>`:
//!
//! - **E1xxx**: I/O and archive errors
//! - **E2xxx**: XML serialization errors
//! - **E3xxx**: deck validation errors

use std::io;
use thiserror::Error;

/// Result type for deck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or writing a presentation package
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while creating, writing, or renaming the output file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - Destination directory does not exist
    /// - Insufficient permissions
    /// - Disk full
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// ZIP archive error while appending package parts
    ///
    /// **Error Code**: E1002
    #[error("[E1002] ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML serialization error
    ///
    /// **Error Code**: E2001
    ///
    /// Raised when a part's XML cannot be written to its buffer. With
    /// in-memory buffers this indicates a bug rather than an environmental
    /// failure.
    #[error("[E2001] XML writing error: {0}")]
    XmlWrite(String),

    /// Deck validation failure
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - Duplicate or reserved shape identifiers within a slide
    /// - Opacity outside the [0, 1] range
    /// - Negative shape extents
    /// - Malformed hex color values
    #[error("[E3001] Invalid deck: {0}")]
    InvalidDeck(String),
}

impl Error {
    /// Create an XmlWrite error
    pub fn xml_write(message: String) -> Self {
        Error::XmlWrite(message)
    }

    /// Create an InvalidDeck error with slide context
    ///
    /// # Arguments
    /// * `slide` - 1-based slide number
    /// * `message` - Description of the violated invariant
    pub fn invalid_slide(slide: usize, message: &str) -> Self {
        Error::InvalidDeck(format!("Slide {}: {}", slide, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let io_err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_err.to_string().contains("[E1001]"));

        let xml_err = Error::xml_write("buffer closed".to_string());
        assert!(xml_err.to_string().contains("[E2001]"));

        let deck_err = Error::InvalidDeck("test error".to_string());
        assert!(deck_err.to_string().contains("[E3001]"));
    }

    #[test]
    fn test_invalid_slide_helper() {
        let err = Error::invalid_slide(3, "duplicate shape id 7");
        assert!(err.to_string().contains("Slide 3"));
        assert!(err.to_string().contains("duplicate shape id 7"));
        assert!(err.to_string().contains("[E3001]"));
    }
}
