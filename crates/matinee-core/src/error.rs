//! Error types for Matinee core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Matinee core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Service name outside the supported set.
    #[error("Unknown video service: {0}")]
    UnknownService(String),

    /// Link that no supported service recognizes.
    #[error("Unrecognized video link: {0}")]
    UnrecognizedUrl(String),

    /// Trim window whose end bound does not exceed its start bound.
    #[error("Invalid trim window: end bound {end_at}s must exceed start bound {start_at}s")]
    InvalidTrim {
        /// Requested start offset in seconds.
        start_at: u64,
        /// Requested end offset in seconds.
        end_at: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_service_display() {
        let err = Error::UnknownService("myspace".to_string());
        assert_eq!(err.to_string(), "Unknown video service: myspace");
    }

    #[test]
    fn test_unrecognized_url_display() {
        let err = Error::UnrecognizedUrl("ftp://example.com/clip".to_string());
        assert!(err.to_string().contains("ftp://example.com/clip"));
    }

    #[test]
    fn test_invalid_trim_display() {
        let err = Error::InvalidTrim {
            start_at: 30,
            end_at: 10,
        };
        assert!(err.to_string().contains("10s"));
        assert!(err.to_string().contains("30s"));
    }
}
