//! Error types for the converter.
//!
//! The conversion core never fails on input; these errors come from the
//! surrounding I/O, serialization and option validation. Each variant maps
//! to a process exit code at the CLI boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Command-line arguments missing or malformed. Carries the rendered usage text.
    #[error("{0}")]
    Usage(String),

    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Placeholder image URL is not an absolute http(s) URL.
    #[error("Invalid placeholder image URL: '{0}'. Expected an http(s) URL (e.g., https://example.com/600x400.png)")]
    InvalidPlaceholderUrl(String),

    /// Maximum nesting depth out of range.
    #[error("Invalid maximum depth: {0}. Expected a value between 1 and {limit}", limit = crate::config::MAX_DEPTH_LIMIT)]
    InvalidMaxDepth(usize),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConverterError {
    /// Process exit code for this error.
    ///
    /// Missing arguments exit with 1, a missing input file with 2 and every
    /// other failure with 3.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 1,
            Self::InputNotFound(_) => 2,
            Self::InvalidPlaceholderUrl(_)
            | Self::InvalidMaxDepth(_)
            | Self::Io(_)
            | Self::Json(_) => 3,
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConverterError::InvalidPlaceholderUrl("ftp://nope".to_string());
        assert!(err.to_string().contains("ftp://nope"));
        assert!(err.to_string().contains("http(s)"));
    }

    #[test]
    fn test_input_not_found_display() {
        let err = ConverterError::InputNotFound(PathBuf::from("missing.html"));
        assert_eq!(err.to_string(), "Input file not found: missing.html");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ConverterError::Usage("usage".into()).exit_code(), 1);
        assert_eq!(
            ConverterError::InputNotFound(PathBuf::from("x")).exit_code(),
            2
        );
        assert_eq!(ConverterError::InvalidMaxDepth(0).exit_code(), 3);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(ConverterError::from(io).exit_code(), 3);
    }
}
