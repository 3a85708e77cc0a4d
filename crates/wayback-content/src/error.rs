//! Error types for the content store
//!
//! Covers the two fatal load conditions (missing store, malformed store) and
//! the IO failures of the atomic rewrite used by the offline writer.

use std::path::{Path, PathBuf};

/// Errors reading or writing the content store
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No file at the configured store path
    #[error("content store not found: {}", path.display())]
    MissingStore { path: PathBuf },

    /// The file exists but is not valid JSON or not shaped like a content document
    #[error("content store {} is not valid: {source}", path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error while reading the store
    #[error("io error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while writing the store
    #[error("io error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization of the rewritten document failed
    #[error("failed to serialize content store: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ContentError {
    /// Map a read failure, turning `NotFound` into [`ContentError::MissingStore`]
    pub fn read_error(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::MissingStore { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// Create malformed-store error for path
    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::MalformedStore {
            path: path.into(),
            source,
        }
    }

    /// Create write error for path
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the store could not be loaded at all
    #[inline]
    #[must_use]
    pub fn is_fatal_load(&self) -> bool {
        matches!(
            self,
            Self::MissingStore { .. } | Self::MalformedStore { .. } | Self::Read { .. }
        )
    }
}

/// Result type alias for content store operations
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_becomes_missing_store() {
        let err = ContentError::read_error("data/content.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ContentError::MissingStore { .. }));
        assert_eq!(err.to_string(), "content store not found: data/content.json");
    }

    #[test]
    fn other_io_errors_stay_read_errors() {
        let err = ContentError::read_error(
            "data/content.json",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, ContentError::Read { .. }));
        assert!(err.is_fatal_load());
    }

    #[test]
    fn malformed_display_includes_parser_diagnostic() {
        let source = serde_json::from_str::<serde_json::Value>("{\"a\":}").unwrap_err();
        let err = ContentError::malformed("content.json", source);
        let message = err.to_string();
        assert!(message.starts_with("content store content.json is not valid: "));
        assert!(message.contains("line 1"));
    }

    #[test]
    fn write_errors_are_not_load_errors() {
        let err = ContentError::write_error("x", io::Error::from(io::ErrorKind::Other));
        assert!(!err.is_fatal_load());
    }
}
