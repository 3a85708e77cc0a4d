//! Error types for the conclusion writer

use std::path::PathBuf;
use wayback_content::ContentError;

/// Errors applying a conclusion catalog
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// The store root is not a JSON object
    #[error("content store root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// Reading or rewriting the store failed
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The conclusion catalog file could not be read
    #[error("cannot read conclusions {}: {source}", path.display())]
    ReadConclusions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The conclusion catalog file is not an object of string lists
    #[error("conclusions {} are not valid: {source}", path.display())]
    MalformedConclusions {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl WriterError {
    /// Whether this error means the store itself could not be loaded
    #[must_use]
    pub fn is_fatal_load(&self) -> bool {
        match self {
            Self::NotAnObject { .. } => true,
            Self::Content(e) => e.is_fatal_load(),
            Self::ReadConclusions { .. } | Self::MalformedConclusions { .. } => false,
        }
    }
}

/// Result type alias for writer operations
pub type WriterResult<T> = Result<T, WriterError>;
