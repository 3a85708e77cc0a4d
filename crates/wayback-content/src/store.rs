//! Content store - the only component that touches the store file
//!
//! - Ingress: read the JSON file, normalize every string, build a [`ContentDocument`]
//! - Egress: write a rewritten JSON tree back atomically (temp file + rename)

use crate::cache::{DocumentCache, StoreFingerprint};
use crate::document::ContentDocument;
use crate::error::{ContentError, ContentResult};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wayback_text::normalize_tree;

/// Default store location, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = "data/content.json";

/// Handle on one content store file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    /// Create a handle; nothing is read until a load method is called
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store file path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the store without normalizing it.
    ///
    /// # Errors
    /// - `ContentError::MissingStore` if the file does not exist
    /// - `ContentError::MalformedStore` if it is not valid JSON
    /// - `ContentError::Read` for other IO failures
    pub fn read_raw(&self) -> ContentResult<Value> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| ContentError::read_error(&self.path, e))?;
        let value =
            serde_json::from_str(&text).map_err(|e| ContentError::malformed(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "read content store");
        Ok(value)
    }

    /// Read, normalize and type the store.
    ///
    /// # Errors
    /// As [`ContentStore::read_raw`], plus `ContentError::MalformedStore` when
    /// the JSON is not shaped like a content document.
    pub fn load_and_normalize(&self) -> ContentResult<ContentDocument> {
        let raw = self.read_raw()?;
        let document = ContentDocument::from_value(normalize_tree(&raw), &self.path)?;
        if document.is_empty() {
            tracing::warn!(path = %self.path.display(), "content store has no specialisms");
        }
        Ok(document)
    }

    /// [`ContentStore::load_and_normalize`], memoized in `cache` by file fingerprint.
    ///
    /// # Errors
    /// As [`ContentStore::load_and_normalize`].
    pub fn load_cached(&self, cache: &DocumentCache) -> ContentResult<Arc<ContentDocument>> {
        let key = StoreFingerprint::of(&self.path)?;
        cache.try_get_or_insert_with(key, || self.load_and_normalize())
    }

    /// Replace the store with `value`, pretty-printed.
    ///
    /// Writes a temporary file next to the store and renames it over the
    /// original, so readers never see a partially written store.
    ///
    /// # Errors
    /// `ContentError::Serialize` or `ContentError::Write`.
    pub fn write_atomic(&self, value: &Value) -> ContentResult<()> {
        let mut bytes = serde_json::to_vec_pretty(value).map_err(ContentError::Serialize)?;
        bytes.push(b'\n');

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| ContentError::write_error(&self.path, e))?;
        tmp.write_all(&bytes)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| ContentError::write_error(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| ContentError::write_error(&self.path, e.error))?;

        tracing::info!(path = %self.path.display(), bytes = bytes.len(), "rewrote content store");
        Ok(())
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

/// Load and normalize the store at `path`.
///
/// # Errors
/// See [`ContentStore::load_and_normalize`].
pub fn load_and_normalize(path: impl Into<PathBuf>) -> ContentResult<ContentDocument> {
    ContentStore::new(path).load_and_normalize()
}
