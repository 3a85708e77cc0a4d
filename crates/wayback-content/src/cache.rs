//! Memoized document loads using moka
//!
//! Entries are keyed by the store's fingerprint (canonical path, modification
//! time, length), so an edited store is simply a new key. Nothing relies on the
//! cache for correctness: a miss reloads from disk.

use crate::document::ContentDocument;
use crate::error::{ContentError, ContentResult};
use moka::sync::Cache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// Identity of one version of a store file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreFingerprint {
    path: PathBuf,
    modified: Option<SystemTime>,
    len: u64,
}

impl StoreFingerprint {
    /// Fingerprint the file at `path`.
    ///
    /// # Errors
    /// `ContentError::MissingStore` if the file does not exist.
    pub fn of(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        let canonical = path
            .canonicalize()
            .map_err(|e| ContentError::read_error(path, e))?;
        let meta = std::fs::metadata(&canonical).map_err(|e| ContentError::read_error(path, e))?;
        Ok(Self {
            path: canonical,
            modified: meta.modified().ok(),
            len: meta.len(),
        })
    }

    /// Canonical path of the fingerprinted file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Cache of normalized documents
#[derive(Debug, Clone)]
pub struct DocumentCache {
    inner: Cache<StoreFingerprint, Arc<ContentDocument>>,
}

impl DocumentCache {
    /// Create new cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Get a cached document
    #[inline]
    #[must_use]
    pub fn get(&self, key: &StoreFingerprint) -> Option<Arc<ContentDocument>> {
        self.inner.get(key)
    }

    /// Insert a document
    #[inline]
    pub fn insert(&self, key: StoreFingerprint, document: Arc<ContentDocument>) {
        self.inner.insert(key, document);
    }

    /// Return the cached document for `key`, or load it with `load` and cache it.
    ///
    /// # Errors
    /// Whatever `load` returns; failures are not cached.
    pub fn try_get_or_insert_with<F>(
        &self,
        key: StoreFingerprint,
        load: F,
    ) -> ContentResult<Arc<ContentDocument>>
    where
        F: FnOnce() -> ContentResult<ContentDocument>,
    {
        if let Some(cached) = self.get(&key) {
            tracing::debug!(path = %key.path.display(), "content store cache hit");
            return Ok(cached);
        }

        let document = Arc::new(load()?);
        self.insert(key, Arc::clone(&document));
        Ok(document)
    }

    /// Invalidate all entries
    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Get cache statistics
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.inner.run_pending_tasks();
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl Default for DocumentCache {
    /// A handful of store versions is plenty for one session
    fn default() -> Self {
        Self::new(16)
    }
}
