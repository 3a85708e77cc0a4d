//! Wayback Content Store
//!
//! Loads the content store, normalizes it, and answers the shell's selection
//! queries.
//!
//! # Architecture
//!
//! ```text
//! content.json → ContentStore::read_raw → normalize_tree → ContentDocument → project()
//!                      ↑______________________________↓
//!                        DocumentCache (keyed by file fingerprint)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use wayback_content::{project, ContentStore};
//!
//! # fn example() -> Result<(), wayback_content::ContentError> {
//! let document = ContentStore::new("data/content.json").load_and_normalize()?;
//! for section in project(&document, "Cybersecurity", "2016") {
//!     println!("{}: {} paragraphs", section.label, section.paragraphs.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod cache;
pub mod document;
pub mod error;
pub mod projector;
pub mod section;
pub mod store;

pub use cache::{CacheStats, DocumentCache, StoreFingerprint};
pub use document::{ContentDocument, SpecialismRecord, YearRecord};
pub use error::{ContentError, ContentResult};
pub use projector::{
    list_specialisms, list_years, project, year_range, ProjectedSection, DEFAULT_YEAR_RANGE,
};
pub use section::{Section, UnknownSection};
pub use store::{load_and_normalize, ContentStore, DEFAULT_STORE_PATH};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the content store
    pub use crate::document::{ContentDocument, YearRecord};
    pub use crate::error::{ContentError, ContentResult};
    pub use crate::projector::{list_specialisms, list_years, project, ProjectedSection};
    pub use crate::section::Section;
    pub use crate::store::ContentStore;
}
