//! Wayback Conclusion Writer
//!
//! Offline maintenance tool: stamps a canonical set of conclusion paragraphs
//! into every year of every matching specialism in the content store, then
//! rewrites the store atomically.
//!
//! ```rust,no_run
//! use wayback_conclusions::{apply_to_store, ConclusionMap};
//! use wayback_content::ContentStore;
//!
//! # fn example() -> Result<(), wayback_conclusions::WriterError> {
//! let report = apply_to_store(&ContentStore::default(), &ConclusionMap::master())?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod catalog;
pub mod error;
pub mod report;
pub mod writer;

pub use catalog::ConclusionMap;
pub use error::{WriterError, WriterResult};
pub use report::ConclusionReport;
pub use writer::{apply_conclusions, apply_to_store};
