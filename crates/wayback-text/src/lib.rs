//! Wayback Text Normalizer
//!
//! Repairs text extracted from upstream sources before it is displayed:
//! broken spacing, mis-decoded punctuation, glued tokens and number/unit
//! formatting.
//!
//! # Core Concepts
//!
//! - [`normalize`]: one raw string in, one cleaned string out
//! - [`normalize_tree`]: the same repair applied to every string leaf of a JSON tree
//! - [`Rule`]: one named step of the ordered rule table returned by [`rules`]
//!
//! Rule order is significant. The generic digit/letter splitter runs early and
//! over-splits on purpose; the specific re-joining rules that follow correct it.
//!
//! # Example
//!
//! ```rust
//! use wayback_text::normalize;
//!
//! assert_eq!(normalize("Q 1 revenue was 653. 4 B"), "Q1 revenue was 653.4B");
//! assert_eq!(normalize("$ 3.7T in2026"), "&#36;3.7T in 2026");
//! ```

#![warn(unreachable_pub)]

mod escape;
mod normalize;
mod rules;
mod tree;

pub use escape::{unescape_currency, DOLLAR_ENTITY};
pub use normalize::normalize;
pub use rules::{rule, rules, Rule};
pub use tree::normalize_tree;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
