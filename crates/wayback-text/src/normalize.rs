//! Full normalization pipeline

use crate::rules::rules;
use std::borrow::Cow;

/// Normalize one raw string for display.
///
/// Runs every rule of [`crate::rules`] in order. Total over all inputs,
/// including the empty string, and idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut current = Cow::Borrowed(text);
    for rule in rules() {
        let next = match rule.apply(&current) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        current = Cow::Owned(next);
    }
    current.into_owned()
}
