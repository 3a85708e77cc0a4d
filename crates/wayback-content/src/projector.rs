//! Content projection
//!
//! Pure queries over a loaded [`ContentDocument`]: which specialisms and years
//! exist, and which sections to show for one selection.

use crate::document::ContentDocument;
use crate::section::Section;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Year range offered when a specialism has no numeric years
pub const DEFAULT_YEAR_RANGE: RangeInclusive<u16> = 2016..=2026;

/// One non-empty section of a projected selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedSection<'a> {
    /// Which section this is
    pub section: Section,
    /// Display heading
    pub label: &'static str,
    /// Non-empty paragraph list, borrowed from the document
    pub paragraphs: &'a [String],
}

/// Sections to display for (`specialism`, `year`), in canonical order.
///
/// Unknown specialisms and years project to an empty list. Empty sections are
/// left out.
#[must_use]
pub fn project<'a>(
    document: &'a ContentDocument,
    specialism: &str,
    year: &str,
) -> Vec<ProjectedSection<'a>> {
    let Some(record) = document.year(specialism, year) else {
        return Vec::new();
    };

    Section::ALL
        .into_iter()
        .map(|section| ProjectedSection {
            section,
            label: section.label(),
            paragraphs: record.section(section),
        })
        .filter(|p| !p.paragraphs.is_empty())
        .collect()
}

/// Specialism names, alphabetically
#[must_use]
pub fn list_specialisms(document: &ContentDocument) -> Vec<&str> {
    // BTreeMap iteration is already sorted
    document.iter().map(|(name, _)| name).collect()
}

/// Years recorded for `specialism`.
///
/// Numeric years come first in ascending numeric order, any other keys follow
/// in lexical order.
#[must_use]
pub fn list_years<'a>(document: &'a ContentDocument, specialism: &str) -> Vec<&'a str> {
    let Some(record) = document.specialism(specialism) else {
        return Vec::new();
    };

    let mut years: Vec<&str> = record.years.keys().map(String::as_str).collect();
    years.sort_by(|a, b| year_sort_key(a).cmp(&year_sort_key(b)));
    years
}

/// Selectable year range for `specialism`.
///
/// Spans the smallest to largest numeric year, or [`DEFAULT_YEAR_RANGE`] when
/// there are none.
#[must_use]
pub fn year_range(document: &ContentDocument, specialism: &str) -> RangeInclusive<u16> {
    let years: Vec<u16> = list_years(document, specialism)
        .into_iter()
        .filter_map(numeric_year)
        .filter_map(|y| u16::try_from(y).ok())
        .collect();

    match (years.iter().min(), years.iter().max()) {
        (Some(&min), Some(&max)) => min..=max,
        _ => DEFAULT_YEAR_RANGE,
    }
}

fn numeric_year(year: &str) -> Option<u64> {
    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

fn year_sort_key(year: &str) -> (bool, u64, &str) {
    match numeric_year(year) {
        Some(n) => (false, n, year),
        None => (true, 0, year),
    }
}
