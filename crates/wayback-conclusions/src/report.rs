//! Outcome of one conclusion run

use std::fmt;

/// What a conclusion run changed and what it could not match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConclusionReport {
    /// Specialisms that had at least one year stamped
    pub specialisms_updated: usize,
    /// Year records stamped across all specialisms
    pub years_updated: usize,
    /// Store specialisms with no catalog entry, in store order
    pub missing: Vec<String>,
    /// Catalog entries naming no specialism in the store, alphabetically
    pub unmatched_conclusions: Vec<String>,
}

impl ConclusionReport {
    /// True when every store specialism and every catalog entry matched
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unmatched_conclusions.is_empty()
    }
}

impl fmt::Display for ConclusionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Updated conclusions for {} specialisms across {} years.",
            self.specialisms_updated, self.years_updated
        )?;
        if !self.missing.is_empty() {
            write!(
                f,
                "\nNo master conclusion found for these specialisms (names must match exactly):"
            )?;
            for name in &self.missing {
                write!(f, "\n - {name}")?;
            }
        }
        if !self.unmatched_conclusions.is_empty() {
            write!(f, "\nMaster conclusions with no matching specialism in the store:")?;
            for name in &self.unmatched_conclusions {
                write!(f, "\n - {name}")?;
            }
        }
        Ok(())
    }
}
