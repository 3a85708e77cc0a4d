//! The five fixed content sections of a year

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed content categories of a year record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Market movement for the year
    MarketShift,
    /// Technology changes
    TechnicalShift,
    /// Hiring and skills
    TalentShift,
    /// Funding and spend
    Investment,
    /// Closing summary
    Conclusion,
}

impl Section {
    /// Canonical display order
    pub const ALL: [Section; 5] = [
        Section::MarketShift,
        Section::TechnicalShift,
        Section::TalentShift,
        Section::Investment,
        Section::Conclusion,
    ];

    /// Key used in the content store
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Section::MarketShift => "market_shift",
            Section::TechnicalShift => "technical_shift",
            Section::TalentShift => "talent_shift",
            Section::Investment => "investment",
            Section::Conclusion => "conclusion",
        }
    }

    /// Heading shown above the section
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Section::MarketShift => "Market Shifts",
            Section::TechnicalShift => "Technical Shifts",
            Section::TalentShift => "Talent Shifts",
            Section::Investment => "Investment Contexts",
            Section::Conclusion => "What this means",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string names no section
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section: '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.key() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
