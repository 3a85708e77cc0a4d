//! Output renderers
//!
//! Every shell command builds plain data (names, a [`Selection`], the
//! [`ShellConfig`] lists) and hands it to a [`Renderer`]. Renderers never see
//! the store and never fail.

mod html;
mod json;
mod markdown;
mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

use crate::config::{NavLink, ShellConfig, Source};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use wayback_content::{project, ContentDocument, ProjectedSection};

/// Shown in place of sections when a selection has no content
pub const NO_CONTENT: &str = "No content for this selection yet.";

/// Shown instead of any selection output when the store is empty
pub const EMPTY_STORE: &str = "No specialisms found in content store";

/// Heading above the navigation links
pub const LINKS_HEADING: &str = "Explore Hamilton Barnes";

/// Heading above the bibliography
pub const SOURCES_HEADING: &str = "Sources";

/// One (specialism, year) selection with its projected sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection<'a> {
    /// Requested specialism name
    pub specialism: &'a str,
    /// Requested year key
    pub year: &'a str,
    /// Non-empty sections in display order
    pub sections: Vec<ProjectedSection<'a>>,
}

impl<'a> Selection<'a> {
    /// Project `document` for the given keys
    #[must_use]
    pub fn new(document: &'a ContentDocument, specialism: &'a str, year: &'a str) -> Self {
        Self {
            specialism,
            year,
            sections: project(document, specialism, year),
        }
    }

    /// True when there is nothing to show but the no-content message
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Turns shell data into one output format.
///
/// Every method returns a complete block ending in a newline.
pub trait Renderer {
    /// Specialism picker
    fn specialisms(&self, names: &[&str]) -> String;

    /// Years available for one specialism
    fn years(&self, specialism: &str, years: &[&str]) -> String;

    /// Title, headline and tagline
    fn hero(&self, config: &ShellConfig) -> String;

    /// One selection, or the no-content message
    fn selection(&self, selection: &Selection<'_>) -> String;

    /// The bibliography
    fn sources(&self, sources: &[Source]) -> String;

    /// The navigation links
    fn links(&self, links: &[NavLink]) -> String;

    /// Full page: hero, selection, sources, links
    fn page(&self, config: &ShellConfig, selection: &Selection<'_>) -> String {
        [
            self.hero(config),
            self.selection(selection),
            self.sources(&config.sources),
            self.links(&config.links),
        ]
        .join("\n")
    }
}

/// Selectable output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain terminal text
    #[default]
    Text,
    /// Markdown headings and lists
    Markdown,
    /// Glass-card HTML fragments
    Html,
    /// One JSON value per command
    Json,
}

impl OutputFormat {
    /// All formats, in help order
    pub const ALL: [Self; 4] = [Self::Text, Self::Markdown, Self::Html, Self::Json];

    /// Name used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Renderer for this format
    #[must_use]
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Text => Box::new(TextRenderer),
            Self::Markdown => Box::new(MarkdownRenderer),
            Self::Html => Box::new(HtmlRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized `--format` value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format: {0} (expected text, markdown, html or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;

    #[test]
    fn format_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>(), Ok(format));
        }
        assert_eq!("HTML".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn selection_projects_document() {
        let document = ContentDocument::from_value(
            json!({"Satellite": {"years": {"2016": {"investment": ["i"]}}}}),
            Path::new("t.json"),
        )
        .unwrap();

        assert!(!Selection::new(&document, "Satellite", "2016").is_empty());
        assert!(Selection::new(&document, "Satellite", "2017").is_empty());
        assert!(Selection::new(&document, "Unknown Specialism", "2020").is_empty());
    }
}
