use super::{Renderer, Selection, LINKS_HEADING, NO_CONTENT, SOURCES_HEADING};
use crate::config::{NavLink, ShellConfig, Source};
use std::fmt::Write;

/// Markdown output; `&#36;` stays escaped so `$` never opens math mode
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn specialisms(&self, names: &[&str]) -> String {
        names.iter().map(|name| format!("- {name}\n")).collect()
    }

    fn years(&self, specialism: &str, years: &[&str]) -> String {
        let mut out = format!("## {specialism}\n\n");
        for year in years {
            let _ = writeln!(out, "- {year}");
        }
        out
    }

    fn hero(&self, config: &ShellConfig) -> String {
        format!(
            "# {}\n\n## {}\n\n{}\n",
            config.title, config.headline, config.tagline
        )
    }

    fn selection(&self, selection: &Selection<'_>) -> String {
        let mut out = format!("## {}: {}\n", selection.specialism, selection.year);
        if selection.is_empty() {
            let _ = writeln!(out, "\n> {NO_CONTENT}");
            return out;
        }
        for section in &selection.sections {
            let _ = writeln!(out, "\n### {}", section.label);
            for paragraph in section.paragraphs {
                let _ = writeln!(out, "\n{paragraph}");
            }
        }
        out
    }

    fn sources(&self, sources: &[Source]) -> String {
        let mut out = format!("## {SOURCES_HEADING}\n\n");
        for source in sources {
            let _ = writeln!(out, "- [{}]({})", source.title, source.url);
        }
        out
    }

    fn links(&self, links: &[NavLink]) -> String {
        let mut out = format!("### {LINKS_HEADING}\n\n");
        for link in links {
            let _ = writeln!(out, "- [{}]({})", link.label, link.url);
        }
        out
    }
}
