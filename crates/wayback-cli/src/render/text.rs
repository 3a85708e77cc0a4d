use super::{Renderer, Selection, LINKS_HEADING, NO_CONTENT, SOURCES_HEADING};
use crate::config::{NavLink, ShellConfig, Source};
use std::fmt::Write;
use wayback_text::unescape_currency;

/// Terminal output; currency entities are shown as `$`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

fn underline(out: &mut String, heading: &str, ch: char) {
    let _ = writeln!(out, "{heading}");
    let _ = writeln!(out, "{}", ch.to_string().repeat(heading.chars().count()));
}

impl Renderer for TextRenderer {
    fn specialisms(&self, names: &[&str]) -> String {
        let mut out = String::new();
        for (i, name) in names.iter().enumerate() {
            let _ = writeln!(out, "{:>2}. {name}", i + 1);
        }
        out
    }

    fn years(&self, _specialism: &str, years: &[&str]) -> String {
        years.iter().map(|year| format!("{year}\n")).collect()
    }

    fn hero(&self, config: &ShellConfig) -> String {
        let mut out = String::new();
        underline(&mut out, &config.title, '=');
        let _ = writeln!(out, "{}", config.headline);
        let _ = writeln!(out, "{}", config.tagline);
        out
    }

    fn selection(&self, selection: &Selection<'_>) -> String {
        let mut out = String::new();
        underline(
            &mut out,
            &format!("{}: {}", selection.specialism, selection.year),
            '=',
        );

        if selection.is_empty() {
            let _ = writeln!(out, "\n{NO_CONTENT}");
            return out;
        }

        for section in &selection.sections {
            out.push('\n');
            underline(&mut out, section.label, '-');
            let paragraphs: Vec<_> = section
                .paragraphs
                .iter()
                .map(|p| unescape_currency(p))
                .collect();
            let _ = writeln!(out, "{}", paragraphs.join("\n\n"));
        }
        out
    }

    fn sources(&self, sources: &[Source]) -> String {
        let mut out = String::new();
        underline(&mut out, SOURCES_HEADING, '-');
        for source in sources {
            let _ = writeln!(out, "- {}: {}", source.title, source.url);
        }
        out
    }

    fn links(&self, links: &[NavLink]) -> String {
        let mut out = String::new();
        underline(&mut out, LINKS_HEADING, '-');
        for link in links {
            let _ = writeln!(out, "[{}] {}", link.label, link.url);
        }
        out
    }
}
