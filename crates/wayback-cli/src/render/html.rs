use super::{Renderer, Selection, LINKS_HEADING, NO_CONTENT, SOURCES_HEADING};
use crate::config::{NavLink, ShellConfig, Source};
use std::fmt::Write;
use wayback_content::Section;
use wayback_text::DOLLAR_ENTITY;

/// HTML fragments in the glass-card layout of the published page
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

/// Escape markup characters, leaving the currency entity intact.
fn escape(text: &str) -> String {
    text.split(DOLLAR_ENTITY)
        .map(|piece| {
            piece
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;")
        })
        .collect::<Vec<_>>()
        .join(DOLLAR_ENTITY)
}

fn card(out: &mut String, title: Option<&str>, paragraphs: &[String]) {
    out.push_str("<div class=\"glass-card\">\n");
    if let Some(title) = title {
        let _ = writeln!(out, "  <div class=\"card-title\">{}</div>", escape(title));
    }
    for paragraph in paragraphs {
        let _ = writeln!(out, "  <p>{}</p>", escape(paragraph));
    }
    out.push_str("</div>\n");
}

impl Renderer for HtmlRenderer {
    fn specialisms(&self, names: &[&str]) -> String {
        let mut out = String::from("<ul class=\"specialisms\">\n");
        for name in names {
            let _ = writeln!(out, "  <li>{}</li>", escape(name));
        }
        out.push_str("</ul>\n");
        out
    }

    fn years(&self, specialism: &str, years: &[&str]) -> String {
        let mut out = format!(
            "<ul class=\"years\" data-specialism=\"{}\">\n",
            escape(specialism)
        );
        for year in years {
            let _ = writeln!(out, "  <li>{}</li>", escape(year));
        }
        out.push_str("</ul>\n");
        out
    }

    fn hero(&self, config: &ShellConfig) -> String {
        format!(
            "<h1>{}</h1>\n<h2>{}</h2>\n<p>{}</p>\n<hr>\n",
            escape(&config.title),
            escape(&config.headline),
            escape(&config.tagline)
        )
    }

    fn selection(&self, selection: &Selection<'_>) -> String {
        let mut out = format!(
            "<h2>{}: {}</h2>\n",
            escape(selection.specialism),
            escape(selection.year)
        );
        if selection.is_empty() {
            let _ = writeln!(out, "<p class=\"no-content\">{NO_CONTENT}</p>");
            return out;
        }
        for section in &selection.sections {
            if section.section == Section::Conclusion {
                out.push_str("<hr>\n");
                card(&mut out, Some(section.label), section.paragraphs);
            } else {
                let _ = writeln!(out, "<h3>{}</h3>", escape(section.label));
                card(&mut out, None, section.paragraphs);
            }
        }
        out
    }

    fn sources(&self, sources: &[Source]) -> String {
        let mut out = format!("<details>\n<summary>{SOURCES_HEADING}</summary>\n<ul>\n");
        for source in sources {
            let _ = writeln!(
                out,
                "  <li><a href=\"{}\">{}</a></li>",
                escape(&source.url),
                escape(&source.title)
            );
        }
        out.push_str("</ul>\n</details>\n");
        out
    }

    fn links(&self, links: &[NavLink]) -> String {
        let mut out = format!("<h3 style=\"text-align: center;\">{LINKS_HEADING}</h3>\n");
        for link in links {
            let _ = writeln!(
                out,
                "<a href=\"{}\" target=\"_blank\"><button>{}</button></a>",
                escape(&link.url),
                escape(&link.label)
            );
        }
        out
    }
}
