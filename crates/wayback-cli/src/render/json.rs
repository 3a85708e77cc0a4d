use super::{Renderer, Selection, NO_CONTENT};
use crate::config::{NavLink, ShellConfig, Source};
use serde_json::{json, Value};

/// Machine-readable output, one pretty-printed JSON document per block.
///
/// Paragraphs are emitted exactly as normalized, currency entities included.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

fn document(value: &Value) -> String {
    format!("{value:#}\n")
}

fn selection_value(selection: &Selection<'_>) -> Value {
    let mut value = json!({
        "specialism": selection.specialism,
        "year": selection.year,
        "sections": selection.sections,
    });
    if selection.is_empty() {
        value["message"] = json!(NO_CONTENT);
    }
    value
}

impl Renderer for JsonRenderer {
    fn specialisms(&self, names: &[&str]) -> String {
        document(&json!(names))
    }

    fn years(&self, specialism: &str, years: &[&str]) -> String {
        document(&json!({ "specialism": specialism, "years": years }))
    }

    fn hero(&self, config: &ShellConfig) -> String {
        document(&json!({
            "title": config.title,
            "headline": config.headline,
            "tagline": config.tagline,
        }))
    }

    fn selection(&self, selection: &Selection<'_>) -> String {
        document(&selection_value(selection))
    }

    fn sources(&self, sources: &[Source]) -> String {
        document(&json!(sources))
    }

    fn links(&self, links: &[NavLink]) -> String {
        document(&json!(links))
    }

    fn page(&self, config: &ShellConfig, selection: &Selection<'_>) -> String {
        document(&json!({
            "title": config.title,
            "headline": config.headline,
            "tagline": config.tagline,
            "selection": selection_value(selection),
            "sources": config.sources,
            "links": config.links,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use wayback_content::ContentDocument;

    fn doc() -> ContentDocument {
        ContentDocument::from_value(
            json!({"Satellite": {"years": {"2016": {"market_shift": ["&#36;1B"]}}}}),
            Path::new("t.json"),
        )
        .unwrap()
    }

    #[test]
    fn selection_is_structured() {
        let document = doc();
        let rendered = JsonRenderer.selection(&Selection::new(&document, "Satellite", "2016"));
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            json!({
                "specialism": "Satellite",
                "year": "2016",
                "sections": [{
                    "section": "market_shift",
                    "label": "Market Shifts",
                    "paragraphs": ["&#36;1B"]
                }]
            })
        );
    }

    #[test]
    fn empty_selection_carries_message() {
        let document = doc();
        let rendered = JsonRenderer.selection(&Selection::new(&document, "Satellite", "2030"));
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["message"], json!(NO_CONTENT));
        assert_eq!(value["sections"], json!([]));
    }

    #[test]
    fn page_is_one_document() {
        let document = doc();
        let config = ShellConfig::default();
        let rendered = JsonRenderer.page(&config, &Selection::new(&document, "Satellite", "2016"));
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["sources"].as_array().map(Vec::len), Some(53));
        assert_eq!(value["links"][0]["label"], json!("Home"));
        assert_eq!(value["selection"]["specialism"], json!("Satellite"));
    }
}
