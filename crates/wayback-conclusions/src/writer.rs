//! Stamping conclusions into a raw store tree
//!
//! Works on the raw `serde_json::Value` rather than the typed document so that
//! keys the readers ignore, and the store's key order, survive the rewrite.

use crate::catalog::ConclusionMap;
use crate::error::{WriterError, WriterResult};
use crate::report::ConclusionReport;
use serde_json::{Map, Value};
use wayback_content::{ContentStore, Section};

/// Replace the `conclusion` section of every year of every matched specialism.
///
/// Returns the rewritten tree and a report; `document` itself is left as is.
/// Running the result through again with the same catalog changes nothing.
///
/// # Errors
/// `WriterError::NotAnObject` when the root is not a JSON object.
pub fn apply_conclusions(
    document: &Value,
    conclusions: &ConclusionMap,
) -> WriterResult<(Value, ConclusionReport)> {
    let Value::Object(root) = document else {
        return Err(WriterError::NotAnObject {
            found: json_kind(document),
        });
    };

    let mut root = root.clone();
    let mut report = ConclusionReport::default();

    for (specialism, payload) in &mut root {
        let Some(paragraphs) = conclusions.get(specialism) else {
            tracing::warn!(specialism = %specialism, "no master conclusion for specialism");
            report.missing.push(specialism.clone());
            continue;
        };

        let Some(years) = payload.get_mut("years").and_then(Value::as_object_mut) else {
            continue;
        };
        if years.is_empty() {
            continue;
        }

        for year in years.values_mut() {
            stamp(year, paragraphs);
        }
        report.years_updated += years.len();
        report.specialisms_updated += 1;
    }

    report.unmatched_conclusions = conclusions
        .names()
        .filter(|name| !root.contains_key(*name))
        .map(str::to_string)
        .collect();

    Ok((Value::Object(root), report))
}

/// Load the store, apply `conclusions`, and write the result back atomically.
///
/// # Errors
/// Store load and write failures, or `WriterError::NotAnObject`.
pub fn apply_to_store(
    store: &ContentStore,
    conclusions: &ConclusionMap,
) -> WriterResult<ConclusionReport> {
    let raw = store.read_raw()?;
    let (rewritten, report) = apply_conclusions(&raw, conclusions)?;
    store.write_atomic(&rewritten)?;
    tracing::info!(
        specialisms = report.specialisms_updated,
        years = report.years_updated,
        missing = report.missing.len(),
        "applied conclusions"
    );
    Ok(report)
}

fn stamp(year: &mut Value, paragraphs: &[String]) {
    if !year.is_object() {
        *year = Value::Object(Map::new());
    }
    if let Value::Object(sections) = year {
        sections.insert(
            Section::Conclusion.key().to_string(),
            Value::from(paragraphs.to_vec()),
        );
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
