//! Typed content document
//!
//! Shape on disk:
//!
//! ```text
//! { "<specialism>": { "years": { "<year>": { "<section>": ["paragraph", ...] } } } }
//! ```
//!
//! Missing or `null` specialism, year and section values read as empty.
//! Unknown keys are ignored.

use crate::section::Section;
use serde::de::{Deserialize, Deserializer};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ContentError, ContentResult};

/// Normalized, immutable snapshot of the content store
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContentDocument {
    specialisms: BTreeMap<String, SpecialismRecord>,
}

/// All years recorded for one specialism
#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
pub struct SpecialismRecord {
    /// Year key to record, keys as they appear in the store
    #[serde(default, deserialize_with = "nullable_map")]
    pub years: BTreeMap<String, YearRecord>,
}

/// Paragraph lists for one (specialism, year) pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
pub struct YearRecord {
    /// Market Shift paragraphs
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub market_shift: Vec<String>,
    /// Technical Shift paragraphs
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub technical_shift: Vec<String>,
    /// Talent Shift paragraphs
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub talent_shift: Vec<String>,
    /// Investment paragraphs
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub investment: Vec<String>,
    /// Closing paragraphs
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub conclusion: Vec<String>,
}

impl YearRecord {
    /// Paragraphs of one section; empty when absent
    #[must_use]
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::MarketShift => &self.market_shift,
            Section::TechnicalShift => &self.technical_shift,
            Section::TalentShift => &self.talent_shift,
            Section::Investment => &self.investment,
            Section::Conclusion => &self.conclusion,
        }
    }

    /// True when every section is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.section(*s).is_empty())
    }
}

impl ContentDocument {
    /// Build a document from an already parsed (and normally already
    /// normalized) JSON value. `origin` is only used for error messages.
    ///
    /// # Errors
    /// `ContentError::MalformedStore` when the value is not shaped like a
    /// content document.
    pub fn from_value(value: Value, origin: &Path) -> ContentResult<Self> {
        serde_json::from_value(value).map_err(|e| ContentError::malformed(origin, e))
    }

    /// Number of specialisms
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.specialisms.len()
    }

    /// True when the store holds no specialisms
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specialisms.is_empty()
    }

    /// Record for one specialism
    #[must_use]
    pub fn specialism(&self, name: &str) -> Option<&SpecialismRecord> {
        self.specialisms.get(name)
    }

    /// Record for one (specialism, year) pair
    #[must_use]
    pub fn year(&self, specialism: &str, year: &str) -> Option<&YearRecord> {
        self.specialism(specialism)?.years.get(year)
    }

    /// Iterate specialisms in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecialismRecord)> {
        self.specialisms.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, SpecialismRecord)> for ContentDocument {
    fn from_iter<I: IntoIterator<Item = (String, SpecialismRecord)>>(iter: I) -> Self {
        Self {
            specialisms: iter.into_iter().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for ContentDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The root itself must be an object; only its values may be null.
        let raw = BTreeMap::<String, Option<SpecialismRecord>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(name, record)| (name, record.unwrap_or_default()))
            .collect())
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_map<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let raw = Option::<BTreeMap<String, Option<T>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or_default()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> ContentDocument {
        ContentDocument::from_value(value, Path::new("test.json")).unwrap()
    }

    #[test]
    fn reads_nested_shape() {
        let d = doc(json!({
            "Satellite": {
                "years": {
                    "2020": {
                        "market_shift": ["a", "b"],
                        "conclusion": ["c"]
                    }
                }
            }
        }));

        let year = d.year("Satellite", "2020").unwrap();
        assert_eq!(year.section(Section::MarketShift), ["a", "b"]);
        assert_eq!(year.section(Section::Conclusion), ["c"]);
        assert!(year.section(Section::Investment).is_empty());
    }

    #[test]
    fn nulls_read_as_empty() {
        let d = doc(json!({
            "A": null,
            "B": {"years": null},
            "C": {"years": {"2016": null, "2017": {"investment": null}}}
        }));

        assert_eq!(d.len(), 3);
        assert!(d.specialism("A").unwrap().years.is_empty());
        assert!(d.specialism("B").unwrap().years.is_empty());
        assert!(d.year("C", "2016").unwrap().is_empty());
        assert!(d.year("C", "2017").unwrap().is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let d = doc(json!({"A": {"years": {"2016": {"notes": 1}}, "owner": "x"}}));
        assert!(d.year("A", "2016").unwrap().is_empty());
    }

    #[test]
    fn root_must_be_object() {
        let err = ContentDocument::from_value(json!(["not", "a", "map"]), Path::new("c.json"))
            .unwrap_err();
        assert!(matches!(err, ContentError::MalformedStore { .. }));

        let err = ContentDocument::from_value(Value::Null, Path::new("c.json")).unwrap_err();
        assert!(matches!(err, ContentError::MalformedStore { .. }));
    }

    #[test]
    fn non_string_paragraphs_are_rejected() {
        let err = ContentDocument::from_value(
            json!({"A": {"years": {"2016": {"market_shift": [1]}}}}),
            Path::new("c.json"),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::MalformedStore { .. }));
    }

    #[test]
    fn empty_object_is_empty_document() {
        assert!(doc(json!({})).is_empty());
    }

    #[test]
    fn serializes_back_to_store_shape() {
        let value = json!({"A": {"years": {"2016": {"talent_shift": ["t"]}}}});
        assert_eq!(serde_json::to_value(doc(value.clone())).unwrap(), value);
    }
}
