//! Testing utilities for the wayback workspace
//!
//! Shared fixtures: sample content stores and throwaway store files.

#![allow(missing_docs)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Specialisms present in [`sample_store`], alphabetically
pub const SAMPLE_SPECIALISMS: [&str; 3] = ["Cybersecurity", "Network Automation", "Satellite"];

/// A small store with the kind of extraction damage the normalizer repairs.
pub fn sample_store() -> Value {
    json!({
        "Satellite": {
            "years": {
                "2026": {
                    "market_shift": ["LEO constellations passed 7,000 active satellites."],
                    "conclusion": ["Old satellite conclusion."]
                },
                "2016": {
                    "market_shift": ["Q 1 revenue was 653. 4 B across operators."],
                    "technical_shift": ["High-throughput satellites moved to Ka-band."],
                    "talent_shift": [],
                    "investment": ["Investors committed $ 3.7T in2026 terms."],
                    "conclusion": ["Old satellite conclusion."]
                }
            }
        },
        "Network Automation": {
            "years": {
                "2016": {
                    "technical_shift": ["SD WAN pilots\u{200b} spread.Vendors chased ai tooling."],
                    "conclusion": ["Old automation conclusion."]
                },
                "2017": {
                    "market_shift": ["Automation budgets grew 12 %"]
                }
            }
        },
        "Cybersecurity": {
            "years": {
                "2020": {
                    "talent_shift": ["DDo S response teams doubled."]
                }
            }
        }
    })
}

/// A store file inside a temporary directory that is removed on drop.
#[derive(Debug)]
pub struct TestStore {
    dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    /// Write `value` as pretty JSON to `content.json` in a fresh directory.
    pub fn with_value(value: &Value) -> Self {
        let text = serde_json::to_string_pretty(value).unwrap();
        Self::with_text(&text)
    }

    /// Write raw `text` to `content.json` in a fresh directory.
    pub fn with_text(text: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, text).unwrap();
        Self { dir, path }
    }

    /// The sample store from [`sample_store`].
    pub fn sample() -> Self {
        Self::with_value(&sample_store())
    }

    /// A directory with no store file in it.
    pub fn missing() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Current file contents parsed as JSON
    pub fn read_value(&self) -> Value {
        let text = std::fs::read_to_string(&self.path).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    /// Current file contents as text
    pub fn read_text(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap()
    }

    /// Write an extra file next to the store and return its path.
    pub fn write_sibling(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}
