//! Shell commands
//!
//! Each command loads the store through the session cache, builds its data
//! and writes one rendered block. Fatal store problems surface before anything
//! is written.

use crate::config::ShellConfig;
use crate::render::{OutputFormat, Renderer, Selection};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use wayback_content::{
    list_specialisms, list_years, year_range, ContentDocument, ContentError, ContentStore,
    DocumentCache,
};

/// Errors a shell command can end with
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Store missing, malformed or unreadable
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Store loaded but holds no specialisms
    #[error("No specialisms found in content store")]
    EmptyStore,

    /// Writing rendered output or reading input failed
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Whether the store could not be loaded at all
    #[must_use]
    pub fn is_fatal_load(&self) -> bool {
        matches!(self, Self::Content(e) if e.is_fatal_load())
    }
}

/// Result type alias for shell commands
pub type ShellResult<T> = Result<T, ShellError>;

/// One shell session over one store
pub struct Shell {
    config: ShellConfig,
    store: ContentStore,
    renderer: Box<dyn Renderer>,
    cache: DocumentCache,
}

impl Shell {
    /// Create a session; the store is not read until a command needs it
    #[must_use]
    pub fn new(config: ShellConfig, store: ContentStore, format: OutputFormat) -> Self {
        Self {
            config,
            store,
            renderer: format.renderer(),
            cache: DocumentCache::default(),
        }
    }

    /// Session configuration
    #[must_use]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// The normalized document, or `EmptyStore` when it has no specialisms
    fn document(&self) -> ShellResult<Arc<ContentDocument>> {
        let document = self.store.load_cached(&self.cache)?;
        if document.is_empty() {
            return Err(ShellError::EmptyStore);
        }
        Ok(document)
    }

    /// `specialisms`
    ///
    /// # Errors
    /// Store load failures, `EmptyStore`, or output errors.
    pub fn specialisms(&self, out: &mut impl Write) -> ShellResult<()> {
        let document = self.document()?;
        out.write_all(self.renderer.specialisms(&list_specialisms(&document)).as_bytes())?;
        Ok(())
    }

    /// `years <SPECIALISM>`
    ///
    /// # Errors
    /// Store load failures, `EmptyStore`, or output errors.
    pub fn years(&self, specialism: &str, out: &mut impl Write) -> ShellResult<()> {
        let document = self.document()?;
        let years = list_years(&document, specialism);
        out.write_all(self.renderer.years(specialism, &years).as_bytes())?;
        Ok(())
    }

    /// `show <SPECIALISM> [--year YEAR]`; the year defaults to the start of
    /// the specialism's year range.
    ///
    /// # Errors
    /// Store load failures, `EmptyStore`, or output errors.
    pub fn show(&self, specialism: &str, year: Option<&str>, out: &mut impl Write) -> ShellResult<()> {
        let document = self.document()?;
        let year = resolve_year(&document, specialism, year);
        let selection = Selection::new(&document, specialism, &year);
        out.write_all(self.renderer.selection(&selection).as_bytes())?;
        Ok(())
    }

    /// `page <SPECIALISM> [--year YEAR]`
    ///
    /// # Errors
    /// Store load failures, `EmptyStore`, or output errors.
    pub fn page(&self, specialism: &str, year: Option<&str>, out: &mut impl Write) -> ShellResult<()> {
        let document = self.document()?;
        let year = resolve_year(&document, specialism, year);
        let selection = Selection::new(&document, specialism, &year);
        out.write_all(self.renderer.page(&self.config, &selection).as_bytes())?;
        Ok(())
    }

    /// `sources`; needs no store
    ///
    /// # Errors
    /// Output errors.
    pub fn sources(&self, out: &mut impl Write) -> ShellResult<()> {
        out.write_all(self.renderer.sources(&self.config.sources).as_bytes())?;
        Ok(())
    }

    /// `links`; needs no store
    ///
    /// # Errors
    /// Output errors.
    pub fn links(&self, out: &mut impl Write) -> ShellResult<()> {
        out.write_all(self.renderer.links(&self.config.links).as_bytes())?;
        Ok(())
    }

    /// `browse`: pick a specialism (by number or name) and a year, render,
    /// repeat until end of input or `quit`.
    ///
    /// The store is fetched through the cache on every selection, so edits to
    /// the file show up on the next pick.
    ///
    /// # Errors
    /// Store load failures, `EmptyStore`, or IO errors.
    pub fn browse(&self, input: impl BufRead, out: &mut impl Write) -> ShellResult<()> {
        let document = self.document()?;
        out.write_all(self.renderer.specialisms(&list_specialisms(&document)).as_bytes())?;
        drop(document);

        let mut lines = input.lines();
        loop {
            write!(out, "\nSpecialism (number or name, quit to exit)> ")?;
            out.flush()?;
            let Some(choice) = next_answer(&mut lines)? else {
                break;
            };
            if choice.is_empty() {
                continue;
            }

            let document = self.document()?;
            let names = list_specialisms(&document);
            let Some(specialism) = pick(&names, &choice) else {
                writeln!(out, "Unknown specialism: {choice}")?;
                continue;
            };

            let range = year_range(&document, specialism);
            write!(out, "Year [{}-{}]> ", range.start(), range.end())?;
            out.flush()?;
            let Some(year) = next_answer(&mut lines)? else {
                break;
            };
            let year = if year.is_empty() {
                range.start().to_string()
            } else {
                year
            };

            tracing::debug!(specialism, year = %year, "browse selection");
            let selection = Selection::new(&document, specialism, &year);
            out.write_all(b"\n")?;
            out.write_all(self.renderer.selection(&selection).as_bytes())?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("store", &self.store)
            .field("cache", &self.cache.stats())
            .finish_non_exhaustive()
    }
}

fn resolve_year(document: &ContentDocument, specialism: &str, year: Option<&str>) -> String {
    year.map_or_else(
        || year_range(document, specialism).start().to_string(),
        str::to_string,
    )
}

/// Next trimmed input line; `None` on end of input or `quit`
fn next_answer(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Option<String>> {
    match lines.next().transpose()? {
        Some(line) if !line.trim().eq_ignore_ascii_case("quit") => Ok(Some(line.trim().to_string())),
        _ => Ok(None),
    }
}

/// Resolve a picker answer: 1-based index, exact name, then case-insensitive name
fn pick<'a>(names: &[&'a str], choice: &str) -> Option<&'a str> {
    if let Ok(index) = choice.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| names.get(i)).copied();
    }
    names
        .iter()
        .find(|name| **name == choice)
        .or_else(|| names.iter().find(|name| name.eq_ignore_ascii_case(choice)))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::EMPTY_STORE;
    use pretty_assertions::assert_eq;
    use wayback_test_utils::TestStore;

    fn shell(store: &TestStore, format: OutputFormat) -> Shell {
        Shell::new(
            ShellConfig::default(),
            ContentStore::new(store.path()),
            format,
        )
    }

    fn run(f: impl FnOnce(&mut Vec<u8>) -> ShellResult<()>) -> ShellResult<String> {
        let mut out = Vec::new();
        f(&mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn pick_by_number_or_name() {
        let names = ["Broadcasting", "Satellite"];
        assert_eq!(pick(&names, "2"), Some("Satellite"));
        assert_eq!(pick(&names, "satellite"), Some("Satellite"));
        assert_eq!(pick(&names, "Broadcasting"), Some("Broadcasting"));
        assert_eq!(pick(&names, "0"), None);
        assert_eq!(pick(&names, "3"), None);
        assert_eq!(pick(&names, "Radio"), None);
    }

    #[test]
    fn show_defaults_to_first_year() {
        let store = TestStore::sample();
        let shell = shell(&store, OutputFormat::Text);
        let rendered = run(|out| shell.show("Satellite", None, out)).unwrap();
        assert!(rendered.starts_with("Satellite: 2016\n"));
        assert!(rendered.contains("Q1 revenue was 653.4B across operators."));
        assert!(rendered.contains("Investors committed $3.7T in 2026 terms."));
    }

    #[test]
    fn show_without_numeric_years_defaults_to_range_start() {
        let store =
            TestStore::with_text(r#"{"Radio": {"years": {"Early": {"conclusion": ["x"]}}}}"#);
        let shell = shell(&store, OutputFormat::Text);
        let rendered = run(|out| shell.show("Radio", None, out)).unwrap();
        assert!(rendered.starts_with("Radio: 2016\n"));
        assert!(rendered.contains("No content for this selection yet."));
    }

    #[test]
    fn show_unknown_specialism_has_no_content() {
        let store = TestStore::sample();
        let shell = shell(&store, OutputFormat::Markdown);
        let rendered = run(|out| shell.show("Unknown Specialism", Some("2020"), out)).unwrap();
        assert_eq!(
            rendered,
            "## Unknown Specialism: 2020\n\n> No content for this selection yet.\n"
        );
    }

    #[test]
    fn empty_store_is_reported_before_output() {
        let store = TestStore::with_text("{}");
        let shell = shell(&store, OutputFormat::Text);
        let mut out = Vec::new();
        let err = shell.specialisms(&mut out).unwrap_err();
        assert!(matches!(err, ShellError::EmptyStore));
        assert_eq!(err.to_string(), EMPTY_STORE);
        assert!(!err.is_fatal_load());
        assert!(out.is_empty());
    }

    #[test]
    fn missing_store_is_fatal() {
        let store = TestStore::missing();
        let shell = shell(&store, OutputFormat::Text);
        let err = run(|out| shell.years("Satellite", out)).unwrap_err();
        assert!(err.is_fatal_load());
    }

    #[test]
    fn sources_and_links_need_no_store() {
        let store = TestStore::missing();
        let shell = shell(&store, OutputFormat::Text);
        assert!(run(|out| shell.sources(out)).unwrap().starts_with("Sources\n"));
        assert!(run(|out| shell.links(out)).unwrap().contains("[Home]"));
    }

    #[test]
    fn browse_renders_each_pick_until_quit() {
        let store = TestStore::sample();
        let shell = shell(&store, OutputFormat::Text);
        let input = "3\n2026\ncybersecurity\n\nnope\nquit\nSatellite\n2016\n";

        let rendered = run(|out| shell.browse(input.as_bytes(), out)).unwrap();

        assert!(rendered.starts_with(" 1. Cybersecurity\n 2. Network Automation\n 3. Satellite\n"));
        assert!(rendered.contains("Satellite: 2026\n"));
        assert!(rendered.contains("Year [2020-2020]> "));
        assert!(rendered.contains("Cybersecurity: 2020\n"));
        assert!(rendered.contains("DDoS response teams doubled."));
        assert!(rendered.contains("Unknown specialism: nope"));
        assert!(!rendered.contains("Satellite: 2016"));
    }

    #[test]
    fn browse_stops_at_end_of_input() {
        let store = TestStore::sample();
        let shell = shell(&store, OutputFormat::Text);
        let rendered = run(|out| shell.browse("Satellite\n".as_bytes(), out)).unwrap();
        assert!(rendered.ends_with("Year [2016-2026]> \n"));
    }
}
