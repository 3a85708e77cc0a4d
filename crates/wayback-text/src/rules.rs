//! The ordered rewrite rule table
//!
//! Each [`Rule`] is a named, pure string rewrite. [`rules`] returns them in the
//! order [`crate::normalize`] applies them. Later rules depend on the shape
//! earlier rules leave behind, so each rule is tested on its own here and the
//! composition is tested in `normalize.rs`.

use crate::escape::DOLLAR_ENTITY;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use unicode_normalization::{is_nfkc_quick, IsNormalized, UnicodeNormalization};

/// Zero-width space, non-joiner, joiner and the byte-order mark
const ZERO_WIDTH: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// UTF-8 em dash and en dash decoded as cp1252
const MOJIBAKE_DASHES: &[&str] = &["\u{e2}\u{20ac}\u{201d}", "\u{e2}\u{20ac}\u{201c}"];

/// One step of the normalization pipeline
pub struct Rule {
    name: &'static str,
    action: Action,
}

enum Action {
    Nfkc,
    StripZeroWidth,
    Literal {
        needles: &'static [&'static str],
        replacement: &'static str,
    },
    Pattern {
        regex: Regex,
        replacement: &'static str,
    },
    Trim,
}

impl Rule {
    fn literal(
        name: &'static str,
        needles: &'static [&'static str],
        replacement: &'static str,
    ) -> Self {
        Self {
            name,
            action: Action::Literal {
                needles,
                replacement,
            },
        }
    }

    fn pattern(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        let regex = Regex::new(pattern).expect("rule patterns are compile-time constants");
        Self {
            name,
            action: Action::Pattern { regex, replacement },
        }
    }

    /// Stable identifier of this rule
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this rule alone.
    ///
    /// Returns `Cow::Borrowed` when the rule leaves the text untouched.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.action {
            Action::Nfkc => nfkc(text),
            Action::StripZeroWidth => strip_zero_width(text),
            Action::Literal {
                needles,
                replacement,
            } => replace_literals(text, needles, replacement),
            Action::Pattern { regex, replacement } => regex.replace_all(text, *replacement),
            Action::Trim => {
                let trimmed = text.trim();
                if trimmed.len() == text.len() {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(trimmed.to_owned())
                }
            }
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule {
            name: "nfkc",
            action: Action::Nfkc,
        },
        Rule {
            name: "strip_zero_width",
            action: Action::StripZeroWidth,
        },
        Rule::literal("mojibake_dashes", MOJIBAKE_DASHES, "-"),
        Rule::literal("escape_dollar", &["$"], DOLLAR_ENTITY),
        Rule::pattern("space_after_period", r"\.([A-Za-z0-9])", ". $1"),
        Rule::pattern("split_digit_letter", r"([0-9])([A-Za-z])", "$1 $2"),
        Rule::pattern("split_letter_digit", r"([A-Za-z])([0-9])", "$1 $2"),
        Rule::pattern("join_quarter", r"(?i)\bQ\s+([1-4])\b", "Q$1"),
        Rule::pattern("join_fiscal_year", r"(?i)\bFY\s+([0-9]{2,4})\b", "FY$1"),
        Rule::pattern("space_in_year", r"\bin([0-9]{4})\b", "in $1"),
        Rule::pattern("join_decimal", r"([0-9]+)\.\s+([0-9]+)", "$1.$2"),
        Rule::pattern("join_unit", r"([0-9]+(?:\.[0-9]+)?)\s*([TBMK]\b|%)", "$1$2"),
        Rule::pattern("join_currency", r"&#36;\s*([0-9])", "&#36;$1"),
        Rule::pattern("uppercase_ai", r"(?i)\bai\b", "AI"),
        Rule::pattern("collapse_spaces", r"[ ]{2,}", " "),
        Rule::pattern("join_generation", r"\b([3-6])\s+G\b", "${1}G"),
        Rule::pattern("join_ghz", r"(?i)\b([0-9]+)\s+GHz\b", "${1}GHz"),
        Rule::pattern("rejoin_quarter", r"(?i)\bQ\s*([1-4])\b", "Q$1"),
        Rule::pattern("join_ddos", r"\bDDo\s+S\b", "DDoS"),
        Rule::pattern("join_sd_wan", r"(?i)\bSD\s*-?\s*WAN\b", "SD-WAN"),
        Rule {
            name: "trim",
            action: Action::Trim,
        },
    ]
});

/// All rules, in application order
#[must_use]
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Look up a rule by name
#[must_use]
pub fn rule(name: &str) -> Option<&'static Rule> {
    rules().iter().find(|r| r.name == name)
}

fn nfkc(text: &str) -> Cow<'_, str> {
    if is_nfkc_quick(text.chars()) == IsNormalized::Yes {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfkc().collect())
    }
}

// Removing a zero-width character can leave a base character next to a
// combining mark, so the result is recomposed.
fn strip_zero_width(text: &str) -> Cow<'_, str> {
    if !text.contains(ZERO_WIDTH) {
        return Cow::Borrowed(text);
    }
    let stripped: String = text.chars().filter(|c| !ZERO_WIDTH.contains(c)).collect();
    match nfkc(&stripped) {
        Cow::Borrowed(_) => Cow::Owned(stripped),
        Cow::Owned(composed) => Cow::Owned(composed),
    }
}

fn replace_literals<'t>(text: &'t str, needles: &[&str], replacement: &str) -> Cow<'t, str> {
    let mut out = Cow::Borrowed(text);
    for needle in needles {
        if out.contains(needle) {
            out = Cow::Owned(out.replace(needle, replacement));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, input: &str) -> String {
        rule(name)
            .unwrap_or_else(|| panic!("rule {name} exists"))
            .apply(input)
            .into_owned()
    }

    #[test]
    fn table_order_is_fixed() {
        let names: Vec<_> = rules().iter().map(Rule::name).collect();
        assert_eq!(
            names,
            [
                "nfkc",
                "strip_zero_width",
                "mojibake_dashes",
                "escape_dollar",
                "space_after_period",
                "split_digit_letter",
                "split_letter_digit",
                "join_quarter",
                "join_fiscal_year",
                "space_in_year",
                "join_decimal",
                "join_unit",
                "join_currency",
                "uppercase_ai",
                "collapse_spaces",
                "join_generation",
                "join_ghz",
                "rejoin_quarter",
                "join_ddos",
                "join_sd_wan",
                "trim",
            ]
        );
    }

    #[test]
    fn unknown_rule_is_none() {
        assert!(rule("does_not_exist").is_none());
    }

    #[test]
    fn nfkc_folds_compatibility_forms() {
        assert_eq!(run("nfkc", "\u{FF11}\u{FF10}\u{FF05}"), "10%");
        assert_eq!(run("nfkc", "caf\u{0065}\u{0301}"), "caf\u{e9}");
        assert_eq!(run("nfkc", "a\u{00A0}b"), "a b");
    }

    #[test]
    fn nfkc_borrows_normalized_input() {
        let rule = rule("nfkc").unwrap();
        assert!(matches!(rule.apply("already fine"), Cow::Borrowed(_)));
    }

    #[test]
    fn strip_zero_width_removes_all_four() {
        assert_eq!(
            run("strip_zero_width", "a\u{200B}b\u{200C}c\u{200D}d\u{FEFF}e"),
            "abcde"
        );
    }

    #[test]
    fn strip_zero_width_recomposes() {
        assert_eq!(run("strip_zero_width", "e\u{200B}\u{0301}"), "\u{e9}");
    }

    #[test]
    fn mojibake_dashes_become_hyphens() {
        assert_eq!(
            run("mojibake_dashes", "2016\u{e2}\u{20ac}\u{201d}2026 and a\u{e2}\u{20ac}\u{201c}b"),
            "2016-2026 and a-b"
        );
    }

    #[test]
    fn real_dashes_are_kept() {
        assert_eq!(run("mojibake_dashes", "a \u{2014} b"), "a \u{2014} b");
    }

    #[test]
    fn every_dollar_is_escaped() {
        assert_eq!(run("escape_dollar", "$5 and $$"), "&#36;5 and &#36;&#36;");
    }

    #[test]
    fn space_after_period_splits_glued_sentences() {
        assert_eq!(run("space_after_period", "growth.Demand"), "growth. Demand");
        assert_eq!(run("space_after_period", "3.7"), "3. 7");
        assert_eq!(run("space_after_period", "end. Next"), "end. Next");
    }

    #[test]
    fn digit_letter_splitters() {
        assert_eq!(run("split_digit_letter", "5G and 3x"), "5 G and 3 x");
        assert_eq!(run("split_letter_digit", "in2026 Q1"), "in 2026 Q 1");
    }

    #[test]
    fn join_quarter_needs_whitespace_and_boundary() {
        assert_eq!(run("join_quarter", "Q 1 and q  4"), "Q1 and Q4");
        assert_eq!(run("join_quarter", "Q 5"), "Q 5");
        assert_eq!(run("join_quarter", "Q 12"), "Q 12");
    }

    #[test]
    fn join_fiscal_year() {
        assert_eq!(run("join_fiscal_year", "FY 2025 and fy 24"), "FY2025 and FY24");
        assert_eq!(run("join_fiscal_year", "FY 12345"), "FY 12345");
    }

    #[test]
    fn space_in_year_only_for_four_digits() {
        assert_eq!(run("space_in_year", "in2026"), "in 2026");
        assert_eq!(run("space_in_year", "in20261"), "in20261");
        assert_eq!(run("space_in_year", "begin2026"), "begin2026");
    }

    #[test]
    fn join_decimal_removes_space_after_point() {
        assert_eq!(run("join_decimal", "653. 4 and 6. 15"), "653.4 and 6.15");
        assert_eq!(run("join_decimal", "653 .4"), "653 .4");
    }

    #[test]
    fn digit_classes_are_ascii_only() {
        // non-ASCII decimal digits are left alone
        assert_eq!(run("join_decimal", "1. \u{663}. 5"), "1. \u{663}. 5");
        assert_eq!(run("split_digit_letter", "\u{663}x"), "\u{663}x");
        assert_eq!(run("split_letter_digit", "x\u{663}"), "x\u{663}");
    }

    #[test]
    fn join_unit_attaches_suffixes() {
        assert_eq!(run("join_unit", "3.7 T"), "3.7T");
        assert_eq!(run("join_unit", "653.4 B, 12 M, 5 K"), "653.4B, 12M, 5K");
        assert_eq!(run("join_unit", "12.5 %"), "12.5%");
        assert_eq!(run("join_unit", "5 Mbps"), "5 Mbps");
    }

    #[test]
    fn join_currency_works_on_escaped_marker() {
        assert_eq!(run("join_currency", "&#36; 3.7T"), "&#36;3.7T");
        assert_eq!(run("join_currency", "&#36; more"), "&#36; more");
    }

    #[test]
    fn uppercase_ai_respects_word_boundaries() {
        assert_eq!(run("uppercase_ai", "ai, Ai and aI"), "AI, AI and AI");
        assert_eq!(run("uppercase_ai", "said hi to the maid"), "said hi to the maid");
    }

    #[test]
    fn collapse_spaces_leaves_tabs() {
        assert_eq!(run("collapse_spaces", "a   b\t\tc"), "a b\t\tc");
    }

    #[test]
    fn join_generation_only_three_to_six() {
        assert_eq!(run("join_generation", "3 G 4 G 5 G 6 G"), "3G 4G 5G 6G");
        assert_eq!(run("join_generation", "2 G 7 G"), "2 G 7 G");
        assert_eq!(run("join_generation", "5 GHz"), "5 GHz");
    }

    #[test]
    fn join_ghz_normalizes_case() {
        assert_eq!(run("join_ghz", "5 ghz and 60 GHz"), "5GHz and 60GHz");
    }

    #[test]
    fn rejoin_quarter_accepts_no_space() {
        assert_eq!(run("rejoin_quarter", "q1 Q 2 Q3"), "Q1 Q2 Q3");
    }

    #[test]
    fn join_ddos() {
        assert_eq!(run("join_ddos", "DDo S attacks"), "DDoS attacks");
        assert_eq!(run("join_ddos", "DDo Something"), "DDo Something");
    }

    #[test]
    fn join_sd_wan_variants() {
        assert_eq!(run("join_sd_wan", "SD WAN"), "SD-WAN");
        assert_eq!(run("join_sd_wan", "sd - wan"), "SD-WAN");
        assert_eq!(run("join_sd_wan", "SDWAN"), "SD-WAN");
        assert_eq!(run("join_sd_wan", "SD-WAN"), "SD-WAN");
    }

    #[test]
    fn trim_strips_both_ends() {
        assert_eq!(run("trim", " \t text \n"), "text");
        assert!(matches!(rule("trim").unwrap().apply("text"), Cow::Borrowed(_)));
    }
}
