//! Text canonicalization and snippet cleanup.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#?[0-9A-Za-z]+;").expect("valid regex"));

/// Is `c` in the Unicode combining diacritical marks block?
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Canonicalize text for comparison.
///
/// Lowercases, decomposes to NFD so accented characters split into base
/// letter plus combining marks, drops the combining marks (U+0300–U+036F),
/// drops everything that is neither a word character nor whitespace, and
/// trims. Idempotent, and total: any input yields a (possibly empty) string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let filtered: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    filtered.trim().to_string()
}

/// Strip markup from a raw snippet.
///
/// Removes HTML-like tags, replaces each HTML entity (`&name;` / `&#123;`)
/// with a single space, collapses whitespace runs, and trims.
#[must_use]
pub fn clean_snippet(snippet: &str) -> String {
    let without_tags = TAG_RE.replace_all(snippet, "");
    let spaced = ENTITY_RE.replace_all(&without_tags, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
