//! Pattern-based country extraction from unstructured prose.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

// A capitalized span (1+ capitalized words, possibly comma-separated) after a
// locating preposition, ending at a comma or period. Scanned in this order.
static IN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bin\s+([A-Z][A-Za-z]*(?:[, ]+[A-Z][A-Za-z]*)*)[.,]").expect("valid regex")
});
static OF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bof\s+([A-Z][A-Za-z]*(?:[, ]+[A-Z][A-Za-z]*)*)[.,]").expect("valid regex")
});
static LOCATED_IN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\blocated\s+in\s+([A-Z][A-Za-z]*(?:[, ]+[A-Z][A-Za-z]*)*)[.,]")
        .expect("valid regex")
});

/// Extracts whitelisted country names from summary text.
///
/// Matching is case-sensitive against the canonical names the extractor was
/// built with; prose like `"located in Paris, France."` resolves to
/// `"France"` because each comma segment of a captured span is tested in
/// order.
pub struct CountryExtractor {
    countries: HashSet<String>,
}

impl CountryExtractor {
    #[must_use]
    pub fn new(countries: &[String]) -> Self {
        CountryExtractor {
            countries: countries.iter().cloned().collect(),
        }
    }

    /// Return the first whitelisted country found in `summary`, scanning
    /// patterns in declared order and matches within a pattern in text
    /// order. `None` when nothing qualifies or the input is blank.
    #[must_use]
    pub fn extract(&self, summary: &str) -> Option<String> {
        if summary.trim().is_empty() {
            return None;
        }

        for pattern in [&*IN_RE, &*OF_RE, &*LOCATED_IN_RE] {
            for caps in pattern.captures_iter(summary) {
                let span = caps.get(1).map_or("", |m| m.as_str());
                for segment in span.split(',') {
                    let candidate = segment.trim();
                    if self.countries.contains(candidate) {
                        return Some(candidate.to_string());
                    }
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use placescout_core::Lexicon;

    use super::*;

    fn extractor() -> CountryExtractor {
        CountryExtractor::new(&Lexicon::builtin().countries)
    }

    #[test]
    fn extracts_country_after_city_comma() {
        let result = extractor().extract("The Eiffel Tower is located in Paris, France.");
        assert_eq!(result.as_deref(), Some("France"));
    }

    #[test]
    fn extracts_country_directly_after_in() {
        let result = extractor().extract("The temple stands in Japan, drawing millions.");
        assert_eq!(result.as_deref(), Some("Japan"));
    }

    #[test]
    fn extracts_country_after_of() {
        let result = extractor().extract("Machu Picchu sits in the mountains of Peru.");
        assert_eq!(result.as_deref(), Some("Peru"));
    }

    #[test]
    fn extracts_multi_word_country() {
        let result = extractor().extract("The stadium was built in New Zealand.");
        assert_eq!(result.as_deref(), Some("New Zealand"));
    }

    #[test]
    fn first_match_in_text_order_wins() {
        let result =
            extractor().extract("It opened in Berlin, Germany. A twin opened in Madrid, Spain.");
        assert_eq!(result.as_deref(), Some("Germany"));
    }

    #[test]
    fn no_location_yields_none() {
        assert_eq!(extractor().extract("No location mentioned."), None);
    }

    #[test]
    fn lowercase_country_is_not_matched() {
        // Whitelist matching is case-sensitive by design.
        assert_eq!(extractor().extract("It is located in paris, france."), None);
    }

    #[test]
    fn non_whitelisted_capitalized_span_yields_none() {
        assert_eq!(
            extractor().extract("The palace is located in Atlantis."),
            None
        );
    }

    #[test]
    fn blank_input_yields_none() {
        assert_eq!(extractor().extract(""), None);
        assert_eq!(extractor().extract("   "), None);
    }
}
