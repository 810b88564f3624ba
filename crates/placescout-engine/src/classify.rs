//! Keyword- and pattern-weighted place classification.

use std::sync::LazyLock;

use regex::Regex;

use placescout_core::{Lexicon, PlaceType};

use crate::text::normalize;
use crate::types::Classification;

// Category-spanning fallbacks: an unambiguous place noun guarantees a minimum
// confidence even when keyword density is too low to clear the threshold.
static BUILDING_NOUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(tower|bridge|museum|cathedral|castle|palace|temple|stadium|lighthouse|observatory)\b")
        .expect("valid regex")
});
static URBAN_NOUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(city|town|village|capital|metropolis|municipality)\b").expect("valid regex")
});
static GEOGRAPHIC_NOUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(mountain|lake|river|island|valley|canyon|waterfall|glacier|bay|reef)\b")
        .expect("valid regex")
});

/// Confidence reported when a negative indicator vetoes the hit.
const VETO_CONFIDENCE: f32 = 0.1;
/// Floor applied when a fallback pattern matches.
const FALLBACK_CONFIDENCE: f32 = 0.3;
/// Minimum confidence for a hit to count as a place.
const PLACE_THRESHOLD: f32 = 0.2;

struct CategoryRule {
    place_type: PlaceType,
    weight: f32,
    keywords: Vec<String>,
}

/// Classifies title+snippet text as a place or not.
///
/// Holds the lexicon tables with every term normalized the same way the
/// input text is, so matching is a plain substring test. Stateless after
/// construction; safe to share across candidates.
pub struct PlaceClassifier {
    negative_indicators: Vec<String>,
    categories: Vec<CategoryRule>,
}

impl PlaceClassifier {
    #[must_use]
    pub fn new(lexicon: &Lexicon) -> Self {
        PlaceClassifier {
            negative_indicators: lexicon
                .negative_indicators
                .iter()
                .map(|t| normalize(t))
                .collect(),
            categories: lexicon
                .categories
                .iter()
                .map(|c| CategoryRule {
                    place_type: c.place_type,
                    weight: c.weight,
                    keywords: c.keywords.iter().map(|k| normalize(k)).collect(),
                })
                .collect(),
        }
    }

    /// Classify a search hit.
    ///
    /// Blank title or snippet yields the not-a-place default. A negative
    /// indicator anywhere in the combined text vetoes the hit outright;
    /// otherwise the best weighted keyword ratio wins, with the pattern
    /// fallback raising unambiguous place nouns to a minimum confidence.
    #[must_use]
    pub fn classify(&self, title: &str, snippet: &str) -> Classification {
        if title.trim().is_empty() || snippet.trim().is_empty() {
            return Classification::none();
        }

        let combined = normalize(&format!("{title} {snippet}"));

        for term in &self.negative_indicators {
            if combined.contains(term.as_str()) {
                return Classification {
                    is_place: false,
                    place_type: PlaceType::None,
                    confidence: VETO_CONFIDENCE,
                };
            }
        }

        let mut best_confidence = 0.0_f32;
        let mut best_type: Option<PlaceType> = None;

        for category in &self.categories {
            if category.keywords.is_empty() {
                continue;
            }
            let found = category
                .keywords
                .iter()
                .filter(|k| combined.contains(k.as_str()))
                .count();
            #[allow(clippy::cast_precision_loss)]
            let ratio = found as f32 / category.keywords.len() as f32;
            let confidence = ratio * category.weight;
            if confidence > best_confidence {
                best_confidence = confidence;
                best_type = Some(category.place_type);
            }
        }

        if best_confidence < FALLBACK_CONFIDENCE && matches_place_noun(&combined) {
            best_confidence = FALLBACK_CONFIDENCE;
            best_type = Some(best_type.unwrap_or(PlaceType::Landmark));
        }

        let is_place = best_confidence >= PLACE_THRESHOLD;

        Classification {
            is_place,
            place_type: if is_place {
                best_type.unwrap_or(PlaceType::Landmark)
            } else {
                PlaceType::None
            },
            confidence: best_confidence.clamp(0.0, 1.0),
        }
    }
}

fn matches_place_noun(combined: &str) -> bool {
    BUILDING_NOUN_RE.is_match(combined)
        || URBAN_NOUN_RE.is_match(combined)
        || GEOGRAPHIC_NOUN_RE.is_match(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> PlaceClassifier {
        PlaceClassifier::new(&Lexicon::builtin())
    }

    #[test]
    fn blank_title_is_not_a_place() {
        let result = classifier().classify("", "some snippet text");
        assert!(!result.is_place);
        assert_eq!(result.place_type, PlaceType::None);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn blank_snippet_is_not_a_place() {
        let result = classifier().classify("Eiffel Tower", "   ");
        assert!(!result.is_place);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn eiffel_tower_classifies_as_building() {
        let result = classifier().classify("Eiffel Tower", "wrought-iron lattice tower in Paris");
        assert!(result.is_place, "expected a place, got {result:?}");
        assert_eq!(result.place_type, PlaceType::Building);
        assert!(
            result.confidence >= 0.2,
            "confidence below threshold: {}",
            result.confidence
        );
    }

    #[test]
    fn capital_snippet_classifies_as_city() {
        let result = classifier().classify("Paris", "Paris is the capital city of France");
        assert!(result.is_place);
        assert_eq!(result.place_type, PlaceType::City);
    }

    #[test]
    fn negative_indicator_vetoes_despite_place_keywords() {
        // "singer" must win even with a dense place vocabulary around it.
        let result = classifier().classify(
            "Famous Singer",
            "singer who performed at the stadium near the cathedral tower of the city",
        );
        assert!(!result.is_place);
        assert_eq!(result.place_type, PlaceType::None);
        assert!(
            (result.confidence - 0.1).abs() < f32::EPSILON,
            "veto confidence should be 0.1, got {}",
            result.confidence
        );
    }

    #[test]
    fn person_biography_is_vetoed() {
        let result = classifier().classify(
            "Gustave Eiffel",
            "French civil engineer who was born in Dijon",
        );
        assert!(!result.is_place);
    }

    #[test]
    fn pattern_fallback_defaults_to_landmark() {
        // "canyon" hits the geographic fallback pattern but no keyword list.
        let result = classifier().classify("Antelope Canyon", "a slot canyon near Page");
        assert!(result.is_place);
        assert_eq!(result.place_type, PlaceType::Landmark);
        assert!(
            (result.confidence - 0.3).abs() < f32::EPSILON,
            "fallback should floor confidence at 0.3, got {}",
            result.confidence
        );
    }

    #[test]
    fn fallback_keeps_best_category_when_one_was_found() {
        // One building keyword alone scores 0.08; the fallback raises the
        // confidence but must keep the building assignment.
        let result = classifier().classify("Tower Bridge", "a bridge crossing the river");
        assert!(result.is_place);
        assert_eq!(result.place_type, PlaceType::Building);
    }

    #[test]
    fn unrelated_text_is_not_a_place() {
        let result = classifier().classify("Quantum entanglement", "particles remain correlated");
        assert!(!result.is_place);
        assert_eq!(result.place_type, PlaceType::None);
    }

    #[test]
    fn confidence_always_in_unit_interval() {
        let c = classifier();
        let inputs = [
            ("Eiffel Tower", "wrought-iron lattice tower in Paris"),
            ("Paris", "capital city town metropolis municipality downtown"),
            ("", ""),
            ("Famous Singer", "singer and songwriter"),
            ("Lake District", "mountain valley lake river island beach forest desert bay"),
        ];
        for (title, snippet) in inputs {
            let result = c.classify(title, snippet);
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence out of range for {title:?}: {}",
                result.confidence
            );
            if !result.is_place {
                assert_eq!(
                    result.place_type,
                    PlaceType::None,
                    "non-place must have type none for {title:?}"
                );
            }
        }
    }
}
