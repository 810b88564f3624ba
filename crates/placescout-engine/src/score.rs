//! Query/title/snippet similarity scoring and place-aware composition.

use placescout_core::PlaceType;

use crate::classify::PlaceClassifier;
use crate::text::normalize;
use crate::types::Classification;

const TITLE_WEIGHT: f32 = 0.7;
const SNIPPET_WEIGHT: f32 = 0.3;
/// Applied to the word-overlap score when the raw query is under 3 chars.
const SHORT_QUERY_PENALTY: f32 = 0.5;
/// Scales the classifier confidence into the composed score.
const PLACE_BOOST_WEIGHT: f32 = 0.2;

/// Base textual match confidence between a query and one search hit.
///
/// Tiered, first match returns: exact normalized title match (1.0), title
/// contains query (0.9), query contains title (0.8), then weighted word
/// overlap against title and snippet. Blank query or title yields `0.0`.
/// Always in `[0.0, 1.0]`.
#[must_use]
pub fn base_confidence(query: &str, title: &str, snippet: &str) -> f32 {
    let q = normalize(query);
    let t = normalize(title);

    if q.is_empty() || t.is_empty() {
        return 0.0;
    }
    if t == q {
        return 1.0;
    }
    if t.contains(&q) {
        return 0.9;
    }
    if q.contains(&t) {
        return 0.8;
    }

    let s = normalize(snippet);
    let query_words: Vec<&str> = q.split_whitespace().collect();
    let title_words: Vec<&str> = t.split_whitespace().collect();

    let mut title_matches = 0_usize;
    let mut snippet_matches = 0_usize;
    for word in &query_words {
        if word.chars().count() <= 2 {
            continue;
        }
        if title_words
            .iter()
            .any(|tw| tw.contains(word) || word.contains(tw))
        {
            title_matches += 1;
        }
        if s.contains(word) {
            snippet_matches += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let total = query_words.len() as f32;
    #[allow(clippy::cast_precision_loss)]
    let mut score = (title_matches as f32 / total) * TITLE_WEIGHT
        + (snippet_matches as f32 / total) * SNIPPET_WEIGHT;

    if query.chars().count() < 3 {
        score *= SHORT_QUERY_PENALTY;
    }

    score.clamp(0.0, 1.0)
}

/// Place-aware match confidence: `0.0` for anything the classifier rejects,
/// otherwise the base confidence boosted by classifier confidence and a
/// small per-type bonus, capped at `1.0`.
#[must_use]
pub fn place_confidence(
    classifier: &PlaceClassifier,
    query: &str,
    title: &str,
    snippet: &str,
) -> f32 {
    let classification = classifier.classify(title, snippet);
    if !classification.is_place {
        return 0.0;
    }
    compose_confidence(base_confidence(query, title, snippet), &classification)
}

/// Compose an already-computed base score with a classification. Shared with
/// the ranker so each candidate is classified exactly once.
pub(crate) fn compose_confidence(base: f32, classification: &Classification) -> f32 {
    if !classification.is_place {
        return 0.0;
    }
    let place_boost = classification.confidence * PLACE_BOOST_WEIGHT;
    (base + place_boost + type_bonus(classification.place_type)).min(1.0)
}

fn type_bonus(place_type: PlaceType) -> f32 {
    match place_type {
        PlaceType::City => 0.1,
        PlaceType::Building | PlaceType::Landmark => 0.05,
        PlaceType::Area => 0.02,
        PlaceType::None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use placescout_core::Lexicon;

    use super::*;

    #[test]
    fn exact_title_match_scores_one() {
        let score = base_confidence("Eiffel Tower", "eiffel tower", "anything");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn title_containing_query_scores_point_nine() {
        let score = base_confidence("eiffel", "Eiffel Tower", "anything");
        assert_eq!(score, 0.9);
    }

    #[test]
    fn query_containing_title_scores_point_eight() {
        let score = base_confidence("the eiffel tower in paris", "Eiffel Tower", "anything");
        assert_eq!(score, 0.8);
    }

    #[test]
    fn tiers_are_non_increasing_as_overlap_decreases() {
        let exact = base_confidence("eiffel tower", "Eiffel Tower", "");
        let contains = base_confidence("eiffel", "Eiffel Tower", "");
        let contained = base_confidence("big eiffel tower photo", "Eiffel Tower", "");
        let overlap = base_confidence("eifel tower", "Eiffel Tower", "lattice tower");
        let nothing = base_confidence("quantum physics", "Eiffel Tower", "lattice tower");
        assert!(exact >= contains, "{exact} < {contains}");
        assert!(contains >= contained, "{contains} < {contained}");
        assert!(contained >= overlap, "{contained} < {overlap}");
        assert!(overlap >= nothing, "{overlap} < {nothing}");
    }

    #[test]
    fn word_overlap_weighs_title_over_snippet() {
        // "tower" matches the title; "paris" matches the snippet only.
        let score = base_confidence("tower paris", "Tower Bridge", "a bridge in paris");
        // title: 1/2 * 0.7 = 0.35; snippet: 1/2 * 0.3 = 0.15
        assert!((score - 0.5).abs() < 1e-6, "expected 0.5, got {score}");
    }

    #[test]
    fn short_words_are_ignored_in_overlap() {
        let score = base_confidence("go to tower", "Tower Bridge", "");
        // only "tower" (len > 2) can match: 1/3 * 0.7
        assert!(
            (score - 0.7 / 3.0).abs() < 1e-6,
            "expected {}, got {score}",
            0.7 / 3.0
        );
    }

    #[test]
    fn short_query_cannot_score_via_word_overlap() {
        // A raw query under 3 chars carries no words longer than 2 chars, so
        // the overlap tier scores 0 and the length penalty keeps it there.
        let score = base_confidence("zz", "Paris Guide", "paris");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn blank_query_scores_zero() {
        assert_eq!(base_confidence("", "Eiffel Tower", "snippet"), 0.0);
        assert_eq!(base_confidence("eiffel", "", "snippet"), 0.0);
    }

    #[test]
    fn base_confidence_stays_in_unit_interval() {
        let inputs = [
            ("eiffel tower", "Eiffel Tower", "tower in paris"),
            ("a", "A", ""),
            ("x y z", "unrelated", "unrelated"),
        ];
        for (q, t, s) in inputs {
            let score = base_confidence(q, t, s);
            assert!(
                (0.0..=1.0).contains(&score),
                "score out of range for {q:?}: {score}"
            );
        }
    }

    #[test]
    fn place_confidence_zero_for_rejected_candidate() {
        let classifier = PlaceClassifier::new(&Lexicon::builtin());
        // Exact title match (base 1.0) but the veto rejects it.
        let score = place_confidence(
            &classifier,
            "famous singer",
            "Famous Singer",
            "singer and songwriter",
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn place_confidence_boosts_accepted_candidate() {
        let classifier = PlaceClassifier::new(&Lexicon::builtin());
        let base = base_confidence(
            "eifel tower",
            "Eiffel Tower",
            "wrought-iron lattice tower in Paris",
        );
        let composed = place_confidence(
            &classifier,
            "eifel tower",
            "Eiffel Tower",
            "wrought-iron lattice tower in Paris",
        );
        assert!(
            composed > base,
            "composed {composed} should exceed base {base}"
        );
        assert!(composed <= 1.0);
    }

    #[test]
    fn place_confidence_caps_at_one() {
        let classifier = PlaceClassifier::new(&Lexicon::builtin());
        let score = place_confidence(
            &classifier,
            "eiffel tower",
            "Eiffel Tower",
            "wrought-iron lattice tower in Paris",
        );
        assert_eq!(score, 1.0);
    }
}
