//! Batch ranking: per-candidate scoring and enrichment, stable ordering,
//! truncation.

use std::future::Future;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::classify::PlaceClassifier;
use crate::country::CountryExtractor;
use crate::error::EnrichError;
use crate::score::{base_confidence, compose_confidence};
use crate::text::clean_snippet;
use crate::types::{Enrichment, RankOptions, SearchCandidate, Suggestion};

/// The injected enrichment collaborator: resolves a candidate title to a
/// thumbnail, country, and optional long-form extract.
///
/// Implementations may be slow or failing; the ranker bounds every call with
/// a timeout and degrades per candidate.
pub trait Enrich {
    fn enrich(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Enrichment, EnrichError>> + Send;
}

/// Score, enrich, rank, and truncate a candidate batch.
///
/// Candidates are processed concurrently (at most
/// `options.max_concurrent` enrichment calls in flight); an enrichment
/// failure or timeout keeps its candidate with no thumbnail or country and
/// never aborts the batch. The result is sorted by confidence descending
/// with input order preserved among equal scores, then truncated to
/// `options.return_limit`. Dropping the returned future cancels in-flight
/// enrichment calls.
pub async fn rank_candidates<E>(
    classifier: &PlaceClassifier,
    extractor: &CountryExtractor,
    enricher: &E,
    query: &str,
    candidates: &[SearchCandidate],
    options: &RankOptions,
) -> Vec<Suggestion>
where
    E: Enrich + Sync,
{
    let mut indexed: Vec<(usize, Suggestion)> = stream::iter(candidates.iter().enumerate())
        .map(|(index, candidate)| async move {
            let suggestion = build_suggestion(
                classifier,
                extractor,
                enricher,
                query,
                candidate,
                options.enrich_timeout,
            )
            .await;
            (index, suggestion)
        })
        .buffer_unordered(options.max_concurrent.max(1))
        .collect()
        .await;

    // buffer_unordered yields in completion order; restore input order so
    // the stable confidence sort keeps the original order among ties.
    indexed.sort_by_key(|(index, _)| *index);

    let mut suggestions: Vec<Suggestion> = indexed.into_iter().map(|(_, s)| s).collect();
    suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    suggestions.truncate(options.return_limit);
    suggestions
}

/// Score and enrich one candidate. Total: always produces a suggestion.
async fn build_suggestion<E>(
    classifier: &PlaceClassifier,
    extractor: &CountryExtractor,
    enricher: &E,
    query: &str,
    candidate: &SearchCandidate,
    enrich_timeout: Duration,
) -> Suggestion
where
    E: Enrich + Sync,
{
    let snippet = clean_snippet(&candidate.snippet);
    let classification = classifier.classify(&candidate.title, &snippet);
    let base = base_confidence(query, &candidate.title, &snippet);
    let confidence = compose_confidence(base, &classification);

    let (thumbnail, country) =
        match tokio::time::timeout(enrich_timeout, enricher.enrich(&candidate.title)).await {
            Ok(Ok(enrichment)) => resolve_enrichment(extractor, enrichment),
            Ok(Err(e)) => {
                tracing::warn!(
                    title = %candidate.title,
                    error = %e,
                    "enrichment failed; keeping candidate without thumbnail/country"
                );
                (None, None)
            }
            Err(_) => {
                let e = EnrichError::Timeout(enrich_timeout);
                tracing::warn!(
                    title = %candidate.title,
                    error = %e,
                    "enrichment timed out; keeping candidate without thumbnail/country"
                );
                (None, None)
            }
        };

    Suggestion {
        title: candidate.title.clone(),
        snippet,
        confidence,
        place_type: classification.place_type,
        place_confidence: classification.confidence,
        thumbnail,
        country,
        size: candidate.size,
        timestamp: candidate.timestamp.clone(),
    }
}

/// Pull thumbnail and country out of an enrichment, falling back to pattern
/// extraction over the long-form extract when no country was supplied.
fn resolve_enrichment(
    extractor: &CountryExtractor,
    enrichment: Enrichment,
) -> (Option<String>, Option<String>) {
    let country = enrichment.country.or_else(|| {
        enrichment
            .extract
            .as_deref()
            .and_then(|text| extractor.extract(text))
    });
    (enrichment.thumbnail, country)
}
