//! Suggestion ranking handler for the CLI.
//!
//! Reads a candidate batch from a JSON file and runs the full pipeline
//! offline: the batch's optional `summaries` map plays the enrichment
//! collaborator, so no network is involved.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;

use placescout_core::AppConfig;
use placescout_engine::{
    rank_candidates, CountryExtractor, Enrich, EnrichError, Enrichment, PlaceClassifier,
    RankOptions, SearchCandidate, Suggestion,
};

use crate::lexicon::resolve_lexicon;

/// Input batch: raw candidates plus optional per-title summaries.
#[derive(Debug, Deserialize)]
struct SuggestBatch {
    candidates: Vec<SearchCandidate>,
    #[serde(default)]
    summaries: HashMap<String, Enrichment>,
}

/// Enricher backed by the batch file's summaries map. Titles without a
/// summary enrich to an empty record rather than failing.
struct FileEnricher {
    summaries: HashMap<String, Enrichment>,
}

impl Enrich for FileEnricher {
    async fn enrich(&self, title: &str) -> Result<Enrichment, EnrichError> {
        Ok(self.summaries.get(title).cloned().unwrap_or_default())
    }
}

/// Rank a candidate batch against a query and print the result.
///
/// # Errors
///
/// Returns an error if the batch file cannot be read or parsed, or the
/// lexicon fails to load.
pub(crate) async fn run_suggest(
    config: &AppConfig,
    query: &str,
    input: &Path,
    limit: Option<usize>,
    as_json: bool,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read batch file {}", input.display()))?;
    let batch: SuggestBatch = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse batch file {}", input.display()))?;

    if batch.candidates.is_empty() {
        println!("no candidates in {}; nothing to rank", input.display());
        return Ok(());
    }

    let lexicon = resolve_lexicon(config)?;
    let classifier = PlaceClassifier::new(&lexicon);
    let extractor = CountryExtractor::new(&lexicon.countries);
    let enricher = FileEnricher {
        summaries: batch.summaries,
    };
    let options = RankOptions {
        return_limit: limit.unwrap_or(config.return_limit),
        enrich_timeout: Duration::from_secs(config.enrich_timeout_secs),
        max_concurrent: config.enrich_max_concurrent.max(1),
    };

    tracing::debug!(
        query,
        candidates = batch.candidates.len(),
        return_limit = options.return_limit,
        "ranking batch"
    );

    let suggestions = rank_candidates(
        &classifier,
        &extractor,
        &enricher,
        query,
        &batch.candidates,
        &options,
    )
    .await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    print_table(query, &suggestions);
    Ok(())
}

fn print_table(query: &str, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("no suggestions for '{query}'");
        return;
    }

    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");
    println!("Suggestions for '{query}' ({now})");
    println!();
    println!("{:<32}{:<8}{:<11}COUNTRY", "TITLE", "CONF", "TYPE");
    for suggestion in suggestions {
        println!(
            "{:<32}{:<8.2}{:<11}{}",
            suggestion.title,
            suggestion.confidence,
            suggestion.place_type.to_string(),
            suggestion.country.as_deref().unwrap_or("-"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_parses_candidates_and_summaries() {
        let json = r#"{
            "candidates": [
                {"title": "Eiffel Tower", "snippet": "lattice tower", "size": 2048, "timestamp": "2024-05-01T00:00:00Z"}
            ],
            "summaries": {
                "Eiffel Tower": {"thumbnail": "https://img.example/e.jpg", "extract": "Located in Paris, France."}
            }
        }"#;
        let batch: SuggestBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.candidates.len(), 1);
        assert_eq!(batch.candidates[0].title, "Eiffel Tower");
        let summary = batch.summaries.get("Eiffel Tower").unwrap();
        assert_eq!(summary.thumbnail.as_deref(), Some("https://img.example/e.jpg"));
        assert_eq!(summary.country, None);
    }

    #[test]
    fn batch_summaries_are_optional() {
        let json = r#"{
            "candidates": [
                {"title": "Paris", "snippet": "capital city", "size": 1, "timestamp": "2024-05-01T00:00:00Z"}
            ]
        }"#;
        let batch: SuggestBatch = serde_json::from_str(json).unwrap();
        assert!(batch.summaries.is_empty());
    }

    #[tokio::test]
    async fn file_enricher_defaults_missing_titles() {
        let enricher = FileEnricher {
            summaries: HashMap::new(),
        };
        let enrichment = enricher.enrich("Unknown").await.unwrap();
        assert_eq!(enrichment.thumbnail, None);
        assert_eq!(enrichment.country, None);
    }
}
