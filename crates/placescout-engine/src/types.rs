use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use placescout_core::PlaceType;

/// A raw search hit as supplied by the upstream full-text search
/// collaborator. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub title: String,
    /// Raw snippet text; may contain HTML tags and entities.
    pub snippet: String,
    /// Source page size in bytes, as reported upstream.
    pub size: u64,
    /// Last-modified timestamp, passed through verbatim.
    pub timestamp: String,
}

/// Output of the place classifier.
///
/// Invariant: `place_type == PlaceType::None` iff `is_place == false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub is_place: bool,
    pub place_type: PlaceType,
    /// Classifier confidence in `[0.0, 1.0]`.
    pub confidence: f32,
}

impl Classification {
    /// The not-a-place result used for blank input.
    #[must_use]
    pub fn none() -> Self {
        Classification {
            is_place: false,
            place_type: PlaceType::None,
            confidence: 0.0,
        }
    }
}

/// What the enrichment collaborator returns for one title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enrichment {
    pub thumbnail: Option<String>,
    pub country: Option<String>,
    /// Long-form summary text; mined for a country name when `country` is
    /// not supplied directly.
    pub extract: Option<String>,
}

/// An enriched, scored candidate. The only record exposed outward; never
/// mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    /// Snippet with markup stripped and whitespace collapsed.
    pub snippet: String,
    /// Place-aware match confidence in `[0.0, 1.0]`.
    pub confidence: f32,
    pub place_type: PlaceType,
    /// The classifier's own confidence, kept separate from the match score.
    pub place_confidence: f32,
    pub thumbnail: Option<String>,
    pub country: Option<String>,
    pub size: u64,
    pub timestamp: String,
}

/// Knobs for a ranking pass.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Maximum number of suggestions returned.
    pub return_limit: usize,
    /// Budget for each candidate's enrichment call.
    pub enrich_timeout: Duration,
    /// How many enrichment calls may be in flight at once.
    pub max_concurrent: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            return_limit: 3,
            enrich_timeout: Duration::from_secs(10),
            max_concurrent: 4,
        }
    }
}
