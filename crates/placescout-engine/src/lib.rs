//! Place-relevance scoring and classification pipeline for Placescout.
//!
//! Takes raw search hits (title + snippet) and a user query, classifies each
//! hit as a geographic place or not, scores match confidence, extracts
//! country names from prose, and ranks candidates into a small, stable
//! suggestion list. All scoring is pure and synchronous; only the
//! per-candidate enrichment step in the ranker may suspend.

pub mod classify;
pub mod country;
pub mod error;
pub mod rank;
pub mod score;
pub mod text;
pub mod types;

pub use classify::PlaceClassifier;
pub use country::CountryExtractor;
pub use error::EnrichError;
pub use rank::{rank_candidates, Enrich};
pub use score::{base_confidence, place_confidence};
pub use text::{clean_snippet, normalize};
pub use types::{Classification, Enrichment, PlaceType, RankOptions, SearchCandidate, Suggestion};
