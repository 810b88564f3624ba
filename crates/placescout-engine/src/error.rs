use std::time::Duration;

use thiserror::Error;

/// Failure of the injected enrichment collaborator for a single candidate.
///
/// Never aborts a ranking pass — the ranker downgrades it to a suggestion
/// with no thumbnail or country.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("enrichment timed out after {0:?}")]
    Timeout(Duration),

    #[error("enrichment source error: {0}")]
    Source(String),
}
