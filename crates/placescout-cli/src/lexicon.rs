//! Lexicon loading and inspection for the CLI.

use std::path::Path;

use anyhow::Context;

use placescout_core::{load_lexicon, AppConfig, Lexicon};

/// Load the configured lexicon, falling back to the built-in tables when no
/// override file exists.
pub(crate) fn resolve_lexicon(config: &AppConfig) -> anyhow::Result<Lexicon> {
    if config.lexicon_path.exists() {
        let lexicon = load_lexicon(&config.lexicon_path).with_context(|| {
            format!(
                "failed to load lexicon from {}",
                config.lexicon_path.display()
            )
        })?;
        tracing::debug!(path = %config.lexicon_path.display(), "loaded lexicon override");
        Ok(lexicon)
    } else {
        tracing::debug!("no lexicon file found; using built-in lexicon");
        Ok(Lexicon::builtin())
    }
}

/// Load and validate a lexicon file, reporting its table sizes.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub(crate) fn run_lexicon_check(config: &AppConfig, path: Option<&Path>) -> anyhow::Result<()> {
    let target = path.unwrap_or(&config.lexicon_path);
    let lexicon = load_lexicon(target)
        .with_context(|| format!("lexicon check failed for {}", target.display()))?;

    println!(
        "lexicon OK: {} categories, {} negative indicators, {} countries",
        lexicon.categories.len(),
        lexicon.negative_indicators.len(),
        lexicon.countries.len()
    );
    for category in &lexicon.categories {
        println!(
            "  {:<10} weight {:<4} {} keywords",
            category.place_type.to_string(),
            category.weight,
            category.keywords.len()
        );
    }

    Ok(())
}
