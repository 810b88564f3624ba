//! The lexicon: keyword categories, negative indicators, and the country
//! whitelist consumed by the scoring engine.
//!
//! These tables are data, not logic. A built-in lexicon ships with the crate;
//! deployments may override it with a YAML file (see `config/lexicon.yaml`),
//! which is validated on load the same way the built-in one is.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Categorical output of the place classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    Building,
    City,
    Landmark,
    Area,
    None,
}

impl std::fmt::Display for PlaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceType::Building => write!(f, "building"),
            PlaceType::City => write!(f, "city"),
            PlaceType::Landmark => write!(f, "landmark"),
            PlaceType::Area => write!(f, "area"),
            PlaceType::None => write!(f, "none"),
        }
    }
}

/// One weighted keyword category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub place_type: PlaceType,
    /// Scales the keyword match ratio into a category confidence. Must be in
    /// `(0.0, 1.0]`.
    pub weight: f32,
    pub keywords: Vec<String>,
}

/// The full lexicon read by the classifier and country extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Terms that mark a hit as not-a-place (people, media, organizations,
    /// abstract concepts). Any match vetoes classification outright.
    pub negative_indicators: Vec<String>,
    pub categories: Vec<Category>,
    /// Canonical country names, matched case-sensitively by the extractor.
    pub countries: Vec<String>,
}

const NEGATIVE_INDICATORS: &[&str] = &[
    // People and roles
    "singer",
    "musician",
    "actress",
    "politician",
    "president",
    "engineer",
    "scientist",
    "philosopher",
    "athlete",
    "footballer",
    "author",
    "writer",
    "poet",
    "painter",
    "biography",
    "was born",
    // Media works
    "album",
    "song",
    "film",
    "movie",
    "novel",
    "band",
    "magazine",
    // Organizations
    "company",
    "corporation",
    "organization",
    "startup",
    "software",
    // Abstract concepts
    "theory",
    "concept",
    "philosophy",
    "ideology",
    "disease",
];

const BUILDING_KEYWORDS: &[&str] = &[
    "tower",
    "building",
    "museum",
    "cathedral",
    "castle",
    "palace",
    "bridge",
    "stadium",
    "temple",
    "skyscraper",
];

const CITY_KEYWORDS: &[&str] = &[
    "city",
    "capital",
    "town",
    "metropolis",
    "municipality",
    "downtown",
    "borough",
    "suburb",
];

const LANDMARK_KEYWORDS: &[&str] = &[
    "landmark",
    "monument",
    "memorial",
    "statue",
    "ruins",
    "heritage",
    "attraction",
    "wonder",
];

const AREA_KEYWORDS: &[&str] = &[
    "mountain",
    "valley",
    "lake",
    "river",
    "island",
    "beach",
    "forest",
    "desert",
    "national park",
    "bay",
];

const COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Czech Republic",
    "Denmark",
    "Egypt",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hungary",
    "India",
    "Indonesia",
    "Ireland",
    "Italy",
    "Japan",
    "Kenya",
    "Mexico",
    "Morocco",
    "Netherlands",
    "New Zealand",
    "Norway",
    "Peru",
    "Poland",
    "Portugal",
    "Russia",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Thailand",
    "Turkey",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Vietnam",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Lexicon {
    /// The lexicon compiled into the crate, used when no override file exists.
    #[must_use]
    pub fn builtin() -> Self {
        Lexicon {
            negative_indicators: owned(NEGATIVE_INDICATORS),
            categories: vec![
                Category {
                    place_type: PlaceType::Building,
                    weight: 0.8,
                    keywords: owned(BUILDING_KEYWORDS),
                },
                Category {
                    place_type: PlaceType::City,
                    weight: 0.9,
                    keywords: owned(CITY_KEYWORDS),
                },
                Category {
                    place_type: PlaceType::Landmark,
                    weight: 0.7,
                    keywords: owned(LANDMARK_KEYWORDS),
                },
                Category {
                    place_type: PlaceType::Area,
                    weight: 0.6,
                    keywords: owned(AREA_KEYWORDS),
                },
            ],
            countries: owned(COUNTRIES),
        }
    }
}

/// Load and validate a lexicon from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let lexicon: Lexicon = serde_yaml::from_str(&content)?;

    validate_lexicon(&lexicon)?;

    Ok(lexicon)
}

fn validate_lexicon(lexicon: &Lexicon) -> Result<(), ConfigError> {
    if lexicon.categories.is_empty() {
        return Err(ConfigError::Validation(
            "lexicon must define at least one category".to_string(),
        ));
    }

    let mut seen_types = HashSet::new();
    for category in &lexicon.categories {
        if category.place_type == PlaceType::None {
            return Err(ConfigError::Validation(
                "category place_type must not be 'none'".to_string(),
            ));
        }

        if !(category.weight > 0.0 && category.weight <= 1.0) {
            return Err(ConfigError::Validation(format!(
                "category '{}' has weight {}; must be in (0.0, 1.0]",
                category.place_type, category.weight
            )));
        }

        if category.keywords.is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' has no keywords",
                category.place_type
            )));
        }

        if category.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "category '{}' contains a blank keyword",
                category.place_type
            )));
        }

        if !seen_types.insert(category.place_type) {
            return Err(ConfigError::Validation(format!(
                "duplicate category: '{}'",
                category.place_type
            )));
        }
    }

    if lexicon
        .negative_indicators
        .iter()
        .any(|t| t.trim().is_empty())
    {
        return Err(ConfigError::Validation(
            "negative indicator list contains a blank term".to_string(),
        ));
    }

    if lexicon.countries.is_empty() {
        return Err(ConfigError::Validation(
            "country whitelist must be non-empty".to_string(),
        ));
    }

    let mut seen_countries = HashSet::new();
    for country in &lexicon.countries {
        if country.trim().is_empty() {
            return Err(ConfigError::Validation(
                "country whitelist contains a blank entry".to_string(),
            ));
        }
        if !seen_countries.insert(country.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate country: '{country}'"
            )));
        }
    }

    Ok(())
}
