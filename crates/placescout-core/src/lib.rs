//! Shared configuration for Placescout.
//!
//! Holds the env-driven application config and the lexicon: the keyword
//! categories, negative indicators, and country whitelist the scoring engine
//! reads as immutable data.

pub mod app_config;
pub mod config;
pub mod error;
pub mod lexicon;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use lexicon::{load_lexicon, Category, Lexicon, PlaceType};
