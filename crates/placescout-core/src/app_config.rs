use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Lexicon YAML override. The built-in lexicon is used when this file
    /// does not exist.
    pub lexicon_path: PathBuf,
    /// Maximum number of suggestions returned per query.
    pub return_limit: usize,
    /// How many raw hits to request from the upstream search collaborator.
    pub search_limit: usize,
    pub enrich_timeout_secs: u64,
    pub enrich_max_concurrent: usize,
}
