use anyhow::{bail, Context, Result};

use crate::matching::similarity::SimilarityBackend;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub similarity_backend: SimilarityBackend,
    pub phrase_enrichment: bool,
    pub top_n: Option<usize>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let similarity_backend = match lookup("SIMILARITY_BACKEND") {
            Some(raw) => raw
                .parse::<SimilarityBackend>()
                .context("SIMILARITY_BACKEND must be 'tfidf' or 'overlap'")?,
            None => SimilarityBackend::default(),
        };

        let phrase_enrichment = match lookup("ENABLE_PHRASE_ENRICHMENT") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("ENABLE_PHRASE_ENRICHMENT has invalid value '{raw}'"))?,
            None => false,
        };

        let top_n = match lookup("MATCH_TOP_N") {
            Some(raw) => {
                let n = raw
                    .trim()
                    .parse::<usize>()
                    .context("MATCH_TOP_N must be a positive integer")?;
                if n == 0 {
                    bail!("MATCH_TOP_N must be a positive integer");
                }
                Some(n)
            }
            None => None,
        };

        Ok(Config {
            similarity_backend,
            phrase_enrichment,
            top_n,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{other}'"),
    }
}
