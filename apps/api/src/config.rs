use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// How many candidates the job → candidates match returns.
    pub match_candidates_limit: usize,
    /// Fixed seed for the AI heuristics. Unset means a fresh entropy seed per process.
    pub ai_rng_seed: Option<u64>,
    /// JSON seed file replacing the embedded demo dataset.
    pub seed_data_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            match_candidates_limit: 20,
            ai_rng_seed: None,
            seed_data_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_env("PORT")?.unwrap_or(defaults.port),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            match_candidates_limit: parse_env("MATCH_CANDIDATES_LIMIT")?
                .unwrap_or(defaults.match_candidates_limit),
            ai_rng_seed: parse_env("AI_RNG_SEED")?,
            seed_data_path: std::env::var_os("SEED_DATA_PATH").map(PathBuf::from),
        };

        if config.match_candidates_limit == 0 {
            bail!("MATCH_CANDIDATES_LIMIT must be greater than zero");
        }
        Ok(config)
    }
}

/// Parses an optional environment variable, failing only when it is set but malformed.
fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.match_candidates_limit, 20);
        assert!(config.ai_rng_seed.is_none());
    }

    #[test]
    fn test_parse_env_unset_is_none() {
        let value: Option<u16> = parse_env("TALENT_API_TEST_UNSET_VARIABLE").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_parse_env_reads_and_rejects() {
        std::env::set_var("TALENT_API_TEST_SEED", " 42 ");
        let seed: Option<u64> = parse_env("TALENT_API_TEST_SEED").unwrap();
        assert_eq!(seed, Some(42));

        std::env::set_var("TALENT_API_TEST_PORT", "not-a-port");
        let err = parse_env::<u16>("TALENT_API_TEST_PORT").unwrap_err();
        assert!(err.to_string().contains("TALENT_API_TEST_PORT"));
    }
}
