use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{GuessError, Result};

const API_BASE_KEY: &str = "YGO_API_BASE";
const HTTP_TIMEOUT_KEY: &str = "YGO_HTTP_TIMEOUT_SECS";
const RANDOM_MAX_ATTEMPTS_KEY: &str = "YGO_RANDOM_MAX_ATTEMPTS";

const DEFAULT_API_BASE: &str = "https://db.ygoprodeck.com/api/v7";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;
const DEFAULT_RANDOM_MAX_ATTEMPTS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub http_timeout: Duration,
    pub random_max_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_base: DEFAULT_API_BASE.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            random_max_attempts: DEFAULT_RANDOM_MAX_ATTEMPTS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Settings::default();

        let api_base = lookup(API_BASE_KEY)
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_base);

        let http_timeout = parse_var(&lookup, HTTP_TIMEOUT_KEY)?
            .map(Duration::from_secs)
            .unwrap_or(defaults.http_timeout);

        let random_max_attempts = parse_var::<u32>(&lookup, RANDOM_MAX_ATTEMPTS_KEY)?
            .unwrap_or(defaults.random_max_attempts);
        if random_max_attempts == 0 {
            return Err(GuessError::Config(format!(
                "{} must be at least 1",
                RANDOM_MAX_ATTEMPTS_KEY
            )));
        }

        Ok(Settings {
            api_base,
            http_timeout,
            random_max_attempts,
        })
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| GuessError::Config(format!("{} is not a valid number: {}", key, value))),
        None => Ok(None),
    }
}
