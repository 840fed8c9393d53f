//! Bing configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;

use websearch::DomainError;

pub const DEFAULT_SEARCH_URL: &str = "https://api.bing.microsoft.com/v7.0/search";
pub const DEFAULT_PLAIN_COUNT: usize = 10;

pub const ENV_SUBSCRIPTION_KEY: &str = "BING_SUBSCRIPTION_KEY";
pub const ENV_SEARCH_URL: &str = "BING_SEARCH_URL";

/// Configuration for the Bing backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BingConfig {
    /// Azure subscription key (`Ocp-Apim-Subscription-Key`)
    pub subscription_key: String,
    /// Search endpoint
    pub search_url: String,
    /// Hits fetched for a plain (snippet-joined) answer
    pub plain_count: usize,
    /// Extra query parameters sent with every request (e.g. `mkt`, `safeSearch`)
    #[serde(default)]
    pub search_params: BTreeMap<String, String>,
}

impl BingConfig {
    /// Create a new Bing configuration with just a subscription key
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            ..Self::default()
        }
    }

    /// Load from `BING_SUBSCRIPTION_KEY` / `BING_SEARCH_URL`, reading `.env` if present
    pub fn from_env() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();

        let subscription_key = env::var(ENV_SUBSCRIPTION_KEY).map_err(|_| {
            DomainError::Configuration(format!("{} is not set", ENV_SUBSCRIPTION_KEY))
        })?;

        let mut config = Self::new(subscription_key);
        if let Ok(url) = env::var(ENV_SEARCH_URL) {
            config = config.with_search_url(url);
        }
        config.validate()?;
        Ok(config)
    }

    /// Override the search endpoint
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Set the number of hits used for plain answers
    pub fn with_plain_count(mut self, count: usize) -> Self {
        self.plain_count = count;
        self
    }

    /// Add an extra query parameter
    pub fn with_search_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.search_params.insert(key.into(), value.into());
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.subscription_key.trim().is_empty() {
            return Err(DomainError::Configuration(
                "Bing subscription key is empty".to_string(),
            ));
        }
        if self.search_url.trim().is_empty() {
            return Err(DomainError::Configuration(
                "Bing search URL is empty".to_string(),
            ));
        }
        if self.plain_count == 0 {
            return Err(DomainError::Validation(
                "plain_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BingConfig {
    fn default() -> Self {
        Self {
            subscription_key: String::new(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            plain_count: DEFAULT_PLAIN_COUNT,
            search_params: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = BingConfig::new("test-key")
            .with_search_url("http://localhost:8080/search")
            .with_plain_count(3)
            .with_search_param("mkt", "en-US");

        assert_eq!(config.subscription_key, "test-key");
        assert_eq!(config.search_url, "http://localhost:8080/search");
        assert_eq!(config.plain_count, 3);
        assert_eq!(config.search_params.get("mkt").map(String::as_str), Some("en-US"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let config = BingConfig::new("k");
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(config.plain_count, 10);
        assert!(config.search_params.is_empty());
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        let err = BingConfig::new("  ").validate().unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let err = BingConfig::new("k").with_plain_count(0).validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
