//! Configuration management for the websearch CLI
//!
//! Stores the Bing subscription key and search defaults in
//! ~/.config/websearch/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use websearch::DEFAULT_NUM_RESULTS;
use websearch_bing::{
    BingConfig, DEFAULT_PLAIN_COUNT, DEFAULT_SEARCH_URL, ENV_SEARCH_URL, ENV_SUBSCRIPTION_KEY,
};

const CONFIG_DIR: &str = "websearch";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_key: Option<String>,
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_num_results")]
    pub num_results: usize,
    #[serde(default = "default_plain_count")]
    pub plain_count: usize,
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_num_results() -> usize {
    DEFAULT_NUM_RESULTS.get()
}

fn default_plain_count() -> usize {
    DEFAULT_PLAIN_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subscription_key: None,
            search_url: default_search_url(),
            num_results: default_num_results(),
            plain_count: default_plain_count(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file (or defaults), then apply environment overrides
    pub fn load() -> Result<Self> {
        Ok(Self::load_file()?.with_overrides(
            std::env::var(ENV_SUBSCRIPTION_KEY).ok(),
            std::env::var(ENV_SEARCH_URL).ok(),
        ))
    }

    /// Load only what is stored in the config file; this is what `save` should write back
    pub fn load_file() -> Result<Self> {
        Self::read_file(&Self::config_path()?)
    }

    /// Read a config file, or defaults when it does not exist
    pub fn read_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Environment values win over file values
    pub fn with_overrides(mut self, key: Option<String>, search_url: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.subscription_key = Some(key);
        }
        if let Some(url) = search_url.filter(|u| !u.trim().is_empty()) {
            self.search_url = url;
        }
        self
    }

    /// Set subscription key
    pub fn set_subscription_key(&mut self, key: String) {
        self.subscription_key = Some(key);
    }

    pub fn num_results(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.num_results).context("num_results in config must be at least 1")
    }

    /// Backend configuration; fails when no key is configured
    pub fn bing_config(&self) -> Result<BingConfig> {
        let key = self
            .subscription_key
            .as_ref()
            .context("Not logged in. Run 'websearch login' or set BING_SUBSCRIPTION_KEY.")?;

        Ok(BingConfig::new(key.clone())
            .with_search_url(self.search_url.clone())
            .with_plain_count(self.plain_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.num_results, 4);
        assert_eq!(config.plain_count, 10);
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.set_subscription_key("abc".to_string());
        config.num_results = 8;

        let content = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&content).unwrap(), config);
    }

    #[test]
    fn test_env_overrides_file() {
        let config = Config::from_toml("subscription_key = \"file-key\"")
            .unwrap()
            .with_overrides(Some("env-key".to_string()), None);

        assert_eq!(config.subscription_key.as_deref(), Some("env-key"));
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
    }

    #[test]
    fn test_blank_override_ignored() {
        let config = Config::from_toml("subscription_key = \"file-key\"")
            .unwrap()
            .with_overrides(Some(String::new()), Some("  ".to_string()));

        assert_eq!(config.subscription_key.as_deref(), Some("file-key"));
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
    }

    #[test]
    fn test_bing_config_requires_key() {
        assert!(Config::default().bing_config().is_err());

        let mut config = Config::default();
        config.set_subscription_key("k".to_string());
        config.plain_count = 5;
        let bing = config.bing_config().unwrap();
        assert_eq!(bing.subscription_key, "k");
        assert_eq!(bing.plain_count, 5);
    }

    #[test]
    fn test_read_file_missing_uses_defaults() {
        let path = std::env::temp_dir().join(format!("websearch-{}.toml", uuid::Uuid::new_v4()));
        assert_eq!(Config::read_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_overrides_do_not_leak_into_file_config() {
        let path = std::env::temp_dir().join(format!("websearch-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "search_url = \"https://file.example/search\"").unwrap();

        let mut stored = Config::read_file(&path).unwrap();
        let effective = stored
            .clone()
            .with_overrides(None, Some("http://127.0.0.1:9/search".to_string()));
        stored.set_subscription_key("new-key".to_string());
        let written = toml::to_string_pretty(&stored).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(effective.search_url, "http://127.0.0.1:9/search");
        assert!(written.contains("https://file.example/search"));
        assert!(!written.contains("127.0.0.1"));
        assert!(written.contains("new-key"));
    }

    #[test]
    fn test_zero_num_results_rejected() {
        let config = Config::from_toml("num_results = 0").unwrap();
        assert!(config.num_results().is_err());
    }
}
