use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "PUBASSIST_CONFIG";

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "PUBASSIST_API_URL";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PUBASSIST_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.pubassist/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("pubassist").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".pubassist").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Results per page in every paginated view
    pub page_size: usize,
    /// Pages prefetched on each side of the requested one
    pub fetch_radius: usize,
    /// Typeahead debounce window
    pub debounce_ms: u64,
    /// Most-cited articles shown per author hit
    pub most_cited: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            fetch_radius: 1,
            debounce_ms: 500,
            most_cited: 3,
        }
    }
}

/// API paths, relative to `api.base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub search_articles: String,
    pub search_journals: String,
    pub journal_rankings: String,
    pub author_search: String,
    pub author_articles: String,
    pub author_coreferrers: String,
    pub keyword_search: String,
    pub publication_search: String,
    pub graph_data: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search_articles: "paper_analyzer/search_articles".to_string(),
            search_journals: "paper_analyzer/search_publications".to_string(),
            journal_rankings: "paper_analyzer/publication_rankings".to_string(),
            author_search: "author_browser/author_search".to_string(),
            author_articles: "author_browser/author_articles".to_string(),
            author_coreferrers: "author_browser/author_coreferrers".to_string(),
            keyword_search: "hype_cycle_graph/keyword_search".to_string(),
            publication_search: "hype_cycle_graph/publication_search".to_string(),
            graph_data: "hype_cycle_graph/graph_data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    /// Apply `PUBASSIST_API_URL` when set.
    pub fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            self.api.base_url = url;
        }
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.browse.page_size == 0 {
            return Err(Error::Config("browse.page_size must be at least 1".to_string()));
        }
        self.api.parsed_base_url()?;
        Ok(())
    }
}

impl ApiConfig {
    /// Base URL with a trailing slash so endpoint paths join below it.
    pub fn parsed_base_url(&self) -> Result<reqwest::Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        reqwest::Url::parse(&raw)
            .map_err(|e| Error::Config(format!("invalid api.base_url '{}': {}", self.base_url, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.browse.page_size, 10);
        assert_eq!(config.browse.fetch_radius, 1);
        assert_eq!(config.browse.debounce_ms, 500);
        assert_eq!(config.endpoints.graph_data, "hype_cycle_graph/graph_data");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default().with_api_url("https://pubs.example.org/api");
        config.browse.page_size = 25;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[browse]\npage_size = 20\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.browse.page_size, 20);
        assert_eq!(config.browse.most_cited, 3);
        assert_eq!(config.api, ApiConfig::default());

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_zero_page_size_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[browse]\npage_size = 0\n")?;

        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));

        Ok(())
    }

    #[test]
    fn test_base_url_gets_trailing_slash() -> Result<()> {
        let config = Config::default().with_api_url("http://host:9000/pubs");
        let url = config.api.parsed_base_url()?;
        assert_eq!(url.as_str(), "http://host:9000/pubs/");
        assert_eq!(
            url.join("author_browser/author_search").unwrap().as_str(),
            "http://host:9000/pubs/author_browser/author_search"
        );
        Ok(())
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = Config::default().with_api_url("not a url");
        assert!(config.validate().is_err());
    }
}
