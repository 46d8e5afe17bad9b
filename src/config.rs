//! Host configuration: TOML file plus environment overrides.
//!
//! The environment is consulted only here, once, through
//! [`VerityConfig::apply_env_overrides`]. Everything below this boundary
//! receives an explicit [`SearchConfig`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use verity_search::SearchConfig;

use crate::error::{Result, VerityError};

/// Environment variable overriding `search.base_url`.
pub const ENV_SEARXNG_URL: &str = "SEARXNG_URL";

/// Environment variable overriding `search.snippet_count`.
pub const ENV_SNIPPET_COUNT: &str = "VERITY_SNIPPET_COUNT";

/// Top-level configuration for the verity host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerityConfig {
    /// SearXNG client settings.
    pub search: SearchConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "verity=info,verity_search=info".to_owned(),
        }
    }
}

impl VerityConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| VerityError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| VerityError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if given, else the default path if it exists, else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns the default config file path: `<config dir>/verity/config.toml`.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp/verity-config"))
            .join("verity")
            .join("config.toml")
    }

    /// Apply [`ENV_SEARXNG_URL`] and [`ENV_SNIPPET_COUNT`] via `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`VerityError::Config`] if the snippet count is not a number.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_SEARXNG_URL).filter(|v| !v.trim().is_empty()) {
            self.search.base_url = url.trim().to_owned();
        }
        if let Some(raw) = lookup(ENV_SNIPPET_COUNT) {
            self.search.snippet_count = raw.trim().parse().map_err(|e| {
                VerityError::Config(format!("{ENV_SNIPPET_COUNT}='{raw}' is not a count: {e}"))
            })?;
        }
        Ok(())
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`VerityConfig::apply_env_overrides`].
    pub fn apply_process_env(&mut self) -> Result<()> {
        self.apply_env_overrides(|key| std::env::var(key).ok())
    }

    /// Validate the search section.
    ///
    /// # Errors
    ///
    /// Returns the search crate's config error.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = VerityConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.base_url, "http://localhost:8080");
        assert!(config.logging.filter.contains("verity_search"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = VerityConfig::default();
        config.search.base_url = "http://searx.lan:8888".into();
        config.search.snippet_count = 6;
        config.search.max_concurrent_requests = Some(4);
        config.logging.filter = "debug".into();

        config.save_to_file(&path).unwrap();
        assert!(path.exists());

        let loaded = VerityConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nbase_url = \"http://10.1.1.1:8080\"\n").unwrap();

        let loaded = VerityConfig::from_file(&path).unwrap();
        assert_eq!(loaded.search.base_url, "http://10.1.1.1:8080");
        assert_eq!(loaded.search.snippet_count, 10);
        assert_eq!(loaded.logging, LoggingConfig::default());
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = VerityConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(VerityError::Io(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = VerityConfig::from_file(&path);
        assert!(matches!(result, Err(VerityError::Config(_))));
    }

    #[test]
    fn load_with_explicit_path_reads_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nlanguage = \"fr\"\n").unwrap();

        let loaded = VerityConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.search.language, "fr");
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = VerityConfig::default_config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.ends_with("config.toml"));
        assert!(path_str.contains("verity"));
    }

    #[test]
    fn env_overrides_url_and_snippet_count() {
        let mut config = VerityConfig::default();
        config
            .apply_env_overrides(env(&[
                ("SEARXNG_URL", " http://searx:8888/ "),
                ("VERITY_SNIPPET_COUNT", "4"),
            ]))
            .unwrap();
        assert_eq!(config.search.base_url, "http://searx:8888/");
        assert_eq!(config.search.base_url(), "http://searx:8888");
        assert_eq!(config.search.snippet_count, 4);
    }

    #[test]
    fn absent_or_blank_env_keeps_file_values() {
        let mut config = VerityConfig::default();
        config.search.base_url = "http://from-file:8080".into();
        config.apply_env_overrides(env(&[("SEARXNG_URL", "  ")])).unwrap();
        assert_eq!(config.search.base_url, "http://from-file:8080");
        assert_eq!(config.search.snippet_count, 10);
    }

    #[test]
    fn non_numeric_snippet_count_rejected() {
        let mut config = VerityConfig::default();
        let err = config
            .apply_env_overrides(env(&[("VERITY_SNIPPET_COUNT", "ten")]))
            .unwrap_err();
        assert!(err.to_string().contains("VERITY_SNIPPET_COUNT"));
    }

    #[test]
    fn validate_surfaces_search_errors() {
        let mut config = VerityConfig::default();
        config.search.snippet_count = 1;
        assert!(config.validate().is_err());
    }
}
