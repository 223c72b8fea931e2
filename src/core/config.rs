//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::api::DEFAULT_TIMEOUT_MS;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the landing backend, without the `/api` suffix.
    /// Empty means the backend is served from the same origin.
    /// Example: https://api.kavvi.io
    pub backend_url: String,

    /// Request timeout for backend calls
    pub api_timeout_ms: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("BACKEND_URL").ok(),
            std::env::var("API_TIMEOUT_MS").ok(),
        )
    }

    /// Build configuration from raw variable values
    pub fn from_vars(backend_url: Option<String>, api_timeout_ms: Option<String>) -> Self {
        let backend_url = backend_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();

        let api_timeout_ms = api_timeout_ms
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            backend_url,
            api_timeout_ms,
        }
    }

    /// Check if an external backend is configured
    pub fn has_backend(&self) -> bool {
        !self.backend_url.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None);

        assert_eq!(config.backend_url, "");
        assert_eq!(config.api_timeout_ms, 10_000);
        assert!(!config.has_backend());
    }

    #[test]
    fn test_backend_url_is_normalized() {
        let config = Config::from_vars(Some("  https://api.kavvi.io/ ".to_string()), None);

        assert_eq!(config.backend_url, "https://api.kavvi.io");
        assert!(config.has_backend());
    }

    #[test]
    fn test_timeout_parsing() {
        assert_eq!(
            Config::from_vars(None, Some("2500".to_string())).api_timeout_ms,
            2500
        );
        assert_eq!(
            Config::from_vars(None, Some(" 750 ".to_string())).api_timeout_ms,
            750
        );
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        for raw in ["", "abc", "-1", "0", "10s"] {
            assert_eq!(
                Config::from_vars(None, Some(raw.to_string())).api_timeout_ms,
                DEFAULT_TIMEOUT_MS,
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            backend_url: "http://localhost:8000".to_string(),
            api_timeout_ms: 5000,
        };

        assert_eq!(config.clone(), config);
    }
}
