// src/config.rs
//
// Static client configuration
//
// Defaults target the public TMDB v3 API. Every field can be overridden
// from the environment; nothing is read from disk.

use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";
pub const DEFAULT_LANGUAGE: &str = "en-US";

pub const ENV_API_TOKEN: &str = "TMDB_API_TOKEN";
pub const ENV_BASE_URL: &str = "TMDB_BASE_URL";
pub const ENV_IMAGE_BASE_URL: &str = "TMDB_IMAGE_BASE_URL";
pub const ENV_LANGUAGE: &str = "TMDB_LANGUAGE";

/// Remote catalog client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub image_base_url: String,
    /// v4 read access token sent as a Bearer header
    pub api_token: Option<String>,
    pub language: String,
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_token: None,
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: 30,
        }
    }
}

impl CatalogConfig {
    /// Build from process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            base_url: non_empty(ENV_BASE_URL)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            image_base_url: non_empty(ENV_IMAGE_BASE_URL)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.image_base_url),
            api_token: non_empty(ENV_API_TOKEN),
            language: non_empty(ENV_LANGUAGE).unwrap_or(defaults.language),
            timeout_secs: defaults.timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Fails when no API token is configured
    pub fn require_token(&self) -> AppResult<&str> {
        self.api_token.as_deref().ok_or_else(|| {
            AppError::Config(format!("{} is not set", ENV_API_TOKEN))
        })
    }

    /// Absolute poster URL, or the placeholder image when the movie has none
    pub fn poster_url(&self, poster_path: Option<&str>) -> String {
        match poster_path {
            Some(path) if !path.is_empty() => format!("{}{}", self.image_base_url, path),
            _ => PLACEHOLDER_POSTER_URL.to_string(),
        }
    }
}
