//! Mapbox service configuration.

use integration_mapbox::MapboxConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Mapbox geocoding and directions settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapboxAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Access token (falls back to `MAPBOX_ACCESS_TOKEN`)
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of autocomplete suggestions requested
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u8,

    /// Geocoding result TTL in minutes (0 disables the cache)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u32,
}

fn default_base_url() -> String {
    "https://api.mapbox.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_suggestion_limit() -> u8 {
    5
}

const fn default_cache_ttl_minutes() -> u32 {
    60
}

impl Default for MapboxAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            suggestion_limit: default_suggestion_limit(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl MapboxAppConfig {
    /// Use `token` unless a non-empty token is already configured
    pub fn fill_access_token(&mut self, token: Option<String>) {
        let configured = self
            .access_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().trim().is_empty());
        if configured {
            return;
        }
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.access_token = Some(SecretString::from(token));
        }
    }

    /// Convert to the integration crate's client configuration
    #[must_use]
    pub fn to_mapbox_config(&self) -> MapboxConfig {
        MapboxConfig {
            base_url: self.base_url.clone(),
            access_token: self
                .access_token
                .as_ref()
                .map(|t| t.expose_secret().to_string())
                .unwrap_or_default(),
            timeout_secs: self.timeout_secs,
            suggestion_limit: self.suggestion_limit,
            cache_ttl_minutes: self.cache_ttl_minutes,
            ..MapboxConfig::default()
        }
    }

    /// Validate the section
    ///
    /// # Errors
    ///
    /// Returns an error when the token is missing or a limit is out of range.
    pub fn validate(&self) -> Result<(), String> {
        self.to_mapbox_config().validate()
    }
}
