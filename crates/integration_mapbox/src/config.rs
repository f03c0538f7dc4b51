//! Mapbox service configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MapboxError;

/// Configuration for the Mapbox geocoding and directions clients
#[derive(Clone, Serialize, Deserialize)]
pub struct MapboxConfig {
    /// Base URL for the Mapbox APIs
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Public access token sent with every request
    #[serde(default, skip_serializing)]
    pub access_token: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of autocomplete suggestions (Mapbox caps this at 10)
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u8,

    /// Place types to search for
    #[serde(default = "default_place_types")]
    pub place_types: String,

    /// Cache TTL in minutes for geocoding results (0 to disable caching)
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

fn default_place_types() -> String {
    "place".to_string()
}

const fn default_cache_ttl_minutes() -> u32 {
    60
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: String::new(),
            timeout_secs: default_timeout_secs(),
            suggestion_limit: default_suggestion_limit(),
            place_types: default_place_types(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("suggestion_limit", &self.suggestion_limit)
            .field("place_types", &self.place_types)
            .field("cache_ttl_minutes", &self.cache_ttl_minutes)
            .finish()
    }
}

impl MapboxConfig {
    /// Default configuration with the given access token
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: "pk.test-token".to_string(),
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Build an API URL below `base_url`, percent-encoding each path segment
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<url::Url, MapboxError> {
        let mut url = url::Url::parse(&self.base_url)
            .map_err(|e| MapboxError::ConfigurationError(format!("Invalid base_url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| {
                MapboxError::ConfigurationError("base_url cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.access_token.trim().is_empty() {
            return Err("access_token must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.suggestion_limit == 0 {
            return Err("suggestion_limit must be greater than 0".to_string());
        }

        if self.suggestion_limit > 10 {
            return Err("suggestion_limit must be 10 or less".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapboxConfig::default();
        assert_eq!(config.base_url, "https://api.mapbox.com");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.place_types, "place");
        assert!(config.caching_enabled());
    }

    #[test]
    fn test_testing_config() {
        let config = MapboxConfig::for_testing("http://127.0.0.1:9");
        assert_eq!(config.base_url, "http://127.0.0.1:9");
        assert!(!config.caching_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_requires_token() {
        let config = MapboxConfig::default();
        assert!(config.validate().is_err());
        assert!(MapboxConfig::new("pk.abc").validate().is_ok());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = MapboxConfig {
            timeout_secs: 0,
            ..MapboxConfig::new("pk.abc")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_suggestion_limit() {
        let zero = MapboxConfig {
            suggestion_limit: 0,
            ..MapboxConfig::new("pk.abc")
        };
        assert!(zero.validate().is_err());

        let too_many = MapboxConfig {
            suggestion_limit: 11,
            ..MapboxConfig::new("pk.abc")
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let config = MapboxConfig::for_testing("http://localhost:8080/");
        let url = config
            .endpoint(&["geocoding", "v5", "mapbox.places", "Salt Lake/Sector V.json"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/geocoding/v5/mapbox.places/Salt%20Lake%2FSector%20V.json"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = MapboxConfig::for_testing("http://localhost:8080/proxy");
        let url = config.endpoint(&["directions", "v5"]).unwrap();
        assert_eq!(url.path(), "/proxy/directions/v5");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        let config = MapboxConfig::for_testing("not a url");
        assert!(matches!(
            config.endpoint(&["x"]),
            Err(MapboxError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = MapboxConfig::new("pk.super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_token_is_not_serialized() {
        let config = MapboxConfig::new("pk.super-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
    }
}
