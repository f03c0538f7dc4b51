//! Mapbox geocoding client
//!
//! Converts free-form place names to coordinates using the
//! [Mapbox Geocoding API](https://docs.mapbox.com/api/search/geocoding/)
//! (`mapbox.places` endpoint). Supports ranked autocomplete suggestions and
//! single best-match forward geocoding, both restricted to the configured
//! place types.
//!
//! Results are cached per query to avoid repeated lookups while the user is
//! typing.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::MapboxConfig;
use crate::error::MapboxError;
use crate::models::{Place, RawFeatureCollection};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Ranked autocomplete candidates for partially typed text
    async fn suggest(&self, query: &str) -> Result<Vec<Place>, MapboxError>;

    /// Single best match for the given text, `None` when nothing matches
    async fn forward_geocode(&self, query: &str) -> Result<Option<Place>, MapboxError>;
}

/// Which kind of lookup a request is; part of the cache key
#[derive(Debug, Clone, Copy)]
enum LookupKind {
    Autocomplete,
    BestMatch,
}

/// Mapbox-based geocoding client with result caching
#[derive(Debug)]
pub struct MapboxGeocodingClient {
    client: Client,
    config: MapboxConfig,
    cache: Option<Cache<String, Vec<Place>>>,
}

impl MapboxGeocodingClient {
    /// Create a new Mapbox geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &MapboxConfig) -> Result<Self, MapboxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("map-widget/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MapboxError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(Duration::from_secs(u64::from(config.cache_ttl_minutes) * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
        })
    }

    fn cache_key(kind: LookupKind, query: &str) -> String {
        format!("{kind:?}:{}", query.to_lowercase())
    }

    /// Query the places endpoint
    async fn search(&self, query: &str, kind: LookupKind) -> Result<Vec<Place>, MapboxError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MapboxError::InvalidInput(
                "Search query must not be empty".to_string(),
            ));
        }

        let cache_key = Self::cache_key(kind, query);
        if let Some(cache) = &self.cache {
            if let Some(places) = cache.get(&cache_key).await {
                debug!(%query, ?kind, "Geocoding cache hit");
                return Ok(places);
            }
        }

        // A semicolon would be read as a batch separator
        let search_text = query.replace(';', " ");
        let url = self.config.endpoint(&[
            "geocoding",
            "v5",
            "mapbox.places",
            &format!("{search_text}.json"),
        ])?;

        let limit = match kind {
            LookupKind::Autocomplete => self.config.suggestion_limit,
            LookupKind::BestMatch => 1,
        };

        let mut params = vec![
            ("access_token", self.config.access_token.clone()),
            ("types", self.config.place_types.clone()),
            ("limit", limit.to_string()),
        ];
        // Best match leaves the flag to the API default
        if matches!(kind, LookupKind::Autocomplete) {
            params.push(("autocomplete", "true".to_string()));
        }

        debug!(%query, ?kind, "Geocoding query");

        let response = self
            .client
            .get(url)
            .query(&params)
            .send()
            .await
            .map_err(|e| MapboxError::from_send(&e, self.config.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            let body = response.text().await.unwrap_or_default();
            return Err(MapboxError::from_status(status, retry_after, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MapboxError::ParseError(e.to_string()))?;

        let places = Self::parse_features(&body, usize::from(limit))?;

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, places.clone()).await;
        }
        debug!(%query, count = places.len(), "Geocoded query");

        Ok(places)
    }

    /// Parse a feature collection, keeping upstream order and at most `limit` entries
    fn parse_features(body: &str, limit: usize) -> Result<Vec<Place>, MapboxError> {
        let raw: RawFeatureCollection =
            serde_json::from_str(body).map_err(|e| MapboxError::ParseError(e.to_string()))?;

        raw.features
            .into_iter()
            .take(limit)
            .map(|feature| feature.into_place())
            .collect()
    }
}

#[async_trait]
impl GeocodingClient for MapboxGeocodingClient {
    #[instrument(skip(self))]
    async fn suggest(&self, query: &str) -> Result<Vec<Place>, MapboxError> {
        self.search(query, LookupKind::Autocomplete).await
    }

    #[instrument(skip(self))]
    async fn forward_geocode(&self, query: &str) -> Result<Option<Place>, MapboxError> {
        Ok(self
            .search(query, LookupKind::BestMatch)
            .await?
            .into_iter()
            .next())
    }
}
