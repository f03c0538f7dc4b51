//! Geocode suggestion provider
//!
//! Turns partially typed origin text into a short ranked list of places.
//! Failures never reach the caller: they are logged and produce an empty list.

use std::sync::Arc;

use domain::PlaceSuggestion;
use tracing::{debug, instrument, warn};

use crate::ports::GeocodingPort;

/// Default minimum number of characters before a lookup is made
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;

/// Default maximum number of candidates returned
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Autocomplete over a [`GeocodingPort`]
pub struct SuggestionProvider {
    geocoding: Arc<dyn GeocodingPort>,
    min_query_chars: usize,
    max_suggestions: usize,
}

impl std::fmt::Debug for SuggestionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionProvider")
            .field("min_query_chars", &self.min_query_chars)
            .field("max_suggestions", &self.max_suggestions)
            .finish_non_exhaustive()
    }
}

impl SuggestionProvider {
    /// Create a provider with the default thresholds
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self {
            geocoding,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Override the minimum query length
    #[must_use]
    pub const fn with_min_query_chars(mut self, min_query_chars: usize) -> Self {
        self.min_query_chars = min_query_chars;
        self
    }

    /// Override the maximum number of candidates
    #[must_use]
    pub const fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Minimum query length in characters
    #[must_use]
    pub const fn min_query_chars(&self) -> usize {
        self.min_query_chars
    }

    /// Whether `query` is long enough to be looked up
    #[must_use]
    pub fn accepts(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.min_query_chars
    }

    /// Ranked candidates for `query`
    ///
    /// Short queries return an empty list without touching the network.
    #[instrument(skip(self))]
    pub async fn suggest(&self, query: &str) -> Vec<PlaceSuggestion> {
        if !self.accepts(query) {
            return Vec::new();
        }

        match self.geocoding.suggest(query.trim()).await {
            Ok(mut suggestions) => {
                suggestions.truncate(self.max_suggestions);
                debug!(count = suggestions.len(), "Suggestions fetched");
                suggestions
            },
            Err(e) => {
                warn!(error = %e, "Suggestion fetch failed");
                Vec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::Coordinate;
    use mockall::predicate::eq;

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockGeocodingPort;

    fn place(i: usize) -> PlaceSuggestion {
        PlaceSuggestion::new(
            format!("place.{i}"),
            format!("Place {i}, India"),
            Coordinate::new(88.0 + i as f64 / 100.0, 22.5).unwrap(),
        )
    }

    #[tokio::test]
    async fn short_queries_make_no_call() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_suggest().never();
        let provider = SuggestionProvider::new(Arc::new(geocoding));

        for query in ["", "b", "bi", "  bi  ", "কল"] {
            assert!(provider.suggest(query).await.is_empty());
        }
    }

    #[tokio::test]
    async fn keeps_upstream_order_and_truncates() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_suggest()
            .with(eq("bidhan"))
            .times(1)
            .returning(|_| Ok((0..8).map(place).collect()));
        let provider = SuggestionProvider::new(Arc::new(geocoding));

        let suggestions = provider.suggest(" bidhan ").await;
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[0].id, "place.0");
        assert_eq!(suggestions[4].id, "place.4");
    }

    #[tokio::test]
    async fn failures_become_empty_list() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_suggest()
            .returning(|_| Err(ApplicationError::Network("connection reset".into())));
        let provider = SuggestionProvider::new(Arc::new(geocoding));

        assert!(provider.suggest("kolkata").await.is_empty());
    }

    #[test]
    fn accepts_counts_characters_not_bytes() {
        let provider = SuggestionProvider::new(Arc::new(MockGeocodingPort::new()));
        assert!(provider.accepts("কলক"));
        assert!(!provider.accepts("কল"));
        assert!(provider.accepts("abc"));
    }

    #[test]
    fn thresholds_are_configurable() {
        let provider = SuggestionProvider::new(Arc::new(MockGeocodingPort::new()))
            .with_min_query_chars(5)
            .with_max_suggestions(2);
        assert_eq!(provider.min_query_chars(), 5);
        assert!(!provider.accepts("kolk"));
    }
}
