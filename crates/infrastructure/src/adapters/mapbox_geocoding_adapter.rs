//! Geocoding adapter - Implements GeocodingPort using integration_mapbox

use std::sync::Arc;

use application::{ApplicationError, GeocodingPort};
use async_trait::async_trait;
use domain::PlaceSuggestion;
use integration_mapbox::{GeocodingClient, MapboxConfig, MapboxError, MapboxGeocodingClient, Place};
use tracing::{debug, instrument};

use super::map_mapbox_error;

/// Adapter for place lookups against the Mapbox geocoding API
pub struct MapboxGeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for MapboxGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxGeocodingAdapter")
            .field("client", &"GeocodingClient")
            .finish()
    }
}

impl MapboxGeocodingAdapter {
    /// Create an adapter backed by a Mapbox client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &MapboxConfig) -> Result<Self, ApplicationError> {
        let client = MapboxGeocodingClient::new(config).map_err(map_mapbox_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    fn to_suggestion(place: Place) -> PlaceSuggestion {
        PlaceSuggestion::new(place.id, place.place_name, place.center)
    }
}

#[async_trait]
impl GeocodingPort for MapboxGeocodingAdapter {
    #[instrument(skip(self))]
    async fn suggest(&self, query: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        let places = self.client.suggest(query).await.map_err(map_mapbox_error)?;
        debug!(count = places.len(), "Retrieved place suggestions");
        Ok(places.into_iter().map(Self::to_suggestion).collect())
    }

    #[instrument(skip(self))]
    async fn forward_geocode(&self, query: &str) -> Result<Option<PlaceSuggestion>, ApplicationError> {
        match self.client.forward_geocode(query).await {
            Ok(place) => Ok(place.map(Self::to_suggestion)),
            // Unsearchable text cannot match anything
            Err(MapboxError::InvalidInput(e)) => {
                debug!(error = %e, "Origin text rejected by geocoder");
                Ok(None)
            },
            Err(e) => Err(map_mapbox_error(e)),
        }
    }
}
