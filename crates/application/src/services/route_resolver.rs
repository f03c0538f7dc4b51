//! Route resolver
//!
//! Resolves origin text to a coordinate with a single forward geocode and
//! requests a route from that coordinate to the destination. The resolver
//! holds no state of its own; a failure at any stage leaves whatever the
//! caller is displaying untouched.

use std::sync::Arc;

use domain::{Coordinate, PlaceSuggestion, Route, TravelMode};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{DirectionsPort, GeocodingPort};

/// Geocoding plus directions
pub struct RouteResolver {
    geocoding: Arc<dyn GeocodingPort>,
    directions: Arc<dyn DirectionsPort>,
}

impl std::fmt::Debug for RouteResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteResolver").finish_non_exhaustive()
    }
}

impl RouteResolver {
    /// Create a resolver
    pub fn new(geocoding: Arc<dyn GeocodingPort>, directions: Arc<dyn DirectionsPort>) -> Self {
        Self {
            geocoding,
            directions,
        }
    }

    /// Best match for free-form origin text
    ///
    /// # Errors
    ///
    /// Returns `OriginNotFound` when nothing matches, or the geocoder's error.
    #[instrument(skip(self))]
    pub async fn resolve_origin(&self, text: &str) -> Result<PlaceSuggestion, ApplicationError> {
        let text = text.trim();
        match self.geocoding.forward_geocode(text).await? {
            Some(place) => {
                debug!(origin = %place.display_name, coordinate = %place.coordinate, "Origin resolved");
                Ok(place)
            },
            None => {
                warn!(%text, "No geocoding match for origin");
                Err(ApplicationError::OriginNotFound(text.to_string()))
            },
        }
    }

    /// Best route from `origin` to `destination`
    ///
    /// # Errors
    ///
    /// Returns `NoRouteFound` when the service has no candidate, or the
    /// directions service's error.
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<Route, ApplicationError> {
        let route = self
            .directions
            .routes(origin, destination, mode)
            .await?
            .into_iter()
            .next()
            .ok_or(ApplicationError::NoRouteFound)?;

        info!(
            mode = %mode,
            distance_m = route.distance_meters,
            duration_s = route.duration_seconds,
            steps = route.step_count(),
            "Route resolved"
        );
        Ok(route)
    }
}
