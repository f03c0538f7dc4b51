//! Directions adapter - Implements DirectionsPort using integration_mapbox

use std::sync::Arc;

use application::{ApplicationError, DirectionsPort};
use async_trait::async_trait;
use domain::{Coordinate, Route, RouteStep, TravelMode, WeightClass};
use integration_mapbox::{
    DirectionsClient, DirectionsRoute, MapboxConfig, MapboxDirectionsClient, MapboxError,
};
use tracing::{debug, instrument};

use super::map_mapbox_error;

/// Adapter for route lookups against the Mapbox directions API
pub struct MapboxDirectionsAdapter {
    client: Arc<dyn DirectionsClient>,
}

impl std::fmt::Debug for MapboxDirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxDirectionsAdapter")
            .field("client", &"DirectionsClient")
            .finish()
    }
}

impl MapboxDirectionsAdapter {
    /// Create an adapter backed by a Mapbox client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &MapboxConfig) -> Result<Self, ApplicationError> {
        let client = MapboxDirectionsClient::new(config).map_err(map_mapbox_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn DirectionsClient>) -> Self {
        Self { client }
    }

    fn to_route(route: DirectionsRoute) -> Route {
        Route::new(
            route.distance,
            route.duration,
            route.geometry,
            route.instructions.into_iter().map(RouteStep::new).collect(),
            WeightClass::from_weight_name(&route.weight_name),
        )
    }
}

#[async_trait]
impl DirectionsPort for MapboxDirectionsAdapter {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination, mode = %mode))]
    async fn routes(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<Vec<Route>, ApplicationError> {
        let response = match self.client.directions(mode, origin, destination).await {
            Ok(response) => response,
            // Unroutable coordinates, e.g. across an ocean or too far apart
            Err(MapboxError::InvalidInput(e)) => {
                debug!(error = %e, "Directions request rejected");
                return Err(ApplicationError::NoRouteFound);
            },
            Err(e) => return Err(map_mapbox_error(e)),
        };

        debug!(code = %response.code, count = response.routes.len(), "Retrieved routes");
        Ok(response.routes.into_iter().map(Self::to_route).collect())
    }
}

#[cfg(test)]
mod tests {
    use integration_mapbox::DirectionsResponse;

    use super::*;

    #[derive(Debug)]
    struct FixedClient {
        result: fn() -> Result<DirectionsResponse, MapboxError>,
    }

    #[async_trait]
    impl DirectionsClient for FixedClient {
        async fn directions(
            &self,
            _mode: TravelMode,
            _origin: Coordinate,
            _destination: Coordinate,
        ) -> Result<DirectionsResponse, MapboxError> {
            (self.result)()
        }
    }

    fn walking_response() -> Result<DirectionsResponse, MapboxError> {
        Ok(DirectionsResponse {
            code: "Ok".into(),
            routes: vec![DirectionsRoute {
                distance: 6_120.5,
                duration: 5_400.0,
                geometry: vec![Coordinate::new(88.4172, 22.5867).unwrap(), Coordinate::kolkata()],
                instructions: vec![
                    "Walk west on Sector V Road".into(),
                    "Turn left onto EM Bypass".into(),
                    "You have arrived at your destination".into(),
                ],
                weight_name: "pedestrian".into(),
            }],
        })
    }

    fn adapter(result: fn() -> Result<DirectionsResponse, MapboxError>) -> MapboxDirectionsAdapter {
        MapboxDirectionsAdapter::with_client(Arc::new(FixedClient { result }))
    }

    async fn routes(adapter: &MapboxDirectionsAdapter) -> Result<Vec<Route>, ApplicationError> {
        adapter
            .routes(
                Coordinate::new(88.4172, 22.5867).unwrap(),
                Coordinate::kolkata(),
                TravelMode::Walking,
            )
            .await
    }

    #[tokio::test]
    async fn response_becomes_domain_route() {
        let routes = routes(&adapter(walking_response)).await.unwrap();
        assert_eq!(routes.len(), 1);

        let route = &routes[0];
        assert_eq!(route.weight_class, WeightClass::Walkable);
        assert_eq!(route.duration_minutes(), 90);
        assert_eq!(route.step_count(), 3);
        assert_eq!(route.steps[1].instruction, "Turn left onto EM Bypass");
        assert!(route.bounds().is_some());
    }

    #[tokio::test]
    async fn no_candidates_is_empty_list() {
        let result = routes(&adapter(|| {
            Ok(DirectionsResponse {
                code: "NoRoute".into(),
                routes: Vec::new(),
            })
        }))
        .await;
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_coordinates_mean_no_route() {
        let result = routes(&adapter(|| {
            Err(MapboxError::InvalidInput("Route exceeds maximum distance limitation".into()))
        }))
        .await;
        assert!(matches!(result, Err(ApplicationError::NoRouteFound)));
    }

    #[tokio::test]
    async fn outage_is_retryable() {
        let result = routes(&adapter(|| {
            Err(MapboxError::RequestFailed("HTTP 503".into()))
        }))
        .await;
        let err = result.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(err.user_message(), "The map service is unavailable, please try again");
    }
}
