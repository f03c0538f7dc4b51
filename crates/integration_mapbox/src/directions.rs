//! Mapbox directions client
//!
//! Requests turn-by-turn routes between two coordinates from the
//! [Mapbox Directions API](https://docs.mapbox.com/api/navigation/directions/)
//! with step instructions and GeoJSON geometry.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Coordinate, TravelMode};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::MapboxConfig;
use crate::error::MapboxError;
use crate::models::{DirectionsResponse, RawDirectionsResponse};

/// Trait for directions clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Routes from `origin` to `destination` for the given travel mode
    async fn directions(
        &self,
        mode: TravelMode,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsResponse, MapboxError>;
}

/// Mapbox-based directions client
#[derive(Debug)]
pub struct MapboxDirectionsClient {
    client: Client,
    config: MapboxConfig,
}

impl MapboxDirectionsClient {
    /// Create a new Mapbox directions client
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

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Mapbox routing profile for a travel mode
    const fn profile(mode: TravelMode) -> &'static str {
        match mode {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Cycling => "cycling",
        }
    }

    /// `lon,lat;lon,lat` waypoint list
    fn waypoints(origin: Coordinate, destination: Coordinate) -> String {
        format!(
            "{},{};{},{}",
            origin.longitude(),
            origin.latitude(),
            destination.longitude(),
            destination.latitude()
        )
    }
}

/// Parse a directions response body
///
/// A non-`Ok` code such as `NoRoute` is not an error here; it comes back as a
/// response without routes.
fn parse_directions_response(body: &str) -> Result<DirectionsResponse, MapboxError> {
    let raw: RawDirectionsResponse =
        serde_json::from_str(body).map_err(|e| MapboxError::ParseError(e.to_string()))?;

    if raw.code != "Ok" {
        warn!(code = %raw.code, "Directions returned no usable route");
        return Ok(DirectionsResponse {
            code: raw.code,
            routes: Vec::new(),
        });
    }

    let routes = raw
        .routes
        .into_iter()
        .map(|route| route.into_route())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DirectionsResponse {
        code: raw.code,
        routes,
    })
}

#[async_trait]
impl DirectionsClient for MapboxDirectionsClient {
    #[instrument(skip(self))]
    async fn directions(
        &self,
        mode: TravelMode,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsResponse, MapboxError> {
        let url = self.config.endpoint(&[
            "directions",
            "v5",
            "mapbox",
            Self::profile(mode),
            &Self::waypoints(origin, destination),
        ])?;

        let params = [
            ("steps", "true"),
            ("geometries", "geojson"),
            ("access_token", self.config.access_token.as_str()),
        ];

        debug!(url = %url.path(), "Directions request");

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

        let result = parse_directions_response(&body)?;
        debug!(code = %result.code, routes = result.routes.len(), "Directions received");
        Ok(result)
    }
}
