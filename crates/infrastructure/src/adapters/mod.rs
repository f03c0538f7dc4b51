//! Adapters implementing application ports on top of the Mapbox integration

mod mapbox_directions_adapter;
mod mapbox_geocoding_adapter;

use application::ApplicationError;
use integration_mapbox::MapboxError;

pub use mapbox_directions_adapter::MapboxDirectionsAdapter;
pub use mapbox_geocoding_adapter::MapboxGeocodingAdapter;

/// Map a Mapbox client error to an application error
///
/// `InvalidInput` is left to the caller since its meaning depends on the
/// endpoint.
fn map_mapbox_error(err: MapboxError) -> ApplicationError {
    match err {
        MapboxError::ConnectionFailed(e) => ApplicationError::Network(e),
        MapboxError::Timeout { timeout_secs } => {
            ApplicationError::Network(format!("timed out after {timeout_secs}s"))
        },
        MapboxError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
        MapboxError::Unauthorized(e) => ApplicationError::NotAuthorized(e),
        MapboxError::ConfigurationError(e) => ApplicationError::Configuration(e),
        MapboxError::RequestFailed(e) | MapboxError::ParseError(e) | MapboxError::InvalidInput(e) => {
            ApplicationError::ExternalService(e)
        },
    }
}
