//! Mapbox integration for the map widget
//!
//! Provides place search via the [Mapbox Geocoding API](https://docs.mapbox.com/api/search/geocoding/)
//! and routing via the [Mapbox Directions API](https://docs.mapbox.com/api/navigation/directions/).
//!
//! # Architecture
//!
//! The crate follows the client-trait pattern used by the other integration crates.
//! [`GeocodingClient`] covers autocomplete suggestions and single best-match
//! lookups, implemented by [`MapboxGeocodingClient`]. [`DirectionsClient`] requests
//! routes between two coordinates, implemented by [`MapboxDirectionsClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::{Coordinate, TravelMode};
//! use integration_mapbox::{DirectionsClient, MapboxConfig, MapboxDirectionsClient};
//!
//! let config = MapboxConfig::new("pk.my-token");
//! let client = MapboxDirectionsClient::new(&config)?;
//!
//! let response = client
//!     .directions(TravelMode::Driving, Coordinate::new(88.4172, 22.5867)?, Coordinate::kolkata())
//!     .await?;
//! ```

mod config;
mod directions;
mod error;
mod geocoding;
mod models;

pub use config::MapboxConfig;
pub use directions::{DirectionsClient, MapboxDirectionsClient};
pub use error::MapboxError;
pub use geocoding::{GeocodingClient, MapboxGeocodingClient};
pub use models::{DirectionsResponse, DirectionsRoute, Place};
