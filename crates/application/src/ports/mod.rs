//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod directions_port;
mod geocoding_port;
mod map_renderer_port;
mod preference_store;

#[cfg(test)]
pub use directions_port::MockDirectionsPort;
pub use directions_port::DirectionsPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use map_renderer_port::MockMapRendererPort;
pub use map_renderer_port::MapRendererPort;
#[cfg(test)]
pub use preference_store::MockPreferenceStorePort;
pub use preference_store::PreferenceStorePort;
