//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports: Mapbox-backed geocoding and directions,
//! SQLite preference storage and a headless scene renderer. Also home to the
//! configuration, logging setup and the wiring of a ready-to-use controller.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod rendering;
pub mod telemetry;
pub mod wiring;

pub use adapters::{MapboxDirectionsAdapter, MapboxGeocodingAdapter};
pub use config::{
    AppConfig, DatabaseConfig, DestinationConfig, LogFormat, MapAppConfig, MapboxAppConfig,
    TelemetryAppConfig, WidgetAppConfig,
};
pub use persistence::{
    ConnectionPool, DatabaseError, InMemoryPreferenceStore, SqlitePreferenceStore, create_pool,
};
pub use rendering::{MapScene, MarkerKind, SceneMapRenderer};
pub use telemetry::{TelemetryError, init_telemetry};
pub use wiring::{WidgetServices, build_controller, open_preference_store};
