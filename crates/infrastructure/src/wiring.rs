//! Assembly of a widget controller from configuration

use std::sync::Arc;

use application::{
    ApplicationError, DirectionPanel, DirectionsPort, GeocodingPort, PreferenceStorePort,
    RouteResolver, SuggestionProvider, UserPreferences, WidgetController,
};
use tracing::info;

use crate::adapters::{MapboxDirectionsAdapter, MapboxGeocodingAdapter};
use crate::config::{AppConfig, DatabaseConfig, MapboxAppConfig};
use crate::persistence::{DatabaseError, InMemoryPreferenceStore, SqlitePreferenceStore, create_pool};

/// External services the widget talks to
#[derive(Clone)]
pub struct WidgetServices {
    /// Place suggestions and forward geocoding of typed origins
    pub geocoding: Arc<dyn GeocodingPort>,
    /// Route lookups between origin and destination
    pub directions: Arc<dyn DirectionsPort>,
}

impl std::fmt::Debug for WidgetServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetServices").finish_non_exhaustive()
    }
}

impl WidgetServices {
    /// Mapbox-backed services
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client fails to initialize.
    pub fn mapbox(config: &MapboxAppConfig) -> Result<Self, ApplicationError> {
        let client_config = config.to_mapbox_config();
        Ok(Self {
            geocoding: Arc::new(MapboxGeocodingAdapter::new(&client_config)?),
            directions: Arc::new(MapboxDirectionsAdapter::new(&client_config)?),
        })
    }
}

/// Preference store for `config`, or an in-memory one when `ephemeral`
pub fn open_preference_store(
    config: &DatabaseConfig,
    ephemeral: bool,
) -> Result<Arc<dyn PreferenceStorePort>, DatabaseError> {
    if ephemeral {
        info!("Using in-memory preference store");
        return Ok(Arc::new(InMemoryPreferenceStore::new()));
    }
    let pool = create_pool(config)?;
    Ok(Arc::new(SqlitePreferenceStore::new(Arc::new(pool))))
}

/// Load preferences and build a controller for `config`
///
/// # Errors
///
/// Returns a configuration error when the widget section is invalid.
pub async fn build_controller(
    config: &AppConfig,
    services: WidgetServices,
    store: Arc<dyn PreferenceStorePort>,
) -> Result<WidgetController, ApplicationError> {
    let settings = config
        .widget
        .to_widget_settings(&config.map)
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

    let suggestions = SuggestionProvider::new(Arc::clone(&services.geocoding))
        .with_min_query_chars(config.widget.min_query_chars)
        .with_max_suggestions(usize::from(config.mapbox.suggestion_limit));
    let resolver = RouteResolver::new(services.geocoding, services.directions);
    let preferences = UserPreferences::load(store).await;
    let panel = DirectionPanel::new(config.widget.collapsed_step_count);

    Ok(WidgetController::new(
        suggestions,
        resolver,
        preferences,
        panel,
        settings,
    ))
}
