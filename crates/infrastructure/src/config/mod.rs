//! Application configuration
//!
//! Split into focused sub-modules:
//! - `mapbox`: geocoding and directions service settings
//! - `widget`: destination and interaction tuning
//! - `map`: base map and camera settings
//! - `database`: SQLite preference storage
//! - `telemetry`: log filter and output format

mod database;
mod map;
mod mapbox;
mod telemetry;
mod widget;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use database::DatabaseConfig;
pub use map::MapAppConfig;
pub use mapbox::MapboxAppConfig;
pub use telemetry::{LogFormat, TelemetryAppConfig};
pub use widget::{DestinationConfig, WidgetAppConfig};

/// Prefix of environment variable overrides (e.g. `MAPWIDGET_MAPBOX__TIMEOUT_SECS`)
pub const ENV_PREFIX: &str = "MAPWIDGET";

/// Conventional variable holding the Mapbox token, used when none is configured
pub const ACCESS_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mapbox service configuration
    #[serde(default)]
    pub mapbox: MapboxAppConfig,

    /// Widget behaviour
    #[serde(default)]
    pub widget: WidgetAppConfig,

    /// Map surface
    #[serde(default)]
    pub map: MapAppConfig,

    /// Preference database
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file (extension optional, file optional)
    /// with environment overrides on top
    pub fn load_from(file: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            // e.g. MAPWIDGET_MAPBOX__BASE_URL, MAPWIDGET_WIDGET__BLUR_DELAY_MS
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config
            .mapbox
            .fill_access_token(std::env::var(ACCESS_TOKEN_ENV).ok());

        debug!(file, "Configuration loaded");
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first problem found, prefixed with its section name.
    pub fn validate(&self) -> Result<(), String> {
        self.mapbox.validate().map_err(|e| format!("mapbox: {e}"))?;
        self.widget.validate().map_err(|e| format!("widget: {e}"))?;
        self.map.validate().map_err(|e| format!("map: {e}"))?;
        self.database
            .validate()
            .map_err(|e| format!("database: {e}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use domain::MapStyle;
    use secrecy::ExposeSecret;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_sections() {
        let config = AppConfig::default();
        assert_eq!(config.mapbox.base_url, "https://api.mapbox.com");
        assert_eq!(config.widget.min_query_chars, 3);
        assert_eq!(config.map.fit_padding_px, 50);
        assert_eq!(config.database.path, "map-widget.db");
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
    }

    #[test]
    fn defaults_fail_validation_without_token() {
        let err = AppConfig::default().validate().unwrap_err();
        assert!(err.starts_with("mapbox:"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = AppConfig::load_from("/nonexistent/map-widget-config").unwrap();
        assert_eq!(config.widget.collapsed_step_count, 4);
        assert_eq!(config.map.default_style, MapStyle::Streets);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_config(
            r#"
            [mapbox]
            access_token = "pk.from-file"
            cache_ttl_minutes = 0

            [widget]
            blur_delay_ms = 350
            revalidate_selected_origin = true

            [map]
            default_style = "satellite"

            [telemetry]
            log_format = "json"
            "#,
        );

        let config = AppConfig::load_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            config
                .mapbox
                .access_token
                .as_ref()
                .map(|t| t.expose_secret().to_string()),
            Some("pk.from-file".to_string())
        );
        assert_eq!(config.mapbox.cache_ttl_minutes, 0);
        assert_eq!(config.widget.blur_delay_ms, 350);
        assert!(config.widget.revalidate_selected_origin);
        assert_eq!(config.map.default_style, MapStyle::Satellite);
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_destination_is_reported_by_section() {
        let file = write_config(
            r#"
            [mapbox]
            access_token = "pk.abc"

            [widget.destination]
            latitude = 123.0
            "#,
        );

        let config = AppConfig::load_from(file.path().to_str().unwrap()).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("widget:"), "{err}");
    }

    #[test]
    fn serialized_config_never_contains_token() {
        let mut config = AppConfig::default();
        config.mapbox.fill_access_token(Some("pk.very-secret".into()));

        let rendered = toml::to_string(&config).unwrap();
        assert!(!rendered.contains("pk.very-secret"));
        assert!(rendered.contains("[mapbox]"));

        let debug = format!("{config:?}");
        assert!(!debug.contains("pk.very-secret"));
    }

    #[test]
    fn widget_settings_from_defaults() {
        let settings = AppConfig::default()
            .widget
            .to_widget_settings(&MapAppConfig::default())
            .unwrap();
        assert_eq!(settings.destination.label, "Kolkata, West Bengal, India");
        assert_eq!(settings.blur_delay, std::time::Duration::from_millis(200));
        assert_eq!(settings.initial_style, MapStyle::Streets);
        assert!(!settings.revalidate_selected_origin);
    }
}
