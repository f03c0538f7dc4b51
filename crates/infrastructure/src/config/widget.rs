//! Widget behaviour configuration.

use std::time::Duration;

use application::{DEFAULT_COLLAPSED_STEP_COUNT, DEFAULT_MIN_QUERY_CHARS, WidgetSettings};
use domain::{Coordinate, Destination, DomainError, PlaceDetails};
use serde::{Deserialize, Serialize};

use super::MapAppConfig;

/// Where every route ends and what its marker popup shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    /// Longitude in degrees
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Latitude in degrees
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Label shown in the direction panel
    #[serde(default = "default_label")]
    pub label: String,
    /// Popup city
    #[serde(default = "default_city")]
    pub city: String,
    /// Popup state
    #[serde(default = "default_state")]
    pub state: String,
    /// Popup country
    #[serde(default = "default_country")]
    pub country: String,
}

const fn default_longitude() -> f64 {
    Coordinate::kolkata().longitude()
}

const fn default_latitude() -> f64 {
    Coordinate::kolkata().latitude()
}

fn default_label() -> String {
    Destination::kolkata().label
}

fn default_city() -> String {
    Destination::kolkata().details.city
}

fn default_state() -> String {
    Destination::kolkata().details.state
}

fn default_country() -> String {
    Destination::kolkata().details.country
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            longitude: default_longitude(),
            latitude: default_latitude(),
            label: default_label(),
            city: default_city(),
            state: default_state(),
            country: default_country(),
        }
    }
}

impl DestinationConfig {
    /// Build the domain destination
    ///
    /// # Errors
    ///
    /// Returns an error when the coordinate is out of range.
    pub fn to_destination(&self) -> Result<Destination, DomainError> {
        let coordinate = Coordinate::new(self.longitude, self.latitude)
            .map_err(|e| DomainError::InvalidCoordinate(e.to_string()))?;
        Ok(Destination {
            coordinate,
            label: self.label.clone(),
            details: PlaceDetails {
                city: self.city.clone(),
                state: self.state.clone(),
                country: self.country.clone(),
            },
        })
    }
}

/// Interaction tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetAppConfig {
    /// Destination
    #[serde(default)]
    pub destination: DestinationConfig,

    /// Minimum trimmed characters before suggestions are fetched
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Delay between losing focus and hiding suggestions
    #[serde(default = "default_blur_delay_ms")]
    pub blur_delay_ms: u64,

    /// Steps shown while the direction panel is collapsed
    #[serde(default = "default_collapsed_step_count")]
    pub collapsed_step_count: usize,

    /// Geocode the origin again even when it came from a picked suggestion
    #[serde(default)]
    pub revalidate_selected_origin: bool,
}

const fn default_min_query_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

const fn default_blur_delay_ms() -> u64 {
    200
}

const fn default_collapsed_step_count() -> usize {
    DEFAULT_COLLAPSED_STEP_COUNT
}

impl Default for WidgetAppConfig {
    fn default() -> Self {
        Self {
            destination: DestinationConfig::default(),
            min_query_chars: default_min_query_chars(),
            blur_delay_ms: default_blur_delay_ms(),
            collapsed_step_count: default_collapsed_step_count(),
            revalidate_selected_origin: false,
        }
    }
}

impl WidgetAppConfig {
    /// Controller settings for this configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the destination coordinate is out of range.
    pub fn to_widget_settings(&self, map: &MapAppConfig) -> Result<WidgetSettings, DomainError> {
        Ok(WidgetSettings {
            destination: self.destination.to_destination()?,
            blur_delay: Duration::from_millis(self.blur_delay_ms),
            revalidate_selected_origin: self.revalidate_selected_origin,
            initial_style: map.default_style,
        })
    }

    /// Validate the section
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid destination or zero-sized limits.
    pub fn validate(&self) -> Result<(), String> {
        self.destination
            .to_destination()
            .map_err(|e| e.to_string())?;

        if self.destination.label.trim().is_empty() {
            return Err("destination.label must not be empty".to_string());
        }

        if self.min_query_chars == 0 {
            return Err("min_query_chars must be greater than 0".to_string());
        }

        if self.collapsed_step_count == 0 {
            return Err("collapsed_step_count must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_destination_is_kolkata() {
        let destination = DestinationConfig::default().to_destination().unwrap();
        assert_eq!(destination, Destination::kolkata());
    }

    #[test]
    fn out_of_range_destination_rejected() {
        let config = WidgetAppConfig {
            destination: DestinationConfig {
                longitude: 200.0,
                ..DestinationConfig::default()
            },
            ..WidgetAppConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(config.to_widget_settings(&MapAppConfig::default()).is_err());
    }

    #[test]
    fn zero_limits_rejected() {
        let no_chars = WidgetAppConfig {
            min_query_chars: 0,
            ..WidgetAppConfig::default()
        };
        assert!(no_chars.validate().is_err());

        let no_steps = WidgetAppConfig {
            collapsed_step_count: 0,
            ..WidgetAppConfig::default()
        };
        assert!(no_steps.validate().is_err());
    }

    #[test]
    fn settings_take_style_from_map_section() {
        let map = MapAppConfig {
            default_style: domain::MapStyle::Satellite,
            ..MapAppConfig::default()
        };
        let settings = WidgetAppConfig::default().to_widget_settings(&map).unwrap();
        assert_eq!(settings.initial_style, domain::MapStyle::Satellite);
    }
}
