//! Map surface configuration.

use application::DEFAULT_FIT_PADDING_PX;
use domain::{MapStyle, Viewport};
use serde::{Deserialize, Serialize};

/// Base map and camera settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapAppConfig {
    /// Base map shown at startup
    #[serde(default)]
    pub default_style: MapStyle,

    /// Zoom of the initial camera centred on the destination
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f64,

    /// Padding kept around a fitted route, in pixels
    #[serde(default = "default_fit_padding_px")]
    pub fit_padding_px: u32,

    /// Map surface width in pixels
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    /// Map surface height in pixels
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,

    /// Closest zoom a route fit may use
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
}

const fn default_initial_zoom() -> f64 {
    12.0
}

const fn default_fit_padding_px() -> u32 {
    DEFAULT_FIT_PADDING_PX
}

const fn default_viewport_width() -> u32 {
    1024
}

const fn default_viewport_height() -> u32 {
    768
}

const fn default_max_zoom() -> f64 {
    18.0
}

impl Default for MapAppConfig {
    fn default() -> Self {
        Self {
            default_style: MapStyle::default(),
            initial_zoom: default_initial_zoom(),
            fit_padding_px: default_fit_padding_px(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            max_zoom: default_max_zoom(),
        }
    }
}

impl MapAppConfig {
    /// Size of the map surface
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }

    /// Validate the section
    ///
    /// # Errors
    ///
    /// Returns an error for an empty viewport or zoom levels outside 0..=22.
    pub fn validate(&self) -> Result<(), String> {
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err("viewport must be at least 1x1 pixels".to_string());
        }

        if !(0.0..=22.0).contains(&self.max_zoom) {
            return Err("max_zoom must be between 0 and 22".to_string());
        }

        if !(0.0..=self.max_zoom).contains(&self.initial_zoom) {
            return Err("initial_zoom must be between 0 and max_zoom".to_string());
        }

        Ok(())
    }
}
