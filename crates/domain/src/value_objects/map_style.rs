//! Map style presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Base map style shown underneath markers and the route line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    /// Street map
    #[default]
    Streets,
    /// Satellite imagery
    Satellite,
}

impl MapStyle {
    /// Style document URL understood by Mapbox GL
    #[must_use]
    pub const fn url(&self) -> &'static str {
        match self {
            Self::Streets => "mapbox://styles/mapbox/streets-v11",
            Self::Satellite => "mapbox://styles/mapbox/satellite-v9",
        }
    }

    /// Caption shown in the style selector
    #[must_use]
    pub const fn caption(&self) -> &'static str {
        match self {
            Self::Streets => "MAP",
            Self::Satellite => "SATELLITE",
        }
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Streets => write!(f, "streets"),
            Self::Satellite => write!(f, "satellite"),
        }
    }
}

impl FromStr for MapStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == Self::Streets.url() {
            return Ok(Self::Streets);
        }
        if s == Self::Satellite.url() {
            return Ok(Self::Satellite);
        }
        match s.to_lowercase().as_str() {
            "streets" | "street" | "map" => Ok(Self::Streets),
            "satellite" => Ok(Self::Satellite),
            other => Err(DomainError::InvalidMapStyle(other.to_string())),
        }
    }
}
