//! Mapbox data models
//!
//! Typed representations of geocoding features and directions routes, plus
//! the raw wire types they are converted from.

use domain::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::MapboxError;

/// A place feature returned by the geocoding API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Feature id (e.g. `place.7348` )
    pub id: String,
    /// Full place name including region and country
    pub place_name: String,
    /// Centre of the feature
    pub center: Coordinate,
    /// Relevance score assigned by the geocoder (0..1)
    pub relevance: f64,
}

/// Result of a directions request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// Status code (`Ok`, `NoRoute`, `NoSegment`, ...)
    pub code: String,
    /// Route candidates, best first
    pub routes: Vec<DirectionsRoute>,
}

/// A single route candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    /// Length in meters
    pub distance: f64,
    /// Travel time in seconds
    pub duration: f64,
    /// LineString coordinates in travel order
    pub geometry: Vec<Coordinate>,
    /// Maneuver instructions of every leg, in travel order
    pub instructions: Vec<String>,
    /// Cost model name (`auto`, `pedestrian`, `cyclability`, ...)
    pub weight_name: String,
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeatureCollection {
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeature {
    pub id: String,
    pub place_name: String,
    pub center: [f64; 2],
    #[serde(default)]
    pub relevance: f64,
}

impl RawFeature {
    pub(crate) fn into_place(self) -> Result<Place, MapboxError> {
        let center = Coordinate::try_from(self.center)
            .map_err(|e| MapboxError::ParseError(format!("feature {}: {e}", self.id)))?;
        Ok(Place {
            id: self.id,
            place_name: self.place_name,
            center,
            relevance: self.relevance,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDirectionsResponse {
    pub code: String,
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRoute {
    pub distance: f64,
    pub duration: f64,
    pub geometry: RawGeometry,
    #[serde(default)]
    pub legs: Vec<RawLeg>,
    #[serde(default)]
    pub weight_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLeg {
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStep {
    pub maneuver: RawManeuver,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawManeuver {
    #[serde(default)]
    pub instruction: String,
}

impl RawRoute {
    pub(crate) fn into_route(self) -> Result<DirectionsRoute, MapboxError> {
        let geometry = self
            .geometry
            .coordinates
            .into_iter()
            .map(Coordinate::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| MapboxError::ParseError(format!("route geometry: {e}")))?;

        let instructions = self
            .legs
            .into_iter()
            .flat_map(|leg| leg.steps)
            .map(|step| step.maneuver.instruction)
            .collect();

        Ok(DirectionsRoute {
            distance: self.distance,
            duration: self.duration,
            geometry,
            instructions,
            weight_name: self.weight_name,
        })
    }
}
