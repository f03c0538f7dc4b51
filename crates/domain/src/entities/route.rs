//! Route entity
//!
//! A route is always built from a single directions response, so distance,
//! duration, geometry and steps describe the same path.

use serde::{Deserialize, Serialize};

use crate::value_objects::{BoundingBox, Coordinate, WeightClass};

/// One turn-by-turn instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Maneuver instruction text
    pub instruction: String,
}

impl RouteStep {
    /// Create a step
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
        }
    }
}

/// A resolved route from origin to destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Total length in meters
    pub distance_meters: f64,
    /// Expected travel time in seconds
    pub duration_seconds: f64,
    /// Path to draw, in travel order
    pub geometry: Vec<Coordinate>,
    /// Turn-by-turn instructions, in travel order
    pub steps: Vec<RouteStep>,
    /// Cost model the route was chosen with
    pub weight_class: WeightClass,
}

impl Route {
    /// Create a route
    #[must_use]
    pub const fn new(
        distance_meters: f64,
        duration_seconds: f64,
        geometry: Vec<Coordinate>,
        steps: Vec<RouteStep>,
        weight_class: WeightClass,
    ) -> Self {
        Self {
            distance_meters,
            duration_seconds,
            geometry,
            steps,
            weight_class,
        }
    }

    /// Duration floored to whole minutes
    #[must_use]
    pub fn duration_minutes(&self) -> u64 {
        (self.duration_seconds.max(0.0) / 60.0).floor() as u64
    }

    /// Bounding box of the geometry, `None` when the geometry is empty
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_coordinates(&self.geometry)
    }

    /// Number of instructions
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_route() -> Route {
        Route::new(
            7_412.3,
            1_139.9,
            vec![
                Coordinate::new(88.4172, 22.5867).unwrap(),
                Coordinate::new(88.3901, 22.5790).unwrap(),
                Coordinate::new(88.3639, 22.5726).unwrap(),
            ],
            vec![
                RouteStep::new("Head west on Broadway"),
                RouteStep::new("Turn left onto EM Bypass"),
                RouteStep::new("You have arrived at your destination"),
            ],
            WeightClass::Drivable,
        )
    }

    #[test]
    fn duration_is_floored_to_minutes() {
        let route = sample_route();
        assert_eq!(route.duration_minutes(), 18);
    }

    #[test]
    fn negative_duration_is_zero_minutes() {
        let mut route = sample_route();
        route.duration_seconds = -5.0;
        assert_eq!(route.duration_minutes(), 0);
    }

    #[test]
    fn bounds_cover_geometry() {
        let route = sample_route();
        let bounds = route.bounds().unwrap();
        assert!(route.geometry.iter().all(|c| bounds.contains(c)));
    }

    #[test]
    fn empty_geometry_has_no_bounds() {
        let mut route = sample_route();
        route.geometry.clear();
        assert!(route.bounds().is_none());
    }
}
