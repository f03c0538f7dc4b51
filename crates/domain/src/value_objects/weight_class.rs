//! Directions weight classification

use serde::{Deserialize, Serialize};

/// Cost model the directions service used to pick a route
///
/// Derived from the `weight_name` of a directions response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightClass {
    /// `auto`
    Drivable,
    /// `pedestrian`
    Walkable,
    /// `cyclability`
    Cyclable,
    /// Any other weight name
    Unrecognized,
}

impl WeightClass {
    /// Classify a raw `weight_name`
    #[must_use]
    pub fn from_weight_name(name: &str) -> Self {
        match name {
            "auto" => Self::Drivable,
            "pedestrian" => Self::Walkable,
            "cyclability" => Self::Cyclable,
            _ => Self::Unrecognized,
        }
    }

    /// Travel-mode label for display, if the class is recognized
    #[must_use]
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            Self::Drivable => Some("Driving"),
            Self::Walkable => Some("Walking"),
            Self::Cyclable => Some("Cycling"),
            Self::Unrecognized => None,
        }
    }
}
