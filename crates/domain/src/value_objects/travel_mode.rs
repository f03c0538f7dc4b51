//! Travel mode value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// How the user intends to travel to the destination
///
/// The mode selects the directions profile and is remembered between
/// sessions as a user preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// By car
    #[default]
    Driving,
    /// On foot
    Walking,
    /// By bicycle
    Cycling,
}

impl TravelMode {
    /// All modes in selector order
    pub const ALL: [Self; 3] = [Self::Driving, Self::Walking, Self::Cycling];

    /// Stable identifier used for persistence and as the directions profile
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Driving => "Driving",
            Self::Walking => "Walking",
            Self::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" | "drive" | "car" => Ok(Self::Driving),
            "walking" | "walk" => Ok(Self::Walking),
            "cycling" | "bicycling" | "bike" => Ok(Self::Cycling),
            other => Err(DomainError::InvalidTravelMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_driving() {
        assert_eq!(TravelMode::default(), TravelMode::Driving);
    }

    #[test]
    fn parse_roundtrips_identifier() {
        for mode in TravelMode::ALL {
            assert_eq!(mode.as_str().parse::<TravelMode>().unwrap(), mode);
        }
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("Bicycling".parse::<TravelMode>().unwrap(), TravelMode::Cycling);
        assert_eq!(" walk ".parse::<TravelMode>().unwrap(), TravelMode::Walking);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("teleport".parse::<TravelMode>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(TravelMode::Driving.label(), "Driving");
        assert_eq!(TravelMode::Walking.label(), "Walking");
        assert_eq!(TravelMode::Cycling.label(), "Cycling");
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&TravelMode::Cycling).unwrap();
        assert_eq!(json, "\"cycling\"");
    }
}
