//! Place suggestion produced by autocomplete geocoding

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// A ranked place candidate for a partially typed origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    /// Provider-assigned feature id
    pub id: String,
    /// Full human-readable place name
    pub display_name: String,
    /// Centre of the place
    pub coordinate: Coordinate,
}

impl PlaceSuggestion {
    /// Create a suggestion
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            coordinate,
        }
    }
}
