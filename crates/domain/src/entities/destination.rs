//! Fixed destination of the widget

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// Administrative details shown in the destination marker popup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDetails {
    /// City name
    pub city: String,
    /// State or province
    pub state: String,
    /// Country
    pub country: String,
}

/// The single destination every route leads to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Where the destination marker sits and routes end
    pub coordinate: Coordinate,
    /// Label shown in the direction panel
    pub label: String,
    /// Popup details for the destination marker
    pub details: PlaceDetails,
}

impl Destination {
    /// Kolkata, West Bengal, India
    #[must_use]
    pub fn kolkata() -> Self {
        Self {
            coordinate: Coordinate::kolkata(),
            label: "Kolkata, West Bengal, India".to_string(),
            details: PlaceDetails {
                city: "Kolkata".to_string(),
                state: "West Bengal".to_string(),
                country: "INDIA".to_string(),
            },
        }
    }

    /// Popup lines for the destination marker
    #[must_use]
    pub fn popup_lines(&self) -> Vec<String> {
        vec![
            format!("City: {}", self.details.city),
            format!("State: {}", self.details.state),
            format!("Country: {}", self.details.country),
        ]
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::kolkata()
    }
}
