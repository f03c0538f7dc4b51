//! Widget state
//!
//! The single source of truth for everything the widget shows. Only the
//! [`WidgetController`](super::WidgetController) mutates it; everyone else
//! receives snapshots.

use domain::{Coordinate, MapStyle, PlaceSuggestion, Route, TravelMode};
use serde::Serialize;

use crate::error::ApplicationError;

/// Interaction phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetPhase {
    /// Nothing in progress and no route shown
    Idle,
    /// Suggestions are being fetched or shown for the origin input
    Suggesting,
    /// Origin text is being geocoded
    ResolvingOrigin,
    /// Directions are being requested
    ResolvingRoute,
    /// A route is shown
    Displayed,
    /// The last resolution failed; the next submit retries
    Failed,
}

impl WidgetPhase {
    /// Whether a route resolution is in flight
    #[must_use]
    pub const fn is_resolving(self) -> bool {
        matches!(self, Self::ResolvingOrigin | Self::ResolvingRoute)
    }
}

/// Why the last route resolution failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetFailure {
    /// The origin text matched no place
    OriginNotFound,
    /// The directions service found no route
    NoRouteFound,
    /// A service could not be reached or answered with an error
    Unavailable,
}

impl WidgetFailure {
    /// Message shown to the user
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::OriginNotFound => "Unable to find the address",
            Self::NoRouteFound => "Unable to calculate directions",
            Self::Unavailable => "The map service is unavailable, please try again",
        }
    }
}

impl From<&ApplicationError> for WidgetFailure {
    fn from(err: &ApplicationError) -> Self {
        match err {
            ApplicationError::OriginNotFound(_) => Self::OriginNotFound,
            ApplicationError::NoRouteFound => Self::NoRouteFound,
            _ => Self::Unavailable,
        }
    }
}

/// Everything the widget displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetState {
    /// Current content of the origin input
    pub origin_text: String,
    /// Coordinate of the selected or last resolved origin
    pub origin_coordinate: Option<Coordinate>,
    /// Suggestion the user picked, cleared as soon as the text is edited
    pub selected_suggestion: Option<PlaceSuggestion>,
    /// Autocomplete candidates for the origin input
    pub suggestions: Vec<PlaceSuggestion>,
    /// Route on display
    pub active_route: Option<Route>,
    /// Origin text the active route was resolved from
    pub route_origin_label: Option<String>,
    /// Incremented whenever `active_route` is replaced
    pub route_revision: u64,
    /// Selected travel mode
    pub travel_mode: TravelMode,
    /// Selected base map
    pub map_style: MapStyle,
    /// Whether every direction step is listed
    pub is_expanded: bool,
    /// Whether the origin input has focus
    pub is_input_focused: bool,
    /// Interaction phase
    pub phase: WidgetPhase,
    /// Cause of the last failed resolution, cleared by the next success
    pub failure: Option<WidgetFailure>,
}

impl WidgetState {
    /// Initial state
    #[must_use]
    pub fn new(travel_mode: TravelMode, origin_text: impl Into<String>, map_style: MapStyle) -> Self {
        Self {
            origin_text: origin_text.into(),
            origin_coordinate: None,
            selected_suggestion: None,
            suggestions: Vec::new(),
            active_route: None,
            route_origin_label: None,
            route_revision: 0,
            travel_mode,
            map_style,
            is_expanded: false,
            is_input_focused: false,
            phase: WidgetPhase::Idle,
            failure: None,
        }
    }

    /// Phase to settle in once suggesting ends
    #[must_use]
    pub const fn resting_phase(&self) -> WidgetPhase {
        if self.active_route.is_some() {
            WidgetPhase::Displayed
        } else {
            WidgetPhase::Idle
        }
    }

    /// Leave `Suggesting` for the resting phase
    pub(crate) fn stop_suggesting(&mut self) {
        self.suggestions.clear();
        if self.phase == WidgetPhase::Suggesting {
            self.phase = self.resting_phase();
        }
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(TravelMode::default(), String::new(), MapStyle::default())
    }
}
