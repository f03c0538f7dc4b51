//! Application services
//!
//! Use cases of the map widget, built on the ports in [`crate::ports`].

mod direction_panel;
mod map_presenter;
mod request_sequencer;
mod route_resolver;
mod suggestion_provider;
mod user_preferences;
mod widget_controller;
mod widget_state;

pub use direction_panel::{
    DEFAULT_COLLAPSED_STEP_COUNT, DirectionPanel, DirectionView, title_case,
};
pub use map_presenter::{DEFAULT_FIT_PADDING_PX, MapPresenter};
pub use request_sequencer::{RequestKind, RequestSequencer, RequestTicket};
pub use route_resolver::RouteResolver;
pub use suggestion_provider::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_MIN_QUERY_CHARS, SuggestionProvider};
pub use user_preferences::{FROM_LOCATION_KEY, MODE_KEY, Preference, UserPreferences};
pub use widget_controller::{DEFAULT_BLUR_DELAY, SubmitOutcome, WidgetController, WidgetSettings};
pub use widget_state::{WidgetFailure, WidgetPhase, WidgetState};
