//! Domain entities

mod destination;
mod place_suggestion;
mod route;

pub use destination::{Destination, PlaceDetails};
pub use place_suggestion::PlaceSuggestion;
pub use route::{Route, RouteStep};
