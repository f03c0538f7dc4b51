//! Value Objects - Immutable, identity-less domain primitives

mod bounding_box;
mod camera;
mod coordinate;
mod map_style;
mod travel_mode;
mod weight_class;

pub use bounding_box::BoundingBox;
pub use camera::{Camera, Viewport};
pub use coordinate::{Coordinate, InvalidCoordinates};
pub use map_style::MapStyle;
pub use travel_mode::TravelMode;
pub use weight_class::WeightClass;
