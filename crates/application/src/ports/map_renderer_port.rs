//! Map rendering port
//!
//! The map surface is patched incrementally: every operation touches one
//! layer, source or marker and leaves the rest of the surface alone.

use domain::{BoundingBox, Coordinate, Destination, MapStyle, Route};
#[cfg(test)]
use mockall::automock;

/// Port for drawing on a map surface
#[cfg_attr(test, automock)]
pub trait MapRendererPort: Send {
    /// Switch the base style
    fn set_style(&mut self, style: MapStyle);

    /// Place the fixed destination marker and its popup
    fn set_destination_marker(&mut self, destination: &Destination);

    /// Move the origin marker, creating it if needed
    fn set_origin_marker(&mut self, coordinate: Coordinate);

    /// Remove the origin marker
    fn clear_origin_marker(&mut self);

    /// Replace the route source and line layer with the route's geometry
    fn set_route(&mut self, route: &Route);

    /// Remove the route source and line layer
    fn clear_route(&mut self);

    /// Animate the viewport so `bounds` is fully visible with `padding_px` on every side
    fn fit_bounds(&mut self, bounds: BoundingBox, padding_px: u32);
}
