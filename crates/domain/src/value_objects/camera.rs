//! Map camera and bounds fitting
//!
//! Web-Mercator math for turning a [`BoundingBox`] into a centre and zoom
//! level that shows the whole box inside a viewport with fixed padding.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, Coordinate};

/// Size of the world at zoom 0 in pixels (Mapbox GL uses 512px tiles)
const WORLD_SIZE_PX: f64 = 512.0;

/// Latitude limit of the Web-Mercator projection
const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// Pixel size of the map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

/// Where the map looks and how far it is zoomed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Map centre
    pub center: Coordinate,
    /// Zoom level (0 = whole world)
    pub zoom: f64,
}

impl Camera {
    /// Create a camera
    #[must_use]
    pub const fn new(center: Coordinate, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Camera that fits `bounds` into `viewport`, leaving `padding_px` on every side
    ///
    /// A degenerate (single point) box is shown at `max_zoom`. The result is
    /// never zoomed in beyond `max_zoom` nor out beyond zoom 0.
    #[must_use]
    pub fn fit(bounds: &BoundingBox, viewport: Viewport, padding_px: u32, max_zoom: f64) -> Self {
        let (west_x, north_y) = project(&Coordinate::new_unchecked(bounds.west(), bounds.north()));
        let (east_x, south_y) = project(&Coordinate::new_unchecked(bounds.east(), bounds.south()));

        let center = unproject((west_x + east_x) / 2.0, (north_y + south_y) / 2.0);

        if bounds.is_point() {
            return Self::new(center, max_zoom);
        }

        let span_x = (east_x - west_x).abs();
        let span_y = (south_y - north_y).abs();

        let padding = 2.0 * f64::from(padding_px);
        let available_w = (f64::from(viewport.width) - padding).max(1.0);
        let available_h = (f64::from(viewport.height) - padding).max(1.0);

        let zoom_x = zoom_for_span(span_x, available_w);
        let zoom_y = zoom_for_span(span_y, available_h);

        Self::new(center, zoom_x.min(zoom_y).clamp(0.0, max_zoom))
    }
}

fn zoom_for_span(span: f64, available_px: f64) -> f64 {
    if span <= f64::EPSILON {
        return f64::INFINITY;
    }
    (available_px / (span * WORLD_SIZE_PX)).log2()
}

/// Project to normalized Web-Mercator space (both axes in 0..1, y grows south)
fn project(c: &Coordinate) -> (f64, f64) {
    let x = (c.longitude() + 180.0) / 360.0;
    let lat = c
        .latitude()
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
        .to_radians();
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0;
    (x, y)
}

fn unproject(x: f64, y: f64) -> Coordinate {
    let longitude = x.mul_add(360.0, -180.0);
    let latitude = (std::f64::consts::PI * 2.0f64.mul_add(-y, 1.0))
        .sinh()
        .atan()
        .to_degrees();
    Coordinate::new_unchecked(longitude, latitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat).unwrap()
    }

    #[test]
    fn projection_roundtrip() {
        let original = c(88.3639, 22.5726);
        let (x, y) = project(&original);
        let back = unproject(x, y);
        assert!((back.longitude() - original.longitude()).abs() < 1e-9);
        assert!((back.latitude() - original.latitude()).abs() < 1e-9);
    }

    #[test]
    fn point_bounds_use_max_zoom() {
        let bounds = BoundingBox::around(Coordinate::kolkata());
        let camera = Camera::fit(&bounds, Viewport::default(), 50, 18.0);
        assert!((camera.zoom - 18.0).abs() < f64::EPSILON);
        assert!((camera.center.longitude() - 88.3639).abs() < 1e-9);
    }

    #[test]
    fn fitted_box_is_inside_padded_viewport() {
        let bounds =
            BoundingBox::from_coordinates(&[c(88.4172, 22.5867), c(88.3639, 22.5726)]).unwrap();
        let viewport = Viewport::new(800, 600);
        let camera = Camera::fit(&bounds, viewport, 50, 22.0);

        let scale = WORLD_SIZE_PX * 2f64.powf(camera.zoom);
        let (w, n) = project(&c(bounds.west(), bounds.north()));
        let (e, s) = project(&c(bounds.east(), bounds.south()));

        let width_px = (e - w) * scale;
        let height_px = (s - n) * scale;
        assert!(width_px <= 700.0 + 1e-6);
        assert!(height_px <= 500.0 + 1e-6);
        // One of the axes is the limiting one
        assert!((width_px - 700.0).abs() < 1e-6 || (height_px - 500.0).abs() < 1e-6);
    }

    #[test]
    fn wider_box_zooms_out() {
        let small = BoundingBox::from_coordinates(&[c(88.36, 22.57), c(88.37, 22.58)]).unwrap();
        let large = BoundingBox::from_coordinates(&[c(88.0, 22.0), c(89.0, 23.0)]).unwrap();
        let small_cam = Camera::fit(&small, Viewport::default(), 50, 22.0);
        let large_cam = Camera::fit(&large, Viewport::default(), 50, 22.0);
        assert!(large_cam.zoom < small_cam.zoom);
    }

    #[test]
    fn padding_larger_than_viewport_does_not_panic() {
        let bounds = BoundingBox::from_coordinates(&[c(0.0, 0.0), c(1.0, 1.0)]).unwrap();
        let camera = Camera::fit(&bounds, Viewport::new(50, 50), 100, 22.0);
        assert!(camera.zoom >= 0.0);
    }
}
