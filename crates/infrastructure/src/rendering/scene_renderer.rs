//! Map renderer that records its drawing into a [`MapScene`]

use application::MapRendererPort;
use domain::{BoundingBox, Camera, Coordinate, Destination, MapStyle, Route, Viewport};
use tracing::debug;

use super::scene::{LineLayer, LineSource, MapScene, Marker, MarkerKind, ROUTE_ID};
use crate::config::MapAppConfig;

/// Headless renderer keeping the scene a map surface would show
#[derive(Debug, Clone)]
pub struct SceneMapRenderer {
    scene: MapScene,
    viewport: Viewport,
    max_zoom: f64,
}

impl SceneMapRenderer {
    /// Renderer whose camera starts at `camera`
    #[must_use]
    pub fn new(style: MapStyle, camera: Camera, viewport: Viewport, max_zoom: f64) -> Self {
        Self {
            scene: MapScene::new(style, camera),
            viewport,
            max_zoom,
        }
    }

    /// Renderer centred on `destination` with the configured zoom and viewport
    #[must_use]
    pub fn from_config(config: &MapAppConfig, destination: &Destination) -> Self {
        Self::new(
            config.default_style,
            Camera::new(destination.coordinate, config.initial_zoom),
            config.viewport(),
            config.max_zoom,
        )
    }

    /// Current scene
    #[must_use]
    pub const fn scene(&self) -> &MapScene {
        &self.scene
    }

    fn patched(&mut self) {
        self.scene.revision += 1;
    }
}

impl MapRendererPort for SceneMapRenderer {
    fn set_style(&mut self, style: MapStyle) {
        self.scene.style = style;
        self.scene.style_url = style.url();
        self.patched();
    }

    fn set_destination_marker(&mut self, destination: &Destination) {
        self.scene.upsert_marker(Marker {
            kind: MarkerKind::Destination,
            coordinate: destination.coordinate,
            popup: destination.popup_lines(),
        });
        self.patched();
    }

    fn set_origin_marker(&mut self, coordinate: Coordinate) {
        self.scene.upsert_marker(Marker {
            kind: MarkerKind::Origin,
            coordinate,
            popup: Vec::new(),
        });
        self.patched();
    }

    fn clear_origin_marker(&mut self) {
        self.scene.remove_marker(MarkerKind::Origin);
        self.patched();
    }

    fn set_route(&mut self, route: &Route) {
        let source = LineSource {
            id: ROUTE_ID.to_string(),
            coordinates: route.geometry.clone(),
        };
        match self.scene.sources.iter_mut().find(|s| s.id == ROUTE_ID) {
            Some(existing) => *existing = source,
            None => self.scene.sources.push(source),
        }
        if !self.scene.layers.iter().any(|l| l.id == ROUTE_ID) {
            self.scene.layers.push(LineLayer::route());
        }
        debug!(points = route.geometry.len(), "Route drawn");
        self.patched();
    }

    fn clear_route(&mut self) {
        self.scene.layers.retain(|l| l.id != ROUTE_ID);
        self.scene.sources.retain(|s| s.id != ROUTE_ID);
        self.patched();
    }

    fn fit_bounds(&mut self, bounds: BoundingBox, padding_px: u32) {
        self.scene.camera = Camera::fit(&bounds, self.viewport, padding_px, self.max_zoom);
        debug!(zoom = self.scene.camera.zoom, "Camera fitted to route");
        self.patched();
    }
}

#[cfg(test)]
mod tests {
    use domain::{RouteStep, WeightClass};

    use super::*;
    use crate::rendering::scene::{ControlPosition, ROUTE_LINE_COLOR};

    fn renderer() -> SceneMapRenderer {
        SceneMapRenderer::from_config(&MapAppConfig::default(), &Destination::kolkata())
    }

    fn route() -> Route {
        Route::new(
            7_412.3,
            1_139.9,
            vec![
                Coordinate::new(88.4172, 22.5867).unwrap(),
                Coordinate::new(88.39, 22.58).unwrap(),
                Coordinate::kolkata(),
            ],
            vec![RouteStep::new("Head west on Sector V Road")],
            WeightClass::Drivable,
        )
    }

    #[test]
    fn starts_on_destination_with_compass() {
        let renderer = renderer();
        let scene = renderer.scene();
        assert_eq!(scene.camera.center, Coordinate::kolkata());
        assert!((scene.camera.zoom - 12.0).abs() < f64::EPSILON);
        assert_eq!(scene.controls.len(), 1);
        assert_eq!(scene.controls[0].position, ControlPosition::TopRight);
        assert!(scene.controls[0].show_compass);
        assert!(scene.markers.is_empty());
        assert_eq!(scene.style_url, "mapbox://styles/mapbox/streets-v11");
    }

    #[test]
    fn destination_marker_has_popup() {
        let mut renderer = renderer();
        renderer.set_destination_marker(&Destination::kolkata());

        let marker = renderer.scene().marker(MarkerKind::Destination).unwrap();
        assert_eq!(
            marker.popup,
            vec!["City: Kolkata", "State: West Bengal", "Country: INDIA"]
        );
    }

    #[test]
    fn route_is_drawn_once_and_replaced() {
        let mut renderer = renderer();
        renderer.set_route(&route());
        renderer.set_route(&route());

        let scene = renderer.scene();
        assert_eq!(scene.sources.len(), 1);
        assert_eq!(scene.layers.len(), 1);
        assert_eq!(scene.layers[0].paint.line_color, ROUTE_LINE_COLOR);
        assert_eq!(scene.layers[0].layout.line_cap, "round");
        assert_eq!(scene.route_source().unwrap().coordinates.len(), 3);
        assert_eq!(scene.revision, 2);
    }

    #[test]
    fn clear_route_removes_source_and_layer() {
        let mut renderer = renderer();
        renderer.set_route(&route());
        renderer.clear_route();
        assert!(renderer.scene().route_source().is_none());
        assert!(renderer.scene().layers.is_empty());
    }

    #[test]
    fn origin_marker_moves_and_clears() {
        let mut renderer = renderer();
        renderer.set_origin_marker(Coordinate::new(88.4172, 22.5867).unwrap());
        renderer.set_origin_marker(Coordinate::new(88.3, 22.6).unwrap());
        assert_eq!(
            renderer.scene().markers.len(),
            1,
            "origin marker is moved, not duplicated"
        );

        renderer.clear_origin_marker();
        assert!(renderer.scene().marker(MarkerKind::Origin).is_none());
    }

    #[test]
    fn fit_bounds_shows_whole_route() {
        let mut renderer = renderer();
        let bounds = route().bounds().unwrap();
        renderer.fit_bounds(bounds, 50);

        let camera = renderer.scene().camera;
        assert!(bounds.contains(&camera.center));
        assert!(camera.zoom > 0.0 && camera.zoom <= 18.0);
    }

    #[test]
    fn style_switch_keeps_route() {
        let mut renderer = renderer();
        renderer.set_route(&route());
        renderer.set_style(MapStyle::Satellite);

        let scene = renderer.scene();
        assert_eq!(scene.style_url, "mapbox://styles/mapbox/satellite-v9");
        assert!(scene.route_source().is_some());
    }

    #[test]
    fn scene_serializes_with_style_spec_names() {
        let mut renderer = renderer();
        renderer.set_route(&route());
        let json = serde_json::to_value(renderer.scene()).unwrap();

        assert_eq!(json["layers"][0]["paint"]["line-color"], "#3b9ddd");
        assert_eq!(json["layers"][0]["layout"]["line-join"], "round");
        assert_eq!(json["controls"][0]["position"], "top-right");
        assert_eq!(json["sources"][0]["coordinates"][0][0], 88.4172);
    }
}
