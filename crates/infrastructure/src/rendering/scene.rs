//! Serializable description of what the map shows
//!
//! Field names of layers follow the Mapbox style specification so a scene
//! can be replayed onto a real map surface.

use domain::{Camera, Coordinate, MapStyle};
use serde::Serialize;

/// Identifier of the route source and its line layer
pub const ROUTE_ID: &str = "route";

/// Route line colour
pub const ROUTE_LINE_COLOR: &str = "#3b9ddd";

/// Route line width in pixels
pub const ROUTE_LINE_WIDTH: f64 = 6.0;

/// Corner of the map a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Navigation control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationControl {
    pub position: ControlPosition,
    pub show_compass: bool,
}

/// Which marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Fixed destination, carries a popup
    Destination,
    /// Start of the route
    Origin,
}

/// A pin on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub coordinate: Coordinate,
    /// Popup lines, empty when the marker has no popup
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub popup: Vec<String>,
}

/// GeoJSON line source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSource {
    pub id: String,
    /// LineString positions in travel order
    pub coordinates: Vec<Coordinate>,
}

/// Line layout properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineLayout {
    #[serde(rename = "line-join")]
    pub line_join: &'static str,
    #[serde(rename = "line-cap")]
    pub line_cap: &'static str,
}

/// Line paint properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePaint {
    #[serde(rename = "line-color")]
    pub line_color: &'static str,
    #[serde(rename = "line-width")]
    pub line_width: f64,
}

/// Line layer drawing a source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLayer {
    pub id: String,
    pub source: String,
    pub layout: LineLayout,
    pub paint: LinePaint,
}

impl LineLayer {
    /// The route line: round joins and caps, blue, 6px
    #[must_use]
    pub fn route() -> Self {
        Self {
            id: ROUTE_ID.to_string(),
            source: ROUTE_ID.to_string(),
            layout: LineLayout {
                line_join: "round",
                line_cap: "round",
            },
            paint: LinePaint {
                line_color: ROUTE_LINE_COLOR,
                line_width: ROUTE_LINE_WIDTH,
            },
        }
    }
}

/// Everything drawn on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub style: MapStyle,
    pub style_url: &'static str,
    pub camera: Camera,
    pub controls: Vec<NavigationControl>,
    pub markers: Vec<Marker>,
    pub sources: Vec<LineSource>,
    pub layers: Vec<LineLayer>,
    /// Incremented by every patch
    pub revision: u64,
}

impl MapScene {
    /// Empty scene looking through `camera`, with the compass control top-right
    #[must_use]
    pub fn new(style: MapStyle, camera: Camera) -> Self {
        Self {
            style,
            style_url: style.url(),
            camera,
            controls: vec![NavigationControl {
                position: ControlPosition::TopRight,
                show_compass: true,
            }],
            markers: Vec::new(),
            sources: Vec::new(),
            layers: Vec::new(),
            revision: 0,
        }
    }

    /// Marker of the given kind
    #[must_use]
    pub fn marker(&self, kind: MarkerKind) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == kind)
    }

    /// The route line source, if a route is drawn
    #[must_use]
    pub fn route_source(&self) -> Option<&LineSource> {
        self.sources.iter().find(|s| s.id == ROUTE_ID)
    }

    /// Insert or replace the marker of `marker.kind`
    pub(crate) fn upsert_marker(&mut self, marker: Marker) {
        match self.markers.iter_mut().find(|m| m.kind == marker.kind) {
            Some(existing) => *existing = marker,
            None => self.markers.push(marker),
        }
    }

    pub(crate) fn remove_marker(&mut self, kind: MarkerKind) {
        self.markers.retain(|m| m.kind != kind);
    }
}
