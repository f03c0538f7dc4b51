//! Map presenter
//!
//! Follows widget state snapshots and patches the map surface through a
//! [`MapRendererPort`], touching only what changed since the last snapshot.

use domain::{Coordinate, Destination, MapStyle};
use tokio::sync::watch;
use tracing::debug;

use super::widget_state::WidgetState;
use crate::ports::MapRendererPort;

/// Default padding around fitted route bounds, in pixels
pub const DEFAULT_FIT_PADDING_PX: u32 = 50;

/// Diffs widget state against what is already drawn
#[derive(Debug)]
pub struct MapPresenter<R> {
    renderer: R,
    destination: Destination,
    fit_padding_px: u32,
    destination_placed: bool,
    style: Option<MapStyle>,
    origin: Option<Coordinate>,
    route_revision: u64,
}

impl<R: MapRendererPort> MapPresenter<R> {
    /// Presenter drawing onto `renderer`
    pub const fn new(renderer: R, destination: Destination, fit_padding_px: u32) -> Self {
        Self {
            renderer,
            destination,
            fit_padding_px,
            destination_placed: false,
            style: None,
            origin: None,
            route_revision: 0,
        }
    }

    /// The underlying renderer
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Bring the map in line with `state`
    pub fn present(&mut self, state: &WidgetState) {
        if self.style != Some(state.map_style) {
            debug!(style = ?state.map_style, "Map style changed");
            self.renderer.set_style(state.map_style);
            self.style = Some(state.map_style);
        }

        if !self.destination_placed {
            self.renderer.set_destination_marker(&self.destination);
            self.destination_placed = true;
        }

        if self.origin != state.origin_coordinate {
            match state.origin_coordinate {
                Some(coordinate) => self.renderer.set_origin_marker(coordinate),
                None => self.renderer.clear_origin_marker(),
            }
            self.origin = state.origin_coordinate;
        }

        if self.route_revision != state.route_revision {
            match &state.active_route {
                Some(route) => {
                    self.renderer.set_route(route);
                    // Empty geometry has nothing to fit
                    if let Some(bounds) = route.bounds() {
                        self.renderer.fit_bounds(bounds, self.fit_padding_px);
                    }
                },
                None => self.renderer.clear_route(),
            }
            self.route_revision = state.route_revision;
        }
    }

    /// Present every snapshot published on `updates` until the sender goes away
    pub async fn follow(&mut self, mut updates: watch::Receiver<WidgetState>) {
        loop {
            {
                let state = updates.borrow_and_update();
                self.present(&state);
            }
            if updates.changed().await.is_err() {
                break;
            }
        }
    }
}
