//! Widget controller
//!
//! Orchestrates suggestions, route resolution and preferences from user
//! events. The controller owns the [`WidgetState`]; every change is published
//! on a watch channel so renderers follow snapshots instead of reading shared
//! fields.
//!
//! Suggestion fetches and route resolutions each take a ticket from a
//! [`RequestSequencer`]. A completion is applied only while its ticket is the
//! latest of its kind, so a slow response can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use domain::{Destination, MapStyle, PlaceSuggestion, TravelMode};
use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use super::direction_panel::{DirectionPanel, DirectionView};
use super::request_sequencer::{RequestKind, RequestSequencer, RequestTicket};
use super::route_resolver::RouteResolver;
use super::suggestion_provider::SuggestionProvider;
use super::user_preferences::{Preference, UserPreferences};
use super::widget_state::{WidgetFailure, WidgetPhase, WidgetState};
use crate::error::ApplicationError;

/// Default delay between losing focus and clearing suggestions
pub const DEFAULT_BLUR_DELAY: Duration = Duration::from_millis(200);

/// Result of a submit or mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "failure")]
pub enum SubmitOutcome {
    /// Origin text too short; nothing was requested
    Ignored,
    /// A new route is on display
    Displayed,
    /// Resolution failed; the previous route stays on display
    Failed(WidgetFailure),
    /// A newer request took over before this one completed
    Superseded,
}

/// Static widget settings
#[derive(Debug, Clone)]
pub struct WidgetSettings {
    /// Where every route ends
    pub destination: Destination,
    /// Delay between blur and clearing suggestions
    pub blur_delay: Duration,
    /// Geocode the origin text again even when it came from a selected suggestion
    pub revalidate_selected_origin: bool,
    /// Base map shown at startup
    pub initial_style: MapStyle,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            destination: Destination::kolkata(),
            blur_delay: DEFAULT_BLUR_DELAY,
            revalidate_selected_origin: false,
            initial_style: MapStyle::default(),
        }
    }
}

/// Owner of the widget state
pub struct WidgetController {
    suggestions: SuggestionProvider,
    resolver: RouteResolver,
    preferences: UserPreferences,
    panel: DirectionPanel,
    settings: WidgetSettings,
    sequencer: RequestSequencer,
    blur_generation: AtomicU64,
    state: Mutex<WidgetState>,
    updates: watch::Sender<WidgetState>,
}

impl std::fmt::Debug for WidgetController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetController")
            .field("settings", &self.settings)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl WidgetController {
    /// Create a controller whose initial state comes from `preferences`
    pub fn new(
        suggestions: SuggestionProvider,
        resolver: RouteResolver,
        preferences: UserPreferences,
        panel: DirectionPanel,
        settings: WidgetSettings,
    ) -> Self {
        let state = WidgetState::new(
            preferences.mode(),
            preferences.from_location().unwrap_or_default(),
            settings.initial_style,
        );
        let (updates, _) = watch::channel(state.clone());

        Self {
            suggestions,
            resolver,
            preferences,
            panel,
            settings,
            sequencer: RequestSequencer::new(),
            blur_generation: AtomicU64::new(0),
            state: Mutex::new(state),
            updates,
        }
    }

    /// Receive every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<WidgetState> {
        self.updates.subscribe()
    }

    /// Current state snapshot
    pub fn state(&self) -> WidgetState {
        self.state.lock().clone()
    }

    /// Fixed destination
    pub const fn destination(&self) -> &Destination {
        &self.settings.destination
    }

    /// Loaded preferences
    pub const fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Widget heading
    pub fn heading(&self) -> String {
        format!("Map and Directions to {}", self.settings.destination.label)
    }

    /// Mutate the state and publish the result
    fn update<T>(&self, f: impl FnOnce(&mut WidgetState) -> T) -> T {
        let mut state = self.state.lock();
        let result = f(&mut state);
        self.updates.send_replace(state.clone());
        result
    }

    /// Mutate and publish only while `ticket` is the latest of its kind
    fn update_if_current<T>(
        &self,
        ticket: RequestTicket,
        f: impl FnOnce(&mut WidgetState) -> T,
    ) -> Option<T> {
        let mut state = self.state.lock();
        if !self.sequencer.is_current(ticket) {
            debug!(kind = ?ticket.kind(), sequence = ticket.sequence(), "Discarding stale response");
            return None;
        }
        let result = f(&mut state);
        self.updates.send_replace(state.clone());
        Some(result)
    }

    /// The origin input gained focus; cancels a pending blur
    pub fn focus_input(&self) {
        self.blur_generation.fetch_add(1, Ordering::AcqRel);
        self.update(|s| s.is_input_focused = true);
    }

    /// The origin input lost focus
    ///
    /// Suggestions are cleared after the blur delay so a selection made in
    /// the meantime still lands. Focusing again within the delay cancels it.
    pub async fn blur_input(&self) {
        let generation = self.blur_generation.fetch_add(1, Ordering::AcqRel) + 1;
        tokio::time::sleep(self.settings.blur_delay).await;

        if self.blur_generation.load(Ordering::Acquire) != generation {
            debug!("Blur cancelled by renewed focus");
            return;
        }

        self.sequencer.invalidate(RequestKind::Suggestion);
        self.update(|s| {
            s.is_input_focused = false;
            s.stop_suggesting();
        });
    }

    /// The origin text changed
    ///
    /// Editing drops any selected suggestion. Text of at least the minimum
    /// length fetches suggestions; shorter text clears them.
    #[instrument(skip(self))]
    pub async fn input_text(&self, text: &str) {
        self.blur_generation.fetch_add(1, Ordering::AcqRel);
        let ticket = self.sequencer.issue(RequestKind::Suggestion);
        let accepted = self.suggestions.accepts(text);

        self.update(|s| {
            s.origin_text = text.to_string();
            s.selected_suggestion = None;
            s.is_input_focused = true;
            if !accepted {
                s.stop_suggesting();
            } else if !s.phase.is_resolving() {
                s.phase = WidgetPhase::Suggesting;
            }
        });

        if !accepted {
            return;
        }

        let suggestions = self.suggestions.suggest(text).await;
        self.update_if_current(ticket, |s| s.suggestions = suggestions);
    }

    /// Replace the origin text without fetching suggestions
    ///
    /// Used when the text comes from somewhere other than typing, such as a
    /// command line argument.
    pub fn set_origin_text(&self, text: &str) {
        self.sequencer.invalidate(RequestKind::Suggestion);
        self.update(|s| {
            s.origin_text = text.to_string();
            s.selected_suggestion = None;
            s.stop_suggesting();
        });
    }

    /// Pick the suggestion at `index`
    ///
    /// Returns the selected place, or `None` if there is no such suggestion.
    pub fn select_suggestion(&self, index: usize) -> Option<PlaceSuggestion> {
        let selected = self.update(|s| {
            let chosen = s.suggestions.get(index).cloned()?;
            s.origin_text.clone_from(&chosen.display_name);
            s.origin_coordinate = Some(chosen.coordinate);
            s.selected_suggestion = Some(chosen.clone());
            s.stop_suggesting();
            Some(chosen)
        })?;

        // Late suggestion responses must not repopulate the list
        self.sequencer.invalidate(RequestKind::Suggestion);
        debug!(origin = %selected.display_name, "Suggestion selected");
        Some(selected)
    }

    /// Resolve the current origin text and route to the destination
    #[instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let (origin_text, selected, mode) = {
            let state = self.state.lock();
            (
                state.origin_text.trim().to_string(),
                state.selected_suggestion.clone(),
                state.travel_mode,
            )
        };

        if !self.suggestions.accepts(&origin_text) {
            debug!("Origin text too short, submit ignored");
            return SubmitOutcome::Ignored;
        }

        let ticket = self.sequencer.issue(RequestKind::Route);

        let reusable = selected.filter(|place| {
            !self.settings.revalidate_selected_origin && place.display_name.trim() == origin_text
        });

        let origin = if let Some(place) = reusable {
            debug!(origin = %place.display_name, "Using selected suggestion as origin");
            place
        } else {
            if self
                .update_if_current(ticket, |s| s.phase = WidgetPhase::ResolvingOrigin)
                .is_none()
            {
                return SubmitOutcome::Superseded;
            }
            match self.resolver.resolve_origin(&origin_text).await {
                Ok(place) => place,
                Err(e) => return self.fail(ticket, &e),
            }
        };

        if self
            .update_if_current(ticket, |s| s.phase = WidgetPhase::ResolvingRoute)
            .is_none()
        {
            return SubmitOutcome::Superseded;
        }

        let route = match self
            .resolver
            .resolve(origin.coordinate, self.settings.destination.coordinate, mode)
            .await
        {
            Ok(route) => route,
            Err(e) => return self.fail(ticket, &e),
        };

        let applied = self.update_if_current(ticket, |s| {
            s.active_route = Some(route);
            s.route_revision += 1;
            s.route_origin_label = Some(origin_text.clone());
            s.origin_coordinate = Some(origin.coordinate);
            s.phase = WidgetPhase::Displayed;
            s.failure = None;
        });
        if applied.is_none() {
            return SubmitOutcome::Superseded;
        }

        info!(origin = %origin_text, %mode, "Route displayed");
        // A newer resolution or mode change owns the stored preferences
        if self.sequencer.is_current(ticket) {
            self.persist(Preference::Mode(mode)).await;
        }
        if self.sequencer.is_current(ticket) {
            self.persist(Preference::FromLocation(origin_text)).await;
        }
        SubmitOutcome::Displayed
    }

    /// Record a failed resolution, keeping the displayed route
    fn fail(&self, ticket: RequestTicket, err: &ApplicationError) -> SubmitOutcome {
        let failure = WidgetFailure::from(err);
        let applied = self.update_if_current(ticket, |s| {
            s.phase = WidgetPhase::Failed;
            s.failure = Some(failure);
        });

        if applied.is_none() {
            return SubmitOutcome::Superseded;
        }
        warn!(error = %err, ?failure, "Route resolution failed");
        SubmitOutcome::Failed(failure)
    }

    /// Select a travel mode and re-resolve the route
    ///
    /// The mode is stored right away. Resolution follows only when the
    /// origin text is long enough; otherwise the outcome is `Ignored`.
    #[instrument(skip(self))]
    pub async fn set_mode(&self, mode: TravelMode) -> SubmitOutcome {
        self.sequencer.invalidate(RequestKind::Route);
        self.update(|s| s.travel_mode = mode);
        self.persist(Preference::Mode(mode)).await;
        self.submit().await
    }

    /// Switch the base map
    pub fn set_style(&self, style: MapStyle) {
        self.update(|s| s.map_style = style);
    }

    /// Flip between the collapsed and full step list; returns the new state
    pub fn toggle_expanded(&self) -> bool {
        self.update(|s| {
            s.is_expanded = !s.is_expanded;
            s.is_expanded
        })
    }

    /// Direction panel for the route on display
    pub fn direction_view(&self) -> Option<DirectionView> {
        let state = self.state.lock();
        let route = state.active_route.as_ref()?;
        Some(self.panel.render(
            route,
            state.is_expanded,
            state.route_origin_label.as_deref().unwrap_or_default(),
            &self.settings.destination.label,
        ))
    }

    async fn persist(&self, preference: Preference) {
        if let Err(e) = self.preferences.set_preference(preference).await {
            warn!(error = %e, "Failed to persist preference");
        }
    }
}
