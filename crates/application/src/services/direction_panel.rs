//! Direction panel
//!
//! Pure view model for a resolved route: from/to labels, a duration summary
//! and a step list that shows the first few steps until expanded.

use domain::Route;
use serde::Serialize;

/// Steps visible while the panel is collapsed
pub const DEFAULT_COLLAPSED_STEP_COUNT: usize = 4;

/// Everything the panel displays for one route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionView {
    /// Origin label, title-cased
    pub origin_label: String,
    /// Destination label
    pub destination_label: String,
    /// Trip duration in whole minutes
    pub duration_minutes: u64,
    /// Mode derived from the route's weight class
    pub mode_label: Option<&'static str>,
    /// `Trip duration: N mins for Mode`
    pub summary: String,
    /// Instructions currently shown
    pub steps: Vec<String>,
    /// Number of instructions in the route
    pub total_steps: usize,
    /// Whether every step is shown
    pub is_expanded: bool,
    /// Caption of the expand/collapse toggle
    pub toggle_caption: &'static str,
}

/// Renders [`DirectionView`]s
#[derive(Debug, Clone, Copy)]
pub struct DirectionPanel {
    collapsed_step_count: usize,
}

impl Default for DirectionPanel {
    fn default() -> Self {
        Self::new(DEFAULT_COLLAPSED_STEP_COUNT)
    }
}

impl DirectionPanel {
    /// Panel showing `collapsed_step_count` steps while collapsed
    #[must_use]
    pub const fn new(collapsed_step_count: usize) -> Self {
        Self {
            collapsed_step_count,
        }
    }

    /// Number of steps displayed for a route with `total` steps
    #[must_use]
    pub fn visible_step_count(&self, total: usize, is_expanded: bool) -> usize {
        if is_expanded {
            total
        } else {
            total.min(self.collapsed_step_count)
        }
    }

    /// Build the view for `route`
    #[must_use]
    pub fn render(
        &self,
        route: &Route,
        is_expanded: bool,
        origin_label: &str,
        destination_label: &str,
    ) -> DirectionView {
        let total_steps = route.step_count();
        let steps = route
            .steps
            .iter()
            .take(self.visible_step_count(total_steps, is_expanded))
            .map(|step| step.instruction.clone())
            .collect();

        let duration_minutes = route.duration_minutes();
        let mode_label = route.weight_class.label();
        let summary = match mode_label {
            Some(label) => format!("Trip duration: {duration_minutes} mins for {label}"),
            None => format!("Trip duration: {duration_minutes} mins"),
        };

        DirectionView {
            origin_label: title_case(origin_label),
            destination_label: destination_label.to_string(),
            duration_minutes,
            mode_label,
            summary,
            steps,
            total_steps,
            is_expanded,
            toggle_caption: if is_expanded { "View Less" } else { "View More" },
        }
    }
}

/// Upper-case the first letter of every word
///
/// Word characters are Unicode alphanumerics and `_`, so accented letters
/// do not split a word.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        let is_word_char = c.is_alphanumeric() || c == '_';
        if is_word_char && at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !is_word_char;
    }
    out
}
