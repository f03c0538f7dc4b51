//! Subcommand implementations and text rendering

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, bail};
use application::{DirectionView, MapPresenter, SubmitOutcome, WidgetController};
use domain::PlaceSuggestion;
use infrastructure::{
    AppConfig, SceneMapRenderer, WidgetServices, build_controller, open_preference_store,
};
use tracing::info;

use crate::cli::DirectionsArgs;

/// Validate `config` and wire a controller against Mapbox
pub async fn connect(config: &AppConfig, ephemeral: bool) -> anyhow::Result<WidgetController> {
    config.validate().map_err(anyhow::Error::msg)?;

    let store = open_preference_store(&config.database, ephemeral)
        .context("Failed to open preference store")?;
    let services = WidgetServices::mapbox(&config.mapbox)?;
    let controller = build_controller(config, services, store).await?;

    info!(destination = %controller.destination().label, "Widget ready");
    Ok(controller)
}

/// Presenter drawing into a fresh scene for the controller's destination
pub fn scene_presenter(
    config: &AppConfig,
    controller: &WidgetController,
) -> MapPresenter<SceneMapRenderer> {
    MapPresenter::new(
        SceneMapRenderer::from_config(&config.map, controller.destination()),
        controller.destination().clone(),
        config.map.fit_padding_px,
    )
}

/// `suggest`
pub async fn suggest(
    controller: &WidgetController,
    config: &AppConfig,
    query: &str,
) -> anyhow::Result<()> {
    if query.trim().chars().count() < config.widget.min_query_chars {
        println!(
            "Type at least {} characters to get suggestions",
            config.widget.min_query_chars
        );
        return Ok(());
    }

    controller.input_text(query).await;
    let suggestions = controller.state().suggestions;
    if suggestions.is_empty() {
        println!("No places found for \"{}\"", query.trim());
    } else {
        print!("{}", render_suggestions(&suggestions));
    }
    Ok(())
}

/// `directions`
pub async fn directions(
    controller: &WidgetController,
    config: &AppConfig,
    args: DirectionsArgs,
) -> anyhow::Result<()> {
    let from = args
        .from
        .or_else(|| controller.preferences().from_location())
        .context("No origin given and none remembered, pass --from")?;

    if let Some(style) = args.style {
        controller.set_style(style);
    }
    controller.set_origin_text(&from);

    let outcome = match args.mode {
        Some(mode) => controller.set_mode(mode).await,
        None => controller.submit().await,
    };
    match outcome {
        SubmitOutcome::Displayed => {},
        SubmitOutcome::Ignored => bail!(
            "Origin must have at least {} characters",
            config.widget.min_query_chars
        ),
        SubmitOutcome::Failed(failure) => bail!(failure.user_message()),
        SubmitOutcome::Superseded => bail!("Route request was superseded"),
    }

    if args.expand {
        controller.toggle_expanded();
    }
    let view = controller
        .direction_view()
        .context("No route on display")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!(
            "{}",
            render_directions(&view, config.widget.collapsed_step_count)
        );
    }

    if let Some(path) = args.scene_out {
        let mut presenter = scene_presenter(config, controller);
        presenter.present(&controller.state());
        write_scene(&presenter, &path)?;
        info!(path = %path.display(), "Scene written");
    }
    Ok(())
}

/// `config`
pub fn show_config(config: &AppConfig, check: bool) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    if check {
        config.validate().map_err(anyhow::Error::msg)?;
        println!("\n✅ Configuration is valid");
    }
    Ok(())
}

/// Serialize the presenter's scene to `path`
pub fn write_scene(presenter: &MapPresenter<SceneMapRenderer>, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(presenter.renderer().scene())?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write scene to {}", path.display()))
}

/// Numbered suggestion list, one per line
pub fn render_suggestions(suggestions: &[PlaceSuggestion]) -> String {
    let mut out = String::new();
    for (i, place) in suggestions.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} ({:.4}, {:.4})",
            i + 1,
            place.display_name,
            place.coordinate.latitude(),
            place.coordinate.longitude()
        );
    }
    out
}

/// Direction panel as plain text
///
/// The toggle hint appears only when the route has more than
/// `collapsed_step_count` steps.
pub fn render_directions(view: &DirectionView, collapsed_step_count: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "From: {}", view.origin_label);
    let _ = writeln!(out, "To:   {}", view.destination_label);
    let _ = writeln!(out, "{}", view.summary);
    let _ = writeln!(out);
    for (i, step) in view.steps.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {step}", i + 1);
    }
    if view.total_steps > collapsed_step_count {
        let _ = writeln!(
            out,
            "\n({} of {} steps, {})",
            view.steps.len(),
            view.total_steps,
            view.toggle_caption
        );
    }
    out
}
