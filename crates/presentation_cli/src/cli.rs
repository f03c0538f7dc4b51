//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use domain::{MapStyle, TravelMode};

/// Map and directions widget
#[derive(Debug, Parser)]
#[command(name = "map-widget")]
#[command(author, version, about = "Map and directions to a fixed destination", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file, extension optional
    #[arg(short, long, default_value = "config", global = true)]
    pub config: String,

    /// Keep preferences in memory instead of the database
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List place suggestions for a partially typed origin
    Suggest {
        /// Origin text as typed so far
        query: String,
    },

    /// Resolve a route from an origin to the destination
    ///
    /// Example: map-widget directions --from "Bidhannagar" --mode walking
    Directions(DirectionsArgs),

    /// Drive the widget interactively from stdin
    Interactive,

    /// Print the effective configuration
    Config {
        /// Validate the configuration and fail on the first problem
        #[arg(long)]
        check: bool,
    },
}

#[derive(Debug, Args)]
pub struct DirectionsArgs {
    /// Origin place; defaults to the last successful origin
    #[arg(short, long)]
    pub from: Option<String>,

    /// Travel mode: driving, walking or cycling
    #[arg(short, long)]
    pub mode: Option<TravelMode>,

    /// Base map: streets or satellite
    #[arg(short, long)]
    pub style: Option<MapStyle>,

    /// Show every step instead of the first few
    #[arg(long)]
    pub expand: bool,

    /// Write the rendered map scene as JSON to this file
    #[arg(long)]
    pub scene_out: Option<PathBuf>,

    /// Print the direction panel as JSON
    #[arg(long)]
    pub json: bool,
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("map-widget").chain(args.iter().copied()))
    }

    #[test]
    fn parses_suggest() {
        let cli = parse(&["suggest", "Bidhan"]).unwrap();
        match cli.command {
            Commands::Suggest { query } => assert_eq!(query, "Bidhan"),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, "config");
        assert!(!cli.ephemeral);
    }

    #[test]
    fn parses_directions_with_mode_and_style() {
        let cli = parse(&[
            "directions",
            "--from",
            "Bidhannagar",
            "-m",
            "walking",
            "--style",
            "satellite",
            "--expand",
        ])
        .unwrap();

        let Commands::Directions(args) = cli.command else {
            panic!("expected directions");
        };
        assert_eq!(args.from.as_deref(), Some("Bidhannagar"));
        assert_eq!(args.mode, Some(TravelMode::Walking));
        assert_eq!(args.style, Some(MapStyle::Satellite));
        assert!(args.expand);
        assert!(!args.json);
        assert!(args.scene_out.is_none());
    }

    #[test]
    fn directions_origin_is_optional() {
        let cli = parse(&["directions"]).unwrap();
        let Commands::Directions(args) = cli.command else {
            panic!("expected directions");
        };
        assert!(args.from.is_none());
        assert!(args.mode.is_none());
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(parse(&["directions", "--mode", "teleport"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = parse(&["config", "--check", "-vv", "--ephemeral", "-c", "/etc/map-widget"]).unwrap();
        assert!(matches!(cli.command, Commands::Config { check: true }));
        assert_eq!(cli.verbose, 2);
        assert!(cli.ephemeral);
        assert_eq!(cli.config, "/etc/map-widget");
    }

    #[test]
    fn requires_subcommand() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(7), "trace");
    }
}
