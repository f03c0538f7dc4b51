//! Interactive session reading widget events from stdin

use std::io::Write as _;
use std::str::FromStr;

use application::{SubmitOutcome, WidgetController};
use domain::{MapStyle, TravelMode};
use infrastructure::AppConfig;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::commands::{render_directions, render_suggestions, scene_presenter};

const HELP: &str = "\
Commands:
  type <text>     change the origin text and list suggestions
  pick <n>        use suggestion n as the origin
  go              show directions from the origin
  mode <mode>     driving, walking or cycling
  style <style>   streets or satellite
  more            show more or fewer steps
  scene           print the map scene as JSON
  help            show this help
  quit            leave";

/// One line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Type(String),
    /// Zero-based suggestion index
    Pick(usize),
    Go,
    Mode(TravelMode),
    Style(MapStyle),
    More,
    Scene,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplParseError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("Suggestions are numbered from 1, got '{0}'")]
    BadIndex(String),

    #[error("{0}")]
    BadValue(String),
}

impl FromStr for ReplCommand {
    type Err = ReplParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_lowercase().as_str() {
            "type" | "t" => Ok(Self::Type(rest.to_string())),
            "pick" | "p" => {
                if rest.is_empty() {
                    return Err(ReplParseError::MissingArgument("pick"));
                }
                rest.parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .map(Self::Pick)
                    .ok_or_else(|| ReplParseError::BadIndex(rest.to_string()))
            },
            "go" | "g" => Ok(Self::Go),
            "mode" | "m" => {
                if rest.is_empty() {
                    return Err(ReplParseError::MissingArgument("mode"));
                }
                rest.parse()
                    .map(Self::Mode)
                    .map_err(|e: domain::DomainError| ReplParseError::BadValue(e.to_string()))
            },
            "style" | "s" => {
                if rest.is_empty() {
                    return Err(ReplParseError::MissingArgument("style"));
                }
                rest.parse()
                    .map(Self::Style)
                    .map_err(|e: domain::DomainError| ReplParseError::BadValue(e.to_string()))
            },
            "more" | "less" => Ok(Self::More),
            "scene" => Ok(Self::Scene),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(ReplParseError::Unknown(word.to_string())),
        }
    }
}

/// Run until `quit` or end of input
pub async fn run(controller: &WidgetController, config: &AppConfig) -> anyhow::Result<()> {
    let mut presenter = scene_presenter(config, controller);
    presenter.present(&controller.state());

    println!("{}", controller.heading());
    let state = controller.state();
    println!(
        "Mode: {}  Style: {}  Origin: {}",
        state.travel_mode.label(),
        state.map_style.caption(),
        if state.origin_text.is_empty() { "-" } else { state.origin_text.as_str() }
    );
    println!("{HELP}");

    controller.focus_input();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ReplCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            },
        };
        debug!(?command, "REPL command");

        match command {
            ReplCommand::Type(text) => {
                controller.input_text(&text).await;
                let suggestions = controller.state().suggestions;
                if !suggestions.is_empty() {
                    print!("{}", render_suggestions(&suggestions));
                }
            },
            ReplCommand::Pick(index) => match controller.select_suggestion(index) {
                Some(place) => println!("Origin: {}", place.display_name),
                None => println!("No suggestion {}", index + 1),
            },
            ReplCommand::Go => {
                let outcome = controller.submit().await;
                report(controller, config, outcome);
            },
            ReplCommand::Mode(mode) => {
                let outcome = controller.set_mode(mode).await;
                if outcome == SubmitOutcome::Ignored {
                    println!("Mode: {}", mode.label());
                } else {
                    report(controller, config, outcome);
                }
            },
            ReplCommand::Style(style) => {
                controller.set_style(style);
                println!("Style: {}", style.caption());
            },
            ReplCommand::More => {
                controller.toggle_expanded();
                if let Some(view) = controller.direction_view() {
                    print!(
                        "{}",
                        render_directions(&view, config.widget.collapsed_step_count)
                    );
                }
            },
            ReplCommand::Scene => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(presenter.renderer().scene())?
                );
            },
            ReplCommand::Help => println!("{HELP}"),
            ReplCommand::Quit => break,
        }

        presenter.present(&controller.state());
    }

    Ok(())
}

fn report(controller: &WidgetController, config: &AppConfig, outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Displayed => {
            if let Some(view) = controller.direction_view() {
                print!(
                    "{}",
                    render_directions(&view, config.widget.collapsed_step_count)
                );
            }
        },
        SubmitOutcome::Failed(failure) => println!("{}", failure.user_message()),
        SubmitOutcome::Ignored => println!(
            "Type at least {} characters first",
            config.widget.min_query_chars
        ),
        SubmitOutcome::Superseded => {},
    }
}
