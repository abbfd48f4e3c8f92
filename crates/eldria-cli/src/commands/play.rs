//! Play the game in the terminal.

use std::io::{self, IsTerminal};
use std::process;
use std::time::Duration;

use eldria_fiction::{FictionError, Location, StopReason};
use eldria_story::{Place, build_engine, default_config, intro};

use crate::PlayArgs;
use crate::terminal::{TerminalConsole, TypingConfig, write_farewell};

pub fn run(args: &PlayArgs) -> Result<(), String> {
    let mut config = default_config();
    if let Some(start) = &args.start {
        let place = Place::resolve(start).map_err(|e| e.to_string())?;
        config = config.with_start(place);
    }
    if let Some(strict) = args.strict_navigation() {
        config = config.with_strict_navigation(strict);
    }
    if let Some(steps) = args.max_steps {
        config = config.with_max_steps(steps);
    }

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    // Ctrl-C ends the game with the same farewell as closing input.
    ctrlc::set_handler(|| {
        tracing::info!("interrupted, leaving the game");
        let _ = write_farewell(&mut io::stdout());
        process::exit(0);
    })
    .map_err(|e| format!("cannot install interrupt handler: {e}"))?;

    let typing = TypingConfig::default()
        .with_delay(Duration::from_millis(args.delay_ms))
        .with_enabled(!args.no_typing);
    let mut console = TerminalConsole::stdio(typing);
    console
        .line("Starting The Lost Realms of Eldria...")
        .map_err(|e| e.to_string())?;

    let name = match intro(&mut console, args.name.as_deref()) {
        Ok(name) => name,
        Err(FictionError::Interrupted) => {
            tracing::info!("input closed during the introduction");
            return console.farewell().map_err(|e| e.to_string());
        }
        Err(e) => return Err(e.to_string()),
    };

    let mut engine = build_engine(config);
    let summary = engine.run(&mut console).map_err(|e| e.to_string())?;

    tracing::info!(
        player = %name,
        steps = summary.steps,
        visited = summary.locations_visited,
        final_location = summary.final_location.map(|p| p.key()).unwrap_or("none"),
        reason = ?summary.reason,
        "game over"
    );

    if summary.reason == StopReason::StepLimit {
        console
            .line(&format!("\nThe tale pauses after {} scenes.", summary.steps))
            .map_err(|e| e.to_string())?;
    }
    console.farewell().map_err(|e| e.to_string())
}
