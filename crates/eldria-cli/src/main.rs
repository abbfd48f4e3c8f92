//! CLI frontend for The Lost Realms of Eldria.

mod commands;
mod logging;
mod terminal;

use std::process;

use clap::{Args, Parser, Subcommand};

/// Typing delay used when none is given.
const DEFAULT_DELAY_MS: u64 = 30;

#[derive(Parser)]
#[command(
    name = "eldria",
    about = "The Lost Realms of Eldria, a text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (the default)
    Play(PlayArgs),

    /// List every location in the realm
    Locations {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Verify that every location has a scene
    Check,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Your name, skipping the name prompt
    #[arg(short, long)]
    name: Option<String>,

    /// Location to begin in (e.g. tavern, forest_path)
    #[arg(long)]
    start: Option<String>,

    /// Delay between typed characters, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Show text instantly instead of typing it out
    #[arg(long)]
    no_typing: bool,

    /// End the game after this many scenes
    #[arg(long)]
    max_steps: Option<u64>,

    /// Abort on navigation to a location without a scene
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Log navigation to a location without a scene and stay put
    #[arg(long)]
    lenient: bool,
}

impl PlayArgs {
    /// Explicit strict-navigation choice, if any flag was given.
    fn strict_navigation(&self) -> Option<bool> {
        if self.strict {
            Some(true)
        } else if self.lenient {
            Some(false)
        } else {
            None
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        None => commands::play::run(&PlayArgs {
            delay_ms: DEFAULT_DELAY_MS,
            ..PlayArgs::default()
        }),
        Some(Commands::Play(args)) => commands::play::run(&args),
        Some(Commands::Locations { json }) => commands::locations::run(json),
        Some(Commands::Check) => commands::check::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
