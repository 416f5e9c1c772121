//! Console player for adv interactive fiction stories.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::PlayConfig;

#[derive(Parser)]
#[command(
    name = "adv",
    about = "Play choice-based interactive fiction in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story
    Play {
        /// Story file (JSON)
        #[arg(default_value = "story.json")]
        story: PathBuf,

        /// Text shown for unavailable choices that have no reason of their own
        #[arg(long, default_value = config::DEFAULT_FALLBACK_REASON)]
        fallback_reason: String,

        /// Reject stories with non-end scenes that offer no choices
        #[arg(long)]
        deny_dead_ends: bool,
    },

    /// Validate a story and report warnings
    Check {
        /// Story file (JSON)
        #[arg(default_value = "story.json")]
        story: PathBuf,

        /// Reject stories with non-end scenes that offer no choices
        #[arg(long)]
        deny_dead_ends: bool,
    },

    /// List the scenes of a story
    Scenes {
        /// Story file (JSON)
        #[arg(default_value = "story.json")]
        story: PathBuf,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("ADV_LOG").unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            story,
            fallback_reason,
            deny_dead_ends,
        } => {
            let config = PlayConfig::default()
                .with_fallback_reason(fallback_reason)
                .with_deny_dead_ends(deny_dead_ends);
            commands::play::run(&story, &config)
        }
        Commands::Check {
            story,
            deny_dead_ends,
        } => {
            let config = PlayConfig::default().with_deny_dead_ends(deny_dead_ends);
            commands::check::run(&story, &config)
        }
        Commands::Scenes { story } => commands::scenes::run(&story, &PlayConfig::default()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
