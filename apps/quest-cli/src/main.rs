//! # quest-cli
//!
//! Command-line interface for Eternal Quest.
//!
//! Tracks goals and the points they earn:
//! - `quest new` — create a simple, eternal, or checklist goal
//! - `quest record <name>` — record one progress event on a goal
//! - `quest list` / `quest score` — inspect goals and the running score
//! - `quest shell` — interactive session with the same operations
//!
//! State lives under `<data-root>/.quest/`: a flat-text save file and a
//! JSONL event log.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::QuestConfig;

/// Eternal Quest CLI — track goals, record progress, earn points.
#[derive(Parser)]
#[command(name = "quest", version, about)]
struct Cli {
    /// Directory the `.quest/` state lives under (defaults to current directory).
    #[arg(long, default_value = ".")]
    data_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new goal.
    New {
        /// Goal kind: Simple, Eternal, or Checklist.
        kind: String,
        /// Goal name (the lookup key for `record`).
        name: String,
        /// Points awarded per progress event.
        #[arg(long)]
        points: u32,
        /// Checklist only: progress events needed to complete.
        #[arg(long)]
        target: Option<u32>,
        /// Checklist only: bonus awarded on the completing event.
        #[arg(long)]
        bonus: Option<u32>,
    },
    /// Record one progress event on a goal.
    Record {
        /// Goal name.
        name: String,
    },
    /// List goals with their status and the current score.
    List,
    /// Show the current score.
    Score,
    /// Start an interactive session.
    Shell,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interfere with command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let config = QuestConfig::for_root(&cli.data_root);
    tracing::debug!(data_root = %config.data_root.display(), "quest starting");

    match &cli.command {
        Commands::New {
            kind,
            name,
            points,
            target,
            bonus,
        } => commands::goal::create(&config, kind, name, *points, *target, *bonus),
        Commands::Record { name } => commands::goal::record(&config, name),
        Commands::List => commands::goal::list(&config),
        Commands::Score => commands::goal::score(&config),
        Commands::Shell => commands::shell::execute(&config),
    }
}
