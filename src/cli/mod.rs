// ABOUTME: CLI argument parsing and command routing for pluck
//
// Provides command-line interface for:
// - Launching the portfolio builder TUI (tui, default)
// - Listing published profiles (profiles)

pub mod profiles;

use clap::{Parser, Subcommand, ValueEnum};

/// Pluck - build and preview a mobile-first portfolio from the terminal
#[derive(Parser)]
#[command(name = "pluck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for commands
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// List published profiles from the hosted store
    Profiles,
}
