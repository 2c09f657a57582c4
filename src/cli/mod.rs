//! CLI module for Mission Explorer
//!
//! Provides headless access to the launch catalogue and local preferences.
//! Running without a subcommand starts the GUI.

mod commands;
mod output;

use clap::{Parser, Subcommand};

pub use output::{OutputFormat, print_error};

/// Mission Explorer - SpaceX launch browser
#[derive(Parser, Debug)]
#[command(name = "mission-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List launches matching the given filters
    Launches(commands::launches::LaunchesArgs),

    /// List the years that have launches
    Years,

    /// Favorite launch management
    Favorites {
        #[command(subcommand)]
        command: commands::favorites::FavoritesCommands,
    },

    /// Light/dark theme preference
    Theme {
        #[command(subcommand)]
        command: commands::theme::ThemeCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run a CLI command
pub async fn run(command: Commands, options: &OutputOptions) -> anyhow::Result<()> {
    let format = options.format();
    let quiet = options.quiet;

    match command {
        Commands::Launches(args) => commands::launches::run(args, format, quiet).await,
        Commands::Years => commands::launches::years(format).await,
        Commands::Favorites { command } => commands::favorites::run(command, format, quiet).await,
        Commands::Theme { command } => commands::theme::run(command, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
    }
}
