//! Theme preference commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted};
use crate::prefs::{self, ThemeStore};

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show whether dark mode is enabled
    Show,

    /// Switch between light and dark mode
    Toggle,
}

#[derive(Serialize)]
struct ThemeResult {
    dark_mode: bool,
}

fn describe(result: &ThemeResult) -> String {
    if result.dark_mode {
        "Dark mode".to_string()
    } else {
        "Light mode".to_string()
    }
}

pub async fn run(command: ThemeCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut store = ThemeStore::load(prefs::open_storage());

    let dark_mode = match command {
        ThemeCommands::Show => store.is_dark(),
        ThemeCommands::Toggle => store.toggle(),
    };

    if !quiet || format == OutputFormat::Json {
        print_formatted(&ThemeResult { dark_mode }, format, describe);
    }
    Ok(())
}
