//! Favorite launch commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted, print_success};
use crate::prefs::{self, FavoritesStore};

#[derive(Subcommand, Debug)]
pub enum FavoritesCommands {
    /// List favorite launch ids
    List,

    /// Add a launch to favorites, or remove it if already present
    Toggle {
        /// Launch id
        id: String,
    },
}

#[derive(Serialize)]
struct ToggleResult {
    id: String,
    favorite: bool,
}

pub async fn run(command: FavoritesCommands, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut store = FavoritesStore::load(prefs::open_storage());

    match command {
        FavoritesCommands::List => {
            print_formatted(&store.set().ids(), format, |ids| {
                if ids.is_empty() {
                    "No favorites yet".to_string()
                } else {
                    ids.join("\n")
                }
            });
        }
        FavoritesCommands::Toggle { id } => {
            let favorite = store.toggle(&id);
            let result = ToggleResult { id, favorite };
            match format {
                OutputFormat::Json => print_formatted(&result, format, |_| String::new()),
                OutputFormat::Text => {
                    let message = if result.favorite {
                        format!("Added {} to favorites", result.id)
                    } else {
                        format!("Removed {} from favorites", result.id)
                    };
                    print_success(&message, quiet);
                }
            }
        }
    }

    Ok(())
}
