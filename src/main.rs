// Hide console window in release builds (Windows GUI app)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod cli;
mod config;
mod debounce;
mod filter;
mod prefs;
mod state;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;

/// Initialize logging; RUST_LOG overrides the default filter
fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_gui() -> Result<()> {
    let config = Config::load().unwrap_or_default();

    // Configure native options
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([config.window.width, config.window.height])
        .with_min_inner_size([480.0, 420.0])
        .with_title("SpaceX Mission Explorer");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Mission Explorer",
        native_options,
        Box::new(|cc| Ok(Box::new(app::ExplorerApp::new(cc)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        init_logging("mission_explorer=debug,info");
        tracing::info!("Starting Mission Explorer");
        return run_gui();
    };

    init_logging(if cli.output.verbose {
        "mission_explorer=debug,info"
    } else {
        "warn"
    });

    if let Err(e) = cli::run(command, &cli.output).await {
        cli::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
