use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use client_core::{load_settings, SettingsOverrides};
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::FactsApp;

#[derive(Parser, Debug)]
#[command(name = "facts_today", about = "Browse, share, and vote on short facts")]
struct Args {
    /// Settings file (TOML). Defaults to ./facts_today.toml, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Base URL of the hosted fact store, e.g. https://<project>.supabase.co
    #[arg(long)]
    store_url: Option<String>,
    /// Public (anon) API key for the fact store.
    #[arg(long)]
    anon_key: Option<String>,
}

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let overrides = SettingsOverrides {
        store_url: args.store_url,
        anon_key: args.anon_key,
    };
    let settings = load_settings(args.config.as_deref(), &overrides);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::panels::APP_TITLE)
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        ui::panels::APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(FactsApp::new(cmd_tx, ui_rx)))),
    )
}
