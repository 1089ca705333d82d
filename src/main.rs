// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod analysis;
mod api;
mod app;
mod chat;
mod config;
mod dispatch;
mod file;
mod input;
mod state;
mod ui;

use app::{CyberAgentApp, APP_TITLE};
use config::ClientSettings;

fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let settings_path = ClientSettings::default_path();
    let settings = ClientSettings::load(settings_path.as_deref())?;
    init_logging(&settings.log_filter);

    if let Some(path) = &settings_path {
        match file::settings::write_default_if_missing(path) {
            Ok(true) => info!(path = %path.display(), "Wrote default settings"),
            Ok(false) => {}
            Err(e) => warn!("Could not write default settings: {:#}", e),
        }
    }
    info!(api = %settings.api_base_url, timeout_secs = settings.request_timeout_secs, "Starting client");

    let app = CyberAgentApp::new(&settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Box::new(app.with_repaint(&cc.egui_ctx))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
