//! Wallet import: desktop shell around the multi-source import screen

use eframe::egui;
use wallet_import_adapters::ImportScreenConfig;

mod app;
mod import_view;
mod ui;

fn main() -> eyre::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting wallet import");

    let config = ImportScreenConfig::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Wallet Import")
            .with_inner_size([560.0, 640.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wallet Import",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config, runtime)))),
    )
    .map_err(|e| eyre::eyre!("event loop failed: {e}"))
}
