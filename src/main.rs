//! Password Tester — check a password against local wordlists or estimate
//! how long a brute-force attack would take.
//!
//! Thin binary entry point. All logic lives in the `pwtester-core`
//! and `pwtester-gui` crates.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use pwtester_core::config::AppConfig;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Password Tester starting");

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("{e} -- using default configuration");
        AppConfig::default()
    });
    tracing::info!("Wordlists directory: {}", config.wordlists_dir.display());

    let icon = pwtester_gui::icon::generate_icon(64);
    let state = pwtester_gui::state::AppState::new(config);

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Password Tester")
            .with_inner_size([900.0, 520.0])
            .with_min_inner_size([640.0, 360.0])
            .with_icon(icon),
        ..Default::default()
    };

    eframe::run_native(
        "Password Tester",
        options,
        Box::new(|cc| {
            Ok(Box::new(pwtester_gui::PasswordTesterApp::with_state(
                cc, state,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
