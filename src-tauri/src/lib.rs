//! TrashDay library
//!
//! This library exposes the core functionality of TrashDay for testing
//! and hosts the Tauri application entry point.

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;

/// Build and run the Tauri application
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_notification::init())
        .setup(|app| {
            tracing::info!("Running app setup");
            app::setup(app)?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_info,
            commands::get_settings,
            commands::set_reminder_enabled,
            commands::toggle_reminder_day,
            commands::set_reminder_time,
            commands::next_reminder_millis,
            commands::play_chime,
            commands::finish_splash,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
