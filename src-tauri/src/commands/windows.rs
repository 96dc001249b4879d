//! Window management commands
//!
//! The splash-to-main transition. The splash window is declared visible in
//! tauri.conf.json and the main window hidden; revealing swaps them.

use crate::config;
use crate::error::Result;
use tauri::{AppHandle, Manager};

/// Show and focus the main window, then close the splash window.
/// Idempotent: windows that are already gone are skipped.
pub fn reveal_main_window(app: &AppHandle) -> Result<()> {
    if let Some(main) = app.get_webview_window(config::MAIN_WINDOW_LABEL) {
        main.show()?;
        let _ = main.set_focus();
    }

    if let Some(splash) = app.get_webview_window(config::SPLASH_WINDOW_LABEL) {
        tracing::debug!("Closing splash window");
        let _ = splash.close();
    }

    tracing::info!("Main window revealed");
    Ok(())
}

/// Let the frontend end the splash early
#[tauri::command]
pub async fn finish_splash(app: AppHandle) -> Result<()> {
    reveal_main_window(&app)
}
