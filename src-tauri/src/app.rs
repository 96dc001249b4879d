//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::commands::windows::reveal_main_window;
use crate::config;
use crate::error::{AppError, Result};
use crate::services::{
    ChimeService, ReminderSettings, RemindersService, SchedulerGateway, SettingsService,
    ShellAudioGateway,
};
use std::sync::Arc;
use std::time::Duration;
use tauri::{App, Manager};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub settings: SettingsService,
    pub reminders: RemindersService,
    pub chime: ChimeService,
}

/// Application setup - called once on startup
pub fn setup(app: &mut App) -> Result<()> {
    tracing::info!("Initializing application");

    let handle = app.handle().clone();

    let gateway = tauri::async_runtime::block_on(async {
        let gateway = SchedulerGateway::new().await?;
        gateway.set_app_handle(handle.clone()).await;
        gateway.start().await?;
        Ok::<_, AppError>(gateway)
    })?;

    let settings = SettingsService::new(ReminderSettings::at_launch(
        chrono::Local::now().time(),
    ));
    let reminders = RemindersService::new(Arc::new(gateway));
    let chime = ChimeService::new(Arc::new(ShellAudioGateway::new(handle.clone())));

    app.manage(AppState {
        settings: settings.clone(),
        reminders: reminders.clone(),
        chime,
    });

    // Defaults start enabled, so bring the gateway in line with them
    // before the user touches anything.
    tauri::async_runtime::spawn(async move {
        let snapshot = settings.snapshot().await;
        if let Err(e) = reminders.synchronize(&snapshot).await {
            tracing::warn!("Initial reminder synchronize failed: {}", e);
        }
    });

    // Splash timer: reveal the main window after the fixed delay. The
    // frontend can finish earlier through the finish_splash command.
    tauri::async_runtime::spawn(async move {
        tokio::time::sleep(Duration::from_millis(config::SPLASH_DURATION_MS)).await;
        if let Err(e) = reveal_main_window(&handle) {
            tracing::warn!("Failed to reveal main window: {}", e);
        }
    });

    tracing::info!("Application initialized successfully");
    Ok(())
}
