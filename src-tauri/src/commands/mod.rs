//! Tauri commands exposed to the frontend
//!
//! This module organizes commands into logical submodules:
//! - `settings`: reminder settings mutators and projections
//! - `windows`: splash/main window transition
//! - `audio`: chime playback

pub mod audio;
pub mod settings;
pub mod windows;

use crate::error::Result;

// Re-export all commands for convenient registration in lib.rs
pub use audio::*;
pub use settings::*;
pub use windows::*;

// ===== General Commands =====

/// Get application information
#[tauri::command]
pub async fn get_app_info() -> Result<AppInfo> {
    Ok(AppInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Application information structure
#[derive(serde::Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}
