//! Audio commands

use crate::app::AppState;
use crate::error::Result;
use tauri::State;

/// Play the confirmation chime once
#[tauri::command]
pub async fn play_chime(state: State<'_, AppState>) -> Result<()> {
    state.chime.play_chime().await
}
