//! Settings-related commands
//!
//! The three reminder mutators plus the read-only projections. Every
//! completed mutation is followed by an explicit synchronize so the
//! gateway's instruction set always matches the latest snapshot —
//! disabling included.

use crate::app::AppState;
use crate::error::Result;
use crate::services::reminders::millis_until_next;
use crate::services::settings::{ReminderSettings, ReminderTime};
use tauri::State;

/// Current reminder settings for rendering
#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<ReminderSettings> {
    Ok(state.settings.snapshot().await)
}

/// Enable or disable the reminder and reconcile the schedule
#[tauri::command]
pub async fn set_reminder_enabled(
    state: State<'_, AppState>,
    enabled: bool,
) -> Result<ReminderSettings> {
    let settings = state.settings.set_enabled(enabled).await;
    state.reminders.synchronize(&settings).await?;
    Ok(settings)
}

/// Flip one weekday (0 = Sunday .. 6 = Saturday) and reconcile the schedule
#[tauri::command]
pub async fn toggle_reminder_day(
    state: State<'_, AppState>,
    day: usize,
) -> Result<ReminderSettings> {
    let settings = state.settings.toggle_day(day).await?;
    state.reminders.synchronize(&settings).await?;
    Ok(settings)
}

/// Set a new reminder time and reconcile the schedule.
///
/// A dismissed picker arrives with both fields absent; that is a cancelled
/// operation, not an error — nothing changes and nothing is rescheduled.
#[tauri::command]
pub async fn set_reminder_time(
    state: State<'_, AppState>,
    hour: Option<u32>,
    minute: Option<u32>,
) -> Result<ReminderSettings> {
    let (Some(hour), Some(minute)) = (hour, minute) else {
        tracing::debug!("Time selection dismissed without a value");
        return Ok(state.settings.snapshot().await);
    };

    let time = ReminderTime::new(hour, minute)?;
    let settings = state.settings.set_time(time).await;
    state.reminders.synchronize(&settings).await?;
    Ok(settings)
}

/// Milliseconds until the clock next reads the reminder time.
///
/// Display-only countdown; it does not consult the day selection.
#[tauri::command]
pub async fn next_reminder_millis(state: State<'_, AppState>) -> Result<i64> {
    let settings = state.settings.snapshot().await;
    Ok(millis_until_next(
        chrono::Local::now().naive_local(),
        settings.time,
    ))
}
