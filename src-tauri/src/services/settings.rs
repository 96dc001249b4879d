//! Settings service
//!
//! In-memory reminder settings and their three mutators. Settings are not
//! persisted; a process restart resets them to the launch defaults.

use crate::config;
use crate::error::{AppError, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Wall-clock time of day for the reminder, no timezone or date component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderTime {
    pub hour: u32,
    pub minute: u32,
}

impl ReminderTime {
    /// Build a reminder time, rejecting values outside the clock range
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Hour and minute are valid by construction
    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for ReminderTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

/// Reminder configuration as shown on the main screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderSettings {
    pub enabled: bool,
    pub time: ReminderTime,
    /// Index 0 = Sunday .. index 6 = Saturday
    pub days: [bool; 7],
}

impl ReminderSettings {
    /// Launch defaults: enabled, one weekday selected, reminder time set to
    /// the moment the application started
    pub fn at_launch(now: NaiveTime) -> Self {
        let mut days = [false; 7];
        days[config::DEFAULT_REMINDER_DAY] = true;
        Self {
            enabled: true,
            time: ReminderTime::from(now),
            days,
        }
    }

    /// Number of weekdays currently selected
    pub fn selected_count(&self) -> usize {
        self.days.iter().filter(|selected| **selected).count()
    }
}

/// Service holding the live settings value
///
/// Mutators return the new snapshot; the command layer follows each
/// completed mutation with an explicit `RemindersService::synchronize`.
#[derive(Clone)]
pub struct SettingsService {
    state: Arc<RwLock<ReminderSettings>>,
}

impl SettingsService {
    pub fn new(initial: ReminderSettings) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
        }
    }

    /// Current settings snapshot
    pub async fn snapshot(&self) -> ReminderSettings {
        self.state.read().await.clone()
    }

    /// Set the enabled flag and return the new snapshot
    pub async fn set_enabled(&self, enabled: bool) -> ReminderSettings {
        let mut state = self.state.write().await;
        state.enabled = enabled;
        tracing::info!("Reminder enabled set to {}", enabled);
        state.clone()
    }

    /// Flip one weekday and return the new snapshot
    pub async fn toggle_day(&self, day: usize) -> Result<ReminderSettings> {
        if day >= 7 {
            return Err(AppError::InvalidDay(day));
        }
        let mut state = self.state.write().await;
        state.days[day] = !state.days[day];
        tracing::info!("Reminder day {} toggled to {}", day, state.days[day]);
        Ok(state.clone())
    }

    /// Replace the reminder time and return the new snapshot
    pub async fn set_time(&self, time: ReminderTime) -> ReminderSettings {
        let mut state = self.state.write().await;
        state.time = time;
        tracing::info!(
            "Reminder time set to {:02}:{:02}",
            time.hour,
            time.minute
        );
        state.clone()
    }
}
