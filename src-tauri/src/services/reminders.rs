//! Reminders service
//!
//! The scheduling policy: maps a settings snapshot to the exact set of
//! recurring notification instructions and applies it against the
//! notification gateway with a cancel-then-schedule sequence.

use crate::config;
use crate::error::{AppError, Result};
use crate::services::settings::{ReminderSettings, ReminderTime};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Identifier of one scheduled instruction, assigned by the gateway
pub type InstructionId = Uuid;

/// Recurrence of one instruction. The gateway weekday is 1-based with
/// 1 = Sunday .. 7 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trigger {
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub repeats: bool,
}

/// One recurring notification request sent to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    pub title: String,
    pub body: String,
    pub trigger: Trigger,
}

/// Platform service that holds the set of scheduled notifications
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Remove every scheduled instruction. Safe to call with none active.
    async fn cancel_all(&self) -> Result<()>;

    /// Install one recurring instruction
    async fn schedule(&self, instruction: Instruction) -> Result<InstructionId>;
}

/// Translate an internal day index (0 = Sunday) to the gateway encoding
fn gateway_weekday(day: usize) -> u32 {
    day as u32 + 1
}

/// Pure planning step: the instructions that should be active for a
/// given settings snapshot
pub fn plan(settings: &ReminderSettings) -> Vec<Instruction> {
    if !settings.enabled {
        return Vec::new();
    }

    settings
        .days
        .iter()
        .enumerate()
        .filter(|(_, selected)| **selected)
        .map(|(day, _)| Instruction {
            title: config::NOTIFICATION_TITLE.to_string(),
            body: config::NOTIFICATION_BODY.to_string(),
            trigger: Trigger {
                weekday: gateway_weekday(day),
                hour: settings.time.hour,
                minute: settings.time.minute,
                repeats: true,
            },
        })
        .collect()
}

/// Milliseconds until the next time the clock reads `time`, for display
/// only. The day selection is intentionally not consulted; the gateway's
/// own recurrence decides when notifications actually fire.
pub fn millis_until_next(now: NaiveDateTime, time: ReminderTime) -> i64 {
    let mut slot = now.date().and_time(time.to_naive());
    if slot < now {
        slot += chrono::Duration::days(1);
    }
    (slot - now).num_milliseconds()
}

/// Applies the scheduling policy against a notification gateway
#[derive(Clone)]
pub struct RemindersService {
    gateway: Arc<dyn NotificationGateway>,
    // At most one synchronize in flight; a later call waits here and then
    // runs its own cancel step first.
    sync_lock: Arc<Mutex<()>>,
}

impl RemindersService {
    pub fn new(gateway: Arc<dyn NotificationGateway>) -> Self {
        Self {
            gateway,
            sync_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Reconcile the gateway's active instructions with `settings`.
    ///
    /// Cancels everything unconditionally, then installs one instruction
    /// per selected weekday when enabled. A failed cancel aborts before
    /// any scheduling; a failed weekday does not stop the remaining ones.
    pub async fn synchronize(&self, settings: &ReminderSettings) -> Result<()> {
        let _guard = self.sync_lock.lock().await;

        self.gateway.cancel_all().await?;

        if !settings.enabled {
            tracing::info!("Reminders disabled, no instructions scheduled");
            return Ok(());
        }

        let instructions = plan(settings);
        let requested = instructions.len();
        let mut failed = 0;

        for instruction in instructions {
            let weekday = instruction.trigger.weekday;
            if let Err(e) = self.gateway.schedule(instruction).await {
                tracing::warn!("Failed to schedule weekday {}: {}", weekday, e);
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(AppError::PartialSchedule { requested, failed });
        }

        tracing::info!(
            "Scheduled {} reminder(s) at {:02}:{:02}",
            requested,
            settings.time.hour,
            settings.time.minute
        );
        Ok(())
    }
}
