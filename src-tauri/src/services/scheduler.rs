//! Scheduler gateway
//!
//! Production notification gateway backed by a cron job scheduler. Every
//! instruction becomes one weekly cron job that fires a system
//! notification; job ids are tracked so cancel_all can clear them.

use crate::error::{AppError, Result};
use crate::services::reminders::{Instruction, InstructionId, NotificationGateway, Trigger};
use async_trait::async_trait;
use std::sync::Arc;
use tauri::AppHandle;
use tokio::sync::{Mutex, RwLock};
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

const CRON_DOW: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Weekly cron expression for a trigger (seconds-resolution syntax)
fn to_cron(trigger: &Trigger) -> Result<String> {
    let dow = CRON_DOW
        .get((trigger.weekday as usize).wrapping_sub(1))
        .ok_or_else(|| {
            AppError::Generic(format!("Weekday {} outside gateway range", trigger.weekday))
        })?;
    Ok(format!("0 {} {} * * {}", trigger.minute, trigger.hour, dow))
}

/// Notification gateway backed by tokio-cron-scheduler
pub struct SchedulerGateway {
    scheduler: Arc<RwLock<JobScheduler>>,
    app_handle: Arc<Mutex<Option<AppHandle>>>,
    active_jobs: Arc<RwLock<Vec<Uuid>>>,
}

impl SchedulerGateway {
    pub async fn new() -> Result<Self> {
        let scheduler = JobScheduler::new().await.map_err(|e| {
            AppError::GatewayUnavailable(format!("Failed to create scheduler: {}", e))
        })?;

        Ok(Self {
            scheduler: Arc::new(RwLock::new(scheduler)),
            app_handle: Arc::new(Mutex::new(None)),
            active_jobs: Arc::new(RwLock::new(Vec::new())),
        })
    }

    /// Set the app handle for notifications
    pub async fn set_app_handle(&self, handle: AppHandle) {
        let mut app = self.app_handle.lock().await;
        *app = Some(handle);
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<()> {
        let scheduler = self.scheduler.read().await;
        scheduler.start().await.map_err(|e| {
            AppError::GatewayUnavailable(format!("Failed to start scheduler: {}", e))
        })?;
        tracing::info!("Reminder scheduler started");
        Ok(())
    }

    /// Shutdown scheduler gracefully
    pub async fn shutdown(&self) -> Result<()> {
        let mut scheduler = self.scheduler.write().await;
        scheduler.shutdown().await.map_err(|e| {
            AppError::GatewayUnavailable(format!("Failed to shutdown scheduler: {}", e))
        })?;
        tracing::info!("Reminder scheduler shutdown");
        Ok(())
    }

    /// Number of jobs currently tracked
    pub async fn active_count(&self) -> usize {
        self.active_jobs.read().await.len()
    }
}

#[async_trait]
impl NotificationGateway for SchedulerGateway {
    async fn cancel_all(&self) -> Result<()> {
        let mut active = self.active_jobs.write().await;
        let scheduler = self.scheduler.write().await;

        // Ids stay tracked until their removal succeeds, so a failed call
        // leaves the remainder visible to the next attempt.
        while let Some(job_id) = active.last().copied() {
            scheduler.remove(&job_id).await.map_err(|e| {
                AppError::GatewayUnavailable(format!("Failed to cancel reminder job: {}", e))
            })?;
            active.pop();
        }

        tracing::info!("All scheduled reminders cancelled");
        Ok(())
    }

    async fn schedule(&self, instruction: Instruction) -> Result<InstructionId> {
        let cron_expr = to_cron(&instruction.trigger)?;
        let app_handle = Arc::clone(&self.app_handle);
        let Instruction { title, body, trigger } = instruction;

        let job = Job::new_async(cron_expr.clone(), move |_uuid, _l| {
            let app_handle = Arc::clone(&app_handle);
            let title = title.clone();
            let body = body.clone();
            Box::pin(async move {
                let app_handle = app_handle.lock().await;
                let Some(handle) = app_handle.as_ref() else {
                    tracing::warn!("Reminder fired before app handle was set");
                    return;
                };

                use tauri_plugin_notification::NotificationExt;
                if let Err(e) = handle
                    .notification()
                    .builder()
                    .title(&title)
                    .body(&body)
                    .show()
                {
                    tracing::error!("Failed to send notification: {}", e);
                } else {
                    tracing::info!("Trash reminder notification sent");
                }
            })
        })
        .map_err(|e| {
            AppError::GatewayUnavailable(format!("Failed to create reminder job: {}", e))
        })?;

        let job_id = job.guid();

        {
            let scheduler = self.scheduler.write().await;
            scheduler.add(job).await.map_err(|e| {
                AppError::GatewayUnavailable(format!("Failed to schedule reminder job: {}", e))
            })?;
        }

        self.active_jobs.write().await.push(job_id);

        tracing::info!(
            "Reminder scheduled for weekday {} at {:02}:{:02} ({})",
            trigger.weekday,
            trigger.hour,
            trigger.minute,
            cron_expr
        );
        Ok(job_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger(weekday: u32, hour: u32, minute: u32) -> Trigger {
        Trigger {
            weekday,
            hour,
            minute,
            repeats: true,
        }
    }

    #[test]
    fn test_to_cron_maps_gateway_weekdays() {
        assert_eq!(to_cron(&trigger(1, 18, 30)).unwrap(), "0 30 18 * * SUN");
        assert_eq!(to_cron(&trigger(4, 6, 5)).unwrap(), "0 5 6 * * WED");
        assert_eq!(to_cron(&trigger(7, 23, 59)).unwrap(), "0 59 23 * * SAT");
    }

    #[test]
    fn test_to_cron_rejects_out_of_range_weekday() {
        assert!(to_cron(&trigger(0, 9, 0)).is_err());
        assert!(to_cron(&trigger(8, 9, 0)).is_err());
    }

    #[tokio::test]
    async fn test_schedule_and_cancel_bookkeeping() {
        let gateway = SchedulerGateway::new().await.unwrap();

        let instruction = |weekday| Instruction {
            title: "Trash Reminder".to_string(),
            body: "test".to_string(),
            trigger: trigger(weekday, 8, 0),
        };

        gateway.schedule(instruction(2)).await.unwrap();
        gateway.schedule(instruction(5)).await.unwrap();
        assert_eq!(gateway.active_count().await, 2);

        gateway.cancel_all().await.unwrap();
        assert_eq!(gateway.active_count().await, 0);

        // Cancelling an empty set is a no-op
        gateway.cancel_all().await.unwrap();
        assert_eq!(gateway.active_count().await, 0);
    }
}
