//! Services module
//!
//! Business logic services that coordinate between commands and the
//! platform gateways.

pub mod audio;
pub mod reminders;
pub mod scheduler;
pub mod settings;

pub use audio::{AudioGateway, ChimeService, ShellAudioGateway, Sound};
pub use reminders::{millis_until_next, plan, NotificationGateway, RemindersService};
pub use scheduler::SchedulerGateway;
pub use settings::{ReminderSettings, ReminderTime, SettingsService};
