//! Application configuration constants
//!
//! Central location for all configuration constants and validation
//! boundaries used throughout the application.

// ===== Windows =====

/// Label of the splash window declared in tauri.conf.json
pub const SPLASH_WINDOW_LABEL: &str = "splash";

/// Label of the main settings window declared in tauri.conf.json
pub const MAIN_WINDOW_LABEL: &str = "main";

/// How long the splash window stays up before the main window is revealed
pub const SPLASH_DURATION_MS: u64 = 5_000;

// ===== Reminders =====

/// Title of the scheduled trash notification
pub const NOTIFICATION_TITLE: &str = "Trash Reminder";

/// Body of the scheduled trash notification
pub const NOTIFICATION_BODY: &str = "Don't forget to take out the trash!";

/// Weekday selected by a fresh settings value (0 = Sunday .. 6 = Saturday).
/// Index 2 translates to gateway weekday 3.
pub const DEFAULT_REMINDER_DAY: usize = 2;

// ===== Audio =====

/// Logical name of the chime resource handed to the audio gateway
pub const CHIME_RESOURCE: &str = "chime";

/// Candidate (player, sound file) pairs tried in order until one whose
/// sound file exists is found.
pub const CHIME_SOURCES: &[(&str, &str)] = &[
    ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
    ("aplay", "/usr/share/sounds/alsa/Front_Center.wav"),
    ("afplay", "/System/Library/Sounds/Glass.aiff"),
];
