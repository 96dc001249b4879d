//! Audio service
//!
//! Chime playback through an audio gateway. A loaded sound handle is
//! released on every exit path, including when playback fails.

use crate::config;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tauri::AppHandle;
use tauri_plugin_shell::process::CommandChild;
use tauri_plugin_shell::ShellExt;
use tokio::sync::Mutex;

/// A loaded sound, ready to play exactly once
#[async_trait]
pub trait Sound: Send + Sync {
    async fn play(&self) -> Result<()>;

    /// Release the underlying resource. Safe to call after a failed play.
    async fn unload(&self) -> Result<()>;
}

/// Platform service that can load named sound resources
#[async_trait]
pub trait AudioGateway: Send + Sync {
    async fn load(&self, resource: &str) -> Result<Box<dyn Sound>>;
}

/// Plays the confirmation chime through whatever gateway is wired in
#[derive(Clone)]
pub struct ChimeService {
    gateway: Arc<dyn AudioGateway>,
}

impl ChimeService {
    pub fn new(gateway: Arc<dyn AudioGateway>) -> Self {
        Self { gateway }
    }

    /// Load, play, and release the chime. The unload step runs whether or
    /// not playback succeeded; its own failure is reported only when
    /// playback itself went through.
    pub async fn play_chime(&self) -> Result<()> {
        let sound = self.gateway.load(config::CHIME_RESOURCE).await?;

        let played = sound.play().await;
        let unloaded = sound.unload().await;

        played?;
        unloaded
    }
}

/// Audio gateway that spawns a system audio player process
pub struct ShellAudioGateway {
    app: AppHandle,
}

impl ShellAudioGateway {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

#[async_trait]
impl AudioGateway for ShellAudioGateway {
    async fn load(&self, resource: &str) -> Result<Box<dyn Sound>> {
        if resource != config::CHIME_RESOURCE {
            return Err(AppError::Generic(format!(
                "Unknown audio resource: {}",
                resource
            )));
        }

        let (player, source) = config::CHIME_SOURCES
            .iter()
            .find(|(_, source)| Path::new(source).exists())
            .ok_or_else(|| {
                AppError::GatewayUnavailable("No playable chime source found".to_string())
            })?;

        tracing::debug!("Chime source resolved: {} via {}", source, player);
        Ok(Box::new(ShellSound {
            app: self.app.clone(),
            player: player.to_string(),
            source: source.to_string(),
            child: Mutex::new(None),
        }))
    }
}

/// A chime backed by a spawned player process
struct ShellSound {
    app: AppHandle,
    player: String,
    source: String,
    child: Mutex<Option<CommandChild>>,
}

#[async_trait]
impl Sound for ShellSound {
    async fn play(&self) -> Result<()> {
        let (_events, child) = self
            .app
            .shell()
            .command(&self.player)
            .arg(&self.source)
            .spawn()
            .map_err(|e| {
                AppError::GatewayUnavailable(format!(
                    "Failed to start {}: {}",
                    self.player, e
                ))
            })?;

        *self.child.lock().await = Some(child);
        Ok(())
    }

    async fn unload(&self) -> Result<()> {
        if let Some(child) = self.child.lock().await.take() {
            // Short chimes usually finish on their own; kill covers an
            // early dismissal while the player is still running.
            if let Err(e) = child.kill() {
                tracing::debug!("Chime player already finished: {}", e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    #[derive(Default)]
    struct CallLog {
        calls: StdMutex<Vec<&'static str>>,
    }

    impl CallLog {
        fn push(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    struct FakeSound {
        log: Arc<CallLog>,
        fail_play: bool,
    }

    #[async_trait]
    impl Sound for FakeSound {
        async fn play(&self) -> Result<()> {
            self.log.push("play");
            if self.fail_play {
                return Err(AppError::GatewayUnavailable("no audio device".into()));
            }
            Ok(())
        }

        async fn unload(&self) -> Result<()> {
            self.log.push("unload");
            Ok(())
        }
    }

    struct FakeGateway {
        log: Arc<CallLog>,
        fail_play: bool,
    }

    #[async_trait]
    impl AudioGateway for FakeGateway {
        async fn load(&self, _resource: &str) -> Result<Box<dyn Sound>> {
            self.log.push("load");
            Ok(Box::new(FakeSound {
                log: self.log.clone(),
                fail_play: self.fail_play,
            }))
        }
    }

    fn create_test_service(fail_play: bool) -> (ChimeService, Arc<CallLog>) {
        let log = Arc::new(CallLog::default());
        let gateway = Arc::new(FakeGateway {
            log: log.clone(),
            fail_play,
        });
        (ChimeService::new(gateway), log)
    }

    #[tokio::test]
    async fn test_play_chime_loads_plays_unloads_in_order() {
        let (service, log) = create_test_service(false);

        service.play_chime().await.unwrap();

        assert_eq!(log.calls(), vec!["load", "play", "unload"]);
    }

    #[tokio::test]
    async fn test_failed_play_still_unloads() {
        let (service, log) = create_test_service(true);

        let result = service.play_chime().await;

        assert!(matches!(result, Err(AppError::GatewayUnavailable(_))));
        assert_eq!(log.calls(), vec!["load", "play", "unload"]);
    }
}
