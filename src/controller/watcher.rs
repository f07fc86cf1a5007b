//! Background playback polling loop
//!
//! Polls the external player on a fixed cadence and feeds each snapshot to
//! the session's tick handler, which decides whether to auto-advance. The
//! loop never touches the browser or history.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};

use super::SessionController;

const POLL_INTERVAL: Duration = Duration::from_millis(500);
const STATE_TIMEOUT: Duration = Duration::from_secs(2);

impl SessionController {
    /// Spawn the watcher task. Returns `None` when the session has no
    /// player to watch.
    pub fn spawn_watcher(&self) -> Option<JoinHandle<()>> {
        let player = self.player.clone()?;
        let controller = self.clone();
        Some(tokio::spawn(async move {
            tracing::debug!("watcher: started");
            loop {
                if controller.model.should_quit().await {
                    break;
                }
                match timeout(STATE_TIMEOUT, player.get_state()).await {
                    Ok(Ok(snapshot)) => {
                        let to_play = {
                            let mut session = controller.model.session.lock().await;
                            session.on_player_tick(snapshot)
                        };
                        if let Some(track) = to_play {
                            tracing::info!(uri = %track.track_uri, "watcher: advancing");
                            controller.play_track(track).await;
                        }
                    }
                    Ok(Err(err)) => {
                        tracing::warn!(error = %err, "watcher: player poll failed");
                    }
                    Err(_) => {
                        tracing::warn!("watcher: player poll timed out");
                    }
                }
                sleep(POLL_INTERVAL).await;
            }
            tracing::debug!("watcher: stopped");
        }))
    }
}
