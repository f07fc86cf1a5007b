//! Shared application state handed to the input loop, the watcher and the
//! renderer. Every field sits behind its own mutex; accessors lock
//! internally so callers never juggle guards.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::browser::{BrowserSnapshot, ResultBrowser};
use super::history::HistoryStacks;
use super::session::PlaybackSession;
use super::types::Track;

const FLASH_TTL: Duration = Duration::from_secs(5);

/// Transient interface state: the search prompt, the help popup and the
/// flash message line.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// `Some` while the search prompt is open, holding the typed text.
    pub input: Option<String>,
    pub show_help: bool,
    pub flash: Option<String>,
    pub flash_at: Option<Instant>,
}

/// What the status pane needs to know about playback.
#[derive(Clone, Debug)]
pub struct NowPlayingInfo {
    pub track: Option<Track>,
    pub repeat_one: bool,
    pub queue_position: Option<usize>,
    pub queue_len: usize,
}

#[derive(Clone)]
pub struct SessionModel {
    pub session: Arc<Mutex<PlaybackSession>>,
    pub browser: Arc<Mutex<ResultBrowser>>,
    pub history: Arc<Mutex<HistoryStacks>>,
    pub ui: Arc<Mutex<UiState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl SessionModel {
    pub fn new(pause_threshold: u32, page_height: usize) -> Self {
        Self {
            session: Arc::new(Mutex::new(PlaybackSession::with_threshold(pause_threshold))),
            browser: Arc::new(Mutex::new(ResultBrowser::new(page_height))),
            history: Arc::new(Mutex::new(HistoryStacks::new())),
            ui: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn request_quit(&self) {
        *self.should_quit.lock().await = true;
    }

    pub async fn set_flash(&self, message: impl Into<String>) {
        let mut ui = self.ui.lock().await;
        ui.flash = Some(message.into());
        ui.flash_at = Some(Instant::now());
    }

    /// Expire the flash message once it has been on screen long enough.
    pub async fn auto_clear_old_flash(&self) {
        let mut ui = self.ui.lock().await;
        if let Some(at) = ui.flash_at {
            if at.elapsed() > FLASH_TTL {
                ui.flash = None;
                ui.flash_at = None;
            }
        }
    }

    pub async fn set_page_height(&self, height: usize) {
        self.browser.lock().await.set_page_height(height);
    }

    pub async fn browser_snapshot(&self) -> BrowserSnapshot {
        self.browser.lock().await.snapshot()
    }

    pub async fn ui_snapshot(&self) -> UiState {
        self.ui.lock().await.clone()
    }

    pub async fn now_playing_info(&self) -> NowPlayingInfo {
        let session = self.session.lock().await;
        NowPlayingInfo {
            track: session.now_playing.clone(),
            repeat_one: session.repeat_one,
            queue_position: session.queue.position(),
            queue_len: session.queue.len(),
        }
    }
}
