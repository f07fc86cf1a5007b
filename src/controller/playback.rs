//! Play queue and player control

use crate::model::{ResultItem, Track};

use super::SessionController;

impl SessionController {
    /// Start a track on the external player. The session records the track
    /// before the command is sent so the watcher's debounce counter resets
    /// even if the player is slow to pick it up.
    pub(crate) async fn play_track(&self, track: Track) {
        let Some(player) = self.player.clone() else {
            self.model.set_flash("Playback requires signing in").await;
            return;
        };

        {
            let mut session = self.model.session.lock().await;
            session.begin_track(track.clone());
        }

        if let Err(err) = player.play(&track).await {
            tracing::warn!(error = %err, uri = %track.track_uri, "play command failed");
            self.model.set_flash(Self::format_error(&err)).await;
        }
    }

    pub(crate) async fn play_pause(&self) {
        let Some(player) = self.player.clone() else {
            self.model.set_flash("Playback requires signing in").await;
            return;
        };
        if let Err(err) = player.play_pause().await {
            tracing::warn!(error = %err, "play/pause failed");
            self.model.set_flash(Self::format_error(&err)).await;
        }
    }

    pub(crate) async fn toggle_repeat_one(&self) {
        let on = {
            let mut session = self.model.session.lock().await;
            session.toggle_repeat_one()
        };
        self.model
            .set_flash(if on { "Repeat one: on" } else { "Repeat one: off" })
            .await;
    }

    pub(crate) async fn queue_next(&self) {
        let next = {
            let mut session = self.model.session.lock().await;
            session.queue.next()
        };
        match next {
            Some(track) => self.play_track(track).await,
            None => self.model.set_flash("End of play queue").await,
        }
    }

    pub(crate) async fn queue_prev(&self) {
        let prev = {
            let mut session = self.model.session.lock().await;
            session.queue.prev()
        };
        match prev {
            Some(track) => self.play_track(track).await,
            None => self.model.set_flash("Start of play queue").await,
        }
    }

    pub(crate) async fn enqueue_highlighted(&self) {
        let item = {
            let browser = self.model.browser.lock().await;
            browser.highlighted_item().cloned()
        };
        match item {
            Some(ResultItem::Track(track)) => {
                let name = track.track_name.clone();
                self.model.session.lock().await.queue.enqueue(track);
                self.model.set_flash(format!("Queued: {name}")).await;
            }
            Some(item) => {
                self.model
                    .set_flash(format!("Cannot queue a {}", item.category()))
                    .await
            }
            None => {}
        }
    }

    /// Queue every track in the current view, in display order.
    pub(crate) async fn enqueue_all(&self) {
        let tracks = {
            let browser = self.model.browser.lock().await;
            browser.results().tracks.clone()
        };
        if tracks.is_empty() {
            self.model.set_flash("No tracks in the current view").await;
            return;
        }
        let count = tracks.len();
        self.model.session.lock().await.queue.enqueue_all(tracks);
        self.model.set_flash(format!("Queued {count} tracks")).await;
    }

    pub(crate) async fn queue_clear(&self) {
        self.model.session.lock().await.queue.clear();
        self.model.set_flash("Play queue cleared").await;
    }
}
