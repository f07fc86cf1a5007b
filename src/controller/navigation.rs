//! Search, browse and history movement

use crate::model::{ResultItem, ResultSet, ViewLine};

use super::SessionController;

const MIN_QUERY_LEN: usize = 3;

impl SessionController {
    /// Display a new result set, recording the one it replaces. An empty
    /// current view (startup) is not worth a history entry, and a
    /// value-equal set is a redraw, not a navigation.
    ///
    /// Lock order is browser before history, everywhere.
    pub(crate) async fn navigate(&self, results: ResultSet) {
        let mut browser = self.model.browser.lock().await;
        let current = browser.results().clone();
        if current == results {
            return;
        }
        if !current.is_empty() {
            self.model.history.lock().await.record(current);
        }
        browser.set_results(results);
    }

    pub(crate) async fn go_back(&self) {
        let mut browser = self.model.browser.lock().await;
        let current = browser.results().clone();
        let previous = self.model.history.lock().await.go_back(current);
        match previous {
            Some(results) => browser.set_results(results),
            None => {
                drop(browser);
                self.model.set_flash("Nothing to go back to").await;
            }
        }
    }

    pub(crate) async fn go_forward(&self) {
        let mut browser = self.model.browser.lock().await;
        let current = browser.results().clone();
        let next = self.model.history.lock().await.go_forward(current);
        match next {
            Some(results) => browser.set_results(results),
            None => {
                drop(browser);
                self.model.set_flash("Nothing to go forward to").await;
            }
        }
    }

    /// Run a full search. Failures keep the previous view on screen.
    pub(crate) async fn perform_search(&self, query: &str) {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            tracing::debug!(query, "search skipped, query too short");
            return;
        }
        match self.catalog.full_search(query).await {
            Ok(results) if results.is_empty() => {
                self.model.set_flash(format!("No results for '{query}'")).await;
            }
            Ok(results) => self.navigate(results).await,
            Err(err) => {
                tracing::warn!(error = %err, query, "search failed");
                self.model.set_flash(Self::format_error(&err)).await;
            }
        }
    }

    /// Act on the highlighted row: play a track, open anything else.
    pub(crate) async fn activate_highlighted(&self) {
        let line = {
            let browser = self.model.browser.lock().await;
            browser.highlighted().cloned()
        };
        let Some(line) = line else {
            return;
        };

        match line {
            ViewLine::AlbumArt => {
                let album = {
                    let browser = self.model.browser.lock().await;
                    browser.active_album().cloned()
                };
                if let Some(album) = album {
                    self.open_album(&album.album_id).await;
                }
            }
            ViewLine::Item(ResultItem::Track(track)) => self.play_track(track).await,
            ViewLine::Item(ResultItem::Album(album)) => self.open_album(&album.album_id).await,
            ViewLine::Item(ResultItem::Artist(artist)) => {
                self.open_artist(&artist.artist_id).await
            }
            ViewLine::Item(ResultItem::Playlist(playlist)) => {
                self.open_playlist(&playlist.playlist_id).await
            }
            ViewLine::Item(ResultItem::SectionHeader(_)) => {}
        }
    }

    pub(crate) async fn open_album(&self, album_id: &str) {
        match self.catalog.get_album(album_id).await {
            Ok(results) => self.navigate(results).await,
            Err(err) => {
                tracing::warn!(error = %err, album_id, "album fetch failed");
                self.model.set_flash(Self::format_error(&err)).await;
            }
        }
    }

    pub(crate) async fn open_artist(&self, artist_id: &str) {
        match self.catalog.get_artist(artist_id).await {
            Ok(results) => self.navigate(results).await,
            Err(err) => {
                tracing::warn!(error = %err, artist_id, "artist fetch failed");
                self.model.set_flash(Self::format_error(&err)).await;
            }
        }
    }

    pub(crate) async fn open_playlist(&self, playlist_id: &str) {
        match self.catalog.get_playlist(playlist_id).await {
            Ok(results) => self.navigate(results).await,
            Err(err) => {
                tracing::warn!(error = %err, playlist_id, "playlist fetch failed");
                self.model.set_flash(Self::format_error(&err)).await;
            }
        }
    }

    pub(crate) async fn open_user_playlists(&self) {
        let Some(username) = self.username.clone() else {
            self.model.set_flash("No username configured").await;
            return;
        };
        match self.catalog.get_user_playlists(&username).await {
            Ok(results) if results.is_empty() => {
                self.model
                    .set_flash(format!("No public playlists for '{username}'"))
                    .await;
            }
            Ok(results) => self.navigate(results).await,
            Err(err) => {
                tracing::warn!(error = %err, username, "playlist listing failed");
                self.model.set_flash(Self::format_error(&err)).await;
            }
        }
    }

    /// Jump from the highlighted track to its album.
    pub(crate) async fn open_highlighted_track_album(&self) {
        let Some(track) = self.highlighted_track().await else {
            return;
        };
        match self.catalog.find_album_by_name(&track.album_name).await {
            Ok(Some(album)) => self.open_album(&album.album_id).await,
            Ok(None) => {
                self.model
                    .set_flash(format!("Album '{}' not found", track.album_name))
                    .await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "album lookup failed");
                self.model.set_flash(Self::format_error(&err)).await;
            }
        }
    }

    pub(crate) async fn open_highlighted_track_artist(&self) {
        let Some(track) = self.highlighted_track().await else {
            return;
        };
        match self.catalog.find_artist_by_name(&track.artist_name).await {
            Ok(Some(artist)) => self.open_artist(&artist.artist_id).await,
            Ok(None) => {
                self.model
                    .set_flash(format!("Artist '{}' not found", track.artist_name))
                    .await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "artist lookup failed");
                self.model.set_flash(Self::format_error(&err)).await;
            }
        }
    }

    /// Open the play queue as a browsable track list.
    pub(crate) async fn show_queue(&self) {
        let tracks = {
            let session = self.model.session.lock().await;
            session.queue.tracks().to_vec()
        };
        if tracks.is_empty() {
            self.model.set_flash("Play queue is empty").await;
            return;
        }
        self.navigate(ResultSet::from_tracks(tracks)).await;
    }

    async fn highlighted_track(&self) -> Option<crate::model::Track> {
        let browser = self.model.browser.lock().await;
        match browser.highlighted_item() {
            Some(ResultItem::Track(track)) => Some(track.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyCode;
    use rspotify::AuthCodeSpotify;

    use crate::model::{CatalogClient, ResultSet, SessionModel, Track};

    use super::super::SessionController;

    fn controller() -> SessionController {
        let client = Arc::new(AuthCodeSpotify::default());
        SessionController::new(
            SessionModel::new(2, 10),
            CatalogClient::new(client),
            None,
            None,
            KeyCode::Char('q'),
        )
    }

    fn results(name: &str) -> ResultSet {
        ResultSet::from_tracks(vec![Track {
            track_name: name.to_string(),
            track_number: 1,
            album_name: "Album".to_string(),
            artist_name: "Artist".to_string(),
            track_uri: format!("spotify:track:{name}"),
            popularity: None,
        }])
    }

    #[tokio::test]
    async fn navigating_to_the_same_view_records_no_history() {
        let controller = controller();

        controller.navigate(results("a")).await;
        // Re-opening the identical view, as with a repeated show-queue.
        controller.navigate(results("a")).await;
        assert!(!controller.model.history.lock().await.can_go_back());

        controller.navigate(results("b")).await;
        assert!(controller.model.history.lock().await.can_go_back());

        controller.go_back().await;
        let shown = controller.model.browser.lock().await.results().clone();
        assert_eq!(shown, results("a"));
        assert!(!controller.model.history.lock().await.can_go_back());
    }
}
