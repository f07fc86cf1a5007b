//! Shared playback session state, mutated by both the input loop and the
//! playback watcher

use super::player::{PlayerSnapshot, PlayerState};
use super::queue::PlayQueue;
use super::types::Track;

/// Consecutive qualifying watcher ticks required before auto-advancing.
pub const DEFAULT_PAUSE_THRESHOLD: u32 = 2;

/// The single state block both threads touch: what is playing, the
/// repeat-one flag, the debounce counter and the play queue cursor.
///
/// Lives behind one `tokio::sync::Mutex`; every mutation goes through these
/// methods while the lock is held.
#[derive(Debug)]
pub struct PlaybackSession {
    pub now_playing: Option<Track>,
    pub repeat_one: bool,
    pause_count: u32,
    pause_threshold: u32,
    pub queue: PlayQueue,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_PAUSE_THRESHOLD)
    }

    pub fn with_threshold(pause_threshold: u32) -> Self {
        Self {
            now_playing: None,
            repeat_one: false,
            pause_count: 0,
            pause_threshold: pause_threshold.max(1),
            queue: PlayQueue::new(),
        }
    }

    /// Record an explicit play. Resetting the debounce counter here keeps a
    /// user-initiated play from being mistaken for a stale end-of-track.
    pub fn begin_track(&mut self, track: Track) {
        self.now_playing = Some(track);
        self.pause_count = 0;
    }

    pub fn toggle_repeat_one(&mut self) -> bool {
        self.repeat_one = !self.repeat_one;
        self.repeat_one
    }

    /// One watcher tick. Returns the track to (re)play, if any.
    ///
    /// A player sitting paused or stopped at position zero is the proxy for
    /// "track ended". Repeat-one replays immediately; a queued next track is
    /// only started once the condition has held for `pause_threshold`
    /// consecutive ticks, so a momentary pause or seek-to-zero never
    /// triggers an advance.
    pub fn on_player_tick(&mut self, snapshot: PlayerSnapshot) -> Option<Track> {
        let idle_at_start = matches!(snapshot.state, PlayerState::Paused | PlayerState::Stopped)
            && snapshot.position.is_zero();
        if !idle_at_start {
            self.pause_count = 0;
            return None;
        }

        if self.repeat_one {
            if let Some(track) = self.now_playing.clone() {
                self.pause_count = 0;
                return Some(track);
            }
        }

        if self.queue.has_next() {
            self.pause_count += 1;
            if self.pause_count >= self.pause_threshold {
                self.pause_count = 0;
                return self.queue.next();
            }
        }
        None
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn track(name: &str) -> Track {
        Track {
            track_name: name.to_string(),
            track_number: 1,
            album_name: "Album".to_string(),
            artist_name: "Artist".to_string(),
            track_uri: format!("spotify:track:{name}"),
            popularity: None,
        }
    }

    fn paused_at_zero() -> PlayerSnapshot {
        PlayerSnapshot {
            state: PlayerState::Paused,
            position: Duration::ZERO,
        }
    }

    fn playing_at(secs: u64) -> PlayerSnapshot {
        PlayerSnapshot {
            state: PlayerState::Playing,
            position: Duration::from_secs(secs),
        }
    }

    #[test]
    fn advances_after_exactly_two_qualifying_ticks() {
        let mut session = PlaybackSession::new();
        session.queue.enqueue_all(vec![track("t1"), track("t2")]);

        assert_eq!(session.on_player_tick(paused_at_zero()), None);
        let advanced = session.on_player_tick(paused_at_zero());
        assert_eq!(advanced.unwrap().track_name, "t1");
    }

    #[test]
    fn a_single_tick_followed_by_playback_never_advances() {
        let mut session = PlaybackSession::new();
        session.queue.enqueue(track("t1"));

        assert_eq!(session.on_player_tick(paused_at_zero()), None);
        assert_eq!(session.on_player_tick(playing_at(42)), None);
        // Counter was reset, so the next qualifying tick starts over.
        assert_eq!(session.on_player_tick(paused_at_zero()), None);
    }

    #[test]
    fn paused_mid_track_is_not_an_ending() {
        let mut session = PlaybackSession::new();
        session.queue.enqueue(track("t1"));
        let paused_mid = PlayerSnapshot {
            state: PlayerState::Paused,
            position: Duration::from_secs(90),
        };
        for _ in 0..5 {
            assert_eq!(session.on_player_tick(paused_mid), None);
        }
    }

    #[test]
    fn repeat_one_replays_the_current_track_immediately() {
        let mut session = PlaybackSession::new();
        session.queue.enqueue(track("queued"));
        session.begin_track(track("current"));
        session.repeat_one = true;

        let replayed = session.on_player_tick(paused_at_zero());
        assert_eq!(replayed.unwrap().track_name, "current");
        // Queue cursor untouched: repeat wins over advance.
        assert!(session.queue.has_next());
    }

    #[test]
    fn repeat_one_without_a_current_track_falls_back_to_the_queue() {
        let mut session = PlaybackSession::new();
        session.repeat_one = true;
        session.queue.enqueue(track("t1"));

        assert_eq!(session.on_player_tick(paused_at_zero()), None);
        let advanced = session.on_player_tick(paused_at_zero());
        assert_eq!(advanced.unwrap().track_name, "t1");
    }

    #[test]
    fn empty_queue_means_nothing_happens() {
        let mut session = PlaybackSession::new();
        for _ in 0..5 {
            assert_eq!(session.on_player_tick(paused_at_zero()), None);
        }
    }

    #[test]
    fn explicit_play_resets_the_debounce_counter() {
        let mut session = PlaybackSession::new();
        session.queue.enqueue_all(vec![track("t1"), track("t2")]);

        assert_eq!(session.on_player_tick(paused_at_zero()), None);
        session.begin_track(track("picked"));
        // The earlier qualifying tick no longer counts.
        assert_eq!(session.on_player_tick(paused_at_zero()), None);
    }
}
