//! External player facade
//!
//! Playback goes through the Spotify Web API against whatever Connect
//! device is currently active. The session core treats the player's
//! reported state as ground truth and never assumes a transition it did
//! not command itself.

use std::sync::Arc;
use std::time::Duration;

use rspotify::{
    model::{PlayableId, TrackId},
    prelude::*,
    AuthCodeSpotify,
};

use crate::error::AppError;
use super::types::Track;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// One polled observation of the external player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub state: PlayerState,
    pub position: Duration,
}

#[derive(Clone)]
pub struct PlayerClient {
    client: Arc<AuthCodeSpotify>,
}

impl PlayerClient {
    pub fn new(client: Arc<AuthCodeSpotify>) -> Self {
        Self { client }
    }

    pub async fn play(&self, track: &Track) -> Result<(), AppError> {
        let track_id = track
            .track_uri
            .split(':')
            .next_back()
            .unwrap_or(&track.track_uri);
        let id = TrackId::from_id(track_id)?;
        tracing::debug!(uri = %track.track_uri, "player: play track");
        self.client
            .start_uris_playback([PlayableId::Track(id)], None, None, None)
            .await
            .map_err(AppError::Player)?;
        Ok(())
    }

    pub async fn play_pause(&self) -> Result<(), AppError> {
        let snapshot = self.get_state().await?;
        tracing::debug!(state = ?snapshot.state, "player: toggle play/pause");
        match snapshot.state {
            PlayerState::Playing => self
                .client
                .pause_playback(None)
                .await
                .map_err(AppError::Player)?,
            PlayerState::Paused | PlayerState::Stopped => self
                .client
                .resume_playback(None, None)
                .await
                .map_err(AppError::Player)?,
        }
        Ok(())
    }

    /// Poll the player. No playback context at all reads as stopped at
    /// position zero.
    pub async fn get_state(&self) -> Result<PlayerSnapshot, AppError> {
        let playback = self
            .client
            .current_playback(None, None::<Vec<_>>)
            .await
            .map_err(AppError::Player)?;

        Ok(match playback {
            None => PlayerSnapshot {
                state: PlayerState::Stopped,
                position: Duration::ZERO,
            },
            Some(context) => {
                let position = context
                    .progress
                    .map(|p| Duration::from_millis(p.num_milliseconds().max(0) as u64))
                    .unwrap_or_default();
                let state = if context.is_playing {
                    PlayerState::Playing
                } else {
                    PlayerState::Paused
                };
                PlayerSnapshot { state, position }
            }
        })
    }
}
