//! Session controller: translates key events into catalog, queue and
//! player operations.
//!
//! Organized into submodules by responsibility:
//!
//! - `input`: Key event handling and the command table
//! - `navigation`: Search, browse and history movement
//! - `playback`: Play queue and player control
//! - `watcher`: Background playback polling loop

mod input;
mod navigation;
mod playback;
mod watcher;

pub use input::Command;

use crossterm::event::KeyCode;

use crate::error::AppError;
use crate::model::{CatalogClient, PlayerClient, SessionModel};

#[derive(Clone)]
pub struct SessionController {
    pub(crate) model: SessionModel,
    pub(crate) catalog: CatalogClient,
    /// Absent when the session runs without user authorization; every
    /// playback command degrades to a flash message in that case.
    pub(crate) player: Option<PlayerClient>,
    pub(crate) username: Option<String>,
    pub(crate) quit_key: KeyCode,
}

impl SessionController {
    pub fn new(
        model: SessionModel,
        catalog: CatalogClient,
        player: Option<PlayerClient>,
        username: Option<String>,
        quit_key: KeyCode,
    ) -> Self {
        Self {
            model,
            catalog,
            player,
            username,
            quit_key,
        }
    }

    pub(crate) fn format_error(error: &AppError) -> String {
        let error_str = error.to_string();

        if error_str.contains("404") {
            "No active device found. Start playing on Spotify and try again.".to_string()
        } else if error_str.contains("403") {
            "Action forbidden. Check your Spotify Premium status.".to_string()
        } else if error_str.contains("401") {
            "Authentication expired. Please restart the app.".to_string()
        } else if error_str.contains("429") {
            "Rate limited. Please wait a moment.".to_string()
        } else {
            format!("Error: {error_str}")
        }
    }
}
