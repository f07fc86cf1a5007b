//! View module - UI rendering
//!
//! All rendering happens here, off owned snapshots of the model so no lock
//! is held while drawing. Organized by component:
//!
//! - `utils`: Shared formatting helpers
//! - `results`: The scrollable result browser
//! - `now_playing`: Playback status pane
//! - `overlays`: Modal overlays (search prompt, flash message, help)

mod now_playing;
mod overlays;
mod results;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{BrowserSnapshot, NowPlayingInfo, UiState};

/// Rows reserved below the result browser for the status pane.
pub const STATUS_PANE_HEIGHT: u16 = 4;
/// Rows the browser's block chrome consumes inside its area.
pub const BROWSER_CHROME_HEIGHT: u16 = 2;

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        browser: &BrowserSnapshot,
        playback: &NowPlayingInfo,
        ui_state: &UiState,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                        // Result browser
                Constraint::Length(STATUS_PANE_HEIGHT),    // Now playing
            ])
            .split(frame.area());

        results::render_results(frame, chunks[0], browser);
        now_playing::render_now_playing(frame, chunks[1], playback);

        if let Some(ref input) = ui_state.input {
            overlays::render_search_prompt(frame, input);
        }

        if let Some(ref flash) = ui_state.flash {
            overlays::render_flash(frame, flash);
        }

        if ui_state.show_help {
            overlays::render_help_popup(frame);
        }
    }
}
