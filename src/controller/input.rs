//! Key event handling and the command table

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::SessionController;

/// Every action a key can trigger. Dispatch matches exhaustively on this,
/// so the help text and the handler cannot drift apart silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    OpenSearchPrompt,
    Activate,
    PlayPause,
    CursorUp,
    CursorDown,
    AlbumFocusLeft,
    AlbumFocusRight,
    OpenTrackAlbum,
    OpenTrackArtist,
    HistoryBack,
    HistoryForward,
    ToggleRepeatOne,
    QueueNext,
    QueuePrev,
    QueueClear,
    EnqueueOne,
    EnqueueAll,
    ShowQueue,
    OpenUserPlaylists,
    ToggleHelp,
}

fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('s') => Some(Command::OpenSearchPrompt),
        KeyCode::Enter => Some(Command::Activate),
        KeyCode::Char(' ') => Some(Command::PlayPause),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::CursorDown),
        KeyCode::Left => Some(Command::AlbumFocusLeft),
        KeyCode::Right => Some(Command::AlbumFocusRight),
        KeyCode::Char('a') => Some(Command::OpenTrackAlbum),
        KeyCode::Char('x') => Some(Command::OpenTrackArtist),
        KeyCode::Char('h') => Some(Command::HistoryBack),
        KeyCode::Char('l') => Some(Command::HistoryForward),
        KeyCode::Char('r') => Some(Command::ToggleRepeatOne),
        KeyCode::Char('L') => Some(Command::QueueNext),
        KeyCode::Char('H') => Some(Command::QueuePrev),
        KeyCode::Char('C') => Some(Command::QueueClear),
        KeyCode::Char('+') => Some(Command::EnqueueOne),
        KeyCode::Char('A') => Some(Command::EnqueueAll),
        KeyCode::Char('u') => Some(Command::ShowQueue),
        KeyCode::Char('m') => Some(Command::OpenUserPlaylists),
        KeyCode::Char('?') => Some(Command::ToggleHelp),
        _ => None,
    }
}

impl SessionController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // The search prompt captures every key while open.
        let typing = {
            let ui = self.model.ui.lock().await;
            ui.input.is_some()
        };
        if typing {
            match key.code {
                KeyCode::Enter => {
                    let query = {
                        let mut ui = self.model.ui.lock().await;
                        ui.input.take().unwrap_or_default()
                    };
                    self.perform_search(&query).await;
                }
                KeyCode::Esc => {
                    self.model.ui.lock().await.input = None;
                }
                KeyCode::Backspace => {
                    if let Some(input) = self.model.ui.lock().await.input.as_mut() {
                        input.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(input) = self.model.ui.lock().await.input.as_mut() {
                        input.push(c);
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        // Any key closes the help popup.
        {
            let mut ui = self.model.ui.lock().await;
            if ui.show_help {
                ui.show_help = false;
                return Ok(());
            }
        }

        if key.code == self.quit_key || key.code == KeyCode::Esc {
            self.model.request_quit().await;
            return Ok(());
        }

        let Some(command) = command_for_key(key.code) else {
            return Ok(());
        };

        match command {
            Command::OpenSearchPrompt => {
                self.model.ui.lock().await.input = Some(String::new());
            }
            Command::Activate => self.activate_highlighted().await,
            Command::PlayPause => self.play_pause().await,
            Command::CursorUp => self.model.browser.lock().await.move_cursor(-1),
            Command::CursorDown => self.model.browser.lock().await.move_cursor(1),
            Command::AlbumFocusLeft => self.model.browser.lock().await.move_album_focus(-1),
            Command::AlbumFocusRight => self.model.browser.lock().await.move_album_focus(1),
            Command::OpenTrackAlbum => self.open_highlighted_track_album().await,
            Command::OpenTrackArtist => self.open_highlighted_track_artist().await,
            Command::HistoryBack => self.go_back().await,
            Command::HistoryForward => self.go_forward().await,
            Command::ToggleRepeatOne => self.toggle_repeat_one().await,
            Command::QueueNext => self.queue_next().await,
            Command::QueuePrev => self.queue_prev().await,
            Command::QueueClear => self.queue_clear().await,
            Command::EnqueueOne => self.enqueue_highlighted().await,
            Command::EnqueueAll => self.enqueue_all().await,
            Command::ShowQueue => self.show_queue().await,
            Command::OpenUserPlaylists => self.open_user_playlists().await,
            Command::ToggleHelp => {
                self.model.ui.lock().await.show_help = true;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_and_vi_keys_map_to_cursor_moves() {
        assert_eq!(command_for_key(KeyCode::Up), Some(Command::CursorUp));
        assert_eq!(command_for_key(KeyCode::Char('k')), Some(Command::CursorUp));
        assert_eq!(command_for_key(KeyCode::Down), Some(Command::CursorDown));
        assert_eq!(command_for_key(KeyCode::Char('j')), Some(Command::CursorDown));
    }

    #[test]
    fn queue_movement_uses_shifted_history_keys() {
        assert_eq!(command_for_key(KeyCode::Char('h')), Some(Command::HistoryBack));
        assert_eq!(command_for_key(KeyCode::Char('l')), Some(Command::HistoryForward));
        assert_eq!(command_for_key(KeyCode::Char('H')), Some(Command::QueuePrev));
        assert_eq!(command_for_key(KeyCode::Char('L')), Some(Command::QueueNext));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(command_for_key(KeyCode::Char('z')), None);
        assert_eq!(command_for_key(KeyCode::F(1)), None);
    }
}
