//! Playback status pane

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::NowPlayingInfo;

pub fn render_now_playing(frame: &mut Frame, area: Rect, playback: &NowPlayingInfo) {
    let track_line = match &playback.track {
        Some(track) => Line::from(vec![
            Span::styled(
                track.track_name.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(track.artist_name.clone(), Style::default().fg(Color::White)),
        ]),
        None => Line::from(Span::styled(
            "Nothing playing",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let mut status = Vec::new();
    if playback.repeat_one {
        status.push(Span::styled("[repeat one]", Style::default().fg(Color::Yellow)));
        status.push(Span::raw(" "));
    }
    let queue_label = match playback.queue_position {
        Some(pos) if playback.queue_len > 0 => {
            format!("queue {}/{}", pos + 1, playback.queue_len)
        }
        _ => format!("queue {}", playback.queue_len),
    };
    status.push(Span::styled(queue_label, Style::default().fg(Color::DarkGray)));

    let pane = Paragraph::new(vec![track_line, Line::from(status)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Now Playing "),
    );
    frame.render_widget(pane, area);
}
