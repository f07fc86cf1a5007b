//! Result browser rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::model::{BrowserSnapshot, ResultItem, ViewLine};

use super::utils::truncate_string;

pub fn render_results(frame: &mut Frame, area: Rect, browser: &BrowserSnapshot) {
    let content_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = browser
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let highlighted = i == browser.highlight;
            render_line(line, browser, content_width, highlighted)
        })
        .collect();

    let title = if browser.total_lines > 0 {
        format!(
            " Results ({}/{}) ",
            browser.top_line + browser.highlight + 1,
            browser.total_lines
        )
    } else {
        " Results ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(title),
    );
    frame.render_widget(list, area);
}

fn render_line(
    line: &ViewLine,
    browser: &BrowserSnapshot,
    content_width: usize,
    highlighted: bool,
) -> ListItem<'static> {
    let (text, base_style) = match line {
        ViewLine::Item(ResultItem::SectionHeader(section)) => (
            format!(" {}", section.title()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        ViewLine::Item(ResultItem::Track(track)) => {
            (format_track_row(track, content_width), Style::default())
        }
        ViewLine::Item(ResultItem::Album(album)) => (
            format!("   {}", album.album_name),
            Style::default().fg(Color::Cyan),
        ),
        ViewLine::Item(ResultItem::Artist(artist)) => (
            format!("   {}", artist.artist_name),
            Style::default().fg(Color::Magenta),
        ),
        ViewLine::Item(ResultItem::Playlist(playlist)) => (
            format!(
                "   {} ({})",
                playlist.playlist_name, playlist.owner_id
            ),
            Style::default().fg(Color::Blue),
        ),
        ViewLine::AlbumArt => {
            let banner = match &browser.active_album {
                Some(album) => match &album.art_reference {
                    Some(art) => format!("   ♪ {} [{}]", album.album_name, art),
                    None => format!("   ♪ {}", album.album_name),
                },
                None => "   ♪".to_string(),
            };
            (
                truncate_string(&banner, content_width),
                Style::default().fg(Color::DarkGray),
            )
        }
    };

    let style = if highlighted {
        base_style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        base_style
    };

    ListItem::new(Line::styled(text, style))
}

/// Three columns: title, artist, album. Title gets half the width, the
/// other two split the rest.
fn format_track_row(track: &crate::model::Track, content_width: usize) -> String {
    let usable = content_width.saturating_sub(5);
    let title_width = usable / 2;
    let side_width = usable.saturating_sub(title_width) / 2;
    format!(
        "   {} {} {}",
        truncate_string(&track.track_name, title_width.max(8)),
        truncate_string(&track.artist_name, side_width.max(6)),
        truncate_string(&track.album_name, side_width.max(6)),
    )
}
