//! Scrollable, cursor-addressable view over the current result set

use super::types::{Album, ResultItem, ResultSet, Section};

/// One display row of the flattened view.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewLine {
    Item(ResultItem),
    /// Art banner for the active album, shown after the album rows.
    AlbumArt,
}

/// Owned copy of the visible window handed to the renderer.
#[derive(Clone, Debug)]
pub struct BrowserSnapshot {
    pub lines: Vec<ViewLine>,
    /// Highlight offset within `lines`.
    pub highlight: usize,
    pub active_album: Option<Album>,
    pub top_line: usize,
    pub total_lines: usize,
}

/// Maintains the flattened view over the latest [`ResultSet`] together with
/// the scroll window and highlight cursor.
///
/// `highlight_line` is an offset within the visible page; the absolute index
/// of the highlighted row is `top_line + highlight_line` and stays within
/// `[0, view.len())` whenever the view is non-empty.
#[derive(Debug)]
pub struct ResultBrowser {
    results: ResultSet,
    view: Vec<ViewLine>,
    top_line: usize,
    highlight_line: usize,
    active_album: usize,
    page_height: usize,
}

impl ResultBrowser {
    pub fn new(page_height: usize) -> Self {
        Self {
            results: ResultSet::default(),
            view: Vec::new(),
            top_line: 0,
            highlight_line: 0,
            active_album: 0,
            page_height: page_height.max(1),
        }
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Replace the displayed result set.
    ///
    /// A value-equal set is a redraw, not a navigation: the scroll window and
    /// highlight are left where they are. A different set rebuilds the
    /// flattened view and resets every cursor to the top.
    pub fn set_results(&mut self, results: ResultSet) {
        if results == self.results {
            return;
        }
        self.results = results;
        self.top_line = 0;
        self.highlight_line = 0;
        self.active_album = 0;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let mut view = Vec::new();
        if !self.results.playlists.is_empty() {
            view.push(ViewLine::Item(ResultItem::SectionHeader(Section::Playlists)));
            for playlist in &self.results.playlists {
                view.push(ViewLine::Item(ResultItem::Playlist(playlist.clone())));
            }
        }
        if !self.results.artists.is_empty() {
            view.push(ViewLine::Item(ResultItem::SectionHeader(Section::Artists)));
            for artist in &self.results.artists {
                view.push(ViewLine::Item(ResultItem::Artist(artist.clone())));
            }
        }
        if !self.results.albums.is_empty() {
            view.push(ViewLine::Item(ResultItem::SectionHeader(Section::Albums)));
            for album in &self.results.albums {
                view.push(ViewLine::Item(ResultItem::Album(album.clone())));
            }
            view.push(ViewLine::AlbumArt);
        }
        if !self.results.tracks.is_empty() {
            view.push(ViewLine::Item(ResultItem::SectionHeader(Section::Tracks)));
            for track in &self.results.tracks {
                view.push(ViewLine::Item(ResultItem::Track(track.clone())));
            }
        }
        self.view = view;
    }

    /// Follow terminal resizes. Shrinking the page pulls the highlight back
    /// inside the window.
    pub fn set_page_height(&mut self, height: usize) {
        self.page_height = height.max(1);
        if self.highlight_line >= self.page_height {
            self.highlight_line = self.page_height - 1;
        }
    }

    /// Move the highlight one row up (`delta < 0`) or down (`delta > 0`),
    /// scrolling the window when the highlight would leave the visible page.
    pub fn move_cursor(&mut self, delta: i32) {
        if self.view.is_empty() || delta == 0 {
            return;
        }
        if delta < 0 {
            if self.top_line == 0 && self.highlight_line == 0 {
                return;
            }
            if self.highlight_line == 0 {
                // Top of the page with more content above: scroll, keep the
                // highlight pinned.
                self.top_line -= 1;
                return;
            }
            self.highlight_line -= 1;
        } else {
            let absolute = self.top_line + self.highlight_line;
            if absolute + 1 >= self.view.len() {
                return;
            }
            if self.highlight_line + 1 >= self.page_height {
                if self.top_line + self.page_height < self.view.len() {
                    self.top_line += 1;
                }
                return;
            }
            self.highlight_line += 1;
        }
    }

    /// Shift the active album. Only meaningful while the highlight sits in
    /// the album block; clamped to the album list.
    pub fn move_album_focus(&mut self, delta: i32) {
        let in_album_block = matches!(
            self.highlighted(),
            Some(ViewLine::Item(ResultItem::Album(_))) | Some(ViewLine::AlbumArt)
        );
        if !in_album_block || self.results.albums.is_empty() {
            return;
        }
        let last = (self.results.albums.len() - 1) as i64;
        let next = (self.active_album as i64 + delta as i64).clamp(0, last);
        self.active_album = next as usize;
    }

    pub fn highlighted(&self) -> Option<&ViewLine> {
        self.view.get(self.top_line + self.highlight_line)
    }

    pub fn highlighted_item(&self) -> Option<&ResultItem> {
        match self.highlighted() {
            Some(ViewLine::Item(item)) => Some(item),
            _ => None,
        }
    }

    pub fn active_album(&self) -> Option<&Album> {
        self.results.albums.get(self.active_album)
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        let end = (self.top_line + self.page_height).min(self.view.len());
        BrowserSnapshot {
            lines: self.view[self.top_line..end].to_vec(),
            highlight: self.highlight_line,
            active_album: self.active_album().cloned(),
            top_line: self.top_line,
            total_lines: self.view.len(),
        }
    }

    #[cfg(test)]
    fn absolute_highlight(&self) -> usize {
        self.top_line + self.highlight_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Track;

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

    fn album(name: &str) -> Album {
        Album {
            album_id: name.to_string(),
            album_name: name.to_string(),
            album_uri: format!("spotify:album:{name}"),
            art_reference: None,
        }
    }

    fn tracks_only(names: &[&str]) -> ResultSet {
        ResultSet::from_tracks(names.iter().map(|n| track(n)).collect())
    }

    #[test]
    fn flattens_non_empty_sections_with_headers() {
        let mut browser = ResultBrowser::new(10);
        browser.set_results(tracks_only(&["t1", "t2"]));

        let snapshot = browser.snapshot();
        assert_eq!(snapshot.lines.len(), 3);
        assert_eq!(
            snapshot.lines[0],
            ViewLine::Item(ResultItem::SectionHeader(Section::Tracks))
        );
        assert_eq!(snapshot.lines[1], ViewLine::Item(ResultItem::Track(track("t1"))));
        assert_eq!(snapshot.lines[2], ViewLine::Item(ResultItem::Track(track("t2"))));
    }

    #[test]
    fn album_section_carries_an_art_row() {
        let mut browser = ResultBrowser::new(10);
        browser.set_results(ResultSet {
            albums: vec![album("a1"), album("a2")],
            ..ResultSet::default()
        });

        let snapshot = browser.snapshot();
        assert_eq!(snapshot.lines.last(), Some(&ViewLine::AlbumArt));
        assert_eq!(snapshot.active_album.unwrap().album_id, "a1");
    }

    #[test]
    fn same_results_preserve_cursor_new_results_reset_it() {
        let mut browser = ResultBrowser::new(10);
        browser.set_results(tracks_only(&["t1", "t2", "t3"]));
        browser.move_cursor(1);
        browser.move_cursor(1);
        assert_eq!(browser.absolute_highlight(), 2);

        browser.set_results(tracks_only(&["t1", "t2", "t3"]));
        assert_eq!(browser.absolute_highlight(), 2);

        browser.set_results(tracks_only(&["x1"]));
        assert_eq!(browser.absolute_highlight(), 0);
    }

    #[test]
    fn cursor_is_idempotent_at_both_boundaries() {
        let mut browser = ResultBrowser::new(10);
        browser.set_results(tracks_only(&["t1", "t2"]));

        for _ in 0..5 {
            browser.move_cursor(-1);
        }
        assert_eq!(browser.absolute_highlight(), 0);

        for _ in 0..10 {
            browser.move_cursor(1);
        }
        assert_eq!(browser.absolute_highlight(), browser.len() - 1);
    }

    #[test]
    fn scrolls_the_window_at_page_edges() {
        let mut browser = ResultBrowser::new(3);
        browser.set_results(tracks_only(&["t1", "t2", "t3", "t4", "t5"]));
        // View: header + 5 tracks = 6 lines, page of 3.

        browser.move_cursor(1);
        browser.move_cursor(1);
        assert_eq!(browser.snapshot().top_line, 0);
        assert_eq!(browser.snapshot().highlight, 2);

        // At the bottom of the page with content below: window advances,
        // highlight offset stays.
        browser.move_cursor(1);
        assert_eq!(browser.snapshot().top_line, 1);
        assert_eq!(browser.snapshot().highlight, 2);

        // Scroll the window back up from the top of the page.
        browser.move_cursor(-1);
        browser.move_cursor(-1);
        assert_eq!(browser.snapshot().highlight, 0);
        assert_eq!(browser.snapshot().top_line, 1);
        browser.move_cursor(-1);
        assert_eq!(browser.snapshot().top_line, 0);
    }

    #[test]
    fn album_focus_clamps_and_requires_the_album_block() {
        let mut browser = ResultBrowser::new(10);
        browser.set_results(ResultSet {
            albums: vec![album("a1"), album("a2")],
            tracks: vec![track("t1")],
            ..ResultSet::default()
        });

        // Highlight starts on the ALBUMS header; focus moves are ignored.
        browser.move_album_focus(1);
        assert_eq!(browser.active_album().unwrap().album_id, "a1");

        browser.move_cursor(1); // first album row
        browser.move_album_focus(1);
        assert_eq!(browser.active_album().unwrap().album_id, "a2");
        browser.move_album_focus(1);
        assert_eq!(browser.active_album().unwrap().album_id, "a2");
        browser.move_album_focus(-5);
        assert_eq!(browser.active_album().unwrap().album_id, "a1");
    }

    #[test]
    fn highlighted_item_skips_art_rows() {
        let mut browser = ResultBrowser::new(10);
        browser.set_results(ResultSet {
            albums: vec![album("a1")],
            ..ResultSet::default()
        });
        browser.move_cursor(1);
        browser.move_cursor(1);
        assert_eq!(browser.highlighted(), Some(&ViewLine::AlbumArt));
        assert_eq!(browser.highlighted_item(), None);
    }

    #[test]
    fn empty_view_has_no_highlight() {
        let browser = ResultBrowser::new(10);
        assert!(browser.is_empty());
        assert_eq!(browser.highlighted(), None);
    }
}
