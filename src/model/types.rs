//! Core entity types: tracks, albums, artists, playlists and result sets

/// Result categories, in the fixed order they are flattened for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Playlists,
    Artists,
    Albums,
    Tracks,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Playlists => "PLAYLISTS",
            Section::Artists => "ARTISTS",
            Section::Albums => "ALBUMS",
            Section::Tracks => "TRACKS",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub track_name: String,
    pub track_number: u32,
    pub album_name: String,
    pub artist_name: String,
    pub track_uri: String,
    /// Present on search results, absent on album listings.
    pub popularity: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Album {
    pub album_id: String,
    pub album_name: String,
    pub album_uri: String,
    pub art_reference: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Artist {
    pub artist_id: String,
    pub artist_name: String,
    pub artist_uri: String,
    pub popularity: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Playlist {
    pub playlist_id: String,
    pub playlist_name: String,
    pub owner_id: String,
}

/// A single browsable result. Every consumption site (formatting, activation,
/// queueing) matches exhaustively on this, so adding a category is a
/// compile-time-checked change.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultItem {
    Track(Track),
    Album(Album),
    Artist(Artist),
    Playlist(Playlist),
    SectionHeader(Section),
}

impl ResultItem {
    pub fn category(&self) -> &'static str {
        match self {
            ResultItem::Track(_) => "track",
            ResultItem::Album(_) => "album",
            ResultItem::Artist(_) => "artist",
            ResultItem::Playlist(_) => "playlist",
            ResultItem::SectionHeader(_) => "section",
        }
    }
}

/// A labeled collection of results from one search/browse query.
///
/// Sections are flattened for display in the fixed order
/// playlists → artists → albums → tracks, empty sections omitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultSet {
    pub playlists: Vec<Playlist>,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub tracks: Vec<Track>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
            && self.artists.is_empty()
            && self.albums.is_empty()
            && self.tracks.is_empty()
    }

    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            ..Self::default()
        }
    }

    pub fn from_playlists(playlists: Vec<Playlist>) -> Self {
        Self {
            playlists,
            ..Self::default()
        }
    }
}
