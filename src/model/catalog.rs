//! Catalog service client: searches and browse fetches over the Spotify
//! Web API, parsed into the session's entity model

use std::sync::Arc;

use futures::{StreamExt, TryStreamExt};
use rspotify::{
    model::{
        AlbumId, ArtistId, FullArtist, FullTrack, Market, PlayableItem, PlaylistId, SearchResult,
        SearchType, SimplifiedAlbum, SimplifiedTrack, UserId,
    },
    prelude::*,
    AuthCodeSpotify,
};

use crate::error::AppError;
use super::types::{Album, Artist, Playlist, ResultSet, Track};

pub const TRACK_SEARCH_LIMIT: u32 = 50;
pub const ALBUM_SEARCH_LIMIT: u32 = 10;
pub const ARTIST_SEARCH_LIMIT: u32 = 5;
const PLAYLIST_PAGE_SIZE: usize = 100;
const USER_PLAYLIST_LIMIT: usize = 50;

#[derive(Clone)]
pub struct CatalogClient {
    client: Arc<AuthCodeSpotify>,
}

impl CatalogClient {
    pub fn new(client: Arc<AuthCodeSpotify>) -> Self {
        Self { client }
    }

    /// Search tracks, albums and artists concurrently and combine them into
    /// one result set. Tracks and artists come back sorted by popularity.
    pub async fn full_search(&self, query: &str) -> Result<ResultSet, AppError> {
        let market: Option<Market> = None;
        let (track_result, album_result, artist_result) = futures::join!(
            self.client.search(
                query,
                SearchType::Track,
                market,
                None,
                Some(TRACK_SEARCH_LIMIT),
                None
            ),
            self.client.search(
                query,
                SearchType::Album,
                market,
                None,
                Some(ALBUM_SEARCH_LIMIT),
                None
            ),
            self.client.search(
                query,
                SearchType::Artist,
                market,
                None,
                Some(ARTIST_SEARCH_LIMIT),
                None
            ),
        );

        let mut results = ResultSet::default();

        if let SearchResult::Tracks(page) = track_result.map_err(AppError::Catalog)? {
            results.tracks = page
                .items
                .into_iter()
                .map(|t| parse_full_track(t, true))
                .collect();
            results
                .tracks
                .sort_by(|a, b| b.popularity.cmp(&a.popularity));
        }

        if let SearchResult::Albums(page) = album_result.map_err(AppError::Catalog)? {
            results.albums = page.items.into_iter().map(parse_album).collect();
        }

        if let SearchResult::Artists(page) = artist_result.map_err(AppError::Catalog)? {
            results.artists = page.items.into_iter().map(parse_artist).collect();
            results.artists.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        }

        tracing::info!(
            query,
            tracks = results.tracks.len(),
            albums = results.albums.len(),
            artists = results.artists.len(),
            "search completed"
        );
        Ok(results)
    }

    /// An artist's albums plus their top tracks.
    pub async fn get_artist(&self, artist_id: &str) -> Result<ResultSet, AppError> {
        let id = ArtistId::from_id(artist_id)?;

        let top_tracks = self
            .client
            .artist_top_tracks(id.clone(), Some(Market::FromToken))
            .await
            .map_err(AppError::Catalog)?;

        let album_stream = self.client.artist_albums(id, None, None);
        let albums: Vec<SimplifiedAlbum> =
            album_stream.try_collect().await.map_err(AppError::Catalog)?;

        Ok(ResultSet {
            albums: albums.into_iter().map(parse_album).collect(),
            tracks: top_tracks
                .into_iter()
                .map(|t| parse_full_track(t, false))
                .collect(),
            ..ResultSet::default()
        })
    }

    /// An album's tracks, in track-number order.
    pub async fn get_album(&self, album_id: &str) -> Result<ResultSet, AppError> {
        let id = AlbumId::from_id(album_id)?;
        let album = self.client.album(id, None).await.map_err(AppError::Catalog)?;

        let mut tracks: Vec<Track> = album
            .tracks
            .items
            .into_iter()
            .map(|t| parse_simplified_track(t, &album.name))
            .collect();
        tracks.sort_by_key(|t| t.track_number);

        Ok(ResultSet::from_tracks(tracks))
    }

    pub async fn get_playlist(&self, playlist_id: &str) -> Result<ResultSet, AppError> {
        let id = PlaylistId::from_id(playlist_id)?;

        let items_stream = self.client.playlist_items(id, None, None);
        let items: Vec<_> = items_stream
            .take(PLAYLIST_PAGE_SIZE)
            .try_collect()
            .await
            .map_err(AppError::Catalog)?;

        let tracks = items
            .into_iter()
            .filter_map(|item| match item.track {
                Some(PlayableItem::Track(track)) => Some(parse_full_track(track, false)),
                _ => None,
            })
            .collect();

        Ok(ResultSet::from_tracks(tracks))
    }

    /// A user's public playlists. Works without user authorization.
    pub async fn get_user_playlists(&self, username: &str) -> Result<ResultSet, AppError> {
        let user = UserId::from_id(username)?;

        let playlist_stream = self.client.user_playlists(user);
        let playlists: Vec<_> = playlist_stream
            .take(USER_PLAYLIST_LIMIT)
            .try_collect()
            .await
            .map_err(AppError::Catalog)?;

        Ok(ResultSet::from_playlists(
            playlists
                .into_iter()
                .map(|p| Playlist {
                    playlist_id: p.id.id().to_string(),
                    playlist_name: p.name,
                    owner_id: p.owner.id.id().to_string(),
                })
                .collect(),
        ))
    }

    /// Best-effort resolution of an album by name, backing "open the
    /// highlighted track's album".
    pub async fn find_album_by_name(&self, name: &str) -> Result<Option<Album>, AppError> {
        let result = self
            .client
            .search(name, SearchType::Album, None, None, Some(1), None)
            .await
            .map_err(AppError::Catalog)?;

        Ok(match result {
            SearchResult::Albums(page) => page.items.into_iter().next().map(parse_album),
            _ => None,
        })
    }

    pub async fn find_artist_by_name(&self, name: &str) -> Result<Option<Artist>, AppError> {
        let result = self
            .client
            .search(name, SearchType::Artist, None, None, Some(1), None)
            .await
            .map_err(AppError::Catalog)?;

        Ok(match result {
            SearchResult::Artists(page) => page.items.into_iter().next().map(parse_artist),
            _ => None,
        })
    }
}

fn parse_full_track(track: FullTrack, from_search: bool) -> Track {
    let track_id = track
        .id
        .as_ref()
        .map(|id| id.id().to_string())
        .unwrap_or_default();
    Track {
        track_name: track.name,
        track_number: track.track_number,
        album_name: track.album.name,
        artist_name: track
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        track_uri: format!("spotify:track:{track_id}"),
        popularity: from_search.then_some(track.popularity),
    }
}

fn parse_simplified_track(track: SimplifiedTrack, album_name: &str) -> Track {
    let track_id = track
        .id
        .as_ref()
        .map(|id| id.id().to_string())
        .unwrap_or_default();
    Track {
        track_name: track.name,
        track_number: track.track_number,
        album_name: album_name.to_string(),
        artist_name: track
            .artists
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
        track_uri: format!("spotify:track:{track_id}"),
        popularity: None,
    }
}

fn parse_album(album: SimplifiedAlbum) -> Album {
    let album_id = album
        .id
        .as_ref()
        .map(|id| id.id().to_string())
        .unwrap_or_default();
    Album {
        album_uri: format!("spotify:album:{album_id}"),
        album_id,
        album_name: album.name,
        art_reference: album.images.first().map(|i| i.url.clone()),
    }
}

fn parse_artist(artist: FullArtist) -> Artist {
    let artist_id = artist.id.id().to_string();
    Artist {
        artist_uri: format!("spotify:artist:{artist_id}"),
        artist_id,
        artist_name: artist.name,
        popularity: artist.popularity,
    }
}
