pub mod app_model;
pub mod browser;
pub mod catalog;
pub mod history;
pub mod player;
pub mod queue;
pub mod session;
pub mod types;

pub use app_model::{NowPlayingInfo, SessionModel, UiState};
pub use browser::{BrowserSnapshot, ResultBrowser, ViewLine};
pub use catalog::CatalogClient;
pub use history::HistoryStacks;
pub use player::{PlayerClient, PlayerSnapshot, PlayerState};
pub use queue::PlayQueue;
pub use session::{PlaybackSession, DEFAULT_PAUSE_THRESHOLD};
pub use types::{Album, Artist, Playlist, ResultItem, ResultSet, Section, Track};
