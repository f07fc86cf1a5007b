//! Error taxonomy for the session core
//!
//! Catalog and player failures are recoverable and stop at the controller
//! boundary; auth failures degrade the session to read-only; a too-small
//! terminal is the only failure that ends the process besides quit.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog request failed (network, auth, rate limit). The previous
    /// view is kept and a transient message is shown.
    #[error("catalog request failed: {0}")]
    Catalog(#[source] rspotify::ClientError),

    /// External player unreachable or command rejected. Logged/flashed,
    /// never fatal.
    #[error("player command failed: {0}")]
    Player(#[source] rspotify::ClientError),

    /// Missing or invalid credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Terminal viewport below the minimum; fatal at startup.
    #[error("terminal too small: {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    Render {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error("malformed catalog id: {0}")]
    BadId(#[from] rspotify::model::IdError),
}
