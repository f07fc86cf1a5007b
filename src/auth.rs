//! OAuth authorization with a read-only fallback
//!
//! The preferred path is the authorization-code flow with a cached token:
//! refresh the cache when possible, otherwise open the browser and catch
//! the redirect on a local listener. When the user flow fails entirely,
//! client-credentials still gives a token good for catalog reads, and the
//! session runs without a player.

use std::sync::Arc;
use std::time::Duration;

use rspotify::{
    prelude::*, scopes, AuthCodeSpotify, ClientCredsSpotify, Config as RspotifyConfig,
    Credentials, OAuth,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::time::timeout;

use crate::config::Config;
use crate::error::AppError;

const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8898/callback";
const REDIRECT_WAIT: Duration = Duration::from_secs(120);

const RESPONSE: &str = "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n\
<!doctype html>\
<html>\
<head><title>Success</title></head>\
<body><h1>Authentication Successful!</h1><script>window.close();</script></body>\
</html>";

pub struct AuthSession {
    pub client: Arc<AuthCodeSpotify>,
    /// False when only client-credentials succeeded; playback commands are
    /// unavailable in that case.
    pub user_authorized: bool,
}

pub async fn authorize(config: &Config) -> Result<AuthSession, AppError> {
    let (Some(id), Some(secret)) = (config.client_id.as_deref(), config.client_secret.as_deref())
    else {
        return Err(AppError::Auth(
            "client_id and client_secret are required (config file or environment)".to_string(),
        ));
    };
    let creds = Credentials::new(id, secret);
    let redirect_uri = config
        .redirect_uri
        .clone()
        .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string());

    match user_authorize(creds.clone(), &redirect_uri).await {
        Ok(client) => {
            tracing::info!("user authorization succeeded");
            Ok(AuthSession {
                client: Arc::new(client),
                user_authorized: true,
            })
        }
        Err(err) => {
            tracing::warn!(error = %err, "user authorization failed, falling back to read-only");
            let client = client_creds_fallback(creds).await?;
            Ok(AuthSession {
                client: Arc::new(client),
                user_authorized: false,
            })
        }
    }
}

async fn user_authorize(creds: Credentials, redirect_uri: &str) -> Result<AuthCodeSpotify, AppError> {
    let oauth = OAuth {
        redirect_uri: redirect_uri.to_string(),
        scopes: scopes!(
            "user-read-playback-state",
            "user-modify-playback-state",
            "playlist-read-private"
        ),
        ..Default::default()
    };
    let spotify = AuthCodeSpotify::with_config(
        creds,
        oauth,
        RspotifyConfig {
            token_cached: true,
            token_refreshing: true,
            ..Default::default()
        },
    );

    // Cached token first; a successful refresh skips the browser entirely.
    if let Ok(Some(token)) = spotify.read_token_cache(true).await {
        *spotify.token.lock().await.unwrap() = Some(token);
        match spotify.refresh_token().await {
            Ok(()) => {
                tracing::debug!("cached token refreshed");
                return Ok(spotify);
            }
            Err(err) => tracing::warn!(error = %err, "cached token refresh failed"),
        }
    }

    let url = spotify
        .get_authorize_url(false)
        .map_err(|e| AppError::Auth(e.to_string()))?;
    if open::that(&url).is_err() {
        tracing::info!(%url, "could not open a browser, visit the URL manually");
    }

    let redirect = timeout(REDIRECT_WAIT, wait_for_redirect(redirect_uri))
        .await
        .map_err(|_| AppError::Auth("timed out waiting for the authorization redirect".to_string()))??;
    let code = spotify
        .parse_response_code(&redirect)
        .ok_or_else(|| AppError::Auth("redirect carried no authorization code".to_string()))?;
    spotify
        .request_token(&code)
        .await
        .map_err(|e| AppError::Auth(e.to_string()))?;
    Ok(spotify)
}

/// One-shot listener for the OAuth redirect. Returns the full redirect URL.
async fn wait_for_redirect(redirect_uri: &str) -> Result<String, AppError> {
    let stripped = redirect_uri
        .trim_start_matches("http://")
        .trim_start_matches("https://");
    let (addr, _) = stripped.split_once('/').unwrap_or((stripped, ""));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Auth(format!("cannot listen on {addr}: {e}")))?;
    let (mut stream, _) = listener
        .accept()
        .await
        .map_err(|e| AppError::Auth(e.to_string()))?;

    let mut buf = vec![0u8; 4096];
    let n = stream
        .read(&mut buf)
        .await
        .map_err(|e| AppError::Auth(e.to_string()))?;
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .ok_or_else(|| AppError::Auth("malformed redirect request".to_string()))?;

    let _ = stream.write_all(RESPONSE.as_bytes()).await;
    Ok(format!("http://{addr}{path}"))
}

/// Client-credentials token transplanted into an `AuthCodeSpotify` so the
/// rest of the session uses one client type.
async fn client_creds_fallback(creds: Credentials) -> Result<AuthCodeSpotify, AppError> {
    let client = ClientCredsSpotify::new(creds);
    client
        .request_token()
        .await
        .map_err(|e| AppError::Auth(e.to_string()))?;
    let token = client
        .token
        .lock()
        .await
        .unwrap()
        .clone()
        .ok_or_else(|| AppError::Auth("no token granted".to_string()))?;
    tracing::info!("read-only authorization succeeded");
    Ok(AuthCodeSpotify::from_token(token))
}
