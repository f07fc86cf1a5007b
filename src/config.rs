//! User configuration, read from `config.toml` under the platform config
//! directory. Every field is optional; credentials also fall back to the
//! conventional environment variables.

use std::env;
use std::path::PathBuf;

use crossterm::event::KeyCode;
use serde::Deserialize;

const APP_DIR: &str = "spoticon";
const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Spotify username whose public playlists the `m` key lists.
    pub username: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    /// Key that quits the session: a single character or `"esc"`. Esc
    /// always works regardless.
    pub quit_key: Option<String>,
    /// Consecutive idle-at-zero polls before the watcher auto-advances.
    pub pause_threshold: Option<u32>,
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the config file if one exists. A missing file means defaults; a
    /// malformed file is an error so typos do not silently drop settings.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match Self::path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)?;
                tracing::debug!(path = %path.display(), "loaded config file");
                toml::from_str(&raw)?
            }
            _ => Self::default(),
        };

        if config.client_id.is_none() {
            config.client_id = env::var("SPOTICON_CLIENT_ID").ok();
        }
        if config.client_secret.is_none() {
            config.client_secret = env::var("SPOTICON_CLIENT_SECRET").ok();
        }
        Ok(config)
    }

    /// The configured quit key, if it names one. Unrecognized values are
    /// logged and ignored rather than rejected.
    pub fn quit_key_code(&self) -> Option<KeyCode> {
        let key = self.quit_key.as_deref()?;
        if key.eq_ignore_ascii_case("esc") {
            return Some(KeyCode::Esc);
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeyCode::Char(c)),
            _ => {
                tracing::warn!(quit_key = key, "unrecognized quit_key, using default");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config_file() {
        let config: Config = toml::from_str(
            r#"
            username = "alice"
            client_id = "id"
            client_secret = "secret"
            quit_key = "x"
            pause_threshold = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.quit_key_code(), Some(KeyCode::Char('x')));
        assert_eq!(config.pause_threshold, Some(3));
        assert_eq!(config.redirect_uri, None);
    }

    #[test]
    fn quit_key_accepts_esc_by_name() {
        let config: Config = toml::from_str(r#"quit_key = "esc""#).unwrap();
        assert_eq!(config.quit_key_code(), Some(KeyCode::Esc));

        let config: Config = toml::from_str(r#"quit_key = "Esc""#).unwrap();
        assert_eq!(config.quit_key_code(), Some(KeyCode::Esc));
    }

    #[test]
    fn unrecognized_quit_key_falls_back_to_default() {
        let config: Config = toml::from_str(r#"quit_key = "escape-hatch""#).unwrap();
        assert_eq!(config.quit_key_code(), None);

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.quit_key_code(), None);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.username.is_none());
        assert!(config.client_id.is_none());
    }
}
