//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use fieldguide_content::application::loader::{builtin_catalog, load_catalog_from_path};
use fieldguide_content::domain::catalog::Catalog;
use fieldguide_core::engine::SpeechParams;
use fieldguide_session::domain::effects::FeedbackSettings;

use crate::error::AppError;
use crate::state::AppState;

/// Startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Bind host (`HOST`, default `0.0.0.0`).
    pub host: String,
    /// Bind port (`PORT`, default `3000`).
    pub port: u16,
    /// Catalog file (`CATALOG_PATH`); the built-in catalog when unset.
    pub catalog_path: Option<PathBuf>,
    /// Narration settings (`SPEECH_RATE`, `SPEECH_PITCH`).
    pub feedback: FeedbackSettings,
    /// Cap on concurrently mounted sessions (`MAX_SESSIONS`, default 1024).
    pub max_sessions: usize,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
        let catalog_path = lookup("CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let defaults = SpeechParams::default();
        let rate = parse_f32(lookup("SPEECH_RATE"), "SPEECH_RATE", defaults.rate)?;
        let pitch = parse_f32(lookup("SPEECH_PITCH"), "SPEECH_PITCH", defaults.pitch)?;
        let speech = SpeechParams::new(rate, pitch).map_err(|e| AppError::Config(e.to_string()))?;
        let max_sessions = match lookup("MAX_SESSIONS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| {
                    AppError::Config(format!("MAX_SESSIONS must be a positive integer: {raw:?}"))
                })?,
            None => AppState::DEFAULT_MAX_SESSIONS,
        };

        Ok(Self {
            host,
            port,
            catalog_path,
            feedback: FeedbackSettings { speech },
            max_sessions,
        })
    }

    /// The address to bind.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Loads the configured catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the catalog cannot be read or is
    /// invalid.
    pub fn load_catalog(&self) -> Result<Catalog, AppError> {
        let catalog = match &self.catalog_path {
            Some(path) => load_catalog_from_path(path)?,
            None => builtin_catalog()?,
        };
        Ok(catalog)
    }
}

fn parse_f32(value: Option<String>, name: &str, default: f32) -> Result<f32, AppError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{name} must be a number: {e}"))),
        None => Ok(default),
    }
}
