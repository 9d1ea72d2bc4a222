//! Runtime configuration for the sync engine.
//!
//! Values come from an optional JSON file, then the environment, then explicit
//! overrides (CLI flags), each layer replacing the fields it sets.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::EntityKind;

pub const DEFAULT_API_BASE_URL: &str = "https://api.zenmoney.ru/v8";

const APP_DIR_NAME: &str = "zensync";
const SNAPSHOT_FILE_NAME: &str = "snapshot.json";

pub const ENV_TOKEN: &str = "ZENMONEY_TOKEN";
pub const ENV_API_URL: &str = "ZENMONEY_API_URL";
pub const ENV_CACHE_PATH: &str = "ZENSYNC_CACHE_PATH";
pub const ENV_TIMEOUT_SECS: &str = "ZENSYNC_TIMEOUT_SECS";
pub const ENV_FORCE_FETCH: &str = "ZENSYNC_FORCE_FETCH";

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub cache_path: Option<PathBuf>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Entity types the server should resend in full on every diff.
    #[serde(default)]
    pub force_fetch: Option<Vec<EntityKind>>,
}

impl std::fmt::Debug for SyncConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SyncConfig")
            .field("api_base_url", &self.api_base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("cache_path", &self.cache_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("force_fetch", &self.force_fetch)
            .finish()
    }
}

impl SyncConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let request_timeout_secs = normalize_text_option(lookup(ENV_TIMEOUT_SECS))
            .map(|raw| {
                raw.parse::<u64>().map_err(|error| {
                    Error::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number: {error}"))
                })
            })
            .transpose()?;
        let force_fetch = normalize_text_option(lookup(ENV_FORCE_FETCH))
            .map(|raw| parse_entity_kinds(&raw))
            .transpose()?;

        Ok(Self {
            api_base_url: normalize_text_option(lookup(ENV_API_URL)),
            access_token: normalize_text_option(lookup(ENV_TOKEN)),
            cache_path: normalize_text_option(lookup(ENV_CACHE_PATH)).map(PathBuf::from),
            request_timeout_secs,
            force_fetch,
        })
    }

    /// Load a JSON config file. A missing file yields the empty config.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to parse config at {}: {}",
                path.display(),
                error
            ))
        })?;
        config.normalize();
        Ok(config)
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            api_base_url: other.api_base_url.or(self.api_base_url),
            access_token: other.access_token.or(self.access_token),
            cache_path: other.cache_path.or(self.cache_path),
            request_timeout_secs: other.request_timeout_secs.or(self.request_timeout_secs),
            force_fetch: other.force_fetch.or(self.force_fetch),
        }
    }

    pub fn api_base_url(&self) -> String {
        normalize_text_option(self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn require_token(&self) -> Result<String> {
        normalize_text_option(self.access_token.clone()).ok_or_else(|| {
            Error::Config(format!(
                "No access token configured. Set {ENV_TOKEN} or pass --token."
            ))
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn resolved_cache_path(&self) -> Result<PathBuf> {
        match &self.cache_path {
            Some(path) => Ok(path.clone()),
            None => default_cache_path(),
        }
    }

    fn normalize(&mut self) {
        self.api_base_url = normalize_text_option(self.api_base_url.take());
        self.access_token = normalize_text_option(self.access_token.take());
    }
}

/// Parse a comma-separated list of entity wire names, e.g. `tag,merchant`.
pub fn parse_entity_kinds(raw: &str) -> Result<Vec<EntityKind>> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<EntityKind>()
                .map_err(|error| Error::Config(format!("{ENV_FORCE_FETCH}: {error}")))
        })
        .collect()
}

/// Trimmed value, or `None` when nothing but whitespace was supplied.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// `<user cache dir>/zensync/snapshot.json`, falling back to `~/.zensync/`.
pub fn default_cache_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .or_else(|| dirs::home_dir().map(|dir| dir.join(format!(".{APP_DIR_NAME}"))))
        .map(|dir| dir.join(SNAPSHOT_FILE_NAME))
        .ok_or_else(|| Error::Config("Failed to resolve a cache directory".to_string()))
}
