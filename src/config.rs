// src/config.rs
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("failed to read profile {path}: {source}")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile {path}: {source}")]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Process-wide settings, built once at startup and shared read-only.
#[derive(Clone)]
pub struct Config {
    /// Provider credential. `None` forces mock replies.
    pub api_key: Option<String>,
    /// Never contact the provider when set.
    pub demo_mode: bool,
    pub port: u16,
    pub base_url: String,
    pub model: String,
    pub static_dir: PathBuf,
    /// JSON file replacing the built-in profile.
    pub profile_path: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_key", &self.has_key())
            .field("demo_mode", &self.demo_mode)
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("static_dir", &self.static_dir)
            .field("profile_path", &self.profile_path)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            demo_mode: false,
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            profile_path: None,
        }
    }
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `OPENAI_API_KEY`  | unset (mock replies)     |
    /// | `DEMO_MODE`       | off                      |
    /// | `PORT`            | `3000`                   |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com` |
    /// | `OPENAI_MODEL`    | `gpt-4o-mini`            |
    /// | `STATIC_DIR`      | `public`                 |
    /// | `PROFILE_PATH`    | unset (built-in profile) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: non_empty("OPENAI_API_KEY"),
            demo_mode: non_empty("DEMO_MODE").is_some_and(|v| is_truthy(&v)),
            port,
            base_url: non_empty("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            profile_path: non_empty("PROFILE_PATH").map(PathBuf::from),
        })
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
