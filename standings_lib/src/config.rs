//! Immutable runtime configuration, read once from the environment.

use std::fmt;
use std::path::PathBuf;

use standings_api::Credentials;

const DEFAULT_API_BASE_URL: &str = "https://v3.football.api-sports.io";
const DEFAULT_CACHE_PATH: &str = "api_cache.db";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Connection settings for the standings database.
///
/// All five fields are required. The store is a SQLite file derived from
/// `name`; the remaining fields are validated and carried for consumers
/// that connect to the same database by other means.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub name: String,
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl DbConfig {
    /// File path of the standings database. `name` is used as-is when it
    /// already carries an extension, otherwise `.db` is appended.
    pub fn database_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.name);
        if path.extension().is_some() {
            path
        } else {
            path.with_extension("db")
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub api_host: String,
    pub season: i32,
    pub db: DbConfig,
    pub api_base_url: String,
    pub cache_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"***")
            .field("api_host", &self.api_host)
            .field("season", &self.season)
            .field("db", &self.db)
            .field("api_base_url", &self.api_base_url)
            .field("cache_path", &self.cache_path)
            .finish()
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup. Empty values count
    /// as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| -> Option<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let api_key = require("API_KEY")?;
        let api_host = require("API_HOST")?;
        let season_raw = require("SEASON")?;
        let season = season_raw.parse::<i32>().map_err(|_| ConfigError::Invalid {
            var: "SEASON",
            value: season_raw.clone(),
        })?;

        let name = require("DB_NAME")?;
        let username = require("DB_USERNAME")?;
        let password = require("DB_PASSWORD")?;
        let host = require("DB_HOST")?;
        let port_raw = require("DB_PORT")?;
        let port = port_raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
            var: "DB_PORT",
            value: port_raw.clone(),
        })?;

        let api_base_url = get("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let cache_path = get("CACHE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_PATH));

        tracing::info!("Configuration loaded for season {}", season);

        Ok(Self {
            api_key,
            api_host,
            season,
            db: DbConfig {
                name,
                username,
                password,
                host,
                port,
            },
            api_base_url,
            cache_path,
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.api_key.clone(),
            api_host: self.api_host.clone(),
        }
    }
}
