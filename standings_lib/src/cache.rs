//! Persistent TTL cache of raw API responses, keyed by league and season.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DbError;

/// Entries older than this are treated as missing.
pub const CACHE_TTL_HOURS: i64 = 6;

const CACHE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS api_cache (
    league_id INTEGER NOT NULL,
    season INTEGER NOT NULL,
    timestamp TEXT NOT NULL,
    response_data TEXT NOT NULL,
    PRIMARY KEY (league_id, season)
);
";

/// SQLite-backed response cache.
///
/// One row per `(league_id, season)`; `put` replaces it wholesale. Stale rows
/// are not purged, they are overwritten by the next successful fetch.
pub struct ResponseCache {
    conn: Connection,
    ttl: Duration,
}

impl ResponseCache {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        tracing::info!("Opening response cache at {}", path.display());
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Open an in-memory cache (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, DbError> {
        conn.execute_batch(CACHE_SCHEMA)?;
        Ok(Self {
            conn,
            ttl: Duration::hours(CACHE_TTL_HOURS),
        })
    }

    /// Returns the cached payload if present and fresh.
    pub fn get(&self, league_id: i64, season: i32) -> Option<serde_json::Value> {
        self.get_at(league_id, season, Utc::now())
    }

    /// Like [`get`](Self::get) with an explicit clock.
    ///
    /// Never fails: storage errors, unparseable timestamps and corrupt
    /// payloads are logged and reported as a miss.
    pub fn get_at(
        &self,
        league_id: i64,
        season: i32,
        now: DateTime<Utc>,
    ) -> Option<serde_json::Value> {
        let row: Option<(String, String)> = match self
            .conn
            .query_row(
                "SELECT timestamp, response_data FROM api_cache
                 WHERE league_id = ?1 AND season = ?2",
                params![league_id, season],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
        {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(
                    "Cache read failed for league_id {} season {}: {}",
                    league_id,
                    season,
                    e
                );
                return None;
            }
        };
        let (timestamp, data) = row?;

        let cached_at = match DateTime::parse_from_rfc3339(&timestamp) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(e) => {
                tracing::warn!(
                    "Cache timestamp {:?} for league_id {} is unreadable: {}",
                    timestamp,
                    league_id,
                    e
                );
                return None;
            }
        };
        if now - cached_at > self.ttl {
            tracing::info!(
                "Cache entry for league_id {} season {} is stale (cached at {})",
                league_id,
                season,
                cached_at
            );
            return None;
        }

        match serde_json::from_str(&data) {
            Ok(payload) => {
                tracing::info!("Using cached data for league_id {} season {}", league_id, season);
                Some(payload)
            }
            Err(e) => {
                tracing::warn!(
                    "Cached payload for league_id {} season {} is corrupt, ignoring: {}",
                    league_id,
                    season,
                    e
                );
                None
            }
        }
    }

    /// Stores a payload stamped with the current time.
    pub fn put(
        &self,
        league_id: i64,
        season: i32,
        payload: &serde_json::Value,
    ) -> Result<(), DbError> {
        self.put_at(league_id, season, payload, Utc::now())
    }

    /// Like [`put`](Self::put) with an explicit timestamp.
    pub fn put_at(
        &self,
        league_id: i64,
        season: i32,
        payload: &serde_json::Value,
        at: DateTime<Utc>,
    ) -> Result<(), DbError> {
        let data = serde_json::to_string(payload)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO api_cache (league_id, season, timestamp, response_data)
             VALUES (?1, ?2, ?3, ?4)",
            params![league_id, season, at.to_rfc3339(), data],
        )?;
        Ok(())
    }

    /// When the entry for `(league_id, season)` was written, fresh or not.
    pub fn cached_at(&self, league_id: i64, season: i32) -> Result<Option<DateTime<Utc>>, DbError> {
        let timestamp: Option<String> = self
            .conn
            .query_row(
                "SELECT timestamp FROM api_cache WHERE league_id = ?1 AND season = ?2",
                params![league_id, season],
                |row| row.get(0),
            )
            .optional()?;
        Ok(timestamp
            .and_then(|ts| DateTime::parse_from_rfc3339(&ts).ok())
            .map(|ts| ts.with_timezone(&Utc)))
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> Result<i64, DbError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(1) FROM api_cache", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn is_empty(&self) -> Result<bool, DbError> {
        Ok(self.len()? == 0)
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<(), DbError> {
        self.conn.close().map_err(|(_, e)| DbError::Sqlite(e))?;
        tracing::info!("Response cache connection closed");
        Ok(())
    }
}
