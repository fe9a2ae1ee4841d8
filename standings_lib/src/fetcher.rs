//! Cache-aware wrapper around the standings API client.

use standings_api::{Client, StandingsQuery};

use crate::cache::ResponseCache;
use crate::config::{Config, DbConfig};
use crate::error::StandingsError;

/// Serves standings from the response cache when fresh and falls back to
/// the API otherwise.
///
/// Cache hits bypass the network entirely. Successful fetches are written
/// back under `(league_id, season)` before being returned.
pub struct CachedFetcher<'a> {
    client: Client,
    cache: &'a ResponseCache,
    config: &'a Config,
}

impl<'a> CachedFetcher<'a> {
    /// Creates a fetcher against the API base URL from `config`.
    pub fn new(config: &'a Config, cache: &'a ResponseCache) -> Result<Self, StandingsError> {
        let client = Client::with_base_url(&config.api_base_url, config.credentials())?;
        Ok(Self::with_client(client, config, cache))
    }

    /// Creates a fetcher around an already-built client. Used for testing.
    pub fn with_client(client: Client, config: &'a Config, cache: &'a ResponseCache) -> Self {
        Self {
            client,
            cache,
            config,
        }
    }

    /// Returns standings for `league_id`, or `None` when the API call fails.
    ///
    /// Never fails outward: the classified error is logged and the league
    /// simply has no data for this cycle.
    pub async fn get_standings(&self, league_id: i64) -> (&'a DbConfig, Option<serde_json::Value>) {
        let config: &'a Config = self.config;
        match self.try_get_standings(league_id).await {
            Ok(payload) => (&config.db, Some(payload)),
            Err(e) => {
                tracing::error!("No standings for league_id {}: {}", league_id, e);
                (&config.db, None)
            }
        }
    }

    /// Same lookup as [`get_standings`](Self::get_standings), keeping the
    /// classified failure.
    pub async fn try_get_standings(
        &self,
        league_id: i64,
    ) -> Result<serde_json::Value, StandingsError> {
        let season = self.config.season;
        if let Some(cached) = self.cache.get(league_id, season) {
            return Ok(cached);
        }

        let payload = self
            .client
            .get_standings(&StandingsQuery::new(league_id, season))
            .await?;

        if let Err(e) = self.cache.put(league_id, season, &payload) {
            tracing::warn!(
                "Failed to cache standings for league_id {} season {}: {}",
                league_id,
                season,
                e
            );
        }
        Ok(payload)
    }
}
