//! Library layer for the standings sync: persistent response cache,
//! cache-aware fetching, reconciliation into SQLite, and the ranked view.
//!
//! Wraps the `standings_api` client with a TTL cache keyed by league and
//! season, and isolates every per-league failure from the rest of a batch.

pub mod batch;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod fetcher;
pub mod leagues;
pub mod ranking;
pub mod reconcile;

pub use standings_api;

pub use batch::{run_batch, BatchOptions, BatchReport, LeagueOutcome, LeagueReport};
pub use cache::ResponseCache;
pub use config::{Config, ConfigError, DbConfig};
pub use db::{Db, DbError, StandingsRow};
pub use error::StandingsError;
pub use fetcher::CachedFetcher;
pub use leagues::{league_by_id, league_by_name, League, LEAGUES};
pub use ranking::RankedStanding;
pub use reconcile::{parse_standings, reconcile, ReconcileError};
