//! Error types for the library layer.

use std::fmt;

use crate::config::ConfigError;
use crate::db::DbError;
use crate::reconcile::ReconcileError;

/// Errors produced by the library layer, wrapping the API client's
/// classified failures and adding configuration, storage, and payload
/// shape failures.
#[derive(Debug)]
pub enum StandingsError {
    /// Required settings are missing or malformed. Fatal at startup.
    Config(ConfigError),
    /// A classified failure from the standings API client.
    Api(standings_api::Error),
    /// A storage operation failed.
    Db(DbError),
    /// A payload could not be reconciled into rows.
    Reconcile(ReconcileError),
}

impl fmt::Display for StandingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Db(e) => write!(f, "Database error: {}", e),
            Self::Reconcile(e) => write!(f, "Reconcile error: {}", e),
        }
    }
}

impl std::error::Error for StandingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Api(e) => Some(e),
            Self::Db(e) => Some(e),
            Self::Reconcile(e) => Some(e),
        }
    }
}

impl From<ConfigError> for StandingsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<standings_api::Error> for StandingsError {
    fn from(e: standings_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<DbError> for StandingsError {
    fn from(e: DbError) -> Self {
        Self::Db(e)
    }
}

impl From<ReconcileError> for StandingsError {
    fn from(e: ReconcileError) -> Self {
        Self::Reconcile(e)
    }
}
