//! One sequential pass of fetch, cache, and reconcile over a set of leagues.

use serde::Serialize;

use crate::db::Db;
use crate::error::StandingsError;
use crate::fetcher::CachedFetcher;
use crate::leagues::League;
use crate::reconcile::reconcile;

#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Drop and recreate the standings table before the first league.
    /// When false, leagues whose cycle fails keep their previous rows.
    pub reset_table: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { reset_table: true }
    }
}

/// What happened to one league during a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LeagueOutcome {
    Updated { rows: usize },
    /// The fetch failed; nothing was written.
    NoData,
    /// The payload could not be reconciled; nothing was written.
    Skipped { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueReport {
    pub league_id: i64,
    pub league_name: String,
    pub outcome: LeagueOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub leagues: Vec<LeagueReport>,
}

impl BatchReport {
    pub fn updated(&self) -> usize {
        self.leagues
            .iter()
            .filter(|l| matches!(l.outcome, LeagueOutcome::Updated { .. }))
            .count()
    }

    pub fn all_updated(&self) -> bool {
        self.updated() == self.leagues.len()
    }
}

/// Runs one league cycle per entry of `leagues`, in order, then recreates
/// the ranked view.
///
/// Per-league failures are recorded in the report and never abort the
/// batch. Only failures to prepare the table or the view are returned.
pub async fn run_batch(
    fetcher: &CachedFetcher<'_>,
    db: &mut Db,
    leagues: &[League],
    options: BatchOptions,
) -> Result<BatchReport, StandingsError> {
    if options.reset_table {
        db.reset_standings_table()?;
    } else {
        db.init()?;
    }

    let mut report = BatchReport::default();
    for league in leagues {
        tracing::info!(
            "Fetching data for {} (League ID: {})...",
            league.name,
            league.id
        );
        let (_, payload) = fetcher.get_standings(league.id).await;
        let outcome = match payload {
            None => LeagueOutcome::NoData,
            Some(payload) => match reconcile(db, league.name, &payload) {
                Ok(rows) => LeagueOutcome::Updated { rows },
                Err(e) => LeagueOutcome::Skipped {
                    reason: e.to_string(),
                },
            },
        };
        report.leagues.push(LeagueReport {
            league_id: league.id,
            league_name: league.name.to_string(),
            outcome,
        });
    }

    db.create_ranked_view()?;
    tracing::info!(
        "Batch complete: {}/{} leagues updated",
        report.updated(),
        report.leagues.len()
    );
    Ok(report)
}
