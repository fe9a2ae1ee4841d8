//! Turns a raw standings payload into rows and upserts them.

use standings_api::types::{LeagueStandings, TeamStanding};

use crate::db::{Db, DbError, StandingsRow};

#[derive(thiserror::Error, Debug)]
pub enum ReconcileError {
    /// The payload does not have the `[0].league.standings[0]` shape.
    #[error("unexpected payload shape: {0}")]
    Structural(String),
    #[error(transparent)]
    Db(#[from] DbError),
}

impl StandingsRow {
    fn from_team(league_name: &str, team: TeamStanding) -> Self {
        Self {
            position: team.rank,
            team_name: team.team.name,
            logo_url: team.team.logo,
            games_played: team.all.played,
            wins: team.all.win,
            draws: team.all.draw,
            losses: team.all.lose,
            goals_for: team.all.goals.goals_for,
            goals_against: team.all.goals.against,
            goal_difference: team.goals_diff,
            points: team.points,
            league_name: league_name.to_string(),
        }
    }
}

/// Projects `payload[0].league.standings[0]` onto rows for `league_name`.
pub fn parse_standings(
    league_name: &str,
    payload: &serde_json::Value,
) -> Result<Vec<StandingsRow>, ReconcileError> {
    let first = payload
        .get(0)
        .ok_or_else(|| ReconcileError::Structural("response has no first element".to_string()))?;
    let league: LeagueStandings = serde_json::from_value(first.clone())
        .map_err(|e| ReconcileError::Structural(format!("response[0]: {}", e)))?;
    let table = league
        .league
        .standings
        .into_iter()
        .next()
        .ok_or_else(|| ReconcileError::Structural("league.standings is empty".to_string()))?;

    Ok(table
        .into_iter()
        .map(|team| StandingsRow::from_team(league_name, team))
        .collect())
}

/// Parses and writes one league's standings in a single transaction.
///
/// Nothing is written when parsing fails, so previously stored rows for the
/// league stay as they were.
pub fn reconcile(
    db: &mut Db,
    league_name: &str,
    payload: &serde_json::Value,
) -> Result<usize, ReconcileError> {
    let rows = parse_standings(league_name, payload).map_err(|e| {
        tracing::error!("Error processing data for {}: {}", league_name, e);
        e
    })?;
    let written = db.upsert_standings(&rows).map_err(|e| {
        tracing::error!("Error writing standings for {}: {}", league_name, e);
        ReconcileError::from(e)
    })?;
    tracing::info!("Data for {} inserted successfully ({} rows)", league_name, written);
    Ok(written)
}
