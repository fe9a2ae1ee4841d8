//! SQLite storage for league standings.

use std::path::Path;

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

const CREATE_STANDINGS_SQL: &str = "
CREATE TABLE IF NOT EXISTS standings_table (
    position INTEGER NOT NULL,
    logo TEXT NOT NULL,
    team TEXT NOT NULL,
    games_played INTEGER NOT NULL,
    wins INTEGER NOT NULL,
    draws INTEGER NOT NULL,
    losses INTEGER NOT NULL,
    goals_for INTEGER NOT NULL,
    goals_against INTEGER NOT NULL,
    goal_difference INTEGER NOT NULL,
    points INTEGER NOT NULL,
    league_name TEXT NOT NULL,
    PRIMARY KEY (position, league_name)
);
";

/// One team's line in a league table, as persisted.
///
/// `position` is the rank reported by the API at write time. It is the
/// upsert key together with `league_name`, so it identifies a rank slot
/// rather than a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub position: i64,
    pub team_name: String,
    pub logo_url: String,
    pub games_played: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub points: i64,
    pub league_name: String,
}

pub struct Db {
    conn: Connection,
}

impl Db {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    #[doc(hidden)]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Creates the standings table and ranked view if they do not exist.
    /// Existing rows are kept.
    pub fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(CREATE_STANDINGS_SQL)?;
        self.create_ranked_view()?;
        Ok(())
    }

    /// Discards every stored row by dropping and recreating the table. The
    /// ranked view is left dangling until [`Db::create_ranked_view`] runs again.
    pub fn reset_standings_table(&self) -> Result<(), DbError> {
        self.conn
            .execute_batch("DROP TABLE IF EXISTS standings_table;")?;
        self.conn.execute_batch(CREATE_STANDINGS_SQL)?;
        tracing::info!("Standings table created");
        Ok(())
    }

    /// Writes rows in one transaction, inserting new rank slots and
    /// overwriting every non-key column of existing ones.
    pub fn upsert_standings(&mut self, rows: &[StandingsRow]) -> Result<usize, DbError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO standings_table (
                   position, logo, team, games_played, wins, draws, losses,
                   goals_for, goals_against, goal_difference, points, league_name
                 )
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
                 ON CONFLICT(position, league_name) DO UPDATE SET
                   logo = excluded.logo,
                   team = excluded.team,
                   games_played = excluded.games_played,
                   wins = excluded.wins,
                   draws = excluded.draws,
                   losses = excluded.losses,
                   goals_for = excluded.goals_for,
                   goals_against = excluded.goals_against,
                   goal_difference = excluded.goal_difference,
                   points = excluded.points",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.position,
                    row.logo_url,
                    row.team_name,
                    row.games_played,
                    row.wins,
                    row.draws,
                    row.losses,
                    row.goals_for,
                    row.goals_against,
                    row.goal_difference,
                    row.points,
                    row.league_name,
                ])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    /// Stored rows for one league in stored-position order.
    pub fn standings_rows(&self, league_name: &str) -> Result<Vec<StandingsRow>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT position, team, logo, games_played, wins, draws, losses,
                    goals_for, goals_against, goal_difference, points, league_name
             FROM standings_table
             WHERE league_name = ?1
             ORDER BY position",
        )?;
        let rows = stmt
            .query_map(params![league_name], |row| {
                Ok(StandingsRow {
                    position: row.get(0)?,
                    team_name: row.get(1)?,
                    logo_url: row.get(2)?,
                    games_played: row.get(3)?,
                    wins: row.get(4)?,
                    draws: row.get(5)?,
                    losses: row.get(6)?,
                    goals_for: row.get(7)?,
                    goals_against: row.get(8)?,
                    goal_difference: row.get(9)?,
                    points: row.get(10)?,
                    league_name: row.get(11)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn standings_count(&self, league_name: &str) -> Result<i64, DbError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(1) FROM standings_table WHERE league_name = ?1",
            params![league_name],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<(), DbError> {
        self.conn.close().map_err(|(_, e)| DbError::Sqlite(e))?;
        tracing::info!("Standings database connection closed");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_row(league: &str, position: i64, team: &str, points: i64) -> StandingsRow {
    StandingsRow {
        position,
        team_name: team.to_string(),
        logo_url: format!("https://media.example/{}.png", team.to_lowercase()),
        games_played: 38,
        wins: points / 3,
        draws: points % 3,
        losses: 38 - points / 3 - points % 3,
        goals_for: 50,
        goals_against: 40,
        goal_difference: 10,
        points,
        league_name: league.to_string(),
    }
}
