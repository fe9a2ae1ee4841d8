//! Ranked projection of the standings table.
//!
//! `standings_table_vw` recomputes each team's rank on every read, so the
//! stored `position` column never leaks into presentation order.

use rusqlite::params;
use serde::Serialize;

use crate::db::{Db, DbError};

/// Dense rank per league by points, then goal difference, then goals scored.
const RANKED_VIEW_SQL: &str = "
DROP VIEW IF EXISTS standings_table_vw;
CREATE VIEW standings_table_vw AS
    SELECT
        league_name,
        DENSE_RANK() OVER (
            PARTITION BY league_name
            ORDER BY points DESC, goal_difference DESC, goals_for DESC
        ) AS position,
        logo,
        team,
        games_played,
        wins,
        draws,
        losses,
        goals_for,
        goals_against,
        goal_difference,
        points
    FROM standings_table;
";

/// A row of the ranked view. `position` is the derived rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedStanding {
    pub position: i64,
    pub logo_url: String,
    pub team_name: String,
    pub games_played: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub points: i64,
}

impl Db {
    /// Creates or replaces `standings_table_vw`.
    pub fn create_ranked_view(&self) -> Result<(), DbError> {
        self.conn().execute_batch(RANKED_VIEW_SQL)?;
        tracing::info!("Ranked standings view created");
        Ok(())
    }

    /// Ranked rows for one league. Teams sharing a rank are ordered by name.
    pub fn ranked_standings(&self, league_name: &str) -> Result<Vec<RankedStanding>, DbError> {
        let mut stmt = self.conn().prepare(
            "SELECT position, logo, team, games_played, wins, draws, losses,
                    goals_for, goals_against, goal_difference, points
             FROM standings_table_vw
             WHERE league_name = ?1
             ORDER BY position, team",
        )?;
        let rows = stmt
            .query_map(params![league_name], |row| {
                Ok(RankedStanding {
                    position: row.get(0)?,
                    logo_url: row.get(1)?,
                    team_name: row.get(2)?,
                    games_played: row.get(3)?,
                    wins: row.get(4)?,
                    draws: row.get(5)?,
                    losses: row.get(6)?,
                    goals_for: row.get(7)?,
                    goals_against: row.get(8)?,
                    goal_difference: row.get(9)?,
                    points: row.get(10)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::{sample_row, Db, StandingsRow};

    fn row(
        league: &str,
        position: i64,
        team: &str,
        points: i64,
        goal_difference: i64,
        goals_for: i64,
    ) -> StandingsRow {
        StandingsRow {
            goal_difference,
            goals_for,
            ..sample_row(league, position, team, points)
        }
    }

    fn seeded(rows: &[StandingsRow]) -> Db {
        let mut db = Db::open_in_memory().unwrap();
        db.init().unwrap();
        db.upsert_standings(rows).unwrap();
        db.create_ranked_view().unwrap();
        db
    }

    fn names(db: &Db, league: &str) -> Vec<String> {
        db.ranked_standings(league)
            .unwrap()
            .into_iter()
            .map(|r| r.team_name)
            .collect()
    }

    #[test]
    fn ranks_by_points_ignoring_stored_position() {
        let db = seeded(&[
            row("Ligue 1", 1, "Lens", 60, 10, 40),
            row("Ligue 1", 2, "PSG", 76, 48, 81),
            row("Ligue 1", 3, "Monaco", 67, 26, 68),
        ]);
        let ranked = db.ranked_standings("Ligue 1").unwrap();
        assert_eq!(
            ranked.iter().map(|r| r.team_name.as_str()).collect::<Vec<_>>(),
            vec!["PSG", "Monaco", "Lens"]
        );
        assert_eq!(
            ranked.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn goal_difference_breaks_points_tie() {
        let db = seeded(&[
            row("Serie A", 1, "Roma", 63, 19, 65),
            row("Serie A", 2, "Atalanta", 63, 27, 72),
        ]);
        assert_eq!(names(&db, "Serie A"), vec!["Atalanta", "Roma"]);
    }

    #[test]
    fn goals_for_breaks_goal_difference_tie() {
        let db = seeded(&[
            row("Serie A", 1, "Lazio", 61, 10, 49),
            row("Serie A", 2, "Napoli", 61, 10, 55),
        ]);
        assert_eq!(names(&db, "Serie A"), vec!["Napoli", "Lazio"]);
    }

    #[test]
    fn full_tie_shares_dense_rank() {
        let db = seeded(&[
            row("Bundesliga", 1, "Freiburg", 42, 3, 45),
            row("Bundesliga", 2, "Augsburg", 42, 3, 45),
            row("Bundesliga", 3, "Bremen", 40, -6, 48),
        ]);
        let ranked = db.ranked_standings("Bundesliga").unwrap();
        let positions: Vec<(i64, &str)> = ranked
            .iter()
            .map(|r| (r.position, r.team_name.as_str()))
            .collect();
        assert_eq!(
            positions,
            vec![(1, "Augsburg"), (1, "Freiburg"), (2, "Bremen")]
        );
    }

    #[test]
    fn ranks_are_non_decreasing_and_follow_ordering_rule() {
        let db = seeded(&[
            row("La Liga", 1, "Girona", 81, 39, 85),
            row("La Liga", 2, "Real Madrid", 95, 61, 87),
            row("La Liga", 3, "Barcelona", 85, 35, 79),
            row("La Liga", 4, "Atletico", 76, 27, 70),
            row("La Liga", 5, "Athletic", 68, 24, 61),
            row("La Liga", 6, "Sociedad", 60, 12, 51),
            row("La Liga", 7, "Betis", 57, 3, 48),
            row("La Liga", 8, "Villarreal", 57, -3, 65),
        ]);
        let ranked = db.ranked_standings("La Liga").unwrap();
        assert_eq!(ranked.len(), 8);
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.position <= b.position);
            let key_a = (a.points, a.goal_difference, a.goals_for);
            let key_b = (b.points, b.goal_difference, b.goals_for);
            assert!(key_a >= key_b);
            if key_a == key_b {
                assert_eq!(a.position, b.position);
            } else {
                assert_eq!(a.position + 1, b.position);
            }
        }
    }

    #[test]
    fn leagues_are_ranked_independently() {
        let db = seeded(&[
            row("Premier League", 1, "Arsenal", 89, 62, 91),
            row("Ligue 1", 1, "PSG", 76, 48, 81),
        ]);
        assert_eq!(db.ranked_standings("Premier League").unwrap()[0].position, 1);
        assert_eq!(db.ranked_standings("Ligue 1").unwrap()[0].position, 1);
        assert!(db.ranked_standings("Eredivisie").unwrap().is_empty());
    }

    #[test]
    fn view_reflects_upserts_without_recreation() {
        let mut db = seeded(&[
            row("Ligue 1", 1, "PSG", 76, 48, 81),
            row("Ligue 1", 2, "Monaco", 67, 26, 68),
        ]);
        db.upsert_standings(&[row("Ligue 1", 2, "Monaco", 80, 30, 70)])
            .unwrap();
        assert_eq!(names(&db, "Ligue 1"), vec!["Monaco", "PSG"]);
    }
}
