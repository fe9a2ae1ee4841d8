use serde::{Deserialize, Serialize};

/// One element of the `response` array.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeagueStandings {
    pub league: LeagueInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeagueInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub season: Option<i32>,
    /// Groups of tables. Domestic leagues carry a single group.
    pub standings: Vec<Vec<TeamStanding>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub rank: i64,
    pub team: TeamRef,
    pub points: i64,
    pub goals_diff: i64,
    pub all: Record,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamRef {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub logo: String,
}

/// Aggregate record over all matches (home and away).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Record {
    pub played: i64,
    pub win: i64,
    pub draw: i64,
    pub lose: i64,
    pub goals: Goals,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Goals {
    #[serde(rename = "for")]
    pub goals_for: i64,
    pub against: i64,
}
